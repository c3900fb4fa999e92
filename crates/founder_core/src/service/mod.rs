//! Use-case layer between entry surfaces and the store.
//!
//! # Responsibility
//! - Turn raw user input into validated store inserts.
//! - Keep UI/FFI layers free of guard and default rules.

pub mod forms;

pub use forms::{
    AssetForm, ClientForm, DebtForm, ErrorLogForm, FormError, FormResult, MockResultForm,
    ScheduleForm, TaskForm, TransactionForm,
};
