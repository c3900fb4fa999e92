//! Derived values over store snapshots.
//!
//! # Responsibility
//! - Compute totals, P&L, pipeline figures and readiness on demand.
//!
//! # Invariants
//! - Every function is pure over its inputs; nothing here mutates or caches.
//! - Divisions by a zero denominator yield `None` or `0`, never NaN.
//!
//! # See also
//! - `crate::store` for the collections these functions read.

pub mod dashboard;
pub mod finance;
pub mod pipeline;
pub mod pnl;
pub mod study;

pub use dashboard::{dashboard_summary, DashboardSummary};
