//! Record identifier generation.
//!
//! # Invariants
//! - Generators only need to be collision-resistant; the store re-draws on
//!   collision within the target collection.

use crate::model::RecordId;
use uuid::Uuid;

/// Source of fresh record identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> RecordId;
}

/// Random UUID v4 identifiers. Default for production stores.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> RecordId {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `<prefix><n>` identifiers for tests and demos.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    pub fn starting_at(prefix: impl Into<String>, first: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: first,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> RecordId {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
