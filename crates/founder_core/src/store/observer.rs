//! Change notifications for store readers.
//!
//! # Invariants
//! - Observers run synchronously after a mutation is applied and before the
//!   mutating call returns.
//! - No-op mutations (absent ids) emit nothing.

use crate::model::RecordId;

/// Store collection touched by a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Brands,
    Assets,
    Debts,
    Clients,
    Tasks,
    Transactions,
    Syllabus,
    Habits,
    Schedule,
    ErrorLog,
    MockResults,
}

impl Collection {
    pub const ALL: [Collection; 11] = [
        Collection::Brands,
        Collection::Assets,
        Collection::Debts,
        Collection::Clients,
        Collection::Tasks,
        Collection::Transactions,
        Collection::Syllabus,
        Collection::Habits,
        Collection::Schedule,
        Collection::ErrorLog,
        Collection::MockResults,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brands => "brands",
            Self::Assets => "assets",
            Self::Debts => "debts",
            Self::Clients => "clients",
            Self::Tasks => "tasks",
            Self::Transactions => "transactions",
            Self::Syllabus => "syllabus",
            Self::Habits => "habits",
            Self::Schedule => "schedule",
            Self::ErrorLog => "error_log",
            Self::MockResults => "mock_results",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|collection| collection.as_str() == value.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Deleted,
    Toggled,
    Updated,
    /// Whole store replaced by seed fixtures.
    Reset,
}

impl ChangeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Added => "add",
            Self::Deleted => "delete",
            Self::Toggled => "toggle",
            Self::Updated => "update",
            Self::Reset => "reset",
        }
    }
}

/// One applied mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreChange {
    pub collection: Collection,
    pub kind: ChangeKind,
    /// Affected record; chapter updates use `<subject_id>/<chapter_id>`.
    /// `None` for whole-store resets.
    pub id: Option<RecordId>,
}

/// Subscriber notified of every applied mutation.
pub trait StoreObserver {
    fn on_change(&self, change: &StoreChange);
}

impl<F> StoreObserver for F
where
    F: Fn(&StoreChange),
{
    fn on_change(&self, change: &StoreChange) {
        self(change)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChangeKind, Collection, StoreChange, StoreObserver};
    use std::cell::RefCell;

    #[test]
    fn collection_names_round_trip() {
        for collection in Collection::ALL {
            assert_eq!(Collection::parse(collection.as_str()), Some(collection));
        }
        assert_eq!(Collection::parse("errorLog"), None);
    }

    #[test]
    fn closures_observe_changes() {
        let seen = RefCell::new(Vec::new());
        let observer = |change: &StoreChange| seen.borrow_mut().push(change.kind);
        observer.on_change(&StoreChange {
            collection: Collection::Tasks,
            kind: ChangeKind::Toggled,
            id: Some("1".to_string()),
        });
        assert_eq!(seen.into_inner(), vec![ChangeKind::Toggled]);
    }
}
