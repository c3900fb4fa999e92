//! Core domain logic for the Founder OS dashboard.
//! This crate is the single source of truth for business invariants.

pub mod format;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod query;
pub mod seed;
pub mod service;
pub mod store;
pub mod timer;

pub use format::format_inr;
pub use logging::{default_log_level, init_logging, logging_status};
pub use metrics::{dashboard_summary, DashboardSummary};
pub use model::brand::{Brand, BrandId};
pub use model::RecordId;
pub use seed::{load_seed, SeedError};
pub use service::{FormError, FormResult};
pub use store::ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use store::observer::{ChangeKind, Collection, StoreChange, StoreObserver};
pub use store::{ExportError, MutationOutcome, Store, StoreState};
pub use timer::{format_clock, FocusTimer, FocusTimerConfig, MilestoneNotifier};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
