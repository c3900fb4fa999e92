//! Central in-memory application store.
//!
//! # Responsibility
//! - Own every domain collection and expose the only mutation API.
//! - Notify subscribed observers after each applied mutation.
//!
//! # Invariants
//! - `add_*` never fails and always assigns an id unused in its collection.
//! - `delete_*`, `toggle_*` and `update_*` on absent ids are no-ops reported
//!   as `MutationOutcome::NotFound`, never errors.
//! - Mutations go through `&mut self`, so there is exactly one writer.
//!
//! # See also
//! - `crate::metrics` for read-only derived values.

mod business;
pub mod ids;
pub mod observer;
mod study;

use crate::model::brand::Brand;
use crate::model::crm::{Client, Task};
use crate::model::finance::{Asset, Debt, Transaction};
use crate::model::study::{
    DailyHabit, DailyScheduleItem, ErrorLogEntry, MockTestResult, SubjectSyllabus,
};
use crate::model::RecordId;
use crate::seed::{load_seed, SeedError};
use ids::{IdGenerator, UuidIdGenerator};
use log::{debug, error, info};
use observer::{ChangeKind, Collection, StoreChange, StoreObserver};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Full snapshot of every collection.
///
/// Serialized shape is shared by the seed fixtures and JSON export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    pub brands: Vec<Brand>,
    pub assets: Vec<Asset>,
    pub debts: Vec<Debt>,
    pub clients: Vec<Client>,
    pub tasks: Vec<Task>,
    pub transactions: Vec<Transaction>,
    pub syllabus: Vec<SubjectSyllabus>,
    pub habits: Vec<DailyHabit>,
    pub schedule: Vec<DailyScheduleItem>,
    pub error_log: Vec<ErrorLogEntry>,
    pub mock_results: Vec<MockTestResult>,
}

/// Result of a mutation that targets an existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    /// Target id was absent; the store is unchanged.
    NotFound,
}

impl MutationOutcome {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }

    fn label(self) -> &'static str {
        match self {
            Self::Applied => "ok",
            Self::NotFound => "noop",
        }
    }
}

/// JSON export failure.
#[derive(Debug)]
pub enum ExportError {
    Json(serde_json::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "failed to encode store export: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Records addressable by their string id.
pub(crate) trait Keyed {
    fn key(&self) -> &str;
}

macro_rules! impl_keyed {
    ($($ty:ty),+ $(,)?) => {
        $(impl Keyed for $ty {
            fn key(&self) -> &str {
                self.id.as_str()
            }
        })+
    };
}

impl_keyed!(
    Asset,
    Debt,
    Client,
    Task,
    Transaction,
    SubjectSyllabus,
    DailyHabit,
    DailyScheduleItem,
    ErrorLogEntry,
    MockTestResult,
);

/// Single source of truth for all dashboard data.
pub struct Store<G: IdGenerator = UuidIdGenerator> {
    state: StoreState,
    ids: G,
    observers: Vec<Box<dyn StoreObserver + Send>>,
}

impl Store<UuidIdGenerator> {
    /// Creates a store over an existing snapshot with UUID ids.
    pub fn new(state: StoreState) -> Self {
        Self::with_id_generator(state, UuidIdGenerator)
    }

    /// Creates a store with every collection empty.
    pub fn empty() -> Self {
        Self::new(StoreState::default())
    }

    /// Creates a store populated with the compiled-in demo fixtures.
    pub fn seeded() -> Result<Self, SeedError> {
        Ok(Self::new(load_seed()?))
    }
}

impl<G: IdGenerator> Store<G> {
    pub fn with_id_generator(state: StoreState, ids: G) -> Self {
        Self {
            state,
            ids,
            observers: Vec::new(),
        }
    }

    /// Latest snapshot, borrowed.
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Owned copy of the latest snapshot.
    pub fn snapshot(&self) -> StoreState {
        self.state.clone()
    }

    pub fn brands(&self) -> &[Brand] {
        &self.state.brands
    }

    pub fn assets(&self) -> &[Asset] {
        &self.state.assets
    }

    pub fn debts(&self) -> &[Debt] {
        &self.state.debts
    }

    pub fn clients(&self) -> &[Client] {
        &self.state.clients
    }

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    pub fn syllabus(&self) -> &[SubjectSyllabus] {
        &self.state.syllabus
    }

    pub fn habits(&self) -> &[DailyHabit] {
        &self.state.habits
    }

    pub fn schedule(&self) -> &[DailyScheduleItem] {
        &self.state.schedule
    }

    pub fn error_log(&self) -> &[ErrorLogEntry] {
        &self.state.error_log
    }

    pub fn mock_results(&self) -> &[MockTestResult] {
        &self.state.mock_results
    }

    /// Registers an observer for all subsequent applied mutations.
    pub fn subscribe(&mut self, observer: impl StoreObserver + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Replaces every collection with the demo fixtures.
    ///
    /// On decode failure the current state is kept.
    pub fn reset_to_seed(&mut self) -> Result<(), SeedError> {
        let seed = match load_seed() {
            Ok(seed) => seed,
            Err(err) => {
                error!("event=store_reset module=store status=error error={err}");
                return Err(err);
            }
        };
        self.state = seed;
        info!("event=store_reset module=store status=ok");
        for collection in Collection::ALL {
            self.notify(collection, ChangeKind::Reset, None);
        }
        Ok(())
    }

    /// Serializes the current snapshot as pretty JSON.
    pub fn export_json(&self) -> Result<String, ExportError> {
        let json = serde_json::to_string_pretty(&self.state)?;
        info!(
            "event=store_export module=store status=ok bytes={}",
            json.len()
        );
        Ok(json)
    }

    /// Draws ids until one is unused in `taken`.
    fn fresh_id<T: Keyed>(ids: &mut G, taken: &[T]) -> RecordId {
        loop {
            let candidate = ids.next_id();
            if !taken.iter().any(|record| record.key() == candidate) {
                return candidate;
            }
            debug!("event=id_collision module=store status=retry");
        }
    }

    fn record_added(&self, collection: Collection, id: &str) {
        debug!(
            "event=store_mutation module=store op=add status=ok collection={} id={}",
            collection.as_str(),
            id
        );
        self.notify(collection, ChangeKind::Added, Some(id.to_string()));
    }

    fn record_outcome(
        &self,
        collection: Collection,
        kind: ChangeKind,
        id: &str,
        outcome: MutationOutcome,
    ) -> MutationOutcome {
        debug!(
            "event=store_mutation module=store op={} status={} collection={} id={}",
            kind.as_str(),
            outcome.label(),
            collection.as_str(),
            id
        );
        if outcome.is_applied() {
            self.notify(collection, kind, Some(id.to_string()));
        }
        outcome
    }

    fn notify(&self, collection: Collection, kind: ChangeKind, id: Option<RecordId>) {
        if self.observers.is_empty() {
            return;
        }
        let change = StoreChange {
            collection,
            kind,
            id,
        };
        for observer in &self.observers {
            observer.on_change(&change);
        }
    }
}

fn remove_by_id<T: Keyed>(records: &mut Vec<T>, id: &str) -> MutationOutcome {
    let before = records.len();
    records.retain(|record| record.key() != id);
    if records.len() == before {
        MutationOutcome::NotFound
    } else {
        MutationOutcome::Applied
    }
}

fn find_by_id<'a, T: Keyed>(records: &'a mut [T], id: &str) -> Option<&'a mut T> {
    records.iter_mut().find(|record| record.key() == id)
}
