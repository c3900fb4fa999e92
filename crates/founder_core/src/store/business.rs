//! Business-side mutations: money, clients, tasks and brands.

use super::ids::IdGenerator;
use super::observer::{ChangeKind, Collection};
use super::{find_by_id, remove_by_id, MutationOutcome, Store};
use crate::model::brand::BrandId;
use crate::model::crm::{NewClient, NewTask};
use crate::model::finance::{NewAsset, NewDebt, NewTransaction};
use crate::model::RecordId;

impl<G: IdGenerator> Store<G> {
    /// Records a transaction at the head of the list.
    pub fn add_transaction(&mut self, input: NewTransaction) -> RecordId {
        let id = Self::fresh_id(&mut self.ids, &self.state.transactions);
        self.state
            .transactions
            .insert(0, input.into_record(id.clone()));
        self.record_added(Collection::Transactions, &id);
        id
    }

    pub fn delete_transaction(&mut self, id: &str) -> MutationOutcome {
        let outcome = remove_by_id(&mut self.state.transactions, id);
        self.record_outcome(Collection::Transactions, ChangeKind::Deleted, id, outcome)
    }

    pub fn add_client(&mut self, input: NewClient) -> RecordId {
        let id = Self::fresh_id(&mut self.ids, &self.state.clients);
        self.state.clients.insert(0, input.into_record(id.clone()));
        self.record_added(Collection::Clients, &id);
        id
    }

    pub fn delete_client(&mut self, id: &str) -> MutationOutcome {
        let outcome = remove_by_id(&mut self.state.clients, id);
        self.record_outcome(Collection::Clients, ChangeKind::Deleted, id, outcome)
    }

    /// Adds an open task at the head of the list.
    pub fn add_task(&mut self, input: NewTask) -> RecordId {
        let id = Self::fresh_id(&mut self.ids, &self.state.tasks);
        self.state.tasks.insert(0, input.into_record(id.clone()));
        self.record_added(Collection::Tasks, &id);
        id
    }

    pub fn toggle_task(&mut self, id: &str) -> MutationOutcome {
        let outcome = match find_by_id(&mut self.state.tasks, id) {
            Some(task) => {
                task.completed = !task.completed;
                MutationOutcome::Applied
            }
            None => MutationOutcome::NotFound,
        };
        self.record_outcome(Collection::Tasks, ChangeKind::Toggled, id, outcome)
    }

    pub fn delete_task(&mut self, id: &str) -> MutationOutcome {
        let outcome = remove_by_id(&mut self.state.tasks, id);
        self.record_outcome(Collection::Tasks, ChangeKind::Deleted, id, outcome)
    }

    pub fn add_asset(&mut self, input: NewAsset) -> RecordId {
        let id = Self::fresh_id(&mut self.ids, &self.state.assets);
        self.state.assets.insert(0, input.into_record(id.clone()));
        self.record_added(Collection::Assets, &id);
        id
    }

    pub fn delete_asset(&mut self, id: &str) -> MutationOutcome {
        let outcome = remove_by_id(&mut self.state.assets, id);
        self.record_outcome(Collection::Assets, ChangeKind::Deleted, id, outcome)
    }

    pub fn add_debt(&mut self, input: NewDebt) -> RecordId {
        let id = Self::fresh_id(&mut self.ids, &self.state.debts);
        self.state.debts.insert(0, input.into_record(id.clone()));
        self.record_added(Collection::Debts, &id);
        id
    }

    pub fn delete_debt(&mut self, id: &str) -> MutationOutcome {
        let outcome = remove_by_id(&mut self.state.debts, id);
        self.record_outcome(Collection::Debts, ChangeKind::Deleted, id, outcome)
    }

    /// Renames one brand. Brand ids and colors never change.
    pub fn update_brand(&mut self, id: BrandId, name: impl Into<String>) -> MutationOutcome {
        let outcome = match self.state.brands.iter_mut().find(|brand| brand.id == id) {
            Some(brand) => {
                brand.name = name.into();
                MutationOutcome::Applied
            }
            None => MutationOutcome::NotFound,
        };
        self.record_outcome(Collection::Brands, ChangeKind::Updated, id.as_str(), outcome)
    }
}
