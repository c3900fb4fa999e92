//! Read-only filters feeding list and board views.
//!
//! # Invariants
//! - Every query preserves collection order.
//! - Queries borrow from the snapshot; nothing is cloned.

use crate::model::brand::BrandId;
use crate::model::crm::{Client, ClientStatus, Task};
use crate::model::finance::{Asset, Transaction};

/// Assets listed in the liquid money snapshot.
pub const MONEY_LOCATION_LIMIT: usize = 6;

/// Columns shown on the CRM board, left to right.
pub const CRM_BOARD_COLUMNS: [ClientStatus; 3] = [
    ClientStatus::Lead,
    ClientStatus::Active,
    ClientStatus::Completed,
];

/// Case-insensitive substring match on name, company or email.
///
/// A blank term matches every client.
pub fn search_contacts<'a>(clients: &'a [Client], term: &str) -> Vec<&'a Client> {
    let needle = term.trim().to_lowercase();
    clients
        .iter()
        .filter(|client| needle.is_empty() || contact_matches(client, &needle))
        .collect()
}

fn contact_matches(client: &Client, needle: &str) -> bool {
    let contains = |value: &str| value.to_lowercase().contains(needle);
    contains(&client.name)
        || contains(&client.company)
        || client.email.as_deref().is_some_and(contains)
}

/// Transactions whose ISO date falls in `month` (`YYYY-MM`).
pub fn transactions_in_month<'a>(
    transactions: &'a [Transaction],
    month: &str,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|transaction| transaction.date.starts_with(month))
        .collect()
}

pub fn clients_for_brand(clients: &[Client], brand_id: BrandId) -> Vec<&Client> {
    clients
        .iter()
        .filter(|client| client.brand_id == brand_id)
        .collect()
}

pub fn transactions_for_brand(transactions: &[Transaction], brand_id: BrandId) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|transaction| transaction.brand_id == brand_id)
        .collect()
}

pub fn tasks_for_brand(tasks: &[Task], brand_id: BrandId) -> Vec<&Task> {
    tasks.iter().filter(|task| task.brand_id == brand_id).collect()
}

/// One board column and the clients currently in it.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn<'a> {
    pub status: ClientStatus,
    pub clients: Vec<&'a Client>,
}

/// Lead, active and completed columns. Lost clients are not shown.
pub fn crm_board(clients: &[Client]) -> Vec<BoardColumn<'_>> {
    CRM_BOARD_COLUMNS
        .into_iter()
        .map(|status| BoardColumn {
            status,
            clients: clients
                .iter()
                .filter(|client| client.status == status)
                .collect(),
        })
        .collect()
}

/// Bank, cash and fixed-deposit holdings, capped at six.
pub fn money_locations(assets: &[Asset]) -> Vec<&Asset> {
    assets
        .iter()
        .filter(|asset| asset.kind.is_liquid())
        .take(MONEY_LOCATION_LIMIT)
        .collect()
}

/// Clients who still owe part of their project value.
pub fn receivable_clients(clients: &[Client]) -> Vec<&Client> {
    clients
        .iter()
        .filter(|client| client.project_value > client.paid_amount)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{crm_board, money_locations, search_contacts, transactions_in_month};
    use crate::model::brand::BrandId;
    use crate::model::crm::{Client, ClientStatus};
    use crate::model::finance::{Asset, AssetType, Transaction, TransactionType};

    fn client(id: &str, name: &str, email: Option<&str>, status: ClientStatus) -> Client {
        Client {
            id: id.to_string(),
            name: name.to_string(),
            company: format!("{name} Ltd"),
            email: email.map(str::to_string),
            phone: None,
            brand_id: BrandId::DigiFlora,
            status,
            project_value: 10.0,
            paid_amount: 0.0,
            last_contact: "Today".to_string(),
            notes: None,
        }
    }

    #[test]
    fn search_is_case_insensitive_and_checks_email() {
        let clients = [
            client("1", "Rahul Sharma", Some("rahul@techflow.in"), ClientStatus::Lead),
            client("2", "Ananya Gupta", None, ClientStatus::Active),
        ];
        let hits = search_contacts(&clients, "TECHFLOW");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
        assert_eq!(search_contacts(&clients, "gupta ltd")[0].id, "2");
        assert_eq!(search_contacts(&clients, "  ").len(), 2);
        assert!(search_contacts(&clients, "nobody").is_empty());
    }

    #[test]
    fn month_filter_matches_date_prefix() {
        let transaction = |id: &str, date: &str| Transaction {
            id: id.to_string(),
            date: date.to_string(),
            amount: 1.0,
            description: "d".to_string(),
            kind: TransactionType::Income,
            brand_id: BrandId::Misc,
            category: "General".to_string(),
        };
        let transactions = [
            transaction("1", "2023-10-28"),
            transaction("2", "2023-11-01"),
            transaction("3", "2023-11-30"),
        ];
        let ids = transactions_in_month(&transactions, "2023-11")
            .into_iter()
            .map(|transaction| transaction.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn board_drops_lost_clients() {
        let clients = [
            client("1", "a", None, ClientStatus::Lost),
            client("2", "b", None, ClientStatus::Completed),
            client("3", "c", None, ClientStatus::Lead),
        ];
        let board = crm_board(&clients);
        assert_eq!(board.len(), 3);
        assert_eq!(board[0].clients[0].id, "3");
        assert!(board[1].clients.is_empty());
        assert_eq!(board[2].clients[0].id, "2");
    }

    #[test]
    fn money_locations_keep_liquid_assets_only() {
        let assets = (0..9)
            .map(|index| Asset {
                id: index.to_string(),
                name: format!("asset {index}"),
                kind: if index == 0 {
                    AssetType::Crypto
                } else {
                    AssetType::Bank
                },
                value: 100.0,
                last_updated: "Today".to_string(),
            })
            .collect::<Vec<_>>();
        let locations = money_locations(&assets);
        assert_eq!(locations.len(), 6);
        assert_eq!(locations[0].id, "1");
    }
}
