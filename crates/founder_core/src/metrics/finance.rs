//! Net worth and cashflow aggregates.
//!
//! # Invariants
//! - Receivables are summed unclamped: an overpaid client lowers the total.
//! - Distribution percentages are `None` when total asset value is zero.

use crate::format::round_half_up;
use crate::model::crm::Client;
use crate::model::finance::{Asset, Debt, Transaction, TransactionType};
use crate::model::RecordId;

pub fn total_assets(assets: &[Asset]) -> f64 {
    assets.iter().map(|asset| asset.value).sum()
}

/// Sum of all debt amounts regardless of status.
pub fn total_liabilities(debts: &[Debt]) -> f64 {
    debts.iter().map(|debt| debt.amount).sum()
}

pub fn net_worth(assets: &[Asset], debts: &[Debt]) -> f64 {
    total_assets(assets) - total_liabilities(debts)
}

pub fn total_by_type(transactions: &[Transaction], kind: TransactionType) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.kind == kind)
        .map(|transaction| transaction.amount)
        .sum()
}

pub fn total_income(transactions: &[Transaction]) -> f64 {
    total_by_type(transactions, TransactionType::Income)
}

pub fn total_expense(transactions: &[Transaction]) -> f64 {
    total_by_type(transactions, TransactionType::Expense)
}

pub fn net_operating_cash(transactions: &[Transaction]) -> f64 {
    total_income(transactions) - total_expense(transactions)
}

/// Sum of `projectValue - paidAmount` over every client.
pub fn receivables(clients: &[Client]) -> f64 {
    clients.iter().map(Client::outstanding).sum()
}

/// Operating cash plus everything owed to us, minus everything we owe.
pub fn projected_net_position(
    transactions: &[Transaction],
    clients: &[Client],
    debts: &[Debt],
) -> f64 {
    net_operating_cash(transactions) + receivables(clients) - total_liabilities(debts)
}

/// Share of total asset value held by one asset.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetShare {
    pub asset_id: RecordId,
    pub name: String,
    pub value: f64,
    /// Rounded percentage; `None` when the total is zero.
    pub percent: Option<i64>,
}

/// Per-asset rounded share of total value, in collection order.
pub fn asset_distribution(assets: &[Asset]) -> Vec<AssetShare> {
    let total = total_assets(assets);
    assets
        .iter()
        .map(|asset| AssetShare {
            asset_id: asset.id.clone(),
            name: asset.name.clone(),
            value: asset.value,
            percent: rounded_percent(asset.value, total),
        })
        .collect()
}

/// `100 * part / total` rounded half up, `None` for a zero total.
pub(crate) fn rounded_percent(part: f64, total: f64) -> Option<i64> {
    if total == 0.0 {
        return None;
    }
    Some(round_half_up(part / total * 100.0) as i64)
}
