//! Per-brand profit and loss.
//!
//! # Invariants
//! - `margin` is `None` when revenue is zero.
//! - The P&L report leaves out `BrandId::Misc`; personal spend is not a
//!   business line.

use crate::model::brand::{Brand, BrandId};
use crate::model::crm::Task;
use crate::model::finance::{Transaction, TransactionType};
use crate::store::StoreState;

#[derive(Debug, Clone, PartialEq)]
pub struct BrandPnl {
    pub brand_id: BrandId,
    pub name: String,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
    /// `profit / revenue`; `None` when revenue is zero.
    pub margin: Option<f64>,
}

pub fn brand_pnl(transactions: &[Transaction], brand: &Brand) -> BrandPnl {
    let revenue = brand_total(transactions, brand.id, TransactionType::Income);
    let expenses = brand_total(transactions, brand.id, TransactionType::Expense);
    let profit = revenue - expenses;
    let margin = if revenue == 0.0 {
        None
    } else {
        Some(profit / revenue)
    };
    BrandPnl {
        brand_id: brand.id,
        name: brand.name.clone(),
        revenue,
        expenses,
        profit,
        margin,
    }
}

/// Business-line P&L for every brand except `Misc`, in brand order.
pub fn pnl_report(state: &StoreState) -> Vec<BrandPnl> {
    state
        .brands
        .iter()
        .filter(|brand| brand.id != BrandId::Misc)
        .map(|brand| brand_pnl(&state.transactions, brand))
        .collect()
}

/// Brand with the highest revenue; ties keep the earlier brand.
pub fn top_revenue_driver(report: &[BrandPnl]) -> Option<&BrandPnl> {
    report.iter().fold(None, |best, entry| match best {
        Some(current) if current.revenue >= entry.revenue => Some(current),
        _ => Some(entry),
    })
}

/// Income per brand over every brand, in brand order.
pub fn revenue_by_brand(state: &StoreState) -> Vec<(BrandId, f64)> {
    state
        .brands
        .iter()
        .map(|brand| {
            (
                brand.id,
                brand_total(&state.transactions, brand.id, TransactionType::Income),
            )
        })
        .collect()
}

/// Figures shown on one brand's business page.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandSummary {
    pub brand_id: BrandId,
    pub total_revenue: f64,
    /// Outstanding value across all of the brand's clients.
    pub pending_revenue: f64,
    pub pipeline_projects: usize,
    pub open_tasks: usize,
    pub completed_tasks: usize,
}

pub fn brand_summary(state: &StoreState, brand_id: BrandId) -> BrandSummary {
    let brand_clients = state
        .clients
        .iter()
        .filter(|client| client.brand_id == brand_id);
    let pending_revenue: f64 = brand_clients.clone().map(|client| client.outstanding()).sum();
    let pipeline_projects = brand_clients
        .filter(|client| client.status.is_pipeline())
        .count();
    let (completed_tasks, open_tasks) = task_split(&state.tasks, brand_id);

    BrandSummary {
        brand_id,
        total_revenue: brand_total(&state.transactions, brand_id, TransactionType::Income),
        pending_revenue,
        pipeline_projects,
        open_tasks,
        completed_tasks,
    }
}

fn task_split(tasks: &[Task], brand_id: BrandId) -> (usize, usize) {
    tasks
        .iter()
        .filter(|task| task.brand_id == brand_id)
        .fold((0, 0), |(done, open), task| {
            if task.completed {
                (done + 1, open)
            } else {
                (done, open + 1)
            }
        })
}

fn brand_total(transactions: &[Transaction], brand_id: BrandId, kind: TransactionType) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.brand_id == brand_id && transaction.kind == kind)
        .map(|transaction| transaction.amount)
        .sum()
}
