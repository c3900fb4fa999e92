//! Headline figures for the command center view.

use super::finance::{
    net_operating_cash, net_worth, projected_net_position, receivables, total_assets,
    total_expense, total_income, total_liabilities,
};
use super::pipeline::{pipeline_potential, pipeline_value, total_crm_value};
use super::pnl::{pnl_report, top_revenue_driver};
use super::study::{latest_mock_percent, readiness_percent};
use crate::model::brand::BrandId;
use crate::store::StoreState;

/// Snapshot of every top-level figure, computed in one pass over a state.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    pub total_income: f64,
    pub total_expense: f64,
    pub net_operating_cash: f64,
    pub receivables: f64,
    pub projected_net_position: f64,
    pub pipeline_value: f64,
    pub pipeline_potential: f64,
    pub total_crm_value: f64,
    pub top_revenue_brand: Option<BrandId>,
    pub readiness_percent: u32,
    pub open_tasks: usize,
    pub habits_completed: usize,
    pub habits_total: usize,
    pub latest_mock_percent: Option<f64>,
}

pub fn dashboard_summary(state: &StoreState) -> DashboardSummary {
    let report = pnl_report(state);
    DashboardSummary {
        total_assets: total_assets(&state.assets),
        total_liabilities: total_liabilities(&state.debts),
        net_worth: net_worth(&state.assets, &state.debts),
        total_income: total_income(&state.transactions),
        total_expense: total_expense(&state.transactions),
        net_operating_cash: net_operating_cash(&state.transactions),
        receivables: receivables(&state.clients),
        projected_net_position: projected_net_position(
            &state.transactions,
            &state.clients,
            &state.debts,
        ),
        pipeline_value: pipeline_value(&state.clients),
        pipeline_potential: pipeline_potential(&state.clients),
        total_crm_value: total_crm_value(&state.clients),
        top_revenue_brand: top_revenue_driver(&report).map(|entry| entry.brand_id),
        readiness_percent: readiness_percent(&state.syllabus),
        open_tasks: state.tasks.iter().filter(|task| !task.completed).count(),
        habits_completed: state.habits.iter().filter(|habit| habit.completed).count(),
        habits_total: state.habits.len(),
        latest_mock_percent: latest_mock_percent(&state.mock_results),
    }
}
