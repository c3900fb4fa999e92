//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `founder_core` linkage and fixture decoding without the UI shell.
//! - Keep output deterministic for quick local sanity checks.

use founder_core::metrics::pnl::pnl_report;
use founder_core::{dashboard_summary, format_inr, Store};

fn main() {
    println!("founder_core ping={}", founder_core::ping());
    println!("founder_core version={}", founder_core::core_version());

    let store = match Store::seeded() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("founder_core seed=error reason={err}");
            std::process::exit(1);
        }
    };
    let summary = dashboard_summary(store.state());
    println!("net_worth={}", format_inr(summary.net_worth));
    println!(
        "projected_net_position={}",
        format_inr(summary.projected_net_position)
    );
    println!("pipeline_value={}", format_inr(summary.pipeline_value));
    println!("readiness_percent={}", summary.readiness_percent);
    for entry in pnl_report(store.state()) {
        println!(
            "brand={} revenue={} profit={}",
            entry.brand_id.as_str(),
            format_inr(entry.revenue),
            format_inr(entry.profit)
        );
    }
}
