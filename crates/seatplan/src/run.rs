//! One-call entry point that hides the pipeline wiring.

use seatplan_config::SeatPlanConfig;
use seatplan_core::{Guest, PlanResult, Result, Table};
use seatplan_solver::SeatingOptimizer;

/// Configuration file read from the working directory.
pub const CONFIG_FILE: &str = "seatplan.toml";

/// Computes a seating for the given guests and tables.
///
/// Reads [`CONFIG_FILE`] when present and falls back to the default
/// weights otherwise. Nothing is persisted.
pub fn optimize(guests: &[Guest], tables: &[Table]) -> Result<PlanResult> {
    #[cfg(feature = "console")]
    seatplan_console::init();

    let config = SeatPlanConfig::load(CONFIG_FILE).unwrap_or_default();
    let optimizer = SeatingOptimizer::from_config(&config);
    Ok(optimizer.optimize(guests, tables)?)
}
