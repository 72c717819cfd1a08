//! Seatplan solver
//!
//! This crate provides the seating optimizer pipeline:
//! - [`AssignmentPlanner`]: greedy, single-pass table assignment
//! - [`ConflictDetector`]: post-hoc scan for co-seated avoid relationships
//! - [`StatsAggregator`]: summary metrics of a run
//! - [`SeatingOptimizer`]: validation plus the three steps above (preview)
//! - [`SeatingManager`]: preview/apply orchestration against external
//!   [`SeatingSource`] and [`AssignmentStore`] collaborators
//!
//! Logging levels:
//! - **INFO**: planning start/end, apply start/end
//! - **WARN**: residual conflicts, failed applies
//! - **DEBUG**: unseated guests, rollbacks
//! - **TRACE**: individual placements

pub mod conflict;
pub mod manager;
pub mod optimizer;
pub mod planner;
pub mod seating;
pub mod source;
pub mod stats;
pub mod store;

pub use conflict::ConflictDetector;
pub use manager::SeatingManager;
pub use optimizer::{validate_input, SeatingOptimizer};
pub use planner::{planning_order, AssignmentPlanner, PlannerOutput};
pub use seating::{Seating, TableOccupancy};
pub use source::{InMemorySeatingSource, SeatingSource};
pub use stats::StatsAggregator;
pub use store::{AssignmentStore, InMemoryAssignmentStore};
