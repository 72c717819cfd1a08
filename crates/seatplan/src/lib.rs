//! Seatplan - a wedding seating optimizer
//!
//! Assigns attending guests to tables with a greedy, deterministic planner,
//! then reports the conflicts and statistics of the result.
//!
//! # Example
//!
//! ```rust
//! use seatplan::prelude::*;
//!
//! let guests = vec![
//!     Guest::new("g1", "Ann").preferring("g2"),
//!     Guest::new("g2", "Ben").preferring("g1"),
//! ];
//! let tables = vec![Table::new("t1", 1, 4)];
//!
//! let result = seatplan::optimize(&guests, &tables).unwrap();
//! assert_eq!(result.stats.seated_guests, 2);
//! assert_eq!(result.stats.preference_matches, 2);
//! ```

// Domain and output types
pub use seatplan_core::{
    Assignment, AssignmentRow, Compatibility, Conflict, Guest, GuestId, PlanMode, PlanRequest,
    PlanResult, SeatPlanError, SeatingStats, Side, SourceError, StoreError, StoreOp, Table,
    TableId, TableSeating, ValidationError,
};

// Configuration
pub use seatplan_config::{ConfigError, PlannerConfig, ScoringWeights, SeatPlanConfig, TableScan};

// Scoring
pub use seatplan_scoring::{
    CompatibilityScorer, PairScorer, Reasons, ScoreExplanation, TableAggregateScorer,
};

// Planning pipeline and collaborators
pub use seatplan_solver::{
    AssignmentPlanner, AssignmentStore, ConflictDetector, InMemoryAssignmentStore,
    InMemorySeatingSource, SeatingManager, SeatingOptimizer, SeatingSource, StatsAggregator,
};

#[cfg(feature = "console")]
pub mod console;

mod run;
pub use run::{optimize, CONFIG_FILE};

pub mod prelude {
    pub use super::{
        AssignmentStore, Guest, GuestId, PlanRequest, PlanResult, SeatPlanConfig, SeatPlanError,
        SeatingManager, SeatingOptimizer, SeatingSource, Side, Table, TableId,
    };
}
