//! Seatplan Core - domain types for the seating optimizer
//!
//! This crate provides the fundamental types shared by every seatplan crate:
//! - Guests and tables as loaded from the external store
//! - The [`Compatibility`] score type
//! - Derived planning output (assignments, conflicts, stats)
//! - The error taxonomy used across the workspace

pub mod domain;
pub mod error;
pub mod plan;
pub mod score;

pub use domain::{Guest, GuestId, Side, Table, TableId};
pub use error::{Result, SeatPlanError, SourceError, StoreError, StoreOp, ValidationError};
pub use plan::{
    Assignment, AssignmentRow, Conflict, PlanMode, PlanRequest, PlanResult, SeatingStats,
    TableSeating,
};
pub use score::Compatibility;
