//! Colorful console output for planning runs.
//!
//! Initialized by [`optimize`](crate::optimize) when the `console` feature
//! is enabled.

pub use seatplan_console::{init, PlanConsoleLayer};
