//! Compatibility scoring for seatplan.
//!
//! Two layers:
//! - [`CompatibilityScorer`] scores one guest against another
//! - [`TableAggregateScorer`] scores a candidate against everyone already
//!   seated at a table by averaging pair scores
//!
//! Both return a [`ScoreExplanation`]: the clamped score and the ordered
//! reasons that contributed to it.

mod compatibility;
mod reasons;
mod table;

#[cfg(test)]
mod compatibility_tests;

pub use compatibility::{CompatibilityScorer, PairScorer};
pub use reasons::{reason, Reasons};
pub use table::TableAggregateScorer;

use seatplan_core::Compatibility;

/// A score with the human-readable factors behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreExplanation {
    pub score: Compatibility,
    pub reasons: Reasons,
}

impl ScoreExplanation {
    pub fn new(score: Compatibility, reasons: Reasons) -> Self {
        Self { score, reasons }
    }
}
