//! Candidate-versus-table scoring.

use seatplan_config::ScoringWeights;
use seatplan_core::{Compatibility, Guest};

use crate::compatibility::{CompatibilityScorer, PairScorer};
use crate::reasons::{reason, Reasons};
use crate::ScoreExplanation;

/// Scores a candidate against the current occupants of a table.
///
/// An empty table yields the configured neutral score. Otherwise the pair
/// scores against every occupant are averaged (rounded half up) and the
/// reason lists are merged in occupant order, deduplicated and capped.
#[derive(Debug, Clone)]
pub struct TableAggregateScorer<P = CompatibilityScorer> {
    pair_scorer: P,
    empty_table_score: Compatibility,
    max_reasons: usize,
}

impl TableAggregateScorer<CompatibilityScorer> {
    /// Builds the stock scorer from configured weights.
    pub fn from_weights(weights: &ScoringWeights) -> Self {
        Self::new(CompatibilityScorer::new(weights.clone()), weights)
    }
}

impl Default for TableAggregateScorer<CompatibilityScorer> {
    fn default() -> Self {
        Self::from_weights(&ScoringWeights::default())
    }
}

impl<P: PairScorer> TableAggregateScorer<P> {
    /// Wraps a pair scorer, taking the empty-table score and reasons cap
    /// from `weights`.
    pub fn new(pair_scorer: P, weights: &ScoringWeights) -> Self {
        Self {
            pair_scorer,
            empty_table_score: Compatibility::clamped(weights.empty_table_score),
            max_reasons: weights.max_reasons,
        }
    }

    /// Scores `candidate` against `occupants`.
    pub fn score_table<'a, I>(&self, candidate: &Guest, occupants: I) -> ScoreExplanation
    where
        I: IntoIterator<Item = &'a Guest>,
    {
        let mut scores = Vec::new();
        let mut reasons = Reasons::new();

        for occupant in occupants {
            let pair = self.pair_scorer.score_pair(candidate, occupant);
            scores.push(pair.score);
            reasons.extend_from(&pair.reasons);
        }

        match Compatibility::mean(scores) {
            None => {
                let mut reasons = Reasons::new();
                reasons.push(reason::FIRST_GUEST);
                ScoreExplanation::new(self.empty_table_score, reasons)
            }
            Some(score) => {
                reasons.truncate(self.max_reasons);
                ScoreExplanation::new(score, reasons)
            }
        }
    }
}
