//! Greedy table assignment.
//!
//! Guests are placed one at a time, most-constrained first. Each guest goes
//! to the highest-scoring table that still has room and seats nobody in an
//! avoid relationship with them. There is no backtracking: an early
//! placement can block a better arrangement for a later guest. The result
//! is deterministic for a given input order, not globally optimal.

mod forager;
mod order;


pub use forager::{pick_best, TableCandidate};
pub use order::planning_order;

use rayon::prelude::*;
use seatplan_config::{PlannerConfig, SeatPlanConfig, TableScan};
use seatplan_core::{Assignment, Guest, GuestId, Table};
use seatplan_scoring::{CompatibilityScorer, PairScorer, TableAggregateScorer};
use tracing::{debug, trace};

use crate::seating::Seating;

/// Output of a planning pass.
#[derive(Debug, Clone)]
pub struct PlannerOutput<'g> {
    /// One entry per seated guest, in placement order.
    pub assignments: Vec<Assignment>,
    pub seating: Seating<'g>,
    /// Guests no table could take, in placement order.
    pub unseated: Vec<GuestId>,
}

/// Single-pass greedy planner.
///
/// # Type Parameters
/// * `P` - The pair scorer behind the table aggregate
#[derive(Debug, Clone)]
pub struct AssignmentPlanner<P = CompatibilityScorer> {
    scorer: TableAggregateScorer<P>,
    config: PlannerConfig,
}

impl AssignmentPlanner<CompatibilityScorer> {
    /// Builds the stock planner from configuration.
    pub fn from_config(config: &SeatPlanConfig) -> Self {
        Self::new(
            TableAggregateScorer::from_weights(&config.scoring),
            config.planner.clone(),
        )
    }
}

impl Default for AssignmentPlanner<CompatibilityScorer> {
    fn default() -> Self {
        Self::from_config(&SeatPlanConfig::default())
    }
}

impl<P: PairScorer> AssignmentPlanner<P> {
    pub fn new(scorer: TableAggregateScorer<P>, config: PlannerConfig) -> Self {
        Self { scorer, config }
    }

    pub fn scorer(&self) -> &TableAggregateScorer<P> {
        &self.scorer
    }

    /// Assigns guests to tables.
    ///
    /// Never fails: guests that fit nowhere are reported in
    /// [`PlannerOutput::unseated`].
    pub fn plan<'g>(&self, guests: &'g [Guest], tables: &'g [Table]) -> PlannerOutput<'g> {
        let mut seating = Seating::empty(tables);
        let mut assignments = Vec::with_capacity(guests.len());
        let mut unseated = Vec::new();

        for guest in planning_order(guests) {
            let open: Vec<usize> = seating
                .tables()
                .iter()
                .enumerate()
                .filter(|(_, t)| t.has_room() && !t.excludes(guest))
                .map(|(idx, _)| idx)
                .collect();

            let candidates = self.score_open_tables(guest, &seating, &open);

            let Some(best) = pick_best(candidates) else {
                debug!(event = "guest_unseated", guest_id = %guest.id);
                unseated.push(guest.id.clone());
                continue;
            };

            let table = seating.tables()[best.index].table;
            trace!(
                event = "guest_placed",
                guest_id = %guest.id,
                table_id = %table.id,
                score = best.explanation.score.value() as u64,
            );

            assignments.push(Assignment {
                guest_id: guest.id.clone(),
                table_id: table.id.clone(),
                score: best.explanation.score,
                reasons: best.explanation.reasons.into_vec(),
            });
            seating.seat(best.index, guest);
        }

        PlannerOutput {
            assignments,
            seating,
            unseated,
        }
    }

    // Scores are collected in table order whichever scan runs, so the
    // first-maximum pick is the same for both.
    fn score_open_tables(
        &self,
        guest: &Guest,
        seating: &Seating<'_>,
        open: &[usize],
    ) -> Vec<TableCandidate> {
        let score = |&index: &usize| TableCandidate {
            index,
            explanation: self
                .scorer
                .score_table(guest, seating.tables()[index].occupants.iter().copied()),
        };

        let parallel = self.config.table_scan == TableScan::Parallel
            && open.len() >= self.config.parallel_threshold;

        if parallel {
            open.par_iter().map(score).collect()
        } else {
            open.iter().map(score).collect()
        }
    }
}
