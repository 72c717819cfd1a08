//! The preview pipeline: validate, plan, detect conflicts, aggregate.

use std::collections::HashSet;
use std::time::Instant;

use seatplan_config::SeatPlanConfig;
use seatplan_core::{Assignment, AssignmentRow, Guest, PlanResult, Table, ValidationError};
use seatplan_scoring::{CompatibilityScorer, PairScorer};
use tracing::{info, warn};

use crate::conflict::ConflictDetector;
use crate::planner::AssignmentPlanner;
use crate::seating::Seating;
use crate::stats::StatsAggregator;

/// Rejects input the planner cannot work with.
///
/// Checked in order: guests present, tables present, ids unique, every
/// capacity positive.
pub fn validate_input(guests: &[Guest], tables: &[Table]) -> Result<(), ValidationError> {
    if guests.is_empty() {
        return Err(ValidationError::NoAttendingGuests);
    }
    if tables.is_empty() {
        return Err(ValidationError::NoTables);
    }

    let mut guest_ids = HashSet::with_capacity(guests.len());
    for guest in guests {
        if !guest_ids.insert(&guest.id) {
            return Err(ValidationError::DuplicateGuest {
                guest_id: guest.id.to_string(),
            });
        }
    }

    let mut table_ids = HashSet::with_capacity(tables.len());
    for table in tables {
        if !table_ids.insert(&table.id) {
            return Err(ValidationError::DuplicateTable {
                table_id: table.id.to_string(),
            });
        }
        if table.capacity == 0 {
            return Err(ValidationError::ZeroCapacity {
                table_id: table.id.to_string(),
            });
        }
    }

    Ok(())
}

/// Side-effect-free optimizer run.
///
/// Calling [`optimize`](Self::optimize) twice with the same input in the
/// same order returns identical results.
#[derive(Debug, Clone)]
pub struct SeatingOptimizer<P = CompatibilityScorer> {
    planner: AssignmentPlanner<P>,
    detector: ConflictDetector,
    stats: StatsAggregator,
}

impl SeatingOptimizer<CompatibilityScorer> {
    pub fn from_config(config: &SeatPlanConfig) -> Self {
        Self::new(AssignmentPlanner::from_config(config))
    }
}

impl Default for SeatingOptimizer<CompatibilityScorer> {
    fn default() -> Self {
        Self::from_config(&SeatPlanConfig::default())
    }
}

impl<P: PairScorer> SeatingOptimizer<P> {
    pub fn new(planner: AssignmentPlanner<P>) -> Self {
        Self {
            planner,
            detector: ConflictDetector::new(),
            stats: StatsAggregator::new(),
        }
    }

    pub fn planner(&self) -> &AssignmentPlanner<P> {
        &self.planner
    }

    /// Plans a fresh seating.
    ///
    /// # Errors
    ///
    /// Only [`ValidationError`]; computation itself cannot fail.
    pub fn optimize(
        &self,
        guests: &[Guest],
        tables: &[Table],
    ) -> Result<PlanResult, ValidationError> {
        validate_input(guests, tables)?;

        let started = Instant::now();
        info!(
            event = "plan_start",
            guest_count = guests.len() as u64,
            table_count = tables.len() as u64,
            seat_count = tables.iter().map(|t| t.capacity as u64).sum::<u64>(),
        );

        let output = self.planner.plan(guests, tables);
        let conflicts = self.detector.detect(&output.seating);
        let stats = self.stats.aggregate(
            guests.len(),
            &output.assignments,
            conflicts.len(),
            &output.seating,
        );

        if !conflicts.is_empty() {
            warn!(event = "conflicts_found", conflicts = conflicts.len() as u64);
        }
        info!(
            event = "plan_end",
            seated = stats.seated_guests as u64,
            unseated = output.unseated.len() as u64,
            conflicts = stats.conflict_count as u64,
            preference_matches = stats.preference_matches as u64,
            average = stats.average_compatibility,
            duration_ms = started.elapsed().as_millis() as u64,
        );

        Ok(PlanResult {
            tables: output.seating.to_table_seatings(),
            assignments: output.assignments,
            conflicts,
            stats,
            unseated: output.unseated,
        })
    }

    /// Scores and checks a seating loaded from stored rows.
    ///
    /// Each seated guest is scored against the other guests at its table.
    /// Capacity and avoid relationships are reported, never repaired.
    pub fn evaluate_existing(
        &self,
        guests: &[Guest],
        tables: &[Table],
        rows: &[AssignmentRow],
    ) -> Result<PlanResult, ValidationError> {
        validate_input(guests, tables)?;

        let seating = Seating::from_rows(guests, tables, rows);
        let scorer = self.planner.scorer();

        let mut assignments = Vec::with_capacity(seating.seated_count());
        for table in seating.tables() {
            for guest in &table.occupants {
                let explanation = scorer.score_table(guest, table.others(&guest.id));
                assignments.push(Assignment {
                    guest_id: guest.id.clone(),
                    table_id: table.table.id.clone(),
                    score: explanation.score,
                    reasons: explanation.reasons.into_vec(),
                });
            }
        }

        let seated: HashSet<_> = assignments.iter().map(|a| &a.guest_id).collect();
        let unseated = guests
            .iter()
            .filter(|g| !seated.contains(&g.id))
            .map(|g| g.id.clone())
            .collect();

        let conflicts = self.detector.detect(&seating);
        if !conflicts.is_empty() {
            warn!(event = "conflicts_found", conflicts = conflicts.len() as u64);
        }
        let stats = self
            .stats
            .aggregate(guests.len(), &assignments, conflicts.len(), &seating);

        Ok(PlanResult {
            tables: seating.to_table_seatings(),
            assignments,
            conflicts,
            stats,
            unseated,
        })
    }
}
