//! Summary metrics of a run.

use seatplan_core::{Assignment, SeatingStats};

use crate::seating::Seating;

/// Aggregates assignments into [`SeatingStats`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsAggregator;

impl StatsAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Computes stats for `assignments` against the final `seating`.
    ///
    /// A preference match is counted per assignment whose table holds
    /// another guest that the assigned guest prefers, or who prefers them.
    pub fn aggregate(
        &self,
        total_guests: usize,
        assignments: &[Assignment],
        conflict_count: usize,
        seating: &Seating<'_>,
    ) -> SeatingStats {
        let preference_matches = assignments
            .iter()
            .filter(|a| has_preference_match(a, seating))
            .count();

        let average_compatibility = if assignments.is_empty() {
            0.0
        } else {
            let sum: u64 = assignments.iter().map(|a| a.score.value() as u64).sum();
            sum as f64 / assignments.len() as f64
        };

        SeatingStats {
            total_guests,
            seated_guests: assignments.len(),
            conflict_count,
            preference_matches,
            average_compatibility,
        }
    }
}

fn has_preference_match(assignment: &Assignment, seating: &Seating<'_>) -> bool {
    let Some(table) = seating.table(&assignment.table_id) else {
        return false;
    };
    let Some(guest) = table
        .occupants
        .iter()
        .find(|g| g.id == assignment.guest_id)
    else {
        return false;
    };
    table
        .others(&assignment.guest_id)
        .any(|other| guest.has_preference_with(other))
}
