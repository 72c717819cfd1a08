use std::cmp::Reverse;

use seatplan_core::Guest;

/// Guests sorted by descending relationship count.
///
/// The sort is stable: guests with equal counts keep their input order.
pub fn planning_order(guests: &[Guest]) -> Vec<&Guest> {
    let mut order: Vec<&Guest> = guests.iter().collect();
    order.sort_by_key(|g| Reverse(g.constraint_count()));
    order
}
