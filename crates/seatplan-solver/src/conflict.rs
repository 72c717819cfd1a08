//! Residual avoid relationships in a finished seating.
//!
//! On a fresh plan this finds nothing, since the planner never co-seats an
//! avoiding pair. It exists for seatings the planner did not produce, such
//! as manual assignments loaded from the store.

use seatplan_core::{Conflict, Guest};

use crate::seating::Seating;

pub const MUTUAL_AVOIDANCE: &str = "mutual avoidance";

/// Scans every table for co-seated guests in an avoid relationship.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictDetector;

impl ConflictDetector {
    pub fn new() -> Self {
        Self
    }

    /// One conflict per unordered pair, in table then seating order.
    pub fn detect(&self, seating: &Seating<'_>) -> Vec<Conflict> {
        let mut conflicts = Vec::new();

        for table in seating.tables() {
            for (i, first) in table.occupants.iter().enumerate() {
                for second in &table.occupants[i + 1..] {
                    if let Some(reason) = avoidance_reason(first, second) {
                        conflicts.push(Conflict {
                            guest1_name: first.full_name.clone(),
                            guest2_name: second.full_name.clone(),
                            reason,
                            table_id: table.table.id.clone(),
                        });
                    }
                }
            }
        }

        conflicts
    }
}

fn avoidance_reason(first: &Guest, second: &Guest) -> Option<String> {
    match (first.avoids(&second.id), second.avoids(&first.id)) {
        (true, true) => Some(MUTUAL_AVOIDANCE.to_string()),
        (true, false) => Some(format!(
            "{} asked not to sit with {}",
            first.full_name, second.full_name
        )),
        (false, true) => Some(format!(
            "{} asked not to sit with {}",
            second.full_name, first.full_name
        )),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatplan_core::TableId;
    use seatplan_test::guests::mutual_avoiders;
    use seatplan_test::{plain, tables};

    #[test]
    fn test_mutual_and_one_sided() {
        let (a, b) = mutual_avoiders("a", "b");
        let c = plain("c").avoiding("d");
        let d = plain("d");
        let guests = vec![a, b, c, d];
        let tables = tables(&[2, 2]);

        let mut seating = Seating::empty(&tables);
        seating.seat(0, &guests[0]);
        seating.seat(0, &guests[1]);
        seating.seat(1, &guests[3]);
        seating.seat(1, &guests[2]);

        let conflicts = ConflictDetector::new().detect(&seating);
        assert_eq!(conflicts.len(), 2);
        assert_eq!(conflicts[0].reason, MUTUAL_AVOIDANCE);
        assert_eq!(conflicts[0].table_id, TableId::from("t1"));
        assert_eq!(conflicts[1].guest1_name, "Guest d");
        assert_eq!(conflicts[1].guest2_name, "Guest c");
        assert_eq!(conflicts[1].reason, "Guest c asked not to sit with Guest d");
    }

    #[test]
    fn test_separate_tables_do_not_conflict() {
        let (a, b) = mutual_avoiders("a", "b");
        let guests = vec![a, b];
        let tables = tables(&[2, 2]);

        let mut seating = Seating::empty(&tables);
        seating.seat(0, &guests[0]);
        seating.seat(1, &guests[1]);

        assert!(ConflictDetector::new().detect(&seating).is_empty());
    }

    #[test]
    fn test_every_pair_reported_once() {
        let guests = vec![
            plain("a").avoiding("b").avoiding("c"),
            plain("b"),
            plain("c").avoiding("b"),
        ];
        let tables = tables(&[3]);
        let mut seating = Seating::empty(&tables);
        for guest in &guests {
            seating.seat(0, guest);
        }

        assert_eq!(ConflictDetector::new().detect(&seating).len(), 3);
    }
}
