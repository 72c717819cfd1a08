//! Human-readable rendering of a planning result.

use std::fmt::Write;

use owo_colors::OwoColorize;
use seatplan::PlanResult;

use crate::chart::ChartFile;

pub fn render(result: &PlanResult, chart: &ChartFile) -> String {
    let mut out = String::new();

    for table in &result.tables {
        let _ = writeln!(
            out,
            "{} ({}/{}, {} free)",
            format!("Table {}", table.table_number).bright_cyan().bold(),
            table.guest_ids.len(),
            table.capacity,
            table.remaining(),
        );
        for guest_id in &table.guest_ids {
            let score = result
                .assignments
                .iter()
                .find(|a| &a.guest_id == guest_id)
                .map(|a| a.score.value().to_string())
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "  {:<24} {:>3}",
                chart.guest_name(guest_id.as_str()),
                score
            );
        }
    }

    if !result.unseated.is_empty() {
        let _ = writeln!(out, "{}", "Unseated".bright_red().bold());
        for guest_id in &result.unseated {
            let _ = writeln!(out, "  {}", chart.guest_name(guest_id.as_str()));
        }
    }

    if !result.conflicts.is_empty() {
        let _ = writeln!(out, "{}", "Conflicts".bright_yellow().bold());
        for conflict in &result.conflicts {
            let _ = writeln!(
                out,
                "  {} / {} at {}: {}",
                conflict.guest1_name, conflict.guest2_name, conflict.table_id, conflict.reason
            );
        }
    }

    let stats = &result.stats;
    let _ = write!(
        out,
        "{} of {} seated, {} conflicts, {} preference matches, average compatibility {:.1}",
        stats.seated_guests,
        stats.total_guests,
        stats.conflict_count,
        stats.preference_matches,
        stats.average_compatibility,
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatplan::{
        Assignment, Compatibility, Conflict, GuestId, SeatingStats, TableId, TableSeating,
    };

    fn chart() -> ChartFile {
        ChartFile::from_json_str(
            r#"{
                "wedding_plan_id": "w1",
                "seating_chart_id": "c1",
                "guests": [
                    {"id": "g1", "full_name": "Ann"},
                    {"id": "g2", "full_name": "Ben"},
                    {"id": "g3", "full_name": "Cat"}
                ],
                "tables": [{"id": "t1", "table_number": 7, "capacity": 2}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_render_lists_tables_unseated_and_conflicts() {
        let result = PlanResult {
            assignments: vec![
                Assignment {
                    guest_id: GuestId::from("g1"),
                    table_id: TableId::from("t1"),
                    score: Compatibility::NEUTRAL,
                    reasons: vec!["first guest at table".into()],
                },
                Assignment {
                    guest_id: GuestId::from("g2"),
                    table_id: TableId::from("t1"),
                    score: Compatibility::of(0),
                    reasons: vec!["avoid relationship".into()],
                },
            ],
            conflicts: vec![Conflict {
                guest1_name: "Ann".into(),
                guest2_name: "Ben".into(),
                reason: "mutual avoidance".into(),
                table_id: TableId::from("t1"),
            }],
            stats: SeatingStats {
                total_guests: 3,
                seated_guests: 2,
                conflict_count: 1,
                preference_matches: 0,
                average_compatibility: 25.0,
            },
            unseated: vec![GuestId::from("g3")],
            tables: vec![TableSeating {
                table_id: TableId::from("t1"),
                table_number: 7,
                capacity: 2,
                guest_ids: vec![GuestId::from("g1"), GuestId::from("g2")],
            }],
        };

        let text = render(&result, &chart());

        assert!(text.contains("Table 7"));
        assert!(text.contains("(2/2, 0 free)"));
        assert!(text.contains("Ann"));
        assert!(text.contains("Cat"));
        assert!(text.contains("Ann / Ben at t1: mutual avoidance"));
        assert!(text.contains("2 of 3 seated, 1 conflicts"));
        assert!(text.contains("average compatibility 25.0"));
    }
}
