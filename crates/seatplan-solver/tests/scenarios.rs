//! End-to-end seating scenarios.

use seatplan_config::SeatPlanConfig;
use seatplan_core::{
    Guest, GuestId, PlanRequest, PlanResult, SeatPlanError, StoreOp, Table, TableId,
    ValidationError,
};
use seatplan_solver::{
    InMemoryAssignmentStore, InMemorySeatingSource, SeatingManager, SeatingOptimizer,
};
use seatplan_test::guests::{mutual_avoiders, mutual_friends};
use seatplan_test::{plain, tables};

fn preview(guests: &[Guest], tables: &[Table]) -> PlanResult {
    let optimizer = SeatingOptimizer::default();
    optimizer.optimize(guests, tables).unwrap()
}

fn table_of(result: &PlanResult, guest: &str) -> Option<TableId> {
    result
        .assignments
        .iter()
        .find(|a| a.guest_id.as_str() == guest)
        .map(|a| a.table_id.clone())
}

#[test]
fn scenario_a_mutual_friends_sit_together() {
    let (a, b) = mutual_friends("a", "b");
    let guests = vec![a, b];
    let tables = tables(&[2]);

    let result = preview(&guests, &tables);

    assert_eq!(result.stats.seated_guests, 2);
    assert_eq!(table_of(&result, "a"), table_of(&result, "b"));
    // counted per seated guest with a match
    assert_eq!(result.stats.preference_matches, 2);
    assert_eq!(result.stats.conflict_count, 0);
    assert!(result.conflicts.is_empty());
}

#[test]
fn scenario_b_mutual_avoiders_one_table() {
    let (a, b) = mutual_avoiders("a", "b");
    let guests = vec![a, b];
    let tables = tables(&[2]);

    let result = preview(&guests, &tables);

    assert_eq!(result.stats.total_guests, 2);
    assert_eq!(result.stats.seated_guests, 1);
    assert_eq!(result.stats.conflict_count, 0);
    assert_eq!(result.unseated.len(), 1);
    // stable ordering seats the first listed guest
    assert_eq!(result.assignments[0].guest_id, GuestId::from("a"));
    assert_eq!(result.unseated, vec![GuestId::from("b")]);
}

#[test]
fn scenario_c_avoiders_never_share_a_table() {
    let x = plain("x").avoiding("y");
    let y = plain("y").preferring("z");
    let z = plain("z");

    for capacities in [[1, 2], [2, 1]] {
        for guests in [
            vec![x.clone(), y.clone(), z.clone()],
            vec![z.clone(), y.clone(), x.clone()],
        ] {
            let tables = tables(&capacities);
            let result = preview(&guests, &tables);

            assert_eq!(result.stats.seated_guests, 3);
            assert_ne!(table_of(&result, "x"), table_of(&result, "y"));
            assert_eq!(result.stats.conflict_count, 0);
        }
    }
}

#[test]
fn scenario_d_no_attending_guests() {
    let tables = tables(&[4]);
    let optimizer = SeatingOptimizer::default();
    let err = optimizer.optimize(&[], &tables).unwrap_err();
    assert_eq!(err, ValidationError::NoAttendingGuests);

    let source = InMemorySeatingSource::new().with_tables("c1", tables);
    let manager = SeatingManager::new(
        source,
        InMemoryAssignmentStore::new(),
        &SeatPlanConfig::default(),
    );
    let request = PlanRequest::optimize("w1", "c1");
    let err = manager.preview(&request).unwrap_err();
    assert!(matches!(
        err,
        SeatPlanError::Validation(ValidationError::NoAttendingGuests)
    ));
}

#[test]
fn scenario_e_insert_failure_leaves_no_partial_state() {
    let (a, b) = mutual_friends("a", "b");
    let source = InMemorySeatingSource::new()
        .with_guests("w1", vec![a, b, plain("c")])
        .with_tables("c1", tables(&[2, 2]));
    let store = InMemoryAssignmentStore::new().fail_on(StoreOp::Insert);
    let mut manager = SeatingManager::new(source, store, &SeatPlanConfig::default());

    let err = manager.apply(&PlanRequest::apply("w1", "c1")).unwrap_err();
    assert!(matches!(
        &err,
        SeatPlanError::Persistence(e) if e.op == StoreOp::Insert
    ));

    // A subsequent read of the chart sees no assignments.
    let checked = manager
        .validate_existing(&PlanRequest::optimize("w1", "c1"))
        .unwrap();
    assert!(checked.assignments.is_empty());
    assert!(manager.store().rows().is_empty());

    // The caller retries once the store recovers.
    manager.store_mut().clear_failure();
    let result = manager.apply(&PlanRequest::apply("w1", "c1")).unwrap();
    assert_eq!(manager.store().rows().len(), result.assignments.len());
}

#[test]
fn scenario_pre_existing_conflicts_are_reported() {
    let (a, b) = mutual_avoiders("a", "b");
    let source = InMemorySeatingSource::new()
        .with_guests("w1", vec![a, b])
        .with_tables("c1", tables(&[2]));
    let rows = ["a", "b"]
        .iter()
        .map(|id| seatplan_core::AssignmentRow {
            guest_id: GuestId::from(*id),
            table_id: TableId::from("t1"),
            seating_chart_id: "c1".to_string(),
            score: seatplan_core::Compatibility::NEUTRAL,
        })
        .collect();
    let manager = SeatingManager::new(
        source,
        InMemoryAssignmentStore::with_rows(rows),
        &SeatPlanConfig::default(),
    );

    let checked = manager
        .validate_existing(&PlanRequest::optimize("w1", "c1"))
        .unwrap();
    assert_eq!(checked.stats.conflict_count, 1);
    assert_eq!(checked.conflicts[0].reason, "mutual avoidance");
    assert_eq!(checked.conflicts[0].guest1_name, "Guest a");
}
