//! Tests for preview/apply orchestration.

use super::*;
use seatplan_core::{
    Compatibility, GuestId, PlanMode, SeatPlanError, SourceError, StoreOp, ValidationError,
};
use seatplan_test::guests::mutual_friends;
use seatplan_test::{plain, tables};

use crate::source::InMemorySeatingSource;
use crate::store::InMemoryAssignmentStore;

fn source() -> InMemorySeatingSource {
    let (a, b) = mutual_friends("a", "b");
    InMemorySeatingSource::new()
        .with_guests("w1", vec![a, b, plain("c")])
        .with_tables("c1", tables(&[2, 2]))
}

fn stale_row(guest: &str, table: &str) -> AssignmentRow {
    AssignmentRow {
        guest_id: GuestId::from(guest),
        table_id: TableId::from(table),
        seating_chart_id: "c1".to_string(),
        score: Compatibility::of(10),
    }
}

fn manager(
    store: InMemoryAssignmentStore,
) -> SeatingManager<InMemorySeatingSource, InMemoryAssignmentStore> {
    SeatingManager::new(source(), store, &SeatPlanConfig::default())
}

struct DenyingSource;

impl SeatingSource for DenyingSource {
    fn attending_guests(
        &self,
        wedding_plan_id: &str,
    ) -> std::result::Result<Vec<Guest>, SourceError> {
        Err(SourceError::Unauthorized(wedding_plan_id.to_string()))
    }

    fn chart_tables(
        &self,
        _seating_chart_id: &str,
    ) -> std::result::Result<Vec<Table>, SourceError> {
        Ok(Vec::new())
    }
}

#[test]
fn test_preview_has_no_side_effects() {
    let store = InMemoryAssignmentStore::with_rows(vec![stale_row("c", "t1")]);
    let manager = manager(store);

    let first = manager.preview(&PlanRequest::optimize("w1", "c1")).unwrap();
    let second = manager.preview(&PlanRequest::optimize("w1", "c1")).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.stats.seated_guests, 3);
    assert_eq!(manager.store().rows(), &[stale_row("c", "t1")]);
}

#[test]
fn test_apply_replaces_chart_rows() {
    let store = InMemoryAssignmentStore::with_rows(vec![
        stale_row("c", "t1"),
        stale_row("x", "elsewhere"),
    ]);
    let mut manager = manager(store);

    let result = manager.handle(&PlanRequest::apply("w1", "c1")).unwrap();

    let rows = manager.store().rows();
    assert_eq!(rows.len(), 1 + result.assignments.len());
    assert!(rows.contains(&stale_row("x", "elsewhere")));
    assert!(!rows.contains(&stale_row("c", "t1")));
    for assignment in &result.assignments {
        assert!(rows
            .iter()
            .any(|r| r.guest_id == assignment.guest_id && r.table_id == assignment.table_id));
    }
    assert!(!manager.store().in_transaction());
}

#[test]
fn test_apply_is_repeatable() {
    let mut manager = manager(InMemoryAssignmentStore::new());
    let first = manager.apply(&PlanRequest::apply("w1", "c1")).unwrap();
    let rows_after_first = manager.store().rows().to_vec();
    let second = manager.apply(&PlanRequest::apply("w1", "c1")).unwrap();

    assert_eq!(first, second);
    assert_eq!(manager.store().rows(), rows_after_first.as_slice());
}

#[test]
fn test_handle_dispatches_on_mode() {
    let mut manager = manager(InMemoryAssignmentStore::new());
    let request = PlanRequest {
        mode: PlanMode::Optimize,
        ..PlanRequest::apply("w1", "c1")
    };
    manager.handle(&request).unwrap();
    assert!(manager.store().rows().is_empty());
}

#[test]
fn test_failures_at_each_step_roll_back() {
    for op in [StoreOp::Begin, StoreOp::Delete, StoreOp::Insert, StoreOp::Commit] {
        let original = vec![stale_row("c", "t1")];
        let store = InMemoryAssignmentStore::with_rows(original.clone());
        let store = store.fail_on(op);
        let mut manager = manager(store);

        let err = manager.apply(&PlanRequest::apply("w1", "c1")).unwrap_err();
        match err {
            SeatPlanError::Persistence(store_err) => assert_eq!(store_err.op, op),
            other => panic!("expected persistence error, got {other:?}"),
        }
        assert_eq!(manager.store().rows(), original.as_slice());
        assert!(!manager.store().in_transaction());
    }
}

#[test]
fn test_validation_error_skips_store() {
    let source = InMemorySeatingSource::new().with_tables("c1", tables(&[4]));
    let store = InMemoryAssignmentStore::new().fail_on(StoreOp::Begin);
    let mut manager = SeatingManager::new(source, store, &SeatPlanConfig::default());

    let err = manager.apply(&PlanRequest::apply("w1", "c1")).unwrap_err();
    assert!(matches!(
        err,
        SeatPlanError::Validation(ValidationError::NoAttendingGuests)
    ));
}

#[test]
fn test_no_tables_is_validation_error() {
    let guests = vec![plain("a")];
    let source = InMemorySeatingSource::new().with_guests("w1", guests);
    let manager = SeatingManager::new(
        source,
        InMemoryAssignmentStore::new(),
        &SeatPlanConfig::default(),
    );

    let request = PlanRequest::optimize("w1", "missing");
    let err = manager.preview(&request).unwrap_err();
    assert!(matches!(err, SeatPlanError::Validation(ValidationError::NoTables)));
}

#[test]
fn test_source_errors_propagate() {
    let manager = SeatingManager::new(
        DenyingSource,
        InMemoryAssignmentStore::new(),
        &SeatPlanConfig::default(),
    );
    let request = PlanRequest::optimize("w1", "c1");
    let err = manager.preview(&request).unwrap_err();
    assert!(matches!(
        err,
        SeatPlanError::Source(SourceError::Unauthorized(_))
    ));
}

#[test]
fn test_validate_existing_after_apply_is_clean() {
    let mut manager = manager(InMemoryAssignmentStore::new());
    let applied = manager.apply(&PlanRequest::apply("w1", "c1")).unwrap();

    let checked = manager
        .validate_existing(&PlanRequest::optimize("w1", "c1"))
        .unwrap();
    assert!(checked.conflicts.is_empty());
    assert_eq!(checked.stats.seated_guests, applied.stats.seated_guests);
    assert_eq!(checked.tables, applied.tables);
}
