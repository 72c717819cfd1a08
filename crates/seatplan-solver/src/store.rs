//! Persistence of assignment rows.
//!
//! Apply replaces a chart's rows as a unit: the manager opens a
//! transaction, deletes the rows of every table in the chart, inserts the
//! new rows and commits. Any failure triggers a rollback. Atomicity is the
//! store's guarantee; the manager only drives the sequence.

use seatplan_core::{AssignmentRow, StoreError, StoreOp, TableId};

/// Transactional store of assignment rows.
///
/// At most one transaction is open at a time. Serializing concurrent
/// applies to the same chart is the store's or the caller's concern.
pub trait AssignmentStore {
    /// Opens a transaction.
    fn begin(&mut self) -> Result<(), StoreError>;

    /// Deletes every row for the given tables. Returns the number deleted.
    fn delete_for_tables(&mut self, table_ids: &[TableId]) -> Result<usize, StoreError>;

    fn insert(&mut self, rows: &[AssignmentRow]) -> Result<(), StoreError>;

    fn commit(&mut self) -> Result<(), StoreError>;

    /// Discards everything since [`begin`](Self::begin). No-op without an
    /// open transaction.
    fn rollback(&mut self);

    /// Committed rows for the given tables.
    fn assignments_for_tables(&self, table_ids: &[TableId])
        -> Result<Vec<AssignmentRow>, StoreError>;
}

/// Vec-backed store with snapshot transactions.
///
/// `fail_on` injects a failure at one operation. An injected insert failure
/// writes the first row before failing, so a missing rollback would leave
/// a visibly half-written chart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssignmentStore {
    rows: Vec<AssignmentRow>,
    snapshot: Option<Vec<AssignmentRow>>,
    fail_on: Option<StoreOp>,
}

impl InMemoryAssignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<AssignmentRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Makes `op` fail from now on.
    pub fn fail_on(mut self, op: StoreOp) -> Self {
        self.fail_on = Some(op);
        self
    }

    pub fn clear_failure(&mut self) {
        self.fail_on = None;
    }

    /// All rows, including uncommitted ones.
    pub fn rows(&self) -> &[AssignmentRow] {
        &self.rows
    }

    pub fn in_transaction(&self) -> bool {
        self.snapshot.is_some()
    }

    fn check(&self, op: StoreOp) -> Result<(), StoreError> {
        if self.fail_on == Some(op) {
            return Err(StoreError::new(op, "injected failure"));
        }
        if op != StoreOp::Begin && op != StoreOp::Load && self.snapshot.is_none() {
            return Err(StoreError::new(op, "no open transaction"));
        }
        Ok(())
    }
}

impl AssignmentStore for InMemoryAssignmentStore {
    fn begin(&mut self) -> Result<(), StoreError> {
        self.check(StoreOp::Begin)?;
        if self.snapshot.is_some() {
            return Err(StoreError::new(StoreOp::Begin, "transaction already open"));
        }
        self.snapshot = Some(self.rows.clone());
        Ok(())
    }

    fn delete_for_tables(&mut self, table_ids: &[TableId]) -> Result<usize, StoreError> {
        self.check(StoreOp::Delete)?;
        let before = self.rows.len();
        self.rows.retain(|row| !table_ids.contains(&row.table_id));
        Ok(before - self.rows.len())
    }

    fn insert(&mut self, rows: &[AssignmentRow]) -> Result<(), StoreError> {
        if let Err(err) = self.check(StoreOp::Insert) {
            if self.snapshot.is_some() {
                self.rows.extend(rows.first().cloned());
            }
            return Err(err);
        }
        self.rows.extend_from_slice(rows);
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.check(StoreOp::Commit)?;
        self.snapshot = None;
        Ok(())
    }

    fn rollback(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.rows = snapshot;
        }
    }

    fn assignments_for_tables(
        &self,
        table_ids: &[TableId],
    ) -> Result<Vec<AssignmentRow>, StoreError> {
        self.check(StoreOp::Load)?;
        let committed = self.snapshot.as_ref().unwrap_or(&self.rows);
        Ok(committed
            .iter()
            .filter(|row| table_ids.contains(&row.table_id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatplan_core::{Compatibility, GuestId};

    fn row(guest: &str, table: &str) -> AssignmentRow {
        AssignmentRow {
            guest_id: GuestId::from(guest),
            table_id: TableId::from(table),
            seating_chart_id: "c1".to_string(),
            score: Compatibility::NEUTRAL,
        }
    }

    #[test]
    fn test_replace_and_commit() {
        let mut store = InMemoryAssignmentStore::with_rows(vec![
            row("a", "t1"),
            row("b", "t2"),
            row("z", "other"),
        ]);

        store.begin().unwrap();
        let deleted = store
            .delete_for_tables(&[TableId::from("t1"), TableId::from("t2")])
            .unwrap();
        assert_eq!(deleted, 2);
        store.insert(&[row("c", "t1")]).unwrap();
        store.commit().unwrap();

        assert_eq!(store.rows(), &[row("z", "other"), row("c", "t1")]);
        assert!(!store.in_transaction());
    }

    #[test]
    fn test_rollback_restores_snapshot() {
        let original = vec![row("a", "t1")];
        let mut store = InMemoryAssignmentStore::with_rows(original.clone());

        store.begin().unwrap();
        store.delete_for_tables(&[TableId::from("t1")]).unwrap();
        store.insert(&[row("b", "t1")]).unwrap();
        store.rollback();

        assert_eq!(store.rows(), original.as_slice());
    }

    #[test]
    fn test_injected_insert_failure_writes_partially() {
        let mut store = InMemoryAssignmentStore::new().fail_on(StoreOp::Insert);
        store.begin().unwrap();

        let err = store.insert(&[row("a", "t1"), row("b", "t1")]).unwrap_err();
        assert_eq!(err.op, StoreOp::Insert);
        assert_eq!(store.rows().len(), 1);

        store.rollback();
        assert!(store.rows().is_empty());
    }

    #[test]
    fn test_writes_require_transaction() {
        let mut store = InMemoryAssignmentStore::new();
        assert!(store.delete_for_tables(&[]).is_err());
        assert!(store.insert(&[]).is_err());
        assert!(store.commit().is_err());
    }

    #[test]
    fn test_loads_see_committed_rows_only() {
        let mut store = InMemoryAssignmentStore::with_rows(vec![row("a", "t1")]);
        store.begin().unwrap();
        store.insert(&[row("b", "t1")]).unwrap();

        let t1 = [TableId::from("t1")];
        let loaded = store.assignments_for_tables(&t1).unwrap();
        assert_eq!(loaded, vec![row("a", "t1")]);
    }
}
