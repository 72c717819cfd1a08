//! Preview and apply orchestration.
//!
//! [`SeatingManager`] loads input from a [`SeatingSource`], runs the
//! [`SeatingOptimizer`] and, in apply mode, replaces the chart's stored
//! rows through an [`AssignmentStore`] transaction.
//!
//! Failure semantics:
//! - validation errors return before any computation
//! - the computation itself cannot fail
//! - a persistence failure rolls the transaction back and aborts the
//!   apply; the caller must re-request to retry

#[cfg(test)]
mod tests;

use seatplan_config::SeatPlanConfig;
use seatplan_core::{
    AssignmentRow, Guest, PlanRequest, PlanResult, Result, StoreError, Table, TableId,
};
use seatplan_scoring::{CompatibilityScorer, PairScorer};
use tracing::{debug, info, warn};

use crate::optimizer::{validate_input, SeatingOptimizer};
use crate::source::SeatingSource;
use crate::store::AssignmentStore;

/// Runs planning requests against external collaborators.
///
/// Apply takes `&mut self`, so one manager never runs two applies at once.
/// Applies to the same chart through different managers must be
/// serialized by the store.
///
/// # Type Parameters
/// * `Src` - Guest and table loader
/// * `St` - Assignment store
/// * `P` - Pair scorer
pub struct SeatingManager<Src, St, P = CompatibilityScorer> {
    source: Src,
    store: St,
    optimizer: SeatingOptimizer<P>,
}

impl<Src, St> SeatingManager<Src, St, CompatibilityScorer>
where
    Src: SeatingSource,
    St: AssignmentStore,
{
    pub fn new(source: Src, store: St, config: &SeatPlanConfig) -> Self {
        Self::with_optimizer(source, store, SeatingOptimizer::from_config(config))
    }
}

impl<Src, St, P> SeatingManager<Src, St, P>
where
    Src: SeatingSource,
    St: AssignmentStore,
    P: PairScorer,
{
    pub fn with_optimizer(source: Src, store: St, optimizer: SeatingOptimizer<P>) -> Self {
        Self {
            source,
            store,
            optimizer,
        }
    }

    pub fn source(&self) -> &Src {
        &self.source
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut St {
        &mut self.store
    }

    /// Dispatches on [`PlanRequest::mode`].
    pub fn handle(&mut self, request: &PlanRequest) -> Result<PlanResult> {
        if request.mode.is_apply() {
            self.apply(request)
        } else {
            self.preview(request)
        }
    }

    /// Computes a seating without side effects.
    pub fn preview(&self, request: &PlanRequest) -> Result<PlanResult> {
        let (guests, tables) = self.load(request)?;
        Ok(self.optimizer.optimize(&guests, &tables)?)
    }

    /// Computes a seating and replaces the chart's stored assignments.
    ///
    /// On success the store holds exactly the returned assignments for the
    /// chart's tables. On failure nothing was committed.
    pub fn apply(&mut self, request: &PlanRequest) -> Result<PlanResult> {
        let result = self.preview(request)?;

        let table_ids: Vec<TableId> = result.tables.iter().map(|t| t.table_id.clone()).collect();
        let rows = result.to_rows(&request.seating_chart_id);

        info!(
            event = "apply_start",
            seating_chart_id = %request.seating_chart_id,
            tables = table_ids.len() as u64,
            rows = rows.len() as u64,
        );

        if let Err(err) = self.replace(&table_ids, &rows) {
            warn!(
                event = "apply_failed",
                seating_chart_id = %request.seating_chart_id,
                error = %err,
            );
            return Err(err.into());
        }

        info!(
            event = "apply_end",
            seating_chart_id = %request.seating_chart_id,
            rows = rows.len() as u64,
        );
        Ok(result)
    }

    /// Re-checks the assignments currently stored for the chart.
    ///
    /// Surfaces conflicts in seatings the planner did not produce, such as
    /// manual edits. Read-only.
    pub fn validate_existing(&self, request: &PlanRequest) -> Result<PlanResult> {
        let (guests, tables) = self.load(request)?;
        validate_input(&guests, &tables)?;

        let table_ids: Vec<TableId> = tables.iter().map(|t| t.id.clone()).collect();
        let rows = self.store.assignments_for_tables(&table_ids)?;
        debug!(
            event = "existing_loaded",
            seating_chart_id = %request.seating_chart_id,
            rows = rows.len() as u64,
        );

        Ok(self.optimizer.evaluate_existing(&guests, &tables, &rows)?)
    }

    fn load(&self, request: &PlanRequest) -> Result<(Vec<Guest>, Vec<Table>)> {
        let guests = self.source.attending_guests(&request.wedding_plan_id)?;
        let tables = self.source.chart_tables(&request.seating_chart_id)?;
        Ok((guests, tables))
    }

    // begin -> delete -> insert -> commit, rolling back on any failure
    // after begin.
    fn replace(
        &mut self,
        table_ids: &[TableId],
        rows: &[AssignmentRow],
    ) -> std::result::Result<(), StoreError> {
        self.store.begin()?;

        let outcome = self
            .store
            .delete_for_tables(table_ids)
            .and_then(|deleted| {
                debug!(event = "rows_deleted", rows = deleted as u64);
                self.store.insert(rows)
            })
            .and_then(|()| self.store.commit());

        if let Err(err) = outcome {
            self.store.rollback();
            debug!(event = "rolled_back", op = %err.op);
            return Err(err);
        }
        Ok(())
    }
}
