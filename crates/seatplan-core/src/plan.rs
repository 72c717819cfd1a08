//! Planning requests and derived results.
//!
//! Everything here lives for a single planning run. Only [`AssignmentRow`]
//! is handed to the store, and only in apply mode.

use serde::{Deserialize, Serialize};

use crate::domain::{GuestId, TableId};
use crate::score::Compatibility;

/// Whether a run only computes or also persists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanMode {
    /// Compute and return; no side effects.
    #[default]
    Optimize,
    /// Compute, then replace the chart's stored assignments.
    Apply,
}

impl PlanMode {
    pub fn is_apply(self) -> bool {
        matches!(self, PlanMode::Apply)
    }
}

/// A request to plan one seating chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub wedding_plan_id: String,
    pub seating_chart_id: String,
    #[serde(default)]
    pub mode: PlanMode,
}

impl PlanRequest {
    pub fn optimize(
        wedding_plan_id: impl Into<String>,
        seating_chart_id: impl Into<String>,
    ) -> Self {
        Self {
            wedding_plan_id: wedding_plan_id.into(),
            seating_chart_id: seating_chart_id.into(),
            mode: PlanMode::Optimize,
        }
    }

    pub fn apply(
        wedding_plan_id: impl Into<String>,
        seating_chart_id: impl Into<String>,
    ) -> Self {
        Self {
            mode: PlanMode::Apply,
            ..Self::optimize(wedding_plan_id, seating_chart_id)
        }
    }
}

/// One guest placed at one table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub guest_id: GuestId,
    pub table_id: TableId,
    /// Table-aggregate compatibility at the moment of placement.
    pub score: Compatibility,
    /// Contributing factors, deduplicated and capped.
    pub reasons: Vec<String>,
}

/// Two guests sharing a table despite an avoid relationship.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    #[serde(rename = "guest1")]
    pub guest1_name: String,
    #[serde(rename = "guest2")]
    pub guest2_name: String,
    pub reason: String,
    pub table_id: TableId,
}

/// Summary metrics of a planning run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeatingStats {
    pub total_guests: usize,
    pub seated_guests: usize,
    pub conflict_count: usize,
    /// Seated guests sharing a table with someone they prefer, or who prefers them.
    pub preference_matches: usize,
    /// Mean assignment score; 0.0 when nobody is seated.
    pub average_compatibility: f64,
}

impl SeatingStats {
    pub fn unseated_guests(&self) -> usize {
        self.total_guests.saturating_sub(self.seated_guests)
    }
}

/// Final occupants of one table, in seating order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSeating {
    pub table_id: TableId,
    pub table_number: u32,
    pub capacity: usize,
    pub guest_ids: Vec<GuestId>,
}

impl TableSeating {
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.guest_ids.len())
    }
}

/// Outcome of a planning run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    pub assignments: Vec<Assignment>,
    pub conflicts: Vec<Conflict>,
    pub stats: SeatingStats,
    /// Guests no table could take, in planning order.
    #[serde(default)]
    pub unseated: Vec<GuestId>,
    #[serde(default)]
    pub tables: Vec<TableSeating>,
}

impl PlanResult {
    /// Rows to persist for the given chart.
    pub fn to_rows(&self, seating_chart_id: &str) -> Vec<AssignmentRow> {
        self.assignments
            .iter()
            .map(|a| AssignmentRow {
                guest_id: a.guest_id.clone(),
                table_id: a.table_id.clone(),
                seating_chart_id: seating_chart_id.to_string(),
                score: a.score,
            })
            .collect()
    }
}

/// A persisted assignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub guest_id: GuestId,
    pub table_id: TableId,
    pub seating_chart_id: String,
    pub score: Compatibility,
}
