//! Loading guests and tables from the external store.

use std::collections::HashMap;

use seatplan_core::{Guest, SourceError, Table};

/// Supplies planning input.
///
/// Implementations own attendance filtering and ownership checks: only
/// attending guests are returned, and a caller that does not own the
/// wedding plan is rejected with [`SourceError::Unauthorized`].
pub trait SeatingSource {
    fn attending_guests(&self, wedding_plan_id: &str) -> Result<Vec<Guest>, SourceError>;

    fn chart_tables(&self, seating_chart_id: &str) -> Result<Vec<Table>, SourceError>;
}

impl<T: SeatingSource + ?Sized> SeatingSource for &T {
    fn attending_guests(&self, wedding_plan_id: &str) -> Result<Vec<Guest>, SourceError> {
        (**self).attending_guests(wedding_plan_id)
    }

    fn chart_tables(&self, seating_chart_id: &str) -> Result<Vec<Table>, SourceError> {
        (**self).chart_tables(seating_chart_id)
    }
}

/// Source backed by maps, keyed by wedding plan and chart id.
///
/// Unknown ids yield empty lists.
#[derive(Debug, Clone, Default)]
pub struct InMemorySeatingSource {
    guests: HashMap<String, Vec<Guest>>,
    tables: HashMap<String, Vec<Table>>,
}

impl InMemorySeatingSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guests(mut self, wedding_plan_id: impl Into<String>, guests: Vec<Guest>) -> Self {
        self.guests.insert(wedding_plan_id.into(), guests);
        self
    }

    pub fn with_tables(mut self, seating_chart_id: impl Into<String>, tables: Vec<Table>) -> Self {
        self.tables.insert(seating_chart_id.into(), tables);
        self
    }
}

impl SeatingSource for InMemorySeatingSource {
    fn attending_guests(&self, wedding_plan_id: &str) -> Result<Vec<Guest>, SourceError> {
        Ok(self.guests.get(wedding_plan_id).cloned().unwrap_or_default())
    }

    fn chart_tables(&self, seating_chart_id: &str) -> Result<Vec<Table>, SourceError> {
        Ok(self.tables.get(seating_chart_id).cloned().unwrap_or_default())
    }
}
