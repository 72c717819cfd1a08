//! Per-table occupant lists for one run.
//!
//! A [`Seating`] is created empty by the planner and discarded with the run,
//! or rebuilt from stored rows when re-validating an existing chart.

use std::collections::HashMap;

use seatplan_core::{AssignmentRow, Guest, GuestId, Table, TableId, TableSeating};
use tracing::debug;

/// One table and the guests seated at it, in seating order.
#[derive(Debug, Clone)]
pub struct TableOccupancy<'g> {
    pub table: &'g Table,
    pub occupants: Vec<&'g Guest>,
}

impl<'g> TableOccupancy<'g> {
    pub fn has_room(&self) -> bool {
        self.occupants.len() < self.table.capacity
    }

    /// True if any occupant avoids `guest` or is avoided by it.
    pub fn excludes(&self, guest: &Guest) -> bool {
        self.occupants.iter().any(|o| o.has_avoidance_with(guest))
    }

    /// Occupants other than `guest`.
    pub fn others<'s>(&'s self, guest: &'s GuestId) -> impl Iterator<Item = &'g Guest> + 's {
        self.occupants
            .iter()
            .copied()
            .filter(move |o| &o.id != guest)
    }
}

/// Mapping from table, in input order, to its occupants.
#[derive(Debug, Clone)]
pub struct Seating<'g> {
    tables: Vec<TableOccupancy<'g>>,
}

impl<'g> Seating<'g> {
    /// All tables, nobody seated.
    pub fn empty(tables: &'g [Table]) -> Self {
        Self {
            tables: tables
                .iter()
                .map(|table| TableOccupancy {
                    table,
                    occupants: Vec::new(),
                })
                .collect(),
        }
    }

    /// Rebuilds a seating from persisted rows.
    ///
    /// Rows naming a guest or table not in the inputs are skipped. Capacity
    /// and avoid relationships are not enforced: stored data may already
    /// violate both, and the conflict detector is expected to report it.
    pub fn from_rows(guests: &'g [Guest], tables: &'g [Table], rows: &[AssignmentRow]) -> Self {
        let mut seating = Self::empty(tables);
        let by_id: HashMap<&GuestId, &'g Guest> = guests.iter().map(|g| (&g.id, g)).collect();
        let mut seen: Vec<&GuestId> = Vec::new();

        for row in rows {
            let Some(guest) = by_id.get(&row.guest_id).copied() else {
                debug!(event = "row_skipped", guest_id = %row.guest_id, "unknown guest");
                continue;
            };
            if seen.contains(&&guest.id) {
                debug!(event = "row_skipped", guest_id = %row.guest_id, "guest already seated");
                continue;
            }
            let Some(index) = seating.position(&row.table_id) else {
                debug!(event = "row_skipped", table_id = %row.table_id, "unknown table");
                continue;
            };
            seen.push(&guest.id);
            seating.seat(index, guest);
        }

        seating
    }

    pub fn seat(&mut self, index: usize, guest: &'g Guest) {
        self.tables[index].occupants.push(guest);
    }

    pub fn tables(&self) -> &[TableOccupancy<'g>] {
        &self.tables
    }

    pub fn position(&self, table_id: &TableId) -> Option<usize> {
        self.tables.iter().position(|t| &t.table.id == table_id)
    }

    pub fn table(&self, table_id: &TableId) -> Option<&TableOccupancy<'g>> {
        self.tables.iter().find(|t| &t.table.id == table_id)
    }

    pub fn seated_count(&self) -> usize {
        self.tables.iter().map(|t| t.occupants.len()).sum()
    }

    /// Owned view for the result.
    pub fn to_table_seatings(&self) -> Vec<TableSeating> {
        self.tables
            .iter()
            .map(|t| TableSeating {
                table_id: t.table.id.clone(),
                table_number: t.table.table_number,
                capacity: t.table.capacity,
                guest_ids: t.occupants.iter().map(|g| g.id.clone()).collect(),
            })
            .collect()
    }
}
