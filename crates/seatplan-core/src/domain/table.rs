use serde::{Deserialize, Serialize};

use super::TableId;

/// A table in a seating chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    /// Display label only.
    pub table_number: u32,
    pub capacity: usize,
}

impl Table {
    pub fn new(id: impl Into<TableId>, table_number: u32, capacity: usize) -> Self {
        Self {
            id: id.into(),
            table_number,
            capacity,
        }
    }
}
