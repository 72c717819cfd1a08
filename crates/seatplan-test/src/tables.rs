//! Table constructors.

use seatplan_core::Table;

/// Tables `t1..tn` with the given capacities, numbered from 1.
pub fn tables(capacities: &[usize]) -> Vec<Table> {
    capacities
        .iter()
        .enumerate()
        .map(|(i, &capacity)| Table::new(format!("t{}", i + 1), i as u32 + 1, capacity))
        .collect()
}
