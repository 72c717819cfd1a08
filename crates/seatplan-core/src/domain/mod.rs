//! Guest and table records as supplied by the external store.
//!
//! These types carry only what the optimizer reads. CRUD, attendance
//! filtering and ownership checks happen before they reach this crate.

mod guest;
mod ids;
mod table;


pub use guest::{Guest, Side};
pub use ids::{GuestId, TableId};
pub use table::Table;
