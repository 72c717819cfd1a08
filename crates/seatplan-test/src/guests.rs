//! Guest constructors.
//!
//! # Example
//!
//! ```
//! use seatplan_test::guests::{plain, mutual_avoiders};
//!
//! let g = plain("g1");
//! assert_eq!(g.full_name, "Guest g1");
//!
//! let (a, b) = mutual_avoiders("a", "b");
//! assert!(a.has_avoidance_with(&b));
//! ```

use seatplan_core::Guest;

/// A guest with no attributes, named after its id.
pub fn plain(id: &str) -> Guest {
    Guest::new(id, format!("Guest {id}"))
}

/// Two guests that each prefer the other.
pub fn mutual_friends(a: &str, b: &str) -> (Guest, Guest) {
    (plain(a).preferring(b), plain(b).preferring(a))
}

/// Two guests that each avoid the other.
pub fn mutual_avoiders(a: &str, b: &str) -> (Guest, Guest) {
    (plain(a).avoiding(b), plain(b).avoiding(a))
}
