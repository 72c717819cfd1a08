//! Compatibility - the bounded seating score

use std::fmt;

use serde::{Deserialize, Serialize};

/// A compatibility score clamped to `0..=100`.
///
/// Higher is better. Scores are produced additively and clamped once at
/// the end, so intermediate sums may leave the range.
///
/// # Examples
///
/// ```
/// use seatplan_core::Compatibility;
///
/// assert_eq!(Compatibility::clamped(135).value(), 100);
/// assert_eq!(Compatibility::clamped(-20).value(), 0);
/// assert!(Compatibility::of(80) > Compatibility::NEUTRAL);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Compatibility(u8);

impl Compatibility {
    pub const MIN: Compatibility = Compatibility(0);
    pub const MAX: Compatibility = Compatibility(100);

    /// Score for a guest with no reason to prefer or avoid a seat.
    pub const NEUTRAL: Compatibility = Compatibility(50);

    /// Creates a score, saturating at 100.
    #[inline]
    pub const fn of(value: u8) -> Self {
        if value > 100 {
            Compatibility(100)
        } else {
            Compatibility(value)
        }
    }

    /// Clamps a raw additive sum into range.
    #[inline]
    pub fn clamped(raw: i64) -> Self {
        Compatibility(raw.clamp(0, 100) as u8)
    }

    /// Rounded mean of the given scores, or `None` when empty.
    pub fn mean<I>(scores: I) -> Option<Self>
    where
        I: IntoIterator<Item = Compatibility>,
    {
        let mut sum = 0u64;
        let mut count = 0u64;
        for score in scores {
            sum += score.0 as u64;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        let avg = (sum as f64 / count as f64).round() as i64;
        Some(Compatibility::clamped(avg))
    }

    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Compatibility {
    fn default() -> Self {
        Compatibility::NEUTRAL
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
