//! Ordered, duplicate-free reason lists.

use smallvec::SmallVec;

/// Fixed reason texts.
pub mod reason {
    pub const PREFERRED_COMPANION: &str = "preferred companion";
    pub const AVOID_RELATIONSHIP: &str = "avoid relationship";
    pub const FIRST_GUEST: &str = "first guest at table";
}

/// Reasons in the order they were first recorded.
///
/// A pair triggers at most six rules, so the inline capacity covers the
/// common case without allocating the list itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reasons {
    items: SmallVec<[String; 6]>,
}

impl Reasons {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a reason unless an equal one is already present.
    pub fn push(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        if !self.items.contains(&reason) {
            self.items.push(reason);
        }
    }

    /// Appends every reason of `other` not already present.
    pub fn extend_from(&mut self, other: &Reasons) {
        for reason in &other.items {
            if !self.items.contains(reason) {
                self.items.push(reason.clone());
            }
        }
    }

    /// Keeps at most `max` reasons, dropping the latest ones.
    pub fn truncate(&mut self, max: usize) {
        self.items.truncate(max);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, reason: &str) -> bool {
        self.items.iter().any(|r| r == reason)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items.into_vec()
    }
}

impl<S: Into<String>> FromIterator<S> for Reasons {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut reasons = Reasons::new();
        for reason in iter {
            reasons.push(reason);
        }
        reasons
    }
}
