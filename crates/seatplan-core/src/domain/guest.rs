//! Guest record and relationship queries.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::GuestId;

/// Which side of the couple a guest belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Groom,
    Bride,
    Both,
    /// Not recorded. Never matches anything, including another `Unset`.
    #[default]
    Unset,
}

impl Side {
    /// Returns the side if it was recorded.
    pub fn known(self) -> Option<Side> {
        match self {
            Side::Unset => None,
            side => Some(side),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Groom => "groom",
            Side::Bride => "bride",
            Side::Both => "both",
            Side::Unset => "unset",
        };
        f.write_str(name)
    }
}

/// An attending guest.
///
/// `prefer_guests` and `avoid_guests` are authored by this guest and are not
/// guaranteed to be mirrored by the other side; every relationship check
/// looks in both directions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,
    pub full_name: String,
    #[serde(default)]
    pub side: Side,
    #[serde(default)]
    pub age_group: Option<String>,
    #[serde(default)]
    pub interests: BTreeSet<String>,
    #[serde(default)]
    pub languages: BTreeSet<String>,
    #[serde(default)]
    pub prefer_guests: Vec<GuestId>,
    #[serde(default)]
    pub avoid_guests: Vec<GuestId>,
    /// Carried through for display; never scored.
    #[serde(default)]
    pub dietary_restrictions: Option<String>,
}

impl Guest {
    /// Creates a guest with no attributes or relationships.
    pub fn new(id: impl Into<GuestId>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            side: Side::Unset,
            age_group: None,
            interests: BTreeSet::new(),
            languages: BTreeSet::new(),
            prefer_guests: Vec::new(),
            avoid_guests: Vec::new(),
            dietary_restrictions: None,
        }
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn with_age_group(mut self, age_group: impl Into<String>) -> Self {
        self.age_group = Some(age_group.into());
        self
    }

    pub fn with_interests<I, T>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.interests.extend(interests.into_iter().map(Into::into));
        self
    }

    pub fn with_languages<I, T>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.languages.extend(languages.into_iter().map(Into::into));
        self
    }

    /// Adds a guest this guest wants to sit near.
    pub fn preferring(mut self, other: impl Into<GuestId>) -> Self {
        self.prefer_guests.push(other.into());
        self
    }

    /// Adds a guest this guest does not want to sit near.
    pub fn avoiding(mut self, other: impl Into<GuestId>) -> Self {
        self.avoid_guests.push(other.into());
        self
    }

    /// Number of declared relationships; planning order key.
    pub fn constraint_count(&self) -> usize {
        self.prefer_guests.len() + self.avoid_guests.len()
    }

    pub fn prefers(&self, other: &GuestId) -> bool {
        self.prefer_guests.contains(other)
    }

    pub fn avoids(&self, other: &GuestId) -> bool {
        self.avoid_guests.contains(other)
    }

    /// True if either guest lists the other as preferred.
    pub fn has_preference_with(&self, other: &Guest) -> bool {
        self.prefers(&other.id) || other.prefers(&self.id)
    }

    /// True if either guest lists the other as avoided.
    pub fn has_avoidance_with(&self, other: &Guest) -> bool {
        self.avoids(&other.id) || other.avoids(&self.id)
    }
}
