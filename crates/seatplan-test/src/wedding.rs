//! A realistic guest list.
//!
//! Twenty guests across both families with overlapping interests,
//! languages, preferences, a feuding pair and a one-sided avoidance,
//! seated at three tables of eight.

use seatplan_core::{Guest, Side, Table};

use crate::tables::tables;

pub struct Wedding {
    pub guests: Vec<Guest>,
    pub tables: Vec<Table>,
}

impl Wedding {
    pub fn new() -> Self {
        Self {
            guests: guests(),
            tables: tables(&[8, 8, 8]),
        }
    }

    /// Same guests with fewer seats than guests.
    pub fn overbooked() -> Self {
        Self {
            guests: guests(),
            tables: tables(&[6, 6]),
        }
    }
}

impl Default for Wedding {
    fn default() -> Self {
        Self::new()
    }
}

fn guests() -> Vec<Guest> {
    vec![
        Guest::new("g01", "Maria Lopez")
            .with_side(Side::Bride)
            .with_age_group("adult")
            .with_languages(["es", "en"])
            .with_interests(["salsa", "cooking"])
            .preferring("g02")
            .preferring("g03"),
        Guest::new("g02", "Carlos Lopez")
            .with_side(Side::Bride)
            .with_age_group("adult")
            .with_languages(["es", "en"])
            .with_interests(["football"])
            .preferring("g01")
            .avoiding("g11"),
        Guest::new("g03", "Lucia Fernandez")
            .with_side(Side::Bride)
            .with_age_group("senior")
            .with_languages(["es"])
            .with_interests(["cooking", "gardening"]),
        Guest::new("g04", "Ana Fernandez")
            .with_side(Side::Bride)
            .with_age_group("child")
            .with_languages(["es", "en"])
            .preferring("g05"),
        Guest::new("g05", "Pablo Fernandez")
            .with_side(Side::Bride)
            .with_age_group("child")
            .with_languages(["es", "en"]),
        Guest::new("g06", "Sofia Ruiz")
            .with_side(Side::Bride)
            .with_age_group("adult")
            .with_languages(["en"])
            .with_interests(["yoga", "travel"])
            .preferring("g13"),
        Guest::new("g07", "Diego Ruiz")
            .with_side(Side::Bride)
            .with_age_group("adult")
            .with_languages(["en", "es"])
            .with_interests(["football", "travel"]),
        Guest::new("g08", "Elena Garcia")
            .with_side(Side::Both)
            .with_age_group("adult")
            .with_languages(["en", "fr"])
            .with_interests(["yoga", "jazz"]),
        Guest::new("g09", "Tom Becker")
            .with_side(Side::Groom)
            .with_age_group("adult")
            .with_languages(["en", "de"])
            .with_interests(["football", "jazz"])
            .preferring("g10")
            .avoiding("g12"),
        Guest::new("g10", "Jana Becker")
            .with_side(Side::Groom)
            .with_age_group("adult")
            .with_languages(["en", "de"])
            .with_interests(["travel"])
            .preferring("g09"),
        Guest::new("g11", "Frank Becker")
            .with_side(Side::Groom)
            .with_age_group("senior")
            .with_languages(["de"])
            .with_interests(["gardening", "chess"])
            .avoiding("g02"),
        Guest::new("g12", "Uwe Becker")
            .with_side(Side::Groom)
            .with_age_group("senior")
            .with_languages(["de"])
            .with_interests(["chess"])
            .avoiding("g09"),
        Guest::new("g13", "Lena Schmidt")
            .with_side(Side::Groom)
            .with_age_group("adult")
            .with_languages(["en", "de"])
            .with_interests(["yoga"]),
        Guest::new("g14", "Max Schmidt")
            .with_side(Side::Groom)
            .with_age_group("teen")
            .with_languages(["de", "en"])
            .with_interests(["gaming"])
            .preferring("g15"),
        Guest::new("g15", "Nora Schmidt")
            .with_side(Side::Groom)
            .with_age_group("teen")
            .with_languages(["de", "en"])
            .with_interests(["gaming", "music"]),
        Guest::new("g16", "Olivier Martin")
            .with_side(Side::Groom)
            .with_age_group("adult")
            .with_languages(["fr", "en"])
            .with_interests(["jazz", "wine"])
            .preferring("g08"),
        Guest::new("g17", "Claire Martin")
            .with_side(Side::Groom)
            .with_age_group("adult")
            .with_languages(["fr"])
            .with_interests(["wine"]),
        Guest::new("g18", "Sam Taylor")
            .with_side(Side::Both)
            .with_age_group("adult")
            .with_languages(["en"])
            .with_interests(["travel", "music"])
            .avoiding("g06"),
        Guest::new("g19", "Priya Patel")
            .with_age_group("adult")
            .with_languages(["en", "hi"])
            .with_interests(["yoga", "cooking"]),
        Guest::new("g20", "Kenji Sato")
            .with_languages(["en", "ja"])
            .with_interests(["music"]),
    ]
}
