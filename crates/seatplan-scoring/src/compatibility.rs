//! Pairwise guest compatibility.

use seatplan_config::ScoringWeights;
use seatplan_core::{Compatibility, Guest};

use crate::reasons::{reason, Reasons};
use crate::ScoreExplanation;

/// Scores one guest against another.
///
/// Implementations must be pure: the planner relies on identical inputs
/// producing identical scores, and may call them from several threads.
pub trait PairScorer: Send + Sync {
    fn score_pair(&self, guest: &Guest, other: &Guest) -> ScoreExplanation;
}

/// Additive compatibility heuristic.
///
/// Starting from the base score, in rule order:
/// 1. either guest prefers the other
/// 2. either guest avoids the other
/// 3. both have the same recorded side
/// 4. both have the same recorded age group
/// 5. each interest present in both sets
/// 6. each language present in both sets
///
/// The sum is clamped to `0..=100`. Relationship rules use OR across both
/// directions, so a one-sided declaration counts. Tags are compared as
/// exact strings.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityScorer {
    weights: ScoringWeights,
}

impl CompatibilityScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }
}

impl PairScorer for CompatibilityScorer {
    fn score_pair(&self, guest: &Guest, other: &Guest) -> ScoreExplanation {
        let w = &self.weights;
        let mut raw = w.base;
        let mut reasons = Reasons::new();

        if guest.has_preference_with(other) {
            raw = raw.saturating_add(w.prefer_bonus);
            reasons.push(reason::PREFERRED_COMPANION);
        }

        if guest.has_avoidance_with(other) {
            raw = raw.saturating_add(w.avoid_penalty);
            reasons.push(reason::AVOID_RELATIONSHIP);
        }

        if let (Some(side), Some(other_side)) = (guest.side.known(), other.side.known()) {
            if side == other_side {
                raw = raw.saturating_add(w.same_side_bonus);
                reasons.push(format!("same side ({side})"));
            }
        }

        if let (Some(group), Some(other_group)) = (&guest.age_group, &other.age_group) {
            if group == other_group {
                raw = raw.saturating_add(w.same_age_group_bonus);
                reasons.push(format!("same age group ({group})"));
            }
        }

        let interests: Vec<&str> = guest
            .interests
            .intersection(&other.interests)
            .map(String::as_str)
            .collect();
        if !interests.is_empty() {
            let bonus = per_item(w.shared_interest_bonus, interests.len());
            raw = raw.saturating_add(bonus);
            reasons.push(format!("shared interests: {}", interests.join(", ")));
        }

        let languages: Vec<&str> = guest
            .languages
            .intersection(&other.languages)
            .map(String::as_str)
            .collect();
        if !languages.is_empty() {
            let bonus = per_item(w.shared_language_bonus, languages.len());
            raw = raw.saturating_add(bonus);
            reasons.push(format!("shared languages: {}", languages.join(", ")));
        }

        ScoreExplanation::new(Compatibility::clamped(raw), reasons)
    }
}

// Saturating so unvalidated weights still reach the clamp.
fn per_item(weight: i64, count: usize) -> i64 {
    let count = i64::try_from(count).unwrap_or(i64::MAX);
    weight.saturating_mul(count)
}
