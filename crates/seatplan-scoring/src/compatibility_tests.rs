//! Tests for the pairwise compatibility heuristic.

use seatplan_config::ScoringWeights;
use seatplan_core::{Compatibility, Guest, Side};
use seatplan_test::guests::plain;

use super::*;

fn score(a: &Guest, b: &Guest) -> ScoreExplanation {
    CompatibilityScorer::default().score_pair(a, b)
}

#[test]
fn test_strangers_score_base() {
    let result = score(&plain("a"), &plain("b"));
    assert_eq!(result.score, Compatibility::of(50));
    assert!(result.reasons.is_empty());
}

#[test]
fn test_one_directional_preference_counts() {
    let a = plain("a").preferring("b");
    let b = plain("b");

    assert_eq!(score(&a, &b).score, Compatibility::of(80));
    assert_eq!(score(&b, &a).score, Compatibility::of(80));
    assert_eq!(
        score(&b, &a).reasons.into_vec(),
        vec![reason::PREFERRED_COMPANION]
    );
}

#[test]
fn test_mutual_preference_counts_once() {
    let a = plain("a").preferring("b");
    let b = plain("b").preferring("a");
    assert_eq!(score(&a, &b).score, Compatibility::of(80));
}

#[test]
fn test_avoidance_dominates_bonuses() {
    let a = plain("a")
        .preferring("b")
        .with_side(Side::Bride)
        .with_age_group("adult")
        .with_languages(["en"]);
    let b = plain("b")
        .avoiding("a")
        .with_side(Side::Bride)
        .with_age_group("adult")
        .with_languages(["en"]);

    // 50 + 30 - 100 + 15 + 10 + 8 = 13
    let result = score(&a, &b);
    assert_eq!(result.score, Compatibility::of(13));
    assert!(result.reasons.contains(reason::AVOID_RELATIONSHIP));

    let c = plain("c").avoiding("d");
    assert_eq!(score(&c, &plain("d")).score, Compatibility::MIN);
}

#[test]
fn test_unset_side_never_matches() {
    let a = plain("a");
    let b = plain("b");
    assert_eq!(a.side, Side::Unset);
    assert_eq!(score(&a, &b).score, Compatibility::of(50));

    let a = a.with_side(Side::Both);
    let b = b.with_side(Side::Both);
    let result = score(&a, &b);
    assert_eq!(result.score, Compatibility::of(65));
    assert_eq!(result.reasons.into_vec(), vec!["same side (both)"]);
}

#[test]
fn test_age_group_requires_both_present() {
    let a = plain("a").with_age_group("senior");
    assert_eq!(score(&a, &plain("b")).score, Compatibility::of(50));

    let b = plain("b").with_age_group("senior");
    assert_eq!(score(&a, &b).score, Compatibility::of(60));

    let c = plain("c").with_age_group("teen");
    assert_eq!(score(&a, &c).score, Compatibility::of(50));
}

#[test]
fn test_shared_tags_are_exact_matches() {
    let a = plain("a")
        .with_interests(["jazz", "hiking", "Chess"])
        .with_languages(["French", "Spanish"]);
    let b = plain("b")
        .with_interests(["hiking", "jazz", "chess"])
        .with_languages(["french", "Spanish"]);

    // two interests (+10), one language (+8)
    let result = score(&a, &b);
    assert_eq!(result.score, Compatibility::of(68));
    assert_eq!(
        result.reasons.into_vec(),
        vec!["shared interests: hiking, jazz", "shared languages: Spanish"]
    );
}

#[test]
fn test_reasons_follow_rule_order() {
    let a = plain("a")
        .preferring("b")
        .with_side(Side::Groom)
        .with_age_group("adult")
        .with_interests(["golf"])
        .with_languages(["de"]);
    let b = plain("b")
        .with_side(Side::Groom)
        .with_age_group("adult")
        .with_interests(["golf"])
        .with_languages(["de"]);

    let result = score(&a, &b);
    assert_eq!(result.score, Compatibility::MAX);
    assert_eq!(
        result.reasons.into_vec(),
        vec![
            "preferred companion",
            "same side (groom)",
            "same age group (adult)",
            "shared interests: golf",
            "shared languages: de",
        ]
    );
}

#[test]
fn test_custom_weights() {
    let scorer = CompatibilityScorer::new(ScoringWeights {
        base: 20,
        shared_language_bonus: 30,
        ..ScoringWeights::default()
    });
    let a = plain("a").with_languages(["it", "en"]);
    let b = plain("b").with_languages(["en", "it"]);
    assert_eq!(scorer.score_pair(&a, &b).score, Compatibility::of(80));
}

#[test]
fn test_extreme_weights_saturate_then_clamp() {
    let weights = ScoringWeights {
        base: i64::MAX - 10,
        prefer_bonus: 100,
        shared_interest_bonus: i64::MAX,
        ..ScoringWeights::default()
    };
    let scorer = CompatibilityScorer::new(weights);
    let a = plain("a").preferring("b").with_interests(["chess", "jazz"]);
    let b = plain("b").with_interests(["chess", "jazz"]);

    assert_eq!(scorer.score_pair(&a, &b).score, Compatibility::MAX);

    let weights = ScoringWeights {
        base: i64::MIN + 10,
        avoid_penalty: -100,
        ..ScoringWeights::default()
    };
    let scorer = CompatibilityScorer::new(weights);
    let c = plain("c").avoiding("d");
    let d = plain("d");

    assert_eq!(scorer.score_pair(&c, &d).score, Compatibility::MIN);
}
