use proptest::prelude::*;
use stackshift::detect::signals::clamp_confidence;
use stackshift::phases::duration::estimate_total;
use stackshift::{ComplexityLevel, ComplexityTier};

proptest! {
    #[test]
    fn confidence_clamp_stays_in_bounds(raw in -1_000_000.0f64..1_000_000.0) {
        let clamped = clamp_confidence(raw);
        prop_assert!((0.0..=100.0).contains(&clamped));
    }

    #[test]
    fn confidence_clamp_is_monotonic(a in -1_000.0f64..1_000.0, b in -1_000.0f64..1_000.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(clamp_confidence(low) <= clamp_confidence(high));
    }

    #[test]
    fn ratio_tiers_match_the_documented_thresholds(
        total in 1usize..500,
        incompatible_seed in 0usize..500,
    ) {
        let incompatible = incompatible_seed % (total + 1);
        let tier = ComplexityTier::from_ratio(incompatible, total);
        let ratio = incompatible as f64 / total as f64;
        let expected = if ratio > 0.5 {
            ComplexityTier::High
        } else if ratio > 0.2 {
            ComplexityTier::Medium
        } else {
            ComplexityTier::Low
        };
        prop_assert_eq!(tier, expected);
    }

    #[test]
    fn level_bucketing_matches_thresholds(score in 0.0f64..=100.0) {
        let level = ComplexityLevel::from_score(score);
        let expected = if score < 30.0 {
            ComplexityLevel::Low
        } else if score < 60.0 {
            ComplexityLevel::Medium
        } else if score < 80.0 {
            ComplexityLevel::High
        } else {
            ComplexityLevel::Critical
        };
        prop_assert_eq!(level, expected);
    }

    #[test]
    fn duration_estimates_always_carry_a_unit(
        score in 0.0f64..=100.0,
        days_low in 1u8..10,
        days_spread in 0u8..10,
    ) {
        let duration = format!("{}-{} days", days_low, days_low as u16 + days_spread as u16);
        let estimate = estimate_total(&[duration.as_str()], score);
        prop_assert!(
            estimate.ends_with("days") || estimate.ends_with("weeks") || estimate.ends_with("months")
        );
    }
}
