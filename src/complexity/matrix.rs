//! Framework distance matrix.
//!
//! Distance expresses how far apart two frameworks are on a 0-10 scale.
//! Unmapped pairs default to 7: an unknown combination is assumed
//! moderately hard rather than free, which biases the overall score toward
//! caution.

/// Distance assumed for a pair with no explicit entry.
pub const DEFAULT_DISTANCE: f64 = 7.0;

/// Distance for migrating within the same framework (version upgrades,
/// variant adoption).
pub const SAME_FRAMEWORK_DISTANCE: f64 = 1.0;

const DISTANCES: &[(&str, &str, f64)] = &[
    ("react", "vue", 6.0),
    ("vue", "react", 6.0),
    ("react", "angular", 8.0),
    ("angular", "react", 8.0),
    ("vue", "angular", 8.0),
    ("angular", "vue", 8.0),
    ("react", "svelte", 6.0),
    ("svelte", "react", 6.0),
    ("react", "next.js", 3.0),
    ("vue", "nuxt", 3.0),
    ("svelte", "sveltekit", 3.0),
    ("express", "nestjs", 5.0),
    ("nestjs", "express", 5.0),
    ("express", "fastify", 3.0),
    ("fastify", "express", 3.0),
    ("django", "fastapi", 5.0),
    ("fastapi", "django", 6.0),
    ("flask", "fastapi", 4.0),
    ("flask", "django", 6.0),
    ("django", "flask", 6.0),
];

/// Look up the distance for a (source, target) pair, case-insensitive.
pub fn framework_distance(source: &str, target: &str) -> f64 {
    let source = source.to_lowercase();
    let target = target.to_lowercase();
    if source == target {
        return SAME_FRAMEWORK_DISTANCE;
    }
    DISTANCES
        .iter()
        .find(|(s, t, _)| *s == source && *t == target)
        .map(|(_, _, d)| *d)
        .unwrap_or(DEFAULT_DISTANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_pairs_use_table_values() {
        assert_eq!(framework_distance("react", "vue"), 6.0);
        assert_eq!(framework_distance("React", "Next.js"), 3.0);
    }

    #[test]
    fn unmapped_pairs_fall_back_to_default() {
        // deliberately absent from the table
        assert_eq!(framework_distance("express", "fastapi"), DEFAULT_DISTANCE);
        assert_eq!(framework_distance("unknown", "next.js"), DEFAULT_DISTANCE);
    }

    #[test]
    fn same_framework_is_near_zero() {
        assert_eq!(framework_distance("react", "React"), SAME_FRAMEWORK_DISTANCE);
    }

    #[test]
    fn distances_stay_on_scale() {
        for (_, _, distance) in DISTANCES {
            assert!((0.0..=10.0).contains(distance));
        }
    }
}
