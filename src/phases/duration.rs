//! Phase duration parsing and total estimation.

/// Parse a `"N-M days"` / `"N-M weeks"` style range into day bounds.
pub fn parse_range_days(s: &str) -> Option<(f64, f64)> {
    let s = s.trim();
    let (range, unit) = if let Some(r) = s.strip_suffix(" days").or_else(|| s.strip_suffix(" day"))
    {
        (r, 1.0)
    } else if let Some(r) = s.strip_suffix(" weeks").or_else(|| s.strip_suffix(" week")) {
        (r, 7.0)
    } else {
        return None;
    };

    let (low, high) = match range.split_once('-') {
        Some((a, b)) => (a.trim().parse().ok()?, b.trim().parse().ok()?),
        None => {
            let v: f64 = range.trim().parse().ok()?;
            (v, v)
        }
    };
    Some((low * unit, high * unit))
}

/// Midpoint of a duration range in days; unparseable strings count zero.
pub fn midpoint_days(s: &str) -> f64 {
    parse_range_days(s)
        .map(|(low, high)| (low + high) / 2.0)
        .unwrap_or(0.0)
}

/// Total duration estimate: the sum of phase midpoints inflated by the
/// complexity score, bucketed to days, weeks, or months by magnitude.
pub fn estimate_total(phase_durations: &[&str], complexity_score: f64) -> String {
    let base: f64 = phase_durations.iter().map(|d| midpoint_days(d)).sum();
    let scaled = (base * (1.0 + complexity_score / 100.0)).ceil();

    if scaled < 14.0 {
        format!("{} days", scaled as u64)
    } else if scaled < 56.0 {
        format!("{} weeks", (scaled / 7.0).ceil() as u64)
    } else {
        format!("{} months", (scaled / 30.0).ceil() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_parse_to_day_bounds() {
        assert_eq!(parse_range_days("1-2 days"), Some((1.0, 2.0)));
        assert_eq!(parse_range_days("2-4 weeks"), Some((14.0, 28.0)));
        assert_eq!(parse_range_days("3 days"), Some((3.0, 3.0)));
        assert_eq!(parse_range_days("soon"), None);
    }

    #[test]
    fn midpoints_average_the_bounds() {
        assert_eq!(midpoint_days("1-2 days"), 1.5);
        assert_eq!(midpoint_days("1-3 weeks"), 14.0);
        assert_eq!(midpoint_days("not a range"), 0.0);
    }

    #[test]
    fn totals_bucket_by_magnitude() {
        // 1.5 + 3 = 4.5 days, no inflation -> 5 days
        assert_eq!(estimate_total(&["1-2 days", "2-4 days"], 0.0), "5 days");
        // 25 base days at score 50 -> 38 days -> 6 weeks
        assert_eq!(
            estimate_total(
                &[
                    "1-2 days",
                    "2-4 days",
                    "3-7 days",
                    "2-5 days",
                    "5-10 days",
                    "2-4 days",
                    "1-2 days"
                ],
                50.0
            ),
            "6 weeks"
        );
        // large plans land in months
        assert_eq!(estimate_total(&["6-10 weeks"], 100.0), "4 months");
    }

    #[test]
    fn inflation_is_monotonic_in_score() {
        let low = estimate_total(&["5-10 days"], 0.0);
        let high = estimate_total(&["5-10 days"], 100.0);
        assert_eq!(low, "8 days");
        assert_eq!(high, "3 weeks");
    }
}
