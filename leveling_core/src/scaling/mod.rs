//! Scaling calculator - converts a level into a raw stat value
//!
//! The calculator is a pure function of the level, the scaling mode and the
//! tier list. It runs on every stat query, so it never fails: unsorted tiers
//! are stable-sorted and duplicate start levels resolve to the last entry.

mod tier;

pub use tier::{duplicate_start_levels, ScalingMode, ScalingTier};

/// Flat linear growth used by `ScalingMode::Legacy` and as the fallback
pub fn legacy_value(level: u32, per_level: f64, per_level_mult: i32) -> f64 {
    level as f64 * per_level * per_level_mult as f64
}

/// Calculate the raw stat value for `level`
///
/// - `Legacy`, or no tiers: `level * legacy_per_level * legacy_per_level_mult`
/// - no tier reached yet: same as `Legacy`
/// - `Cumulative` / `AccumulativePerTier`: every reached tier contributes
///   `levels_in_range * rate` for the levels between its start and the next
///   tier's start
/// - `CurrentTierOnly`: `level * rate` of the highest reached tier
pub fn calculate(
    level: u32,
    mode: ScalingMode,
    tiers: &[ScalingTier],
    legacy_per_level: f64,
    legacy_per_level_mult: i32,
) -> f64 {
    if level == 0 {
        return 0.0;
    }
    if mode == ScalingMode::Legacy || tiers.is_empty() {
        return legacy_value(level, legacy_per_level, legacy_per_level_mult);
    }

    let mut reached: Vec<&ScalingTier> = tiers.iter().filter(|t| t.start_level <= level).collect();
    if reached.is_empty() {
        return legacy_value(level, legacy_per_level, legacy_per_level_mult);
    }
    // Stable: among equal start levels the later config entry stays last
    reached.sort_by_key(|t| t.start_level);

    match mode {
        ScalingMode::Cumulative | ScalingMode::AccumulativePerTier => cumulative(level, &reached),
        ScalingMode::CurrentTierOnly => {
            // reached is non-empty here
            let current = reached[reached.len() - 1];
            level as f64 * current.rate()
        }
        ScalingMode::Legacy => legacy_value(level, legacy_per_level, legacy_per_level_mult),
    }
}

/// Integer variant of [`calculate`], truncated toward zero
pub fn calculate_int(
    level: u32,
    mode: ScalingMode,
    tiers: &[ScalingTier],
    legacy_per_level: f64,
    legacy_per_level_mult: i32,
) -> i32 {
    calculate(level, mode, tiers, legacy_per_level, legacy_per_level_mult) as i32
}

/// Piecewise-linear sum over sorted, reached tiers
fn cumulative(level: u32, sorted: &[&ScalingTier]) -> f64 {
    let mut total = 0.0;
    for (i, tier) in sorted.iter().enumerate() {
        // Levels are counted from 1
        let start = i64::from(tier.start_level.max(1));
        let end = match sorted.get(i + 1) {
            Some(next) => i64::from(next.start_level) - 1,
            None => i64::from(level),
        };
        if end < start {
            continue;
        }
        let levels_in_range = (end - start + 1) as f64;
        total += levels_in_range * tier.rate();
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tiers() -> Vec<ScalingTier> {
        vec![ScalingTier::new(1, 2.0, 1), ScalingTier::new(50, 5.0, 1)]
    }

    #[test]
    fn test_legacy_linear() {
        let value = calculate(60, ScalingMode::Legacy, &[], 1.0, 1);
        assert!((value - 60.0).abs() < f64::EPSILON);

        let value = calculate(10, ScalingMode::Legacy, &two_tiers(), 0.5, 3);
        assert!((value - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cumulative_two_tiers() {
        // Levels 1-49 at 2, levels 50-60 at 5
        let value = calculate(60, ScalingMode::Cumulative, &two_tiers(), 1.0, 1);
        assert!((value - 153.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_accumulative_per_tier_matches_cumulative() {
        for level in [1, 25, 49, 50, 51, 99] {
            let a = calculate(level, ScalingMode::Cumulative, &two_tiers(), 1.0, 1);
            let b = calculate(level, ScalingMode::AccumulativePerTier, &two_tiers(), 1.0, 1);
            assert!((a - b).abs() < f64::EPSILON, "level {}", level);
        }
    }

    #[test]
    fn test_current_tier_only_rebases_whole_level() {
        let value = calculate(60, ScalingMode::CurrentTierOnly, &two_tiers(), 1.0, 1);
        assert!((value - 300.0).abs() < f64::EPSILON);

        let value = calculate(49, ScalingMode::CurrentTierOnly, &two_tiers(), 1.0, 1);
        assert!((value - 98.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_current_tier_only_can_drop_at_boundary() {
        let tiers = vec![ScalingTier::new(1, 3.0, 1), ScalingTier::new(10, 1.0, 1)];
        let before = calculate(9, ScalingMode::CurrentTierOnly, &tiers, 1.0, 1);
        let after = calculate(10, ScalingMode::CurrentTierOnly, &tiers, 1.0, 1);
        assert!(after < before);
    }

    #[test]
    fn test_level_zero_is_zero() {
        let tiers = vec![ScalingTier::new(0, 4.0, 2)];
        for mode in [
            ScalingMode::Legacy,
            ScalingMode::Cumulative,
            ScalingMode::CurrentTierOnly,
            ScalingMode::AccumulativePerTier,
        ] {
            assert_eq!(calculate(0, mode, &tiers, 7.0, 3), 0.0);
        }
    }

    #[test]
    fn test_no_tier_reached_falls_back_to_legacy() {
        let tiers = vec![ScalingTier::new(20, 10.0, 1)];
        let value = calculate(5, ScalingMode::Cumulative, &tiers, 2.0, 1);
        assert!((value - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tier_starting_at_zero_counts_from_one() {
        let tiers = vec![ScalingTier::new(0, 1.0, 1)];
        let value = calculate(5, ScalingMode::Cumulative, &tiers, 0.0, 1);
        assert!((value - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unsorted_tiers_are_sorted() {
        let tiers = vec![ScalingTier::new(50, 5.0, 1), ScalingTier::new(1, 2.0, 1)];
        let value = calculate(60, ScalingMode::Cumulative, &tiers, 1.0, 1);
        assert!((value - 153.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_duplicate_start_last_wins() {
        let tiers = vec![
            ScalingTier::new(1, 1.0, 1),
            ScalingTier::new(10, 2.0, 1),
            ScalingTier::new(10, 4.0, 1),
        ];
        // 9 levels at 1, then 11 levels (10..=20) at 4
        let value = calculate(20, ScalingMode::Cumulative, &tiers, 0.0, 1);
        assert!((value - 53.0).abs() < f64::EPSILON);

        let value = calculate(20, ScalingMode::CurrentTierOnly, &tiers, 0.0, 1);
        assert!((value - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_per_level_mult_applies() {
        let tiers = vec![ScalingTier::new(1, 1.5, 2)];
        let value = calculate(10, ScalingMode::Cumulative, &tiers, 0.0, 1);
        assert!((value - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_calculate_int_truncates() {
        let value = calculate_int(3, ScalingMode::Legacy, &[], 0.9, 1);
        assert_eq!(value, 2);

        let value = calculate_int(3, ScalingMode::Legacy, &[], -0.9, 1);
        assert_eq!(value, -2);
    }
}
