//! Stat resolution - blacklist, scaling, then caps

use super::StatConfig;
use crate::scaling;
use crate::types::ItemId;

/// Resolve the bonus an item of `item_id` gets at `level`
///
/// With `capped == false` the raw scaled value is returned untouched, which
/// callers use when doing their own cap math. Otherwise an item hard cap wins
/// over the global max and may flip the sign.
pub fn resolve_stat(item_id: &ItemId, level: u32, config: &StatConfig, capped: bool) -> f64 {
    if config.is_blacklisted(item_id) || level == 0 {
        return 0.0;
    }

    let raw = scaling::calculate(
        level,
        config.mode,
        &config.tiers,
        config.legacy_per_level,
        config.legacy_per_level_mult,
    );

    if !capped {
        return raw;
    }

    if let Some(cap) = config.hard_cap(item_id) {
        return raw.min(cap.max as f64) * cap.sign as f64;
    }

    if config.global_max > 0 {
        return raw.min(config.global_max as f64);
    }

    raw
}

/// Integer variant of [`resolve_stat`], truncated toward zero
pub fn resolve_stat_int(item_id: &ItemId, level: u32, config: &StatConfig, capped: bool) -> i32 {
    resolve_stat(item_id, level, config, capped) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaling::{ScalingMode, ScalingTier};
    use crate::stat::HardCap;

    fn sword() -> ItemId {
        "iron_broadsword".into()
    }

    #[test]
    fn test_legacy_level_sixty() {
        let config = StatConfig::legacy(1.0, 1);
        assert!((resolve_stat(&sword(), 60, &config, true) - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_blacklisted_item_gets_nothing() {
        let config = StatConfig::legacy(3.0, 2).with_blacklisted("iron_broadsword");
        assert_eq!(resolve_stat(&sword(), 99, &config, true), 0.0);
        assert_eq!(resolve_stat(&sword(), 99, &config, false), 0.0);
        // Other items are unaffected
        assert!(resolve_stat(&"copper_sword".into(), 10, &config, true) > 0.0);
    }

    #[test]
    fn test_level_zero() {
        let config = StatConfig::legacy(3.0, 2);
        assert_eq!(resolve_stat(&sword(), 0, &config, true), 0.0);
    }

    #[test]
    fn test_global_max_caps() {
        let config = StatConfig::legacy(2.0, 1).with_global_max(50);
        assert!((resolve_stat(&sword(), 100, &config, true) - 50.0).abs() < f64::EPSILON);
        assert!((resolve_stat(&sword(), 10, &config, true) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_uncapped_ignores_caps() {
        let config = StatConfig::legacy(2.0, 1)
            .with_global_max(50)
            .with_hard_cap("iron_broadsword", HardCap::new(10, -1));
        assert!((resolve_stat(&sword(), 100, &config, false) - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hard_cap_beats_global_max() {
        let config = StatConfig::legacy(2.0, 1)
            .with_global_max(50)
            .with_hard_cap("iron_broadsword", HardCap::new(80, 1));
        // Global max would give 50, the hard cap allows 80
        assert!((resolve_stat(&sword(), 100, &config, true) - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hard_cap_sign_inverts() {
        let config = StatConfig::legacy(1.0, 1).with_hard_cap("iron_broadsword", HardCap::new(15, -1));
        assert!((resolve_stat(&sword(), 10, &config, true) + 10.0).abs() < f64::EPSILON);
        assert!((resolve_stat(&sword(), 30, &config, true) + 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tiered_resolution_int() {
        let config = StatConfig::tiered(
            ScalingMode::Cumulative,
            vec![ScalingTier::new(1, 0.5, 1), ScalingTier::new(10, 1.25, 1)],
        );
        // 9 * 0.5 + 3 * 1.25 = 8.25
        assert_eq!(resolve_stat_int(&sword(), 12, &config, true), 8);
    }
}
