//! Raw XP gain from combat

use serde::{Deserialize, Serialize};

/// XP rates for hits dealt, kills and damage taken
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XpGainConfig {
    /// Flat XP per hit dealt
    #[serde(default = "default_hit_base")]
    pub hit_base: f64,
    /// XP per point of damage dealt
    #[serde(default = "default_hit_damage_scale")]
    pub hit_damage_scale: f64,
    /// Flat XP per kill
    #[serde(default = "default_kill_base")]
    pub kill_base: f64,
    /// XP per point of the victim's max life
    #[serde(default = "default_kill_life_scale")]
    pub kill_life_scale: f64,
    /// Flat XP per hit taken (armor and accessories)
    #[serde(default = "default_hurt_base")]
    pub hurt_base: f64,
    /// XP per point of damage taken
    #[serde(default = "default_hurt_damage_scale")]
    pub hurt_damage_scale: f64,
}

fn default_hit_base() -> f64 {
    1.0
}
fn default_hit_damage_scale() -> f64 {
    0.1
}
fn default_kill_base() -> f64 {
    10.0
}
fn default_kill_life_scale() -> f64 {
    0.05
}
fn default_hurt_base() -> f64 {
    1.0
}
fn default_hurt_damage_scale() -> f64 {
    0.2
}

impl Default for XpGainConfig {
    fn default() -> Self {
        XpGainConfig {
            hit_base: default_hit_base(),
            hit_damage_scale: default_hit_damage_scale(),
            kill_base: default_kill_base(),
            kill_life_scale: default_kill_life_scale(),
            hurt_base: default_hurt_base(),
            hurt_damage_scale: default_hurt_damage_scale(),
        }
    }
}

impl XpGainConfig {
    /// XP for dealing a hit of `damage`
    pub fn hit_experience(&self, damage: f64) -> f64 {
        self.hit_base + damage.max(0.0) * self.hit_damage_scale
    }

    /// XP for killing a target with `target_max_life`
    pub fn kill_experience(&self, target_max_life: f64) -> f64 {
        self.kill_base + target_max_life.max(0.0) * self.kill_life_scale
    }

    /// XP for taking a hit of `damage`
    pub fn hurt_experience(&self, damage: f64) -> f64 {
        self.hurt_base + damage.max(0.0) * self.hurt_damage_scale
    }
}

/// Apply the event multiplier and floor to whole XP
///
/// Negative or non-finite results become 0, which the ledger ignores.
pub fn scale_experience(raw: f64, multiplier: f64) -> i64 {
    let scaled = (raw * multiplier).floor();
    if !scaled.is_finite() || scaled <= 0.0 {
        return 0;
    }
    scaled as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_experience() {
        let config = XpGainConfig::default();
        // 1 + 50 * 0.1
        assert!((config.hit_experience(50.0) - 6.0).abs() < 1e-9);
        assert!((config.hit_experience(-10.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_kill_experience() {
        let config = XpGainConfig::default();
        // 10 + 400 * 0.05
        assert!((config.kill_experience(400.0) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_hurt_experience() {
        let config = XpGainConfig::default();
        assert!((config.hurt_experience(20.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_experience() {
        assert_eq!(scale_experience(10.0, 1.75), 17);
        assert_eq!(scale_experience(10.0, 0.0), 0);
        assert_eq!(scale_experience(-4.0, 2.0), 0);
        assert_eq!(scale_experience(f64::NAN, 2.0), 0);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: XpGainConfig = toml::from_str("kill_base = 25.0").unwrap();
        assert!((config.kill_base - 25.0).abs() < f64::EPSILON);
        assert!((config.hit_base - 1.0).abs() < f64::EPSILON);
    }
}
