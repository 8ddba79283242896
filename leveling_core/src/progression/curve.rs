//! XP curve - experience required to advance from a level

use serde::{Deserialize, Serialize};

/// Price formula for the next level
///
/// `required = floor((start + level * additional)
///                   * (1 + extra_percent / 100 * level)
///                   * multi ^ (level - 1))`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XpCurve {
    /// Base price at level 0
    #[serde(default = "default_start_price")]
    pub start_price: f64,
    /// Linear price added per level
    #[serde(default)]
    pub additional_price: f64,
    /// Percentage surcharge added per level
    #[serde(default)]
    pub extra_price_percent: f64,
    /// Exponential growth factor per level
    #[serde(default = "default_multi_price")]
    pub multi_price: f64,
}

fn default_start_price() -> f64 {
    100.0
}

fn default_multi_price() -> f64 {
    1.1
}

impl Default for XpCurve {
    fn default() -> Self {
        XpCurve {
            start_price: default_start_price(),
            additional_price: 0.0,
            extra_price_percent: 0.0,
            multi_price: default_multi_price(),
        }
    }
}

impl XpCurve {
    pub fn new(start_price: f64, additional_price: f64, extra_price_percent: f64, multi_price: f64) -> Self {
        XpCurve {
            start_price,
            additional_price,
            extra_price_percent,
            multi_price,
        }
    }

    /// Experience needed to go from `level` to `level + 1`
    ///
    /// Always at least 1 so a level-up loop consumes XP on every step. A
    /// non-positive `multi_price` is treated as 1.0 here; [`XpCurve::check`]
    /// reports it when the config is loaded.
    pub fn required_xp(&self, level: u32) -> i64 {
        let level_f = level as f64;
        let base_price = self.start_price + level_f * self.additional_price;
        let percent_multiplier = 1.0 + (self.extra_price_percent / 100.0) * level_f;
        let multi = if self.multi_price.is_finite() && self.multi_price > 0.0 {
            self.multi_price
        } else {
            1.0
        };
        let exp_multiplier = multi.powf(level_f - 1.0);

        let price = (base_price * percent_multiplier * exp_multiplier).floor();
        if price.is_nan() {
            return i64::MAX;
        }
        // `as` saturates at i64::MAX for +inf and huge values
        price.max(1.0) as i64
    }

    /// Total experience needed to reach `level` from level 0
    pub fn total_xp_to(&self, level: u32) -> i64 {
        (0..level).fold(0i64, |acc, l| acc.saturating_add(self.required_xp(l)))
    }

    /// Check the curve for configuration errors
    ///
    /// A valid curve never gets cheaper as the level rises, so every price is
    /// at least `required_xp(0)`.
    pub fn check(&self, label: &str) -> Result<(), String> {
        if !self.multi_price.is_finite() || self.multi_price < 1.0 {
            return Err(format!(
                "{}: multi_price must be >= 1.0, got {}",
                label, self.multi_price
            ));
        }
        if !self.start_price.is_finite() || self.start_price <= 0.0 {
            return Err(format!(
                "{}: start_price must be > 0, got {}",
                label, self.start_price
            ));
        }
        if !self.additional_price.is_finite() || self.additional_price < 0.0 {
            return Err(format!(
                "{}: additional_price must be >= 0, got {}",
                label, self.additional_price
            ));
        }
        if !self.extra_price_percent.is_finite() || self.extra_price_percent < 0.0 {
            return Err(format!(
                "{}: extra_price_percent must be >= 0, got {}",
                label, self.extra_price_percent
            ));
        }
        Ok(())
    }
}
