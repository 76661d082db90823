//! Adaptive confirmation threshold and volatility categorization.
//!
//! The threshold is half the percentage volatility, clamped to a band:
//! quiet names still need a usable minimum move, volatile names must not
//! confirm on noise. Total functions, no error paths.

use crate::config::MetricsConfig;
use serde::{Deserialize, Serialize};

/// Volatility bucket derived from ATR as a fraction of price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityCategory {
    Low,
    Medium,
    High,
}

impl VolatilityCategory {
    /// Bucket an ATR fraction using the configured cutoffs.
    /// Cutoffs are half-open: a value exactly at `low_vol_cutoff` is
    /// Medium, exactly at `high_vol_cutoff` is High.
    pub fn from_atr_pct(atr_pct: f64, cfg: &MetricsConfig) -> Self {
        if atr_pct < cfg.low_vol_cutoff {
            VolatilityCategory::Low
        } else if atr_pct < cfg.high_vol_cutoff {
            VolatilityCategory::Medium
        } else {
            VolatilityCategory::High
        }
    }
}

/// Confirmation threshold in percent for a given ATR fraction.
///
/// `atr_pct * 100 * threshold_atr_factor`, clamped to
/// `[min_threshold_pct, max_threshold_pct]`.
pub fn adaptive_threshold(atr_pct: f64, cfg: &MetricsConfig) -> f64 {
    let raw = atr_pct * 100.0 * cfg.threshold_atr_factor;
    raw.max(cfg.min_threshold_pct).min(cfg.max_threshold_pct)
}
