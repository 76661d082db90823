//! Per-symbol metrics snapshot — the report the screener persists.
//!
//! Pure composition of the ATR, threshold, and liquidity inputs. Every
//! field is defined for every input series; an empty series produces the
//! documented fallback record so batch consumers never branch on missing
//! data.

use crate::config::MetricsConfig;
use crate::domain::{PriceSeries, Symbol};
use crate::metrics::liquidity::{average_spread_pct, mean_finite};
use crate::metrics::threshold::{adaptive_threshold, VolatilityCategory};
use crate::metrics::true_range::compute_atr_pct;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Volatility and liquidity report for one symbol, produced fresh per
/// request. Persistence and display belong to the callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// ATR as a fraction of the last close.
    pub atr_pct: f64,

    /// ATR in price units.
    pub atr_absolute: f64,

    /// Confirmation threshold in percent, clamped to the configured band.
    pub adaptive_threshold_pct: f64,

    pub volatility_category: VolatilityCategory,

    /// Mean daily volume, 0.0 when the column is absent.
    pub avg_volume: f64,

    /// Mean per-bar high-low range in percent of close, 0.0 when high/low
    /// are absent.
    pub avg_spread_pct: f64,
}

impl MetricsSnapshot {
    /// Compute the snapshot for a series.
    pub fn compute(series: &PriceSeries, cfg: &MetricsConfig) -> Self {
        if series.is_empty() {
            return Self::fallback(cfg);
        }

        let atr_pct = compute_atr_pct(series, cfg);
        // last_close is Some for a non-empty series; the max(0.0) keeps the
        // absolute ATR non-negative for degenerate close values.
        let last_close = series.last_close().unwrap_or(0.0).max(0.0);

        let avg_volume = series.volume().map(mean_finite).unwrap_or(0.0);
        let avg_spread_pct = match (series.high(), series.low()) {
            (Some(high), Some(low)) => average_spread_pct(high, low, series.close()),
            _ => 0.0,
        };

        Self {
            atr_pct,
            atr_absolute: atr_pct * last_close,
            adaptive_threshold_pct: adaptive_threshold(atr_pct, cfg),
            volatility_category: VolatilityCategory::from_atr_pct(atr_pct, cfg),
            avg_volume,
            avg_spread_pct,
        }
    }

    /// The record reported for an empty series.
    pub fn fallback(cfg: &MetricsConfig) -> Self {
        Self {
            atr_pct: cfg.atr_fallback_pct,
            atr_absolute: 0.0,
            adaptive_threshold_pct: cfg.fallback_threshold_pct,
            volatility_category: VolatilityCategory::Medium,
            avg_volume: 0.0,
            avg_spread_pct: 0.0,
        }
    }
}

/// Compute snapshots for a batch of symbols in parallel.
///
/// Order of the output matches the input. Each series is independent, so
/// the batch parallelizes without coordination.
pub fn compute_batch(
    series_by_symbol: &[(Symbol, PriceSeries)],
    cfg: &MetricsConfig,
) -> Vec<(Symbol, MetricsSnapshot)> {
    series_by_symbol
        .par_iter()
        .map(|(symbol, series)| (symbol.clone(), MetricsSnapshot::compute(series, cfg)))
        .collect()
}
