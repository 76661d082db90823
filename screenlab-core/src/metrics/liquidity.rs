//! Liquidity scoring — volume depth plus estimated spread tightness.
//!
//! Two halves, each worth up to 50 points. The volume half saturates once
//! average daily volume reaches `volume_score_cap / volume_score_per_unit`
//! units; the spread half starts at 50 and loses points per percent of
//! average high-low range. Missing columns degrade each half to its
//! documented default rather than failing the symbol.

use crate::config::MetricsConfig;
use crate::domain::PriceSeries;

/// Composite 0-100 liquidity score for a series. Empty series score 0.0.
pub fn liquidity_score(series: &PriceSeries, cfg: &MetricsConfig) -> f64 {
    if series.is_empty() {
        return 0.0;
    }

    let volume_score = match series.volume() {
        Some(volume) => {
            let avg = mean_finite(volume);
            (avg / cfg.volume_unit * cfg.volume_score_per_unit).min(cfg.volume_score_cap)
        }
        // No volume column: that half of the score is simply unearned.
        None => 0.0,
    };

    let spread_score = match (series.high(), series.low()) {
        (Some(high), Some(low)) => {
            let avg_pct = average_spread_pct(high, low, series.close());
            (cfg.spread_score_base - avg_pct * cfg.spread_penalty_per_pct).max(0.0)
        }
        _ => cfg.neutral_spread_score,
    };

    volume_score + spread_score
}

/// Mean per-bar `(high - low) / close` in percent.
///
/// Bars with a non-positive or NaN close cannot express a relative spread
/// and are left out of the average. Returns 0.0 when no bar qualifies.
pub(crate) fn average_spread_pct(high: &[f64], low: &[f64], close: &[f64]) -> f64 {
    let spreads: Vec<f64> = high
        .iter()
        .zip(low)
        .zip(close)
        .filter(|((h, l), c)| c.is_finite() && **c > 0.0 && h.is_finite() && l.is_finite())
        .map(|((h, l), c)| (h - l) / c * 100.0)
        .collect();
    mean_finite(&spreads)
}

/// Mean of the finite values in a slice, 0.0 when none are finite.
pub(crate) fn mean_finite(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        if v.is_finite() {
            sum += v;
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
