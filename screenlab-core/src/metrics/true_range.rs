//! True Range and its rolling average (ATR).
//!
//! True Range: max(high-low, |high-prev_close|, |low-prev_close|).
//! ATR here is a plain rolling mean of TR over the trailing window,
//! evaluated at the most recent bar and expressed as a fraction of the
//! last close. Anything that prevents that computation (short series,
//! missing columns, non-positive close) degrades to the configured
//! fallback instead of an error, so a screening batch never aborts on
//! one odd symbol.

use crate::config::MetricsConfig;
use crate::domain::PriceSeries;

/// Compute the True Range series from high/low/close columns.
/// TR[0] = high[0] - low[0] (no previous close).
/// TR[t] = max(high[t]-low[t], |high[t]-close[t-1]|, |low[t]-close[t-1]|).
pub fn true_range(high: &[f64], low: &[f64], close: &[f64]) -> Vec<f64> {
    let n = close.len();
    let mut tr = vec![f64::NAN; n];

    if n == 0 {
        return tr;
    }

    // First bar: just high - low
    let h = high[0];
    let l = low[0];
    if h.is_nan() || l.is_nan() {
        tr[0] = f64::NAN;
    } else {
        tr[0] = h - l;
    }

    for i in 1..n {
        let h = high[i];
        let l = low[i];
        let pc = close[i - 1];
        if h.is_nan() || l.is_nan() || pc.is_nan() {
            tr[i] = f64::NAN;
        } else {
            tr[i] = (h - l).max((h - pc).abs()).max((l - pc).abs());
        }
    }

    tr
}

/// ATR at the most recent bar: mean of the trailing `atr_period` true
/// ranges. `None` when the columns are absent, the series is shorter than
/// the window, or a NaN falls inside the window.
pub fn atr_absolute(series: &PriceSeries, cfg: &MetricsConfig) -> Option<f64> {
    let high = series.high()?;
    let low = series.low()?;
    let close = series.close();

    let n = close.len();
    let period = cfg.atr_period;
    if period == 0 || n < period {
        return None;
    }

    let tr = true_range(high, low, close);
    let window = &tr[n - period..];
    if window.iter().any(|v| v.is_nan()) {
        return None;
    }

    Some(window.iter().sum::<f64>() / period as f64)
}

/// ATR as a fraction of the most recent close.
///
/// Falls back to `cfg.atr_fallback_pct` whenever the ATR itself is
/// unavailable or the last close is non-positive (division would be
/// meaningless).
pub fn compute_atr_pct(series: &PriceSeries, cfg: &MetricsConfig) -> f64 {
    let atr = match atr_absolute(series, cfg) {
        Some(atr) => atr,
        None => return cfg.atr_fallback_pct,
    };

    match series.last_close() {
        Some(close) if close > 0.0 && !close.is_nan() => atr / close,
        _ => cfg.atr_fallback_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{assert_approx, flat_series, DEFAULT_EPSILON};

    #[test]
    fn true_range_basic() {
        let high = [105.0, 108.0, 107.0];
        let low = [95.0, 100.0, 98.0];
        let close = [102.0, 106.0, 99.0];
        let tr = true_range(&high, &low, &close);
        // TR[0] = 105-95 = 10
        // TR[1] = max(8, |108-102|, |100-102|) = 8
        // TR[2] = max(9, |107-106|, |98-106|) = 9
        assert_approx(tr[0], 10.0, DEFAULT_EPSILON);
        assert_approx(tr[1], 8.0, DEFAULT_EPSILON);
        assert_approx(tr[2], 9.0, DEFAULT_EPSILON);
    }

    #[test]
    fn true_range_gap_up() {
        // Prev close 100, current bar 115-108: gap dominates the raw range.
        let high = [102.0, 115.0];
        let low = [97.0, 108.0];
        let close = [100.0, 112.0];
        let tr = true_range(&high, &low, &close);
        assert_approx(tr[1], 15.0, DEFAULT_EPSILON);
    }

    #[test]
    fn true_range_nan_guard() {
        let high = [102.0, f64::NAN, 104.0];
        let low = [97.0, 99.0, 100.0];
        let close = [100.0, 101.0, 103.0];
        let tr = true_range(&high, &low, &close);
        assert!(!tr[0].is_nan());
        assert!(tr[1].is_nan());
        assert!(!tr[2].is_nan());
    }

    #[test]
    fn flat_series_atr_is_the_bar_range() {
        let cfg = MetricsConfig::default();
        // 14 bars of high=101 low=99 close=100: every TR is 2.
        let series = flat_series(14, 101.0, 99.0, 100.0);
        assert_approx(atr_absolute(&series, &cfg).unwrap(), 2.0, DEFAULT_EPSILON);
        assert_approx(compute_atr_pct(&series, &cfg), 0.02, DEFAULT_EPSILON);
    }

    #[test]
    fn short_series_falls_back() {
        let cfg = MetricsConfig::default();
        let series = flat_series(13, 101.0, 99.0, 100.0);
        assert!(atr_absolute(&series, &cfg).is_none());
        assert_approx(compute_atr_pct(&series, &cfg), cfg.atr_fallback_pct, DEFAULT_EPSILON);
    }

    #[test]
    fn empty_series_falls_back() {
        let cfg = MetricsConfig::default();
        let series = PriceSeries::from_closes(vec![]);
        assert_approx(compute_atr_pct(&series, &cfg), cfg.atr_fallback_pct, DEFAULT_EPSILON);
    }

    #[test]
    fn missing_high_low_falls_back() {
        let cfg = MetricsConfig::default();
        let series = PriceSeries::from_closes(vec![100.0; 30]);
        assert!(atr_absolute(&series, &cfg).is_none());
        assert_approx(compute_atr_pct(&series, &cfg), cfg.atr_fallback_pct, DEFAULT_EPSILON);
    }

    #[test]
    fn non_positive_close_falls_back() {
        let cfg = MetricsConfig::default();
        let mut closes = vec![100.0; 20];
        *closes.last_mut().unwrap() = 0.0;
        let n = closes.len();
        let series = PriceSeries::from_closes(closes)
            .with_high_low(vec![101.0; n], vec![99.0; n])
            .unwrap();
        assert_approx(compute_atr_pct(&series, &cfg), cfg.atr_fallback_pct, DEFAULT_EPSILON);
    }

    #[test]
    fn window_uses_only_trailing_bars() {
        let cfg = MetricsConfig {
            atr_period: 2,
            ..MetricsConfig::default()
        };
        // TRs: [10, 8, 9] — trailing 2 are 8 and 9.
        let high = vec![105.0, 108.0, 107.0];
        let low = vec![95.0, 100.0, 98.0];
        let close = vec![102.0, 106.0, 99.0];
        let series = PriceSeries::from_closes(close)
            .with_high_low(high, low)
            .unwrap();
        assert_approx(atr_absolute(&series, &cfg).unwrap(), 8.5, DEFAULT_EPSILON);
    }
}
