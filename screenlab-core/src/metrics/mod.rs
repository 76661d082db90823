//! Adaptive metrics engine.
//!
//! Pure functions over a [`PriceSeries`](crate::domain::PriceSeries): true
//! range and ATR, the volatility-scaled confirmation threshold, the
//! composite liquidity score, and the snapshot that bundles them per
//! symbol. Nothing here reads a clock or performs I/O; missing inputs
//! degrade to documented defaults instead of errors.

pub mod liquidity;
pub mod snapshot;
pub mod threshold;
pub mod true_range;

pub use liquidity::liquidity_score;
pub use snapshot::{compute_batch, MetricsSnapshot};
pub use threshold::{adaptive_threshold, VolatilityCategory};
pub use true_range::{atr_absolute, compute_atr_pct, true_range};

/// Build a series of `n` identical bars for tests.
#[cfg(test)]
pub fn flat_series(n: usize, high: f64, low: f64, close: f64) -> crate::domain::PriceSeries {
    crate::domain::PriceSeries::from_closes(vec![close; n])
        .with_high_low(vec![high; n], vec![low; n])
        .expect("columns share length by construction")
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for metric tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
