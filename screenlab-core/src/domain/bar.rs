//! PriceBar — one trading session's aggregate for a symbol.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily high/low/close/volume record.
///
/// Row form of the price history, used by fixtures and the synthetic
/// generator. The metrics engine consumes the column-oriented
/// [`PriceSeries`](crate::domain::PriceSeries) instead, which can also
/// represent histories where high/low or volume were never collected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    /// Basic sanity check: high >= low, both bracket the close, and the
    /// close and volume are non-negative.
    pub fn is_sane(&self) -> bool {
        if self.high.is_nan() || self.low.is_nan() || self.close.is_nan() || self.volume.is_nan() {
            return false;
        }
        self.high >= self.low
            && self.high >= self.close
            && self.low <= self.close
            && self.close > 0.0
            && self.volume >= 0.0
    }
}
