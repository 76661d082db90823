//! PriceSeries — column-oriented per-symbol price history.
//!
//! The close column is always present; high, low, and volume are optional
//! so that histories collected without them are representable. Column
//! presence is part of the type: a metric that needs high/low asks for the
//! columns and degrades to its documented default when they are `None`,
//! instead of probing rows at runtime.
//!
//! Bars are chronological ascending. Ordering is the caller's contract;
//! the series only enforces column lengths.

use crate::domain::PriceBar;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from series construction and tabular interchange.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("column '{column}' has {actual} rows, close has {expected}")]
    ColumnLengthMismatch {
        column: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("column '{column}' has unsupported type: {detail}")]
    ColumnType { column: &'static str, detail: String },
}

/// Ordered OHLCV history for a single symbol, close column required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    close: Vec<f64>,
    high: Option<Vec<f64>>,
    low: Option<Vec<f64>>,
    volume: Option<Vec<f64>>,
}

impl PriceSeries {
    /// Series carrying only closes. High/low/volume-derived metrics will
    /// degrade to their documented defaults.
    pub fn from_closes(close: Vec<f64>) -> Self {
        Self {
            close,
            high: None,
            low: None,
            volume: None,
        }
    }

    /// Series with all columns, from row-form bars.
    pub fn from_bars(bars: &[PriceBar]) -> Self {
        Self {
            close: bars.iter().map(|b| b.close).collect(),
            high: Some(bars.iter().map(|b| b.high).collect()),
            low: Some(bars.iter().map(|b| b.low).collect()),
            volume: Some(bars.iter().map(|b| b.volume).collect()),
        }
    }

    /// Attach high and low columns. Both must match the close length.
    pub fn with_high_low(mut self, high: Vec<f64>, low: Vec<f64>) -> Result<Self, SeriesError> {
        check_len("high", self.close.len(), high.len())?;
        check_len("low", self.close.len(), low.len())?;
        self.high = Some(high);
        self.low = Some(low);
        Ok(self)
    }

    /// Attach a volume column matching the close length.
    pub fn with_volume(mut self, volume: Vec<f64>) -> Result<Self, SeriesError> {
        check_len("volume", self.close.len(), volume.len())?;
        self.volume = Some(volume);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    pub fn close(&self) -> &[f64] {
        &self.close
    }

    /// Most recent close, if any bars exist.
    pub fn last_close(&self) -> Option<f64> {
        self.close.last().copied()
    }

    pub fn high(&self) -> Option<&[f64]> {
        self.high.as_deref()
    }

    pub fn low(&self) -> Option<&[f64]> {
        self.low.as_deref()
    }

    pub fn volume(&self) -> Option<&[f64]> {
        self.volume.as_deref()
    }

    /// True when both high and low columns are present.
    pub fn has_high_low(&self) -> bool {
        self.high.is_some() && self.low.is_some()
    }

    pub fn has_volume(&self) -> bool {
        self.volume.is_some()
    }
}

fn check_len(column: &'static str, expected: usize, actual: usize) -> Result<(), SeriesError> {
    if expected != actual {
        return Err(SeriesError::ColumnLengthMismatch {
            column,
            expected,
            actual,
        });
    }
    Ok(())
}
