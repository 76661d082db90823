//! DataFrame interchange — build a PriceSeries from a polars DataFrame.
//!
//! The upstream screening job holds per-symbol history as a DataFrame.
//! Only `close` is required; `high`, `low`, and `volume` are picked up
//! when present so the corresponding metrics can compute instead of
//! degrading. Missing optional columns are not an error.

use crate::domain::{PriceSeries, SeriesError};
use polars::prelude::*;

impl PriceSeries {
    /// Extract a price series from a DataFrame.
    ///
    /// Requires a Float64 `close` column. `high`, `low`, and `volume` are
    /// optional; `volume` may be Float64 or UInt64. Null cells become NaN
    /// and are handled downstream by the metric fallbacks.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self, SeriesError> {
        let close = required_f64(df, "close")?;

        let mut series = PriceSeries::from_closes(close);

        // high/low only count when both are present; one without the
        // other cannot produce a spread or a true range.
        if df.column("high").is_ok() && df.column("low").is_ok() {
            let high = required_f64(df, "high")?;
            let low = required_f64(df, "low")?;
            series = series.with_high_low(high, low)?;
        }

        if df.column("volume").is_ok() {
            series = series.with_volume(volume_f64(df)?)?;
        }

        Ok(series)
    }
}

fn required_f64(df: &DataFrame, name: &'static str) -> Result<Vec<f64>, SeriesError> {
    let col = df
        .column(name)
        .map_err(|_| SeriesError::MissingColumn(name))?;
    let ca = col.f64().map_err(|e| SeriesError::ColumnType {
        column: name,
        detail: e.to_string(),
    })?;
    Ok(ca.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

/// Volume arrives as Float64 from some feeds and UInt64 from others.
fn volume_f64(df: &DataFrame) -> Result<Vec<f64>, SeriesError> {
    let col = df
        .column("volume")
        .map_err(|_| SeriesError::MissingColumn("volume"))?;
    if let Ok(ca) = col.f64() {
        return Ok(ca.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect());
    }
    let ca = col.u64().map_err(|e| SeriesError::ColumnType {
        column: "volume",
        detail: e.to_string(),
    })?;
    Ok(ca
        .into_iter()
        .map(|v| v.map(|x| x as f64).unwrap_or(f64::NAN))
        .collect())
}
