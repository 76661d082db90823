//! Domain types for ScreenLab: bars, series, interchange, fixtures.

pub mod bar;
pub mod frame;
pub mod series;
pub mod synthetic;

pub use bar::PriceBar;
pub use series::{PriceSeries, SeriesError};
pub use synthetic::synthetic_bars;

/// Symbol type alias
pub type Symbol = String;
