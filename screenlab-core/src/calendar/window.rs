//! Simulation window planning and the bundled calendar status.
//!
//! When the market is closed the screener replays its strategy against a
//! historical range ending just before the last completed session. The
//! range is sized in calendar days from a trading-day count via a fixed
//! expansion multiplier — close enough for planning, with no calendar walk.

use crate::calendar::clock::Clock;
use crate::calendar::resolver::TradingCalendar;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Why the simulation window was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationReason {
    #[serde(rename = "Market closed")]
    MarketClosed,

    #[serde(rename = "Testing mode")]
    TestingMode,
}

impl std::fmt::Display for SimulationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationReason::MarketClosed => write!(f, "Market closed"),
            SimulationReason::TestingMode => write!(f, "Testing mode"),
        }
    }
}

/// Everything the downstream job needs to pick its analysis range.
/// Derived per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationStatus {
    pub last_trading_day: NaiveDate,
    pub market_currently_open: bool,
    pub analysis_start: NaiveDate,
    pub analysis_end: NaiveDate,
    pub reason: SimulationReason,
}

impl SimulationStatus {
    /// Resolve the full calendar status at the clock's current instant.
    pub fn compute(calendar: &TradingCalendar, clock: &dyn Clock) -> Self {
        let now = clock.now();
        let market_currently_open = calendar.is_market_open(now);
        let last_trading_day = calendar.last_completed_trading_day(now);
        let cfg = calendar.config();
        let (analysis_start, analysis_end) = simulation_window(
            last_trading_day,
            cfg.analysis_days,
            cfg.calendar_day_multiplier,
        );

        Self {
            last_trading_day,
            market_currently_open,
            analysis_start,
            analysis_end,
            reason: if market_currently_open {
                SimulationReason::TestingMode
            } else {
                SimulationReason::MarketClosed
            },
        }
    }
}

/// Analysis date range for a resolved trading day.
///
/// The end is the calendar day before the trading day; the start reaches
/// back `floor(analysis_days * multiplier)` calendar days so roughly
/// `analysis_days` trading days fit once weekends are absorbed.
pub fn simulation_window(
    last_trading_day: NaiveDate,
    analysis_days: u32,
    multiplier: f64,
) -> (NaiveDate, NaiveDate) {
    let end = last_trading_day - Duration::days(1);
    let span = (analysis_days as f64 * multiplier).floor() as i64;
    let start = last_trading_day - Duration::days(span);
    (start, end)
}
