//! Trading calendar — last completed session relative to an instant.
//!
//! Weekday-only by default: the resolver walks back over weekends and asks
//! an optional [`HolidayCalendar`] about everything else. The default
//! provider knows no holidays, so a date that is in fact a market holiday
//! can be returned — a documented approximation, kept behind the seam so a
//! real holiday table can be plugged in without touching the walk.

use crate::calendar::session::{is_market_open, is_weekend};
use crate::config::CalendarConfig;
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Provider of market-holiday knowledge.
///
/// Implementations answer for dates that are already weekdays; weekends
/// are handled before this trait is consulted.
pub trait HolidayCalendar: Send + Sync {
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// Default provider: no holidays, weekend-only calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// Session hours plus holiday knowledge, resolved against injected instants.
pub struct TradingCalendar {
    config: CalendarConfig,
    holidays: Box<dyn HolidayCalendar>,
}

impl TradingCalendar {
    /// Weekend-only calendar with the given session hours.
    pub fn new(config: CalendarConfig) -> Self {
        Self {
            config,
            holidays: Box::new(NoHolidays),
        }
    }

    /// Calendar consulting a holiday provider in addition to weekends.
    pub fn with_holidays(config: CalendarConfig, holidays: Box<dyn HolidayCalendar>) -> Self {
        Self { config, holidays }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Weekday that is not a provider-flagged holiday.
    pub fn is_trading_day(&self, date: NaiveDate) -> bool {
        !is_weekend(date) && !self.holidays.is_holiday(date)
    }

    /// Whether the market is open at `instant`: trading day and
    /// time-of-day within the session window.
    pub fn is_market_open(&self, instant: NaiveDateTime) -> bool {
        is_market_open(instant, &self.config) && !self.holidays.is_holiday(instant.date())
    }

    /// The most recent trading day whose session has completed as of
    /// `reference`.
    ///
    /// Before the session close the reference day's own session is not
    /// complete, so the candidate starts one day earlier; the walk then
    /// skips backward over weekends and holidays.
    pub fn last_completed_trading_day(&self, reference: NaiveDateTime) -> NaiveDate {
        let mut day = if reference.time() < self.config.session_close {
            reference.date() - Duration::days(1)
        } else {
            reference.date()
        };
        while !self.is_trading_day(day) {
            day -= Duration::days(1);
        }
        day
    }
}

impl std::fmt::Debug for TradingCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradingCalendar")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
