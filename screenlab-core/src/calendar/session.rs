//! Market session test — weekday plus time-of-day window.

use crate::config::CalendarConfig;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

/// Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether the market is open at `instant`.
///
/// Open iff the date is a weekday and the time-of-day lies in
/// `[session_open, session_close]` — closed on both ends, at second
/// granularity. Holidays are not consulted here; see
/// [`TradingCalendar`](crate::calendar::TradingCalendar) for the seam.
pub fn is_market_open(instant: NaiveDateTime, cfg: &CalendarConfig) -> bool {
    if is_weekend(instant.date()) {
        return false;
    }
    let tod = instant.time();
    tod >= cfg.session_open && tod <= cfg.session_close
}
