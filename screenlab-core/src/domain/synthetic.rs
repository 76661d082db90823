//! Deterministic synthetic price history for tests, demos, and benches.
//!
//! Random walk seeded from the symbol name, so the same symbol always
//! produces the same bars and different symbols diverge. Weekend dates are
//! skipped to match the daily-bar shape real feeds produce.

use crate::domain::PriceBar;
use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate daily bars for `symbol` over `[start, end]`, weekdays only.
///
/// Prices follow a bounded random walk from 100.0 with intraday ranges
/// derived from the walk, and volumes in a plausible retail-equity band.
pub fn synthetic_bars(symbol: &str, start: NaiveDate, end: NaiveDate) -> Vec<PriceBar> {
    let seed: [u8; 32] = *blake3::hash(symbol.as_bytes()).as_bytes();
    let mut rng = StdRng::from_seed(seed);

    let mut bars = Vec::new();
    let mut price = 100.0_f64;
    let mut current = start;

    while current <= end {
        let weekday = current.weekday();
        if weekday == Weekday::Sat || weekday == Weekday::Sun {
            current += chrono::Duration::days(1);
            continue;
        }

        let daily_return: f64 = rng.gen_range(-0.03..0.03);
        let close = price * (1.0 + daily_return);
        let high = price.max(close) * (1.0 + rng.gen_range(0.0..0.01));
        let low = price.min(close) * (1.0 - rng.gen_range(0.0..0.01));
        let volume = rng.gen_range(500_000.0..5_000_000.0_f64);

        bars.push(PriceBar {
            date: current,
            high,
            low,
            close,
            volume,
        });

        price = close;
        current += chrono::Duration::days(1);
    }

    bars
}
