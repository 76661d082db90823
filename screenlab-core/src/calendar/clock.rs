//! Clock capability — the single point of ambient state in the crate.
//!
//! Calendar functions take an instant or a `Clock` explicitly so tests and
//! replays stay deterministic. `SystemClock` is the composition-root
//! implementation; everything below it is pure.

use chrono::NaiveDateTime;

/// Source of the current local wall-clock instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Real clock: local wall time, no timezone interpretation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Clock pinned to one instant, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_returns_its_instant() {
        let instant = NaiveDate::from_ymd_opt(2025, 10, 10)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn system_clock_is_usable_as_trait_object() {
        let clock: &dyn Clock = &SystemClock;
        // Smoke: two reads are monotonically non-decreasing.
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
