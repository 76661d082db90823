//! Trading calendar resolver.
//!
//! Determines whether the market is open, which trading day last completed,
//! and which historical range a simulation should replay. All functions are
//! pure over an injected instant; only [`SystemClock`] touches ambient
//! state. Weekend-only by default — holidays live behind the
//! [`HolidayCalendar`] seam.

pub mod clock;
pub mod resolver;
pub mod session;
pub mod window;

pub use clock::{Clock, FixedClock, SystemClock};
pub use resolver::{HolidayCalendar, NoHolidays, TradingCalendar};
pub use session::{is_market_open, is_weekend};
pub use window::{simulation_window, SimulationReason, SimulationStatus};
