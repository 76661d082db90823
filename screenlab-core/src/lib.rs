//! ScreenLab Core — volatility-adaptive screening metrics and the trading
//! calendar that schedules their replay.
//!
//! This crate is the computational heart of the screening pipeline:
//! - Domain types (price bars, column-oriented price series, interchange)
//! - Adaptive metrics engine (true range/ATR, confirmation threshold,
//!   liquidity score, per-symbol snapshot)
//! - Trading calendar (market-open test, last completed session,
//!   simulation window planning)
//! - Explicit configuration for every tuning constant
//!
//! Everything is a pure function over its inputs; the only ambient state
//! is the wall clock, injected through the `Clock` trait. Persistence,
//! data fetching, and any HTTP/CLI surface live in the collaborators that
//! call this crate.

pub mod calendar;
pub mod config;
pub mod domain;
pub mod metrics;
