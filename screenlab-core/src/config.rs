//! Screener configuration — every tuning constant in one place.
//!
//! The metrics and calendar code takes these structs explicitly instead of
//! burying numeric literals in formulas, so a sweep or a test can override
//! any knob without touching the algorithms. Stored as TOML, same shape as
//! the serialized structs.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tuning knobs for the adaptive metrics engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Rolling window length for the ATR average, in bars.
    pub atr_period: usize,

    /// ATR as a fraction of price, assumed when the series is empty, too
    /// short for the window, lacks high/low columns, or has a non-positive
    /// last close. Downstream consumers never branch on missing data.
    pub atr_fallback_pct: f64,

    /// Lower clamp for the confirmation threshold, in percent.
    pub min_threshold_pct: f64,

    /// Upper clamp for the confirmation threshold, in percent.
    pub max_threshold_pct: f64,

    /// Fraction of the percentage volatility used as the raw threshold.
    pub threshold_atr_factor: f64,

    /// Threshold reported for an empty series, in percent.
    pub fallback_threshold_pct: f64,

    /// ATR fraction below which volatility is categorized as low.
    pub low_vol_cutoff: f64,

    /// ATR fraction at or above which volatility is categorized as high.
    pub high_vol_cutoff: f64,

    /// Share count that earns one `volume_score_per_unit` of liquidity.
    pub volume_unit: f64,

    /// Liquidity points granted per `volume_unit` of average daily volume.
    pub volume_score_per_unit: f64,

    /// Cap on the volume half of the liquidity score.
    pub volume_score_cap: f64,

    /// Starting value of the spread half of the liquidity score.
    pub spread_score_base: f64,

    /// Points subtracted per percent of average high-low spread.
    pub spread_penalty_per_pct: f64,

    /// Spread score assumed when high/low columns are absent.
    pub neutral_spread_score: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            atr_period: 14,
            atr_fallback_pct: 0.02,
            min_threshold_pct: 0.5,
            max_threshold_pct: 1.0,
            threshold_atr_factor: 0.5,
            fallback_threshold_pct: 0.75,
            low_vol_cutoff: 0.02,
            high_vol_cutoff: 0.03,
            volume_unit: 1_000_000.0,
            volume_score_per_unit: 5.0,
            volume_score_cap: 50.0,
            spread_score_base: 50.0,
            spread_penalty_per_pct: 10.0,
            neutral_spread_score: 25.0,
        }
    }
}

/// Session hours and window planning knobs for the trading calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// First second of the regular session (local wall clock).
    pub session_open: NaiveTime,

    /// Last second of the regular session. A day is only treated as a
    /// completed session at or after this time.
    pub session_close: NaiveTime,

    /// Number of trading days a simulation window should cover.
    pub analysis_days: u32,

    /// Calendar-day expansion factor: trading days to calendar days,
    /// approximating weekends without walking the calendar.
    pub calendar_day_multiplier: f64,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            session_open: NaiveTime::from_hms_opt(9, 31, 0).unwrap(),
            session_close: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
            analysis_days: 20,
            calendar_day_multiplier: 1.4,
        }
    }
}

/// Complete screener configuration: metrics engine plus trading calendar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenerConfig {
    pub metrics: MetricsConfig,
    pub calendar: CalendarConfig,
}

impl ScreenerConfig {
    /// Load a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("read config file: {e}"))?;
        Self::from_toml(&content)
    }

    /// Parse a configuration from a TOML string. Missing fields fall back
    /// to their defaults.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("parse config TOML: {e}"))
    }

    /// Serialize the configuration to TOML.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("serialize config: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_consistent() {
        let cfg = MetricsConfig::default();
        assert_eq!(cfg.atr_period, 14);
        assert!(cfg.min_threshold_pct <= cfg.max_threshold_pct);
        assert!(cfg.low_vol_cutoff < cfg.high_vol_cutoff);
        assert!(cfg.fallback_threshold_pct >= cfg.min_threshold_pct);
        assert!(cfg.fallback_threshold_pct <= cfg.max_threshold_pct);
    }

    #[test]
    fn session_hours_default() {
        let cfg = CalendarConfig::default();
        assert_eq!(cfg.session_open, NaiveTime::from_hms_opt(9, 31, 0).unwrap());
        assert_eq!(cfg.session_close, NaiveTime::from_hms_opt(16, 0, 0).unwrap());
    }

    #[test]
    fn toml_roundtrip() {
        let cfg = ScreenerConfig::default();
        let toml_str = cfg.to_toml().unwrap();
        let parsed = ScreenerConfig::from_toml(&toml_str).unwrap();
        assert_eq!(cfg, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let cfg = ScreenerConfig::from_toml(
            r#"
            [metrics]
            atr_period = 20

            [calendar]
            analysis_days = 30
            "#,
        )
        .unwrap();
        assert_eq!(cfg.metrics.atr_period, 20);
        assert_eq!(cfg.metrics.atr_fallback_pct, 0.02);
        assert_eq!(cfg.calendar.analysis_days, 30);
        assert_eq!(cfg.calendar.calendar_day_multiplier, 1.4);
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(ScreenerConfig::from_toml("metrics = 3").is_err());
    }
}
