use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::FixtureError;
use crate::models::OrderStatus;

/// Anything beyond this is noise in the last digits of an `f64`.
const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn start_secs(&self) -> f64 {
        seconds(self.start)
    }

    pub fn end_secs(&self) -> f64 {
        seconds(self.end)
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            start: midnight_utc(2020),
            end: midnight_utc(2024),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    fn validate(&self, name: &'static str) -> Result<(), FixtureError> {
        let valid = self.min.is_finite()
            && self.max.is_finite()
            && self.min >= 0.0
            && self.min < self.max;
        if valid {
            Ok(())
        } else {
            Err(FixtureError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecisionRange {
    pub min: usize,
    pub max: usize,
}

/// Knobs for closed order generation.
///
/// Loaded from TOML, every key is optional. Datetimes are RFC 3339 strings:
///
/// ```toml
/// fee_rate = 0.0016
/// closed_statuses = ["closed"]
///
/// [window]
/// start = "2022-01-01T00:00:00Z"
/// end = "2023-01-01T00:00:00Z"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub window: TimeWindow,
    pub price: ValueRange,
    pub volume: ValueRange,
    pub precision: PrecisionRange,
    pub fee_rate: f64,
    pub closed_statuses: Vec<OrderStatus>,
    pub user_ref: i64,
    pub cancel_reason: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            window: TimeWindow::default(),
            price: ValueRange {
                min: 0.0001,
                max: 50_000.0,
            },
            volume: ValueRange {
                min: 0.1,
                max: 1000.0,
            },
            precision: PrecisionRange { min: 3, max: 8 },
            fee_rate: 0.0026,
            closed_statuses: OrderStatus::CLOSED.to_vec(),
            user_ref: 1,
            cancel_reason: "User requested".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, FixtureError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), FixtureError> {
        if self.window.start >= self.window.end {
            return Err(FixtureError::InvertedInterval {
                start: self.window.start_secs(),
                end: self.window.end_secs(),
            });
        }
        self.price.validate("price")?;
        self.volume.validate("volume")?;

        if !self.fee_rate.is_finite() || self.fee_rate < 0.0 {
            return Err(FixtureError::InvalidRange {
                name: "fee_rate",
                min: self.fee_rate,
                max: self.fee_rate,
            });
        }

        let PrecisionRange { min, max } = self.precision;
        if min > max || max > MAX_PRECISION {
            return Err(FixtureError::InvalidPrecision { min, max });
        }

        if self.closed_statuses.is_empty() {
            return Err(FixtureError::NoClosedStatuses);
        }
        if let Some(status) = self.closed_statuses.iter().find(|s| !s.is_terminal()) {
            return Err(FixtureError::NonTerminalStatus(status.to_string()));
        }

        Ok(())
    }
}

fn midnight_utc(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .expect("January 1st midnight is unambiguous in UTC")
}

pub(crate) fn seconds(at: DateTime<Utc>) -> f64 {
    at.timestamp() as f64 + f64::from(at.timestamp_subsec_nanos()) / 1e9
}
