use chrono::{DateTime, Utc};
use rand::Rng;

use crate::core::config::seconds;
use crate::core::errors::FixtureError;
use crate::utils::uniform_between;

/// Uniform Unix timestamp in `[start, end)`, in fractional seconds.
///
/// Equal bounds yield `start`. A `start` after `end` is a caller bug and is
/// rejected without drawing from `rng`, as are non-finite bounds.
pub fn random_timestamp<R: Rng + ?Sized>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<f64, FixtureError> {
    random_timestamp_secs(rng, seconds(start), seconds(end))
}

pub fn random_timestamp_secs<R: Rng + ?Sized>(
    rng: &mut R,
    start: f64,
    end: f64,
) -> Result<f64, FixtureError> {
    if !start.is_finite() || !end.is_finite() {
        return Err(FixtureError::InvalidRange {
            name: "timestamp",
            min: start,
            max: end,
        });
    }
    if start > end {
        return Err(FixtureError::InvertedInterval { start, end });
    }
    Ok(uniform_between(rng, start, end))
}

pub fn random_timestamps<R: Rng + ?Sized>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    count: usize,
) -> Result<Vec<f64>, FixtureError> {
    (0..count)
        .map(|_| random_timestamp(rng, start, end))
        .collect()
}
