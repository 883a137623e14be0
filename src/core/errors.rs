use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Inverted time interval: start {start} is after end {end}")]
    InvertedInterval { start: f64, end: f64 },
    #[error("Invalid {name} range: [{min}, {max})")]
    InvalidRange { name: &'static str, min: f64, max: f64 },
    #[error("Invalid decimal precision range: [{min}, {max}]")]
    InvalidPrecision { min: usize, max: usize },
    #[error("No closed statuses configured")]
    NoClosedStatuses,
    #[error("Status {0} is not a closed order status")]
    NonTerminalStatus(String),
    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
