use std::path::PathBuf;

/// Profile validation failures. Raised once, when an engine is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{table}: table has no entries")]
    EmptyTable { table: String },

    #[error("{table}: bound {value} at entry {index} is not within {min}..={max}")]
    BoundOutOfRange {
        table: String,
        index: usize,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{table}: bounds are not strictly {expected} at entry {index}")]
    NonMonotonicBounds {
        table: String,
        index: usize,
        expected: &'static str,
    },

    #[error("{table}: level decreases at entry {index}")]
    NonMonotonicLevels { table: String, index: usize },

    #[error("{table}: entry {index} has level 0; levels start at 1")]
    ZeroLevel { table: String, index: usize },

    #[error("{table}: ceiling {ceiling} is below the last level {last}")]
    CeilingBelowLevel {
        table: String,
        ceiling: u8,
        last: u8,
    },

    #[error("score range {min}..={max} is invalid")]
    InvalidScoreRange { min: u8, max: u8 },

    #[error("risk: band {index} has min {min} above max {max}")]
    ReversedRiskBand { index: usize, min: u8, max: u8 },

    #[error("risk: band {index} starts at {found}, expected {expected} (gap or overlap)")]
    RiskDiscontinuity {
        index: usize,
        expected: u8,
        found: u8,
    },

    #[error("risk: bands end at {covered}, score range ends at {max}")]
    RiskCoverage { covered: u8, max: u8 },

    #[error("risk: level {level} at band {index} is not above the previous band")]
    RiskLevelOrder { index: usize, level: &'static str },

    #[error("{field}: expected a finite value within {min}..={max}, got {value}")]
    InvalidParameter {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid frame record {record}: {reason}")]
    InvalidFrame { record: usize, reason: String },

    #[error("no frames found in {}", .0.display())]
    NoFrames(PathBuf),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
