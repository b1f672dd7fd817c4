//! Error types for the segmenter

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SegmentError {
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Invalid parameter for {strategy}: {reason}")]
    InvalidParameter {
        strategy: &'static str,
        reason: String,
    },

    #[error("Invalid boundaries: {0}")]
    InvalidBoundaries(String),

    #[error("Export does not match its boundaries: {0}")]
    ExportMismatch(String),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Validity window is inverted: min {min} > max {max}")]
    InvalidWindow { min: usize, max: usize },

    #[error("Ideal letter count must be greater than zero")]
    ZeroIdeal,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
