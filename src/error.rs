//! Error types
//!
//! Everything here except `Config` and `Io` is a contract violation by the
//! caller. The engine reports it instead of clamping.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WheelError {
    #[error("segment count must be at least 1")]
    InvalidSegmentCount,

    #[error("target index {index} out of range for {count} segments")]
    TargetOutOfRange { index: usize, count: usize },

    #[error("invalid radii: inner {inner} must be >= 0 and < outer {outer}")]
    InvalidRadii { inner: f64, outer: f64 },

    #[error("gap of {gap} degrees must be >= 0 and < the {span} degree segment")]
    InvalidGap { gap: f64, span: f64 },

    #[error("rotation must be finite, got {0}")]
    NonFiniteRotation(f64),

    #[error("spin duration must be positive and finite, got {0}")]
    InvalidDuration(f64),

    #[error("wheel is already spinning")]
    AlreadySpinning,

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WheelError>;
