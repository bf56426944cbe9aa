//! Configuration errors
//!
//! The simulation itself cannot fail; everything that can go wrong is caught
//! when settings are loaded or a session is built.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    EmptyLayout,
    ZeroColumns,
    NonPositiveBlockSize {
        width: i32,
        height: i32,
    },
    NonPositiveSize {
        what: &'static str,
        width: i32,
        height: i32,
    },
    NegativePaddleSpeed(i32),
    PaddleSpeedTooHigh {
        speed: i32,
        max: i32,
    },
    StartVelocityOutOfRange {
        x: i32,
        y: i32,
        limit: i32,
    },
    ZeroStartVelocity,
    InvalidBounceRange {
        min: i32,
        max: i32,
    },
    Io(String),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLayout => write!(f, "block layout must contain at least one block"),
            Self::ZeroColumns => write!(f, "block layout must have at least one column per row"),
            Self::NonPositiveBlockSize { width, height } => {
                write!(f, "block size must be positive: got {width}x{height}")
            }
            Self::NonPositiveSize {
                what,
                width,
                height,
            } => write!(f, "{what} size must be positive: got {width}x{height}"),
            Self::NegativePaddleSpeed(speed) => {
                write!(f, "paddle speed must not be negative: got {speed}")
            }
            Self::PaddleSpeedTooHigh { speed, max } => {
                write!(f, "paddle speed must be at most {max}: got {speed}")
            }
            Self::StartVelocityOutOfRange { x, y, limit } => write!(
                f,
                "ball start velocity must be below {limit} on each axis: got ({x}, {y})"
            ),
            Self::ZeroStartVelocity => write!(f, "ball start velocity must not be zero"),
            Self::InvalidBounceRange { min, max } => write!(
                f,
                "bounce speed range must be positive and non-empty: got [{min}, {max})"
            ),
            Self::Io(msg) => write!(f, "could not read settings: {msg}"),
            Self::Parse(msg) => write!(f, "could not parse settings: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
