//! Error types for the SatCom movement abstraction.

use thiserror::Error;

/// Errors raised by movement providers and orbital parameter parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MovementError {
    /// Two-line element set is malformed
    #[error("Invalid TLE: {0}")]
    InvalidTle(String),

    /// The provider could not produce a state (e.g. epoch out of range)
    #[error("Movement state unavailable: {0}")]
    Unavailable(String),
}

impl MovementError {
    /// Creates an invalid TLE error.
    pub fn invalid_tle(msg: impl Into<String>) -> Self {
        Self::InvalidTle(msg.into())
    }

    /// Creates an unavailable-state error.
    pub fn unavailable(msg: impl std::fmt::Display) -> Self {
        Self::Unavailable(msg.to_string())
    }
}
