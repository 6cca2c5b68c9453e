//! Error types for the scenario harness.

use satcom_core::TopologyError;
use thiserror::Error;

/// Errors raised while building or exporting a scenario.
#[derive(Debug, Error)]
pub enum SimError {
    /// Configuration rejected before anything was built
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A topology operation failed
    #[error(transparent)]
    Topology(#[from] TopologyError),

    /// Report file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    /// Creates a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
