//! Error types for the topology core.

use crate::link::LinkKind;
use crate::topology::{ObjectHandle, ObjectId, ObjectKind};
use satcom_env::MovementError;
use thiserror::Error;

/// Errors raised by topology operations.
///
/// Every variant is returned at the point of detection; nothing in the core
/// retries or swallows them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopologyError {
    #[error("Cannot connect {endpoint} to itself")]
    SameEndpoint { endpoint: ObjectHandle },

    #[error("Inter-satellite link cannot connect {source_kind} - {destination_kind}")]
    InterSatelliteConnection {
        source_kind: ObjectKind,
        destination_kind: ObjectKind,
    },

    #[error("Ground station link cannot connect {source_kind} - {destination_kind}")]
    GroundStationConnection {
        source_kind: ObjectKind,
        destination_kind: ObjectKind,
    },

    #[error("User terminal link cannot connect {source_kind} - {destination_kind}")]
    UserTerminalConnection {
        source_kind: ObjectKind,
        destination_kind: ObjectKind,
    },

    #[error("A simulation context is required to create topology objects")]
    MissingSimulationContext,

    #[error("Topology object not found: {0}")]
    NotFound(String),

    #[error("Satellite {id} has no movement model attached")]
    MissingMovementModel { id: ObjectId },

    #[error("Topology object {0} is already registered")]
    DuplicateObject(ObjectHandle),

    #[error("Topology object {0} was not issued by this simulation")]
    ForeignObject(ObjectHandle),

    #[error("Cannot record an unconnected {0} link")]
    UnconnectedLink(LinkKind),

    #[error(transparent)]
    Movement(#[from] MovementError),
}

impl TopologyError {
    /// Creates a not-found error.
    pub fn not_found(what: impl std::fmt::Display) -> Self {
        Self::NotFound(what.to_string())
    }

    /// Returns `true` for every failure raised by `Link::connect`.
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            Self::SameEndpoint { .. }
                | Self::InterSatelliteConnection { .. }
                | Self::GroundStationConnection { .. }
                | Self::UserTerminalConnection { .. }
        )
    }
}
