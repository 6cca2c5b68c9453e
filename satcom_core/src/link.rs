//! Communication links and their connection rules.
//!
//! A link is typed by its [`LinkKind`]. The kind decides, through a pure
//! table over object kinds, which (source, destination) pairs it accepts:
//!
//! ```text
//! InterSatellite   Satellite     <-> Satellite
//! GroundStation    GroundStation <-> Satellite   (either direction)
//! UserTerminal     UserTerminal  <-> Satellite   (either direction)
//! ```
//!
//! Connecting an object to itself is rejected before the table is consulted.

use crate::error::TopologyError;
use crate::topology::{ObjectHandle, ObjectKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// The three link variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    InterSatellite,
    GroundStation,
    UserTerminal,
}

impl LinkKind {
    pub const ALL: [LinkKind; 3] = [
        LinkKind::InterSatellite,
        LinkKind::GroundStation,
        LinkKind::UserTerminal,
    ];

    /// Decides whether this kind of link may join `source` to `destination`.
    pub fn accepts(self, source: ObjectKind, destination: ObjectKind) -> bool {
        use ObjectKind::*;

        match self {
            LinkKind::InterSatellite => matches!((source, destination), (Satellite, Satellite)),
            LinkKind::GroundStation => matches!(
                (source, destination),
                (GroundStation, Satellite) | (Satellite, GroundStation)
            ),
            LinkKind::UserTerminal => matches!(
                (source, destination),
                (UserTerminal, Satellite) | (Satellite, UserTerminal)
            ),
        }
    }

    /// The error this kind reports for a pair it does not accept.
    fn mismatch(self, source_kind: ObjectKind, destination_kind: ObjectKind) -> TopologyError {
        match self {
            LinkKind::InterSatellite => TopologyError::InterSatelliteConnection {
                source_kind,
                destination_kind,
            },
            LinkKind::GroundStation => TopologyError::GroundStationConnection {
                source_kind,
                destination_kind,
            },
            LinkKind::UserTerminal => TopologyError::UserTerminalConnection {
                source_kind,
                destination_kind,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LinkKind::InterSatellite => "InterSatelliteLink",
            LinkKind::GroundStation => "GroundStationLink",
            LinkKind::UserTerminal => "UserTerminalLink",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed communication link between two topology objects.
///
/// The link only holds handles; it never owns the objects it joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    kind: LinkKind,
    connection: Option<(ObjectHandle, ObjectHandle)>,
}

impl Link {
    /// Creates an unconnected link of the given kind.
    pub fn new(kind: LinkKind) -> Self {
        Self {
            kind,
            connection: None,
        }
    }

    pub fn inter_satellite() -> Self {
        Self::new(LinkKind::InterSatellite)
    }

    pub fn ground_station() -> Self {
        Self::new(LinkKind::GroundStation)
    }

    pub fn user_terminal() -> Self {
        Self::new(LinkKind::UserTerminal)
    }

    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    /// Connects `source` to `destination`.
    ///
    /// Direction is kept exactly as given. Calling this on an already
    /// connected link replaces its endpoints; a failed call leaves the link
    /// untouched.
    ///
    /// # Errors
    /// * `SameEndpoint` - both arguments name the same object
    /// * `InterSatelliteConnection` / `GroundStationConnection` /
    ///   `UserTerminalConnection` - the pair is not accepted by this kind
    pub fn connect(
        &mut self,
        source: impl Into<ObjectHandle>,
        destination: impl Into<ObjectHandle>,
    ) -> Result<(), TopologyError> {
        let source = source.into();
        let destination = destination.into();

        if source.id() == destination.id() {
            debug!("{} rejected self-connection of {}", self.kind, source);
            return Err(TopologyError::SameEndpoint { endpoint: source });
        }

        if !self.kind.accepts(source.kind(), destination.kind()) {
            debug!("{} rejected {} -> {}", self.kind, source, destination);
            return Err(self.kind.mismatch(source.kind(), destination.kind()));
        }

        self.connection = Some((source, destination));
        debug!("{} connected {} -> {}", self.kind, source, destination);
        Ok(())
    }

    /// Clears the endpoints, returning them if the link was connected.
    pub fn disconnect(&mut self) -> Option<(ObjectHandle, ObjectHandle)> {
        self.connection.take()
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    pub fn source(&self) -> Option<ObjectHandle> {
        self.connection.map(|(source, _)| source)
    }

    pub fn destination(&self) -> Option<ObjectHandle> {
        self.connection.map(|(_, destination)| destination)
    }

    pub fn endpoints(&self) -> Option<(ObjectHandle, ObjectHandle)> {
        self.connection
    }

    /// Returns `true` if `handle` is either endpoint.
    pub fn involves(&self, handle: ObjectHandle) -> bool {
        self.connection
            .map_or(false, |(source, destination)| source == handle || destination == handle)
    }
}
