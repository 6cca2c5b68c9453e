//! SatCom Topology Core
//!
//! Models a satellite-communication network as typed objects joined by typed
//! links:
//! 1. **Objects**: satellites, ground stations and user terminals, each with a
//!    registry-assigned identity and a geodetic position
//! 2. **Links**: inter-satellite, ground-station and user-terminal links, each
//!    with its own connection rule
//! 3. **Simulation**: the registry that mints ids and stores objects and links
//!
//! # Example
//!
//! ```
//! use satcom_core::{create_satellite, Simulation, TopologyEntity};
//!
//! let mut simulation = Simulation::new();
//! let a = create_satellite(Some(&mut simulation), "SAT-A", 10).unwrap();
//! let b = create_satellite(Some(&mut simulation), "SAT-B", 20).unwrap();
//!
//! let link = simulation
//!     .create_bidirectional_inter_satellite_connection(&a, &b)
//!     .unwrap();
//! assert_eq!(link.source(), Some(b.handle()));
//! assert_eq!(simulation.link_count(), 1);
//! ```

pub mod error;
pub mod factory;
pub mod link;
pub mod simulation;
pub mod spatial;
pub mod topology;

// Re-export key types for convenience
pub use error::TopologyError;
pub use factory::{create_ground_station, create_satellite, create_user_terminal};
pub use link::{Link, LinkKind};
pub use simulation::{ObjectFilter, Simulation};
pub use spatial::{PositionUpdate, SpatialPoint};
pub use topology::{
    GroundStation, ObjectBase, ObjectHandle, ObjectId, ObjectKind, Satellite, TopologyEntity,
    TopologyObject, UserTerminal,
};
