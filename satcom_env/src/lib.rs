//! SatCom Environment Abstraction Layer
//!
//! This crate holds the contracts the topology model consumes from the outside
//! world without implementing them itself:
//! - **Movement**: where a satellite is and which way it is heading
//! - **Orbital parameters**: two-line element sets handed to a propagator
//!
//! Orbital propagation is deliberately absent. A satellite asks its provider
//! lazily, only when its position or ascending state is requested.
//!
//! # Example
//!
//! ```
//! use satcom_env::{FixedMovement, MovementModel};
//!
//! let model = FixedMovement::new(2.35, 48.85, 550_000.0, true);
//! let (lon, lat, alt) = model.get_longitude_latitude_altitude().unwrap();
//! assert_eq!((lon, lat, alt), (2.35, 48.85, 550_000.0));
//! ```

mod error;
mod fixed;
mod movement;
mod types;

pub use error::MovementError;
pub use fixed::FixedMovement;
pub use movement::{Geodetic, MovementModel};
pub use types::{tle_checksum, TwoLineElement};
