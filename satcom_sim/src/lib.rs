//! SatCom Scenario Harness
//!
//! Builds complete, reproducible topologies on top of `satcom_core`:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     Constellation                        │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │ Simulation (ids, objects, links)                   │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │       ▲               ▲                  ▲               │
//! │  Satellites      Ground stations    User terminals       │
//! │  (FixedMovement) (gateway sites)    (seeded ChaCha8)     │
//! └──────────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//!                    TopologyReport (JSON)
//! ```
//!
//! # Usage
//!
//! ```
//! use satcom_sim::{Constellation, ConstellationConfig};
//!
//! let config = ConstellationConfig {
//!     planes: 2,
//!     satellites_per_plane: 4,
//!     ..Default::default()
//! };
//!
//! let constellation = Constellation::build(config).unwrap();
//! let report = constellation.report().unwrap();
//! assert_eq!(report.objects_by_kind["Satellite"], 8);
//! ```

mod config;
mod constellation;
mod error;
mod report;

pub use config::{
    ConstellationConfig, GATEWAY_SITES, MAX_PLANES, MAX_SATELLITES_PER_PLANE, MAX_USER_TERMINALS,
    SATELLITE_ID_STRIDE,
};
pub use constellation::{slot_state, Constellation};
pub use error::SimError;
pub use report::{LinkRecord, ObjectRecord, TopologyReport};
