//! Movement provider trait for orbital objects.

use crate::error::MovementError;
use std::fmt::Debug;

/// Geodetic coordinates as `(longitude, latitude, altitude)`.
///
/// Degrees, degrees, meters.
pub type Geodetic = (f64, f64, f64);

/// The interface to whatever knows where a satellite is.
///
/// This trait abstracts orbital mechanics so the topology model never has to
/// propagate an orbit itself. A satellite owns at most one provider and only
/// queries it when its position or ascending state is requested.
///
/// # Implementations
///
/// - **Fixed**: `FixedMovement` - constant position, useful for scenarios and tests
/// - **External**: anything backed by a propagator fed with a `TwoLineElement`
pub trait MovementModel: Debug + Send + Sync + 'static {
    /// Returns the current sub-satellite point and altitude.
    ///
    /// # Returns
    /// * `Ok((longitude, latitude, altitude))` - degrees, degrees, meters
    /// * `Err(MovementError::Unavailable)` - the provider has no valid state
    fn get_longitude_latitude_altitude(&self) -> Result<Geodetic, MovementError>;

    /// Returns `true` while the satellite moves northward along its track.
    ///
    /// Used to tag inter-satellite links as ascending/descending/adjacent.
    fn is_ascending(&self) -> Result<bool, MovementError>;
}
