//! Constant-state implementation of MovementModel.

use crate::error::MovementError;
use crate::movement::{Geodetic, MovementModel};
use std::sync::Arc;

/// Movement provider that always reports the same state.
///
/// Stands in for a real propagator in scenarios and tests: the satellite
/// sits at a fixed sub-satellite point with a fixed track direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMovement {
    /// Longitude in degrees
    longitude: f64,

    /// Latitude in degrees
    latitude: f64,

    /// Altitude in meters
    altitude: f64,

    /// Northward motion flag
    ascending: bool,
}

impl FixedMovement {
    /// Creates a provider pinned at the given coordinates.
    pub fn new(longitude: f64, latitude: f64, altitude: f64, ascending: bool) -> Self {
        Self {
            longitude,
            latitude,
            altitude,
            ascending,
        }
    }

    /// Creates an Arc-wrapped provider for sharing across satellites.
    pub fn shared(longitude: f64, latitude: f64, altitude: f64, ascending: bool) -> Arc<Self> {
        Arc::new(Self::new(longitude, latitude, altitude, ascending))
    }
}

impl Default for FixedMovement {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, true)
    }
}

impl MovementModel for FixedMovement {
    fn get_longitude_latitude_altitude(&self) -> Result<Geodetic, MovementError> {
        if !(self.longitude.is_finite() && self.latitude.is_finite() && self.altitude.is_finite()) {
            return Err(MovementError::unavailable("non-finite fixed position"));
        }
        Ok((self.longitude, self.latitude, self.altitude))
    }

    fn is_ascending(&self) -> Result<bool, MovementError> {
        Ok(self.ascending)
    }
}

impl<M: MovementModel> MovementModel for Arc<M> {
    fn get_longitude_latitude_altitude(&self) -> Result<Geodetic, MovementError> {
        (**self).get_longitude_latitude_altitude()
    }

    fn is_ascending(&self) -> Result<bool, MovementError> {
        (**self).is_ascending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_movement_position() {
        let model = FixedMovement::new(2.35, 48.85, 550_000.0, false);

        assert_eq!(
            model.get_longitude_latitude_altitude().unwrap(),
            (2.35, 48.85, 550_000.0)
        );
        assert!(!model.is_ascending().unwrap());
    }

    #[test]
    fn test_fixed_movement_rejects_nan() {
        let model = FixedMovement::new(f64::NAN, 0.0, 0.0, true);
        assert!(matches!(
            model.get_longitude_latitude_altitude(),
            Err(MovementError::Unavailable(_))
        ));
    }

    #[test]
    fn test_shared_movement_delegates() {
        let model = FixedMovement::shared(10.0, -5.0, 1_200_000.0, true);
        let other = Arc::clone(&model);

        assert_eq!(
            other.get_longitude_latitude_altitude().unwrap(),
            (10.0, -5.0, 1_200_000.0)
        );
        assert!(other.is_ascending().unwrap());
    }
}
