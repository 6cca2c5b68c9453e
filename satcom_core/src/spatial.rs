//! Spatial points - the bottom of every topology object.
//!
//! A point is geodetic: longitude and latitude in degrees, altitude in meters
//! above a spherical earth. Conversions to an earth-centred frame use the
//! same spherical approximation for every object, which keeps link lengths
//! consistent across the topology.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Mean equatorial earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// A geodetic position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpatialPoint {
    /// Longitude in degrees
    pub longitude: f64,

    /// Latitude in degrees
    pub latitude: f64,

    /// Altitude in meters
    pub altitude: f64,
}

/// A partial position change.
///
/// Each coordinate left as `None` keeps its current value when applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PositionUpdate {
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub altitude: Option<f64>,
}

impl PositionUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn longitude(mut self, longitude: f64) -> Self {
        self.longitude = Some(longitude);
        self
    }

    pub fn latitude(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self
    }

    pub fn altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }
}

impl SpatialPoint {
    /// Creates a point at the given coordinates.
    pub fn new(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude,
        }
    }

    /// Returns `(longitude, latitude, altitude)`.
    pub fn get_position(&self) -> (f64, f64, f64) {
        (self.longitude, self.latitude, self.altitude)
    }

    /// Applies a partial update, keeping every coordinate that is not supplied.
    pub fn set_position(&mut self, update: PositionUpdate) {
        self.longitude = update.longitude.unwrap_or(self.longitude);
        self.latitude = update.latitude.unwrap_or(self.latitude);
        self.altitude = update.altitude.unwrap_or(self.altitude);
    }

    /// Converts to earth-centred, earth-fixed coordinates in meters.
    pub fn to_ecef(&self) -> Vector3<f64> {
        let lat = self.latitude.to_radians();
        let lon = self.longitude.to_radians();
        let r = EARTH_RADIUS_M + self.altitude;

        Vector3::new(
            r * lat.cos() * lon.cos(),
            r * lat.cos() * lon.sin(),
            r * lat.sin(),
        )
    }

    /// Straight-line distance to another point in meters.
    pub fn distance_to(&self, other: &SpatialPoint) -> f64 {
        (self.to_ecef() - other.to_ecef()).norm()
    }
}

impl From<(f64, f64, f64)> for SpatialPoint {
    fn from((longitude, latitude, altitude): (f64, f64, f64)) -> Self {
        Self::new(longitude, latitude, altitude)
    }
}
