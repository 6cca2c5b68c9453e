//! Scenario configuration.

use crate::error::SimError;

/// Gateway sites ground stations are placed at: (city, longitude, latitude).
pub const GATEWAY_SITES: [(&str, f64, f64); 8] = [
    ("Tempe", -111.94, 33.43),
    ("Fairbanks", -147.72, 64.84),
    ("Longyearbyen", 15.63, 78.22),
    ("Punta Arenas", -70.91, -53.16),
    ("Yellowknife", -114.37, 62.45),
    ("Avezzano", 13.43, 42.03),
    ("Toulouse", 1.44, 43.60),
    ("Kourou", -52.65, 5.16),
];

/// Satellite business ids are `(plane + 1) * SATELLITE_ID_STRIDE + slot`.
pub const SATELLITE_ID_STRIDE: usize = 100;

/// Largest plane size that keeps satellite ids unique.
pub const MAX_SATELLITES_PER_PLANE: usize = SATELLITE_ID_STRIDE - 1;

pub const MAX_PLANES: usize = 100;

pub const MAX_USER_TERMINALS: usize = 100_000;

/// Configuration for a constellation scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstellationConfig {
    /// Seed for user terminal placement
    pub seed: u64,

    /// Number of orbital planes
    pub planes: usize,

    /// Satellites in each plane
    pub satellites_per_plane: usize,

    /// Orbit altitude in meters
    pub altitude_m: f64,

    /// Orbit inclination in degrees
    pub inclination_deg: f64,

    /// Ground stations, taken in order from `GATEWAY_SITES`
    pub ground_stations: usize,

    /// Randomly placed user terminals
    pub user_terminals: usize,
}

impl Default for ConstellationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            planes: 6,
            satellites_per_plane: 11,
            altitude_m: 780_000.0,
            inclination_deg: 86.4,
            ground_stations: 4,
            user_terminals: 12,
        }
    }
}

impl ConstellationConfig {
    /// Rejects configurations that cannot produce a topology.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.planes == 0 || self.satellites_per_plane == 0 {
            return Err(SimError::config("a constellation needs at least one satellite"));
        }
        if self.planes > MAX_PLANES {
            return Err(SimError::config(format!(
                "at most {} planes are supported, got {}",
                MAX_PLANES, self.planes
            )));
        }
        if self.satellites_per_plane > MAX_SATELLITES_PER_PLANE {
            return Err(SimError::config(format!(
                "at most {} satellites per plane are supported, got {}",
                MAX_SATELLITES_PER_PLANE, self.satellites_per_plane
            )));
        }
        if !(self.altitude_m.is_finite() && self.altitude_m > 0.0) {
            return Err(SimError::config(format!(
                "altitude must be positive, got {}",
                self.altitude_m
            )));
        }
        if !(0.0..=180.0).contains(&self.inclination_deg) {
            return Err(SimError::config(format!(
                "inclination must be within [0, 180] degrees, got {}",
                self.inclination_deg
            )));
        }
        if self.ground_stations > GATEWAY_SITES.len() {
            return Err(SimError::config(format!(
                "at most {} ground stations are available, got {}",
                GATEWAY_SITES.len(),
                self.ground_stations
            )));
        }
        if self.user_terminals > MAX_USER_TERMINALS {
            return Err(SimError::config(format!(
                "at most {} user terminals are supported, got {}",
                MAX_USER_TERMINALS, self.user_terminals
            )));
        }
        Ok(())
    }

    /// Total number of satellites.
    pub fn satellite_count(&self) -> usize {
        self.planes * self.satellites_per_plane
    }
}
