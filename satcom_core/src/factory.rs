//! Factories for topology objects.
//!
//! Each factory takes the simulation context explicitly, draws the object's
//! id from it and fills in the business fields. The created object is
//! returned to the caller and is not stored in the simulation.

use crate::error::TopologyError;
use crate::simulation::Simulation;
use crate::topology::{GroundStation, Satellite, TopologyEntity, UserTerminal};
use tracing::debug;

/// Creates a satellite.
///
/// # Arguments
/// * `simulation_context` - Required; the satellite's id comes from it
/// * `satellite_name` - Name of the satellite
/// * `satellite_id` - External identifier (not required to be unique)
///
/// # Errors
/// `MissingSimulationContext` when no simulation is given. No id is consumed.
pub fn create_satellite(
    simulation_context: Option<&mut Simulation>,
    satellite_name: impl Into<String>,
    satellite_id: u64,
) -> Result<Satellite, TopologyError> {
    let simulation = simulation_context.ok_or(TopologyError::MissingSimulationContext)?;

    let created_satellite = Satellite::new(simulation.request_an_id(), satellite_name, satellite_id);
    debug!(
        "Created {} (satellite_id={})",
        created_satellite.handle(),
        satellite_id
    );
    Ok(created_satellite)
}

/// Creates a ground station.
///
/// # Arguments
/// * `simulation_context` - Required; the station's id comes from it
/// * `ground_station_id` - External identifier of the station
/// * `city` - Closest city
pub fn create_ground_station(
    simulation_context: Option<&mut Simulation>,
    ground_station_id: u64,
    city: impl Into<String>,
) -> Result<GroundStation, TopologyError> {
    let simulation = simulation_context.ok_or(TopologyError::MissingSimulationContext)?;

    let created_ground_station =
        GroundStation::new(simulation.request_an_id(), ground_station_id, city);
    debug!(
        "Created {} (ground_station_id={})",
        created_ground_station.handle(),
        ground_station_id
    );
    Ok(created_ground_station)
}

/// Creates a user terminal.
pub fn create_user_terminal(
    simulation_context: Option<&mut Simulation>,
    user_id: u64,
    user_name: impl Into<String>,
) -> Result<UserTerminal, TopologyError> {
    let simulation = simulation_context.ok_or(TopologyError::MissingSimulationContext)?;

    let created_user = UserTerminal::new(simulation.request_an_id(), user_id, user_name);
    debug!("Created {} (user_id={})", created_user.handle(), user_id);
    Ok(created_user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::ObjectKind;

    #[test]
    fn test_factories_require_context() {
        assert_eq!(
            create_satellite(None, "SAT", 1).unwrap_err(),
            TopologyError::MissingSimulationContext
        );
        assert_eq!(
            create_ground_station(None, 1, "Paris").unwrap_err(),
            TopologyError::MissingSimulationContext
        );
        assert_eq!(
            create_user_terminal(None, 1, "alice").unwrap_err(),
            TopologyError::MissingSimulationContext
        );
    }

    #[test]
    fn test_factories_assign_sequential_ids() {
        let mut simulation = Simulation::new();

        let sat = create_satellite(Some(&mut simulation), "SAT-A", 42).unwrap();
        let gs = create_ground_station(Some(&mut simulation), 7, "Toulouse").unwrap();
        let ut = create_user_terminal(Some(&mut simulation), 3, "alice").unwrap();

        assert_eq!(sat.id().as_u64(), 0);
        assert_eq!(gs.id().as_u64(), 1);
        assert_eq!(ut.id().as_u64(), 2);

        assert_eq!(sat.handle().kind(), ObjectKind::Satellite);
        assert_eq!(sat.satellite_id, 42);
        assert_eq!(sat.satellite_name, "SAT-A");
        assert_eq!(gs.ground_station_id, 7);
        assert_eq!(gs.city, "Toulouse");
        assert_eq!(ut.user_id, 3);
        assert_eq!(ut.user_name, "alice");
    }

    #[test]
    fn test_factories_do_not_insert() {
        let mut simulation = Simulation::new();
        create_satellite(Some(&mut simulation), "SAT", 1).unwrap();
        create_ground_station(Some(&mut simulation), 1, "Paris").unwrap();

        assert_eq!(simulation.object_count(), 0);
        assert_eq!(simulation.request_an_id().as_u64(), 2);
    }
}
