//! Constellation builder - drives the topology core end to end.
//!
//! Satellites are laid out Walker-style: `planes` orbital planes spread over
//! 180 degrees of ascending-node longitude, each holding evenly spaced slots.
//! Odd planes are phased by half a slot. The layout is a single snapshot of
//! circular orbits; nothing is propagated over time.
//!
//! ```text
//!   plane 0      plane 1      plane 2
//!   S0 ─────────── S0 ─────────── S0        (cross-plane ISLs, no seam wrap)
//!   │              │              │
//!   S1 ─────────── S1 ─────────── S1        (intra-plane ISLs close a ring)
//!   │              │              │
//!   S2 ─────────── S2 ─────────── S2
//! ```
//!
//! Every ground station and user terminal is then attached to the nearest
//! satellite through a ground-station or user-terminal link.

use crate::config::{ConstellationConfig, GATEWAY_SITES, SATELLITE_ID_STRIDE};
use crate::error::SimError;
use crate::report::TopologyReport;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use satcom_core::{
    create_ground_station, create_satellite, create_user_terminal, Link, ObjectHandle,
    PositionUpdate, Simulation, SpatialPoint, TopologyEntity, TopologyError,
};
use satcom_env::FixedMovement;
use tracing::{debug, info};

/// A built constellation and the simulation that owns it.
#[derive(Debug)]
pub struct Constellation {
    /// Configuration it was built from
    pub config: ConstellationConfig,

    /// Registry holding every object and link
    simulation: Simulation,

    /// Satellite handles, `planes[plane][slot]`
    planes: Vec<Vec<ObjectHandle>>,
}

impl Constellation {
    /// Builds the full topology described by `config`.
    pub fn build(config: ConstellationConfig) -> Result<Self, SimError> {
        config.validate()?;
        info!(
            "Building constellation: {} planes x {} satellites, {} ground stations, {} user terminals (seed={})",
            config.planes,
            config.satellites_per_plane,
            config.ground_stations,
            config.user_terminals,
            config.seed
        );

        let mut simulation = Simulation::new();
        let planes = place_satellites(&mut simulation, &config)?;

        // Intra-plane rings
        for handles in &planes {
            for (a, b) in ring_pairs(handles) {
                simulation.create_bidirectional_inter_satellite_connection(a, b)?;
            }
        }

        // Cross-plane neighbours in the same slot
        for pair in planes.windows(2) {
            for (a, b) in pair[0].iter().zip(&pair[1]) {
                simulation.create_bidirectional_inter_satellite_connection(*a, *b)?;
            }
        }
        debug!("  {} inter-satellite links", simulation.link_count());

        attach_ground_stations(&mut simulation, &config)?;
        attach_user_terminals(&mut simulation, &config)?;

        info!(
            "✓ Constellation ready: {} objects, {} links",
            simulation.object_count(),
            simulation.link_count()
        );

        Ok(Self {
            config,
            simulation,
            planes,
        })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn into_simulation(self) -> Simulation {
        self.simulation
    }

    pub fn planes(&self) -> &[Vec<ObjectHandle>] {
        &self.planes
    }

    /// Handle of the satellite in `slot` of `plane`.
    pub fn satellite_at(&self, plane: usize, slot: usize) -> Option<ObjectHandle> {
        self.planes.get(plane)?.get(slot).copied()
    }

    /// Summarises the built topology.
    pub fn report(&self) -> Result<TopologyReport, SimError> {
        Ok(TopologyReport::from_simulation(&self.simulation, self.config.seed)?)
    }
}

/// Snapshot state of one slot: `(longitude, latitude, ascending)`.
pub fn slot_state(config: &ConstellationConfig, plane: usize, slot: usize) -> (f64, f64, bool) {
    let per_plane = config.satellites_per_plane as f64;
    let ascending_node = plane as f64 * 180.0 / config.planes as f64;
    let phase = if plane % 2 == 1 { 180.0 / per_plane } else { 0.0 };

    let u = (slot as f64 * 360.0 / per_plane + phase).to_radians();
    let inclination = config.inclination_deg.to_radians();

    let latitude = (inclination.sin() * u.sin()).asin().to_degrees();
    let longitude = ascending_node + (inclination.cos() * u.sin()).atan2(u.cos()).to_degrees();

    (wrap_longitude(longitude), latitude, u.cos() > 0.0)
}

fn wrap_longitude(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}

/// Neighbour pairs closing a ring over `handles`.
fn ring_pairs(handles: &[ObjectHandle]) -> Vec<(ObjectHandle, ObjectHandle)> {
    match handles.len() {
        0 | 1 => Vec::new(),
        2 => vec![(handles[0], handles[1])],
        n => (0..n).map(|i| (handles[i], handles[(i + 1) % n])).collect(),
    }
}

fn place_satellites(
    simulation: &mut Simulation,
    config: &ConstellationConfig,
) -> Result<Vec<Vec<ObjectHandle>>, SimError> {
    let mut planes = Vec::with_capacity(config.planes);

    for plane in 0..config.planes {
        let mut handles = Vec::with_capacity(config.satellites_per_plane);

        for slot in 0..config.satellites_per_plane {
            let (longitude, latitude, ascending) = slot_state(config, plane, slot);
            let satellite_id = ((plane + 1) * SATELLITE_ID_STRIDE + slot) as u64;

            let mut satellite = create_satellite(
                Some(&mut *simulation),
                format!("SAT-P{}-S{}", plane, slot),
                satellite_id,
            )?
            .with_movement_model(FixedMovement::new(
                longitude,
                latitude,
                config.altitude_m,
                ascending,
            ));
            satellite.refresh_position()?;

            handles.push(simulation.add_object(satellite)?);
        }
        planes.push(handles);
    }

    Ok(planes)
}

fn nearest_satellite(simulation: &Simulation, point: &SpatialPoint) -> Result<ObjectHandle, SimError> {
    simulation
        .satellites()
        .min_by(|a, b| {
            a.position()
                .distance_to(point)
                .total_cmp(&b.position().distance_to(point))
        })
        .map(|satellite| satellite.handle())
        .ok_or_else(|| TopologyError::not_found("satellite to attach to").into())
}

fn attach_ground_stations(simulation: &mut Simulation, config: &ConstellationConfig) -> Result<(), SimError> {
    for (index, (city, longitude, latitude)) in GATEWAY_SITES
        .iter()
        .take(config.ground_stations)
        .enumerate()
    {
        let mut station = create_ground_station(Some(&mut *simulation), index as u64 + 1, *city)?;
        station.set_position(PositionUpdate::new().longitude(*longitude).latitude(*latitude));

        let satellite = nearest_satellite(simulation, station.position())?;
        let mut gsl = Link::ground_station();
        gsl.connect(&station, satellite)?;

        debug!("  {} ({}) -> {}", station.handle(), city, satellite);
        simulation.add_object(station)?;
        simulation.add_link(gsl)?;
    }
    Ok(())
}

fn attach_user_terminals(simulation: &mut Simulation, config: &ConstellationConfig) -> Result<(), SimError> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    for index in 0..config.user_terminals {
        let mut terminal = create_user_terminal(
            Some(&mut *simulation),
            index as u64 + 1,
            format!("user-{}", index + 1),
        )?;
        terminal.set_position(
            PositionUpdate::new()
                .longitude(rng.gen_range(-180.0..180.0))
                .latitude(rng.gen_range(-70.0..=70.0)),
        );

        let satellite = nearest_satellite(simulation, terminal.position())?;
        let mut utl = Link::user_terminal();
        utl.connect(&terminal, satellite)?;

        simulation.add_object(terminal)?;
        simulation.add_link(utl)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use satcom_core::{LinkKind, ObjectFilter, ObjectKind};

    fn small_config() -> ConstellationConfig {
        ConstellationConfig {
            planes: 3,
            satellites_per_plane: 4,
            ground_stations: 2,
            user_terminals: 5,
            ..Default::default()
        }
    }

    fn expected_isl_count(config: &ConstellationConfig) -> usize {
        let ring = match config.satellites_per_plane {
            0 | 1 => 0,
            2 => 1,
            n => n,
        };
        config.planes * ring + (config.planes - 1) * config.satellites_per_plane
    }

    fn link_count(simulation: &Simulation, kind: LinkKind) -> usize {
        simulation
            .connection_links()
            .iter()
            .filter(|l| l.kind() == kind)
            .count()
    }

    #[test]
    fn test_default_constellation_counts() {
        let config = ConstellationConfig::default();
        let constellation = Constellation::build(config.clone()).unwrap();
        let simulation = constellation.simulation();

        assert_eq!(simulation.get_objects_from_type(ObjectKind::Satellite).len(), 66);
        assert_eq!(simulation.get_objects_from_type(ObjectKind::GroundStation).len(), 4);
        assert_eq!(simulation.get_objects_from_type(ObjectKind::UserTerminal).len(), 12);
        assert_eq!(simulation.get_objects_from_type(ObjectFilter::Any).len(), 82);

        assert_eq!(link_count(simulation, LinkKind::InterSatellite), 121);
        assert_eq!(link_count(simulation, LinkKind::GroundStation), 4);
        assert_eq!(link_count(simulation, LinkKind::UserTerminal), 12);
    }

    #[test]
    fn test_first_slot_sits_on_ascending_node() {
        let config = small_config();
        let (longitude, latitude, ascending) = slot_state(&config, 0, 0);

        assert!(longitude.abs() < 1e-9);
        assert!(latitude.abs() < 1e-9);
        assert!(ascending);
    }

    #[test]
    fn test_polar_quarter_slot_is_over_pole() {
        let config = ConstellationConfig {
            planes: 1,
            satellites_per_plane: 4,
            inclination_deg: 90.0,
            ..Default::default()
        };

        let (_, latitude, _) = slot_state(&config, 0, 1);
        assert!((latitude - 90.0).abs() < 1e-9);

        // Slot 2 is at u = 180 degrees, heading south
        let (_, _, ascending) = slot_state(&config, 0, 2);
        assert!(!ascending);
    }

    #[test]
    fn test_satellite_positions_come_from_movement_model() {
        let constellation = Constellation::build(small_config()).unwrap();
        let simulation = constellation.simulation();

        for satellite in simulation.satellites() {
            let (longitude, latitude, altitude) = satellite.get_longitude_latitude_altitude().unwrap();
            assert_eq!(satellite.position().get_position(), (longitude, latitude, altitude));
            assert_eq!(altitude, constellation.config.altitude_m);
        }
    }

    #[test]
    fn test_ground_links_point_at_satellites() {
        let constellation = Constellation::build(small_config()).unwrap();
        let simulation = constellation.simulation();

        for link in simulation.connection_links() {
            let (source, destination) = link.endpoints().unwrap();
            match link.kind() {
                LinkKind::InterSatellite => {
                    assert_eq!(source.kind(), ObjectKind::Satellite);
                    assert_eq!(destination.kind(), ObjectKind::Satellite);
                }
                LinkKind::GroundStation => {
                    assert_eq!(source.kind(), ObjectKind::GroundStation);
                    assert_eq!(destination.kind(), ObjectKind::Satellite);
                }
                LinkKind::UserTerminal => {
                    assert_eq!(source.kind(), ObjectKind::UserTerminal);
                    assert_eq!(destination.kind(), ObjectKind::Satellite);
                }
            }
            assert!(simulation.get_object(source).is_ok());
            assert!(simulation.get_object(destination).is_ok());
        }
    }

    #[test]
    fn test_ring_neighbours_are_linked() {
        let constellation = Constellation::build(small_config()).unwrap();
        let simulation = constellation.simulation();

        let isl_degree = |handle| {
            simulation
                .links_of(handle)
                .filter(|l| l.kind() == LinkKind::InterSatellite)
                .count()
        };

        // Middle plane: two ring neighbours + two cross-plane neighbours
        let middle = constellation.satellite_at(1, 0).unwrap();
        assert_eq!(isl_degree(middle), 4);

        // Edge plane: two ring neighbours + one cross-plane neighbour
        let edge = constellation.satellite_at(0, 0).unwrap();
        assert_eq!(isl_degree(edge), 3);

        assert!(constellation.satellite_at(3, 0).is_none());
    }

    #[test]
    fn test_same_seed_same_terminals() {
        let positions = |seed| {
            let config = ConstellationConfig {
                seed,
                ..small_config()
            };
            Constellation::build(config)
                .unwrap()
                .simulation()
                .get_objects_from_type(ObjectKind::UserTerminal)
                .iter()
                .map(|o| o.position().get_position())
                .collect::<Vec<_>>()
        };

        assert_eq!(positions(7), positions(7));
        assert_ne!(positions(7), positions(8));
    }

    #[test]
    fn test_satellite_ids_unique_at_widest_plane() {
        let config = ConstellationConfig {
            planes: 2,
            satellites_per_plane: crate::config::MAX_SATELLITES_PER_PLANE,
            ground_stations: 0,
            user_terminals: 0,
            ..Default::default()
        };
        let constellation = Constellation::build(config).unwrap();
        let simulation = constellation.simulation();

        let mut ids: Vec<u64> = simulation.satellites().map(|s| s.satellite_id).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);

        let last = constellation.satellite_at(0, 98).unwrap();
        assert_eq!(simulation.get_satellite(198).unwrap().handle(), last);
    }

    #[test]
    fn test_invalid_config_builds_nothing() {
        let config = ConstellationConfig {
            satellites_per_plane: 0,
            ..Default::default()
        };
        assert!(matches!(
            Constellation::build(config),
            Err(SimError::InvalidConfig(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_link_counts_follow_layout(
            planes in 1usize..5,
            per_plane in 1usize..8,
            ground_stations in 0usize..4,
            user_terminals in 0usize..6,
            seed in any::<u64>()
        ) {
            let config = ConstellationConfig {
                seed,
                planes,
                satellites_per_plane: per_plane,
                ground_stations,
                user_terminals,
                ..Default::default()
            };

            let simulation = Constellation::build(config.clone()).unwrap().into_simulation();

            prop_assert_eq!(link_count(&simulation, LinkKind::InterSatellite), expected_isl_count(&config));
            prop_assert_eq!(link_count(&simulation, LinkKind::GroundStation), ground_stations);
            prop_assert_eq!(link_count(&simulation, LinkKind::UserTerminal), user_terminals);
            prop_assert_eq!(
                simulation.object_count(),
                planes * per_plane + ground_stations + user_terminals
            );
        }
    }
}
