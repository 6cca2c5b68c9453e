//! JSON topology report.
//!
//! Summarises a simulation's objects and links for inspection or plotting.
//! The report is an export only; nothing reads it back into a simulation.

use crate::error::SimError;
use satcom_core::{LinkKind, ObjectKind, Simulation, TopologyError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;

/// One topology object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub id: u64,
    pub kind: ObjectKind,
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
}

/// One stored link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkRecord {
    pub kind: LinkKind,
    pub source: u64,
    pub destination: u64,

    /// Straight-line length in meters
    pub length_m: f64,
}

/// Complete topology export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologyReport {
    /// Seed the scenario was built with
    pub seed: u64,

    /// Object count per type tag
    pub objects_by_kind: BTreeMap<String, usize>,

    /// Link count per link name
    pub links_by_kind: BTreeMap<String, usize>,

    /// Mean inter-satellite link length, if any exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_isl_length_m: Option<f64>,

    pub objects: Vec<ObjectRecord>,

    pub links: Vec<LinkRecord>,
}

impl TopologyReport {
    /// Builds a report from the objects and links stored in `simulation`.
    ///
    /// # Errors
    /// `NotFound` if a stored link names an object that was never stored.
    pub fn from_simulation(simulation: &Simulation, seed: u64) -> Result<Self, TopologyError> {
        let mut objects_by_kind = BTreeMap::new();
        let mut links_by_kind = BTreeMap::new();

        let objects = simulation
            .topology_objects()
            .iter()
            .map(|object| {
                *objects_by_kind.entry(object.get_type().to_string()).or_insert(0) += 1;

                let (longitude, latitude, altitude) = object.position().get_position();
                ObjectRecord {
                    id: object.id().as_u64(),
                    kind: object.kind(),
                    name: object.name().to_string(),
                    longitude,
                    latitude,
                    altitude,
                }
            })
            .collect();

        let mut links = Vec::with_capacity(simulation.link_count());
        for link in simulation.connection_links() {
            let (source, destination) = link
                .endpoints()
                .ok_or(TopologyError::UnconnectedLink(link.kind()))?;

            *links_by_kind.entry(link.kind().name().to_string()).or_insert(0) += 1;
            links.push(LinkRecord {
                kind: link.kind(),
                source: source.id().as_u64(),
                destination: destination.id().as_u64(),
                length_m: simulation.link_length(link)?,
            });
        }

        let isl_lengths: Vec<f64> = links
            .iter()
            .filter(|l: &&LinkRecord| l.kind == LinkKind::InterSatellite)
            .map(|l| l.length_m)
            .collect();
        let mean_isl_length_m = if isl_lengths.is_empty() {
            None
        } else {
            Some(isl_lengths.iter().sum::<f64>() / isl_lengths.len() as f64)
        };

        Ok(Self {
            seed,
            objects_by_kind,
            links_by_kind,
            mean_isl_length_m,
            objects,
            links,
        })
    }

    /// Total number of objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Total number of links.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Writes to a JSON file.
    pub fn write_to_file(&self, path: &str) -> Result<(), SimError> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
