//! The simulation registry.
//!
//! A [`Simulation`] is created once per run. It mints object identities,
//! stores the objects and links handed to it, and answers typed lookups by
//! scanning its collections in insertion order.
//!
//! Objects created through the factories are NOT stored automatically:
//! insertion is a separate [`Simulation::add_object`] call.

use crate::error::TopologyError;
use crate::link::Link;
use crate::topology::{ObjectHandle, ObjectId, ObjectKind, Satellite, TopologyObject};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Selects objects for [`Simulation::get_objects_from_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectFilter {
    /// Every topology object
    Any,

    /// Only objects of one variant
    Kind(ObjectKind),
}

impl ObjectFilter {
    pub fn matches(&self, kind: ObjectKind) -> bool {
        match self {
            ObjectFilter::Any => true,
            ObjectFilter::Kind(k) => *k == kind,
        }
    }
}

impl From<ObjectKind> for ObjectFilter {
    fn from(kind: ObjectKind) -> Self {
        ObjectFilter::Kind(kind)
    }
}

/// Source of registry identities; every `Simulation` takes a fresh one.
static NEXT_REGISTRY: AtomicU64 = AtomicU64::new(1);

/// Registry of topology objects and links.
#[derive(Debug)]
pub struct Simulation {
    /// Identity stamped into every id this registry mints
    registry: u64,

    /// Next id to hand out
    available_id_index: u64,

    /// Stored objects, insertion order
    topology_objects: Vec<TopologyObject>,

    /// Stored links, insertion order
    connection_links: Vec<Link>,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            registry: NEXT_REGISTRY.fetch_add(1, Ordering::Relaxed),
            available_id_index: 0,
            topology_objects: Vec::new(),
            connection_links: Vec::new(),
        }
    }
}

impl Simulation {
    /// Creates an empty registry whose first id is 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an Arc/Mutex-wrapped registry for sharing across threads.
    pub fn shared() -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Returns the next free id and advances the counter.
    ///
    /// Ids are never reused within the lifetime of this registry.
    pub fn request_an_id(&mut self) -> ObjectId {
        let attributed_id = ObjectId::new(self.registry, self.available_id_index);
        self.available_id_index += 1;

        debug!("Minted object id {}", attributed_id);
        attributed_id
    }

    /// Stores an object.
    ///
    /// # Errors
    /// * `ForeignObject` - the id was minted by another registry
    /// * `DuplicateObject` - an object with the same id is already stored
    pub fn add_object(&mut self, object: impl Into<TopologyObject>) -> Result<ObjectHandle, TopologyError> {
        let object = object.into();
        let handle = object.handle();

        if handle.id().registry() != self.registry {
            return Err(TopologyError::ForeignObject(handle));
        }
        if self.topology_objects.iter().any(|o| o.id() == handle.id()) {
            return Err(TopologyError::DuplicateObject(handle));
        }

        self.topology_objects.push(object);
        debug!("Registered {}", handle);
        Ok(handle)
    }

    /// Stores a connected link.
    ///
    /// # Errors
    /// * `UnconnectedLink` - the link has no endpoints yet
    pub fn add_link(&mut self, link: Link) -> Result<(), TopologyError> {
        if !link.is_connected() {
            return Err(TopologyError::UnconnectedLink(link.kind()));
        }
        self.connection_links.push(link);
        Ok(())
    }

    /// Returns every stored object matching `filter`, in insertion order.
    ///
    /// An empty result is not an error.
    pub fn get_objects_from_type(&self, filter: impl Into<ObjectFilter>) -> Vec<&TopologyObject> {
        let filter = filter.into();
        self.topology_objects
            .iter()
            .filter(|object| filter.matches(object.kind()))
            .collect()
    }

    /// Iterates over the stored satellites.
    pub fn satellites(&self) -> impl Iterator<Item = &Satellite> {
        self.topology_objects.iter().filter_map(TopologyObject::as_satellite)
    }

    /// Returns the first stored satellite whose `satellite_id` matches.
    ///
    /// `satellite_id` is not unique; later satellites sharing it are never
    /// returned by this lookup.
    pub fn get_satellite(&self, satellite_id: u64) -> Result<&Satellite, TopologyError> {
        self.satellites()
            .find(|satellite| satellite.satellite_id == satellite_id)
            .ok_or_else(|| TopologyError::not_found(format!("satellite_id {}", satellite_id)))
    }

    /// Resolves a handle to the stored object.
    pub fn get_object(&self, handle: ObjectHandle) -> Result<&TopologyObject, TopologyError> {
        self.topology_objects
            .iter()
            .find(|object| object.handle() == handle)
            .ok_or_else(|| TopologyError::not_found(handle))
    }

    pub fn get_object_mut(&mut self, handle: ObjectHandle) -> Result<&mut TopologyObject, TopologyError> {
        self.topology_objects
            .iter_mut()
            .find(|object| object.handle() == handle)
            .ok_or_else(|| TopologyError::not_found(handle))
    }

    /// Joins two satellites with one inter-satellite link and stores it.
    ///
    /// The link is connected `a -> b` and then `b -> a`, so the stored link
    /// ends up directed from `b` to `a`.
    ///
    /// # Errors
    /// * `SameEndpoint` - `a` and `b` are the same object; nothing is stored
    /// * `InterSatelliteConnection` - either argument is not a satellite
    pub fn create_bidirectional_inter_satellite_connection(
        &mut self,
        a: impl Into<ObjectHandle>,
        b: impl Into<ObjectHandle>,
    ) -> Result<Link, TopologyError> {
        let a = a.into();
        let b = b.into();

        let mut isl = Link::inter_satellite();
        isl.connect(a, b)?;
        isl.connect(b, a)?;

        self.connection_links.push(isl);
        debug!("Stored bidirectional inter-satellite link {} <-> {}", a, b);
        Ok(isl)
    }

    /// Straight-line length of a link between two stored objects, in meters.
    pub fn link_length(&self, link: &Link) -> Result<f64, TopologyError> {
        let (source, destination) = link
            .endpoints()
            .ok_or(TopologyError::UnconnectedLink(link.kind()))?;

        let source = self.get_object(source)?;
        let destination = self.get_object(destination)?;
        Ok(source.position().distance_to(destination.position()))
    }

    /// Iterates over the stored links touching `handle`.
    pub fn links_of(&self, handle: ObjectHandle) -> impl Iterator<Item = &Link> {
        self.connection_links
            .iter()
            .filter(move |link| link.involves(handle))
    }

    pub fn topology_objects(&self) -> &[TopologyObject] {
        &self.topology_objects
    }

    pub fn connection_links(&self) -> &[Link] {
        &self.connection_links
    }

    pub fn object_count(&self) -> usize {
        self.topology_objects.len()
    }

    pub fn link_count(&self) -> usize {
        self.connection_links.len()
    }
}
