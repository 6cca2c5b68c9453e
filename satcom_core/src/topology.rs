//! Topology objects: satellites, ground stations and user terminals.
//!
//! Every object embeds an [`ObjectBase`] carrying its registry-assigned
//! identity and its spatial point. Identity is the pair (kind, id): business
//! fields such as `satellite_id` never take part in equality.

use crate::error::TopologyError;
use crate::spatial::{PositionUpdate, SpatialPoint};
use satcom_env::{MovementModel, TwoLineElement};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Registry-assigned identity of a topology object.
///
/// Only [`Simulation::request_an_id`](crate::Simulation::request_an_id) mints
/// these; there is no public constructor from a raw integer. Each id also
/// records which registry minted it, so ids from different simulations never
/// compare equal even when their values match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ObjectId {
    registry: u64,
    value: u64,
}

impl ObjectId {
    pub(crate) fn new(registry: u64, value: u64) -> Self {
        Self { registry, value }
    }

    #[cfg(test)]
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self::new(0, raw)
    }

    /// Returns the raw integer value.
    pub fn as_u64(self) -> u64 {
        self.value
    }

    /// Identity of the registry that minted this id.
    pub(crate) fn registry(self) -> u64 {
        self.registry
    }
}

impl From<ObjectId> for u64 {
    fn from(id: ObjectId) -> Self {
        id.value
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The closed set of topology object variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Satellite,
    GroundStation,
    UserTerminal,
}

impl ObjectKind {
    /// Every kind, in declaration order.
    pub const ALL: [ObjectKind; 3] = [
        ObjectKind::Satellite,
        ObjectKind::GroundStation,
        ObjectKind::UserTerminal,
    ];

    /// Static type tag of the variant.
    pub fn type_tag(&self) -> &'static str {
        match self {
            ObjectKind::Satellite => "Satellite",
            ObjectKind::GroundStation => "GroundStation",
            ObjectKind::UserTerminal => "UserTerminal",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_tag())
    }
}

/// Non-owning reference to a topology object.
///
/// Links and lookups name objects through handles; whoever owns the object
/// (the caller or the [`Simulation`](crate::Simulation)) controls its lifetime.
/// Handles are only obtained from an object, so the kind always matches the
/// object's real variant:
///
/// ```compile_fail
/// use satcom_core::{ObjectHandle, ObjectKind, Simulation};
///
/// let mut simulation = Simulation::new();
/// let id = simulation.request_an_id();
/// let handle = ObjectHandle { kind: ObjectKind::GroundStation, id };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ObjectHandle {
    kind: ObjectKind,
    id: ObjectId,
}

impl ObjectHandle {
    pub(crate) fn new(kind: ObjectKind, id: ObjectId) -> Self {
        Self { kind, id }
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }
}

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.id)
    }
}

/// Identity and position shared by every topology object.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectBase {
    id: ObjectId,
    position: SpatialPoint,
    object_name: Option<String>,
}

impl ObjectBase {
    fn new(id: ObjectId) -> Self {
        Self {
            id,
            position: SpatialPoint::default(),
            object_name: None,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn position(&self) -> &SpatialPoint {
        &self.position
    }

    pub fn position_mut(&mut self) -> &mut SpatialPoint {
        &mut self.position
    }

    pub fn object_name(&self) -> Option<&str> {
        self.object_name.as_deref()
    }

    pub fn set_object_name(&mut self, name: impl Into<String>) {
        self.object_name = Some(name.into());
    }
}

// ============================================================================
// VARIANTS
// ============================================================================

/// A satellite.
///
/// `satellite_id` is externally meaningful and not required to be unique.
/// The optional movement model is owned by the satellite and only queried
/// when its position or ascending state is requested.
#[derive(Debug)]
pub struct Satellite {
    base: ObjectBase,
    pub satellite_id: u64,
    pub satellite_name: String,
    pub orbital_object_id: Option<u64>,
    pub tle: Option<TwoLineElement>,
    movement: Option<Box<dyn MovementModel>>,
}

impl Satellite {
    pub(crate) fn new(id: ObjectId, satellite_name: impl Into<String>, satellite_id: u64) -> Self {
        Self {
            base: ObjectBase::new(id),
            satellite_id,
            satellite_name: satellite_name.into(),
            orbital_object_id: None,
            tle: None,
            movement: None,
        }
    }

    /// Attaches orbital parameters; the catalog number becomes the orbital object id.
    pub fn with_tle(mut self, tle: TwoLineElement) -> Self {
        self.orbital_object_id = Some(u64::from(tle.catalog_number));
        self.tle = Some(tle);
        self
    }

    pub fn with_movement_model<M: MovementModel>(mut self, model: M) -> Self {
        self.set_movement_model(model);
        self
    }

    /// Attaches a movement model, replacing any previous one.
    pub fn set_movement_model<M: MovementModel>(&mut self, model: M) {
        self.movement = Some(Box::new(model));
    }

    pub fn has_movement_model(&self) -> bool {
        self.movement.is_some()
    }

    /// Returns the attached movement model.
    pub fn movement_model(&self) -> Result<&dyn MovementModel, TopologyError> {
        self.movement
            .as_deref()
            .ok_or(TopologyError::MissingMovementModel { id: self.id() })
    }

    /// Queries the movement model for `(longitude, latitude, altitude)`.
    pub fn get_longitude_latitude_altitude(&self) -> Result<(f64, f64, f64), TopologyError> {
        Ok(self.movement_model()?.get_longitude_latitude_altitude()?)
    }

    /// Queries the movement model for the track direction.
    pub fn is_ascending(&self) -> Result<bool, TopologyError> {
        Ok(self.movement_model()?.is_ascending()?)
    }

    /// Pulls the current position from the movement model into the spatial point.
    ///
    /// On failure the stored position is left as it was.
    pub fn refresh_position(&mut self) -> Result<SpatialPoint, TopologyError> {
        let point = SpatialPoint::from(self.get_longitude_latitude_altitude()?);
        *self.base.position_mut() = point;
        Ok(point)
    }
}

/// A ground station.
#[derive(Debug, Clone)]
pub struct GroundStation {
    base: ObjectBase,
    pub ground_station_id: u64,
    pub city: String,
}

impl GroundStation {
    pub(crate) fn new(id: ObjectId, ground_station_id: u64, city: impl Into<String>) -> Self {
        Self {
            base: ObjectBase::new(id),
            ground_station_id,
            city: city.into(),
        }
    }
}

/// A user terminal.
#[derive(Debug, Clone)]
pub struct UserTerminal {
    base: ObjectBase,
    pub user_id: u64,
    pub user_name: String,
}

impl UserTerminal {
    pub(crate) fn new(id: ObjectId, user_id: u64, user_name: impl Into<String>) -> Self {
        Self {
            base: ObjectBase::new(id),
            user_id,
            user_name: user_name.into(),
        }
    }
}

/// Behaviour common to the three variant structs.
pub trait TopologyEntity {
    const KIND: ObjectKind;

    fn base(&self) -> &ObjectBase;

    fn base_mut(&mut self) -> &mut ObjectBase;

    fn id(&self) -> ObjectId {
        self.base().id()
    }

    fn handle(&self) -> ObjectHandle {
        ObjectHandle::new(Self::KIND, self.id())
    }

    fn get_type(&self) -> &'static str {
        Self::KIND.type_tag()
    }

    fn position(&self) -> &SpatialPoint {
        self.base().position()
    }

    fn set_position(&mut self, update: PositionUpdate) {
        self.base_mut().position_mut().set_position(update);
    }
}

impl TopologyEntity for Satellite {
    const KIND: ObjectKind = ObjectKind::Satellite;

    fn base(&self) -> &ObjectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }
}

impl TopologyEntity for GroundStation {
    const KIND: ObjectKind = ObjectKind::GroundStation;

    fn base(&self) -> &ObjectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }
}

impl TopologyEntity for UserTerminal {
    const KIND: ObjectKind = ObjectKind::UserTerminal;

    fn base(&self) -> &ObjectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }
}

impl PartialEq for Satellite {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Satellite {}

impl PartialEq for GroundStation {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for GroundStation {}

impl PartialEq for UserTerminal {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for UserTerminal {}

impl From<&Satellite> for ObjectHandle {
    fn from(satellite: &Satellite) -> Self {
        satellite.handle()
    }
}

impl From<&GroundStation> for ObjectHandle {
    fn from(ground_station: &GroundStation) -> Self {
        ground_station.handle()
    }
}

impl From<&UserTerminal> for ObjectHandle {
    fn from(user_terminal: &UserTerminal) -> Self {
        user_terminal.handle()
    }
}

// ============================================================================
// TOPOLOGY OBJECT
// ============================================================================

/// Any addressable object of the topology.
#[derive(Debug)]
pub enum TopologyObject {
    Satellite(Satellite),
    GroundStation(GroundStation),
    UserTerminal(UserTerminal),
}

impl TopologyObject {
    pub fn base(&self) -> &ObjectBase {
        match self {
            TopologyObject::Satellite(s) => s.base(),
            TopologyObject::GroundStation(g) => g.base(),
            TopologyObject::UserTerminal(u) => u.base(),
        }
    }

    pub fn base_mut(&mut self) -> &mut ObjectBase {
        match self {
            TopologyObject::Satellite(s) => s.base_mut(),
            TopologyObject::GroundStation(g) => g.base_mut(),
            TopologyObject::UserTerminal(u) => u.base_mut(),
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            TopologyObject::Satellite(_) => ObjectKind::Satellite,
            TopologyObject::GroundStation(_) => ObjectKind::GroundStation,
            TopologyObject::UserTerminal(_) => ObjectKind::UserTerminal,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.base().id()
    }

    pub fn handle(&self) -> ObjectHandle {
        ObjectHandle::new(self.kind(), self.id())
    }

    /// Static type tag of the variant.
    pub fn get_type(&self) -> &'static str {
        self.kind().type_tag()
    }

    pub fn position(&self) -> &SpatialPoint {
        self.base().position()
    }

    pub fn set_position(&mut self, update: PositionUpdate) {
        self.base_mut().position_mut().set_position(update);
    }

    /// Human-readable name: the object name if set, otherwise the variant's own label.
    pub fn name(&self) -> &str {
        if let Some(name) = self.base().object_name() {
            return name;
        }
        match self {
            TopologyObject::Satellite(s) => &s.satellite_name,
            TopologyObject::GroundStation(g) => &g.city,
            TopologyObject::UserTerminal(u) => &u.user_name,
        }
    }

    pub fn as_satellite(&self) -> Option<&Satellite> {
        match self {
            TopologyObject::Satellite(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_satellite_mut(&mut self) -> Option<&mut Satellite> {
        match self {
            TopologyObject::Satellite(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_ground_station(&self) -> Option<&GroundStation> {
        match self {
            TopologyObject::GroundStation(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_user_terminal(&self) -> Option<&UserTerminal> {
        match self {
            TopologyObject::UserTerminal(u) => Some(u),
            _ => None,
        }
    }
}

impl PartialEq for TopologyObject {
    fn eq(&self, other: &Self) -> bool {
        self.handle() == other.handle()
    }
}

impl Eq for TopologyObject {}

impl From<&TopologyObject> for ObjectHandle {
    fn from(object: &TopologyObject) -> Self {
        object.handle()
    }
}

impl From<Satellite> for TopologyObject {
    fn from(satellite: Satellite) -> Self {
        TopologyObject::Satellite(satellite)
    }
}

impl From<GroundStation> for TopologyObject {
    fn from(ground_station: GroundStation) -> Self {
        TopologyObject::GroundStation(ground_station)
    }
}

impl From<UserTerminal> for TopologyObject {
    fn from(user_terminal: UserTerminal) -> Self {
        TopologyObject::UserTerminal(user_terminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satcom_env::{FixedMovement, MovementError};

    fn id(raw: u64) -> ObjectId {
        ObjectId::from_raw(raw)
    }

    #[test]
    fn test_type_tags() {
        let sat = TopologyObject::from(Satellite::new(id(0), "SAT-A", 10));
        let gs = TopologyObject::from(GroundStation::new(id(1), 7, "Toulouse"));
        let ut = TopologyObject::from(UserTerminal::new(id(2), 3, "alice"));

        assert_eq!(sat.get_type(), "Satellite");
        assert_eq!(gs.get_type(), "GroundStation");
        assert_eq!(ut.get_type(), "UserTerminal");
    }

    #[test]
    fn test_equality_uses_kind_and_id_only() {
        // Same id, different business fields: equal
        let a = Satellite::new(id(4), "SAT-A", 10);
        let b = Satellite::new(id(4), "SAT-B", 20);
        assert_eq!(a, b);

        // Same id, different variant: not equal
        let sat = TopologyObject::from(Satellite::new(id(5), "SAT", 1));
        let gs = TopologyObject::from(GroundStation::new(id(5), 1, "Paris"));
        assert_ne!(sat, gs);

        // Same variant, different id: not equal
        let c = GroundStation::new(id(6), 1, "Paris");
        let d = GroundStation::new(id(7), 1, "Paris");
        assert_ne!(c, d);
    }

    #[test]
    fn test_handle_display() {
        let ut = UserTerminal::new(id(12), 3, "bob");
        assert_eq!(ut.handle().to_string(), "UserTerminal#12");
    }

    #[test]
    fn test_handle_kind_matches_variant() {
        let sat = Satellite::new(id(0), "SAT", 1);
        let gs = GroundStation::new(id(1), 1, "Paris");
        let ut = UserTerminal::new(id(2), 1, "bob");

        assert_eq!(sat.handle().kind(), ObjectKind::Satellite);
        assert_eq!(gs.handle().kind(), ObjectKind::GroundStation);
        assert_eq!(ut.handle().kind(), ObjectKind::UserTerminal);

        for object in [TopologyObject::from(sat), gs.into(), ut.into()] {
            assert_eq!(object.handle().kind(), object.kind());
            assert_eq!(object.handle().id(), object.id());
        }
    }

    #[test]
    fn test_ids_from_different_registries_differ() {
        assert_eq!(ObjectId::new(1, 4), ObjectId::new(1, 4));
        assert_ne!(ObjectId::new(1, 4), ObjectId::new(2, 4));
        assert_eq!(ObjectId::new(2, 4).as_u64(), 4);
        assert_eq!(ObjectId::new(2, 4).to_string(), "4");
    }

    #[test]
    fn test_name_prefers_object_name() {
        let mut object = TopologyObject::from(GroundStation::new(id(0), 1, "Kourou"));
        assert_eq!(object.name(), "Kourou");

        object.base_mut().set_object_name("GS-KOU");
        assert_eq!(object.name(), "GS-KOU");
    }

    #[test]
    fn test_missing_movement_model() {
        let satellite = Satellite::new(id(3), "SAT", 1);

        assert!(!satellite.has_movement_model());
        assert_eq!(
            satellite.get_longitude_latitude_altitude(),
            Err(TopologyError::MissingMovementModel { id: id(3) })
        );
        assert_eq!(
            satellite.is_ascending(),
            Err(TopologyError::MissingMovementModel { id: id(3) })
        );
    }

    #[test]
    fn test_refresh_position_from_movement_model() {
        let mut satellite = Satellite::new(id(0), "SAT", 1)
            .with_movement_model(FixedMovement::new(30.0, -12.5, 550_000.0, false));

        assert_eq!(satellite.position().get_position(), (0.0, 0.0, 0.0));
        assert!(!satellite.is_ascending().unwrap());

        let point = satellite.refresh_position().unwrap();
        assert_eq!(point.get_position(), (30.0, -12.5, 550_000.0));
        assert_eq!(satellite.position().get_position(), (30.0, -12.5, 550_000.0));
    }

    #[test]
    fn test_refresh_position_keeps_position_on_provider_failure() {
        let mut satellite = Satellite::new(id(0), "SAT", 1)
            .with_movement_model(FixedMovement::new(f64::NAN, 0.0, 0.0, true));
        satellite.set_position(PositionUpdate::new().longitude(5.0));

        let err = satellite.refresh_position().unwrap_err();
        assert!(matches!(err, TopologyError::Movement(MovementError::Unavailable(_))));
        assert_eq!(satellite.position().longitude, 5.0);
    }
}
