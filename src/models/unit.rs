//! Mobile units and the capabilities a teleport station needs from them

use super::errors::{TravelError, TravelResult};
use super::location::Location;
use super::resources::ResourceBundle;

pub type UnitId = i64;

pub const NUM_UNIT_KINDS: usize = 3;

/// Closed set of unit kinds a command can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Procyon,
    Luyten,
    Lacaille,
}

impl UnitKind {
    pub fn name(&self) -> &'static str {
        match self {
            UnitKind::Procyon => "Procyon",
            UnitKind::Luyten => "Luyten",
            UnitKind::Lacaille => "Lacaille",
        }
    }

    /// Exact, case-sensitive lookup by type name.
    pub fn from_name(name: &str) -> Option<UnitKind> {
        UnitKind::ALL.iter().copied().find(|k| k.name() == name)
    }

    pub const ALL: [UnitKind; NUM_UNIT_KINDS] =
        [UnitKind::Procyon, UnitKind::Luyten, UnitKind::Lacaille];
}

/// What a teleport station needs from whatever it is moving.
///
/// The station reads location and funds, then calls [`Traveler::pay`]
/// at most once per transaction. It never touches anything else.
pub trait Traveler {
    fn id(&self) -> UnitId;
    fn current_location(&self) -> Option<&Location>;
    fn resources(&self) -> &ResourceBundle;
    fn can_pay(&self, cost: &ResourceBundle) -> bool;
    /// Deduct `cost` and return the amount actually taken.
    fn pay(&mut self, cost: &ResourceBundle) -> TravelResult<ResourceBundle>;
}

/// A unit roaming the universe.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub kind: UnitKind,
    pub name: String,
    pub id: UnitId,
    pub current_location: Option<Location>,
    pub previous_location: Option<Location>,
    pub resources: ResourceBundle,
}

impl Unit {
    /// A fresh unit has no location and an empty purse.
    pub fn new(kind: UnitKind, name: impl Into<String>, id: UnitId) -> Self {
        Self {
            kind,
            name: name.into(),
            id,
            current_location: None,
            previous_location: None,
            resources: ResourceBundle::EMPTY,
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.current_location = Some(location);
        self
    }

    pub fn with_resources(mut self, resources: ResourceBundle) -> Self {
        self.resources = resources;
        self
    }

    /// Move to `destination`, remembering where the unit came from.
    pub fn move_to(&mut self, destination: Location) {
        self.previous_location = self.current_location.replace(destination);
    }
}

impl Traveler for Unit {
    fn id(&self) -> UnitId {
        self.id
    }

    fn current_location(&self) -> Option<&Location> {
        self.current_location.as_ref()
    }

    fn resources(&self) -> &ResourceBundle {
        &self.resources
    }

    fn can_pay(&self, cost: &ResourceBundle) -> bool {
        self.resources.covers(cost)
    }

    fn pay(&mut self, cost: &ResourceBundle) -> TravelResult<ResourceBundle> {
        let remaining = self
            .resources
            .checked_sub(cost)
            .ok_or(TravelError::InsufficientResources {
                cost: *cost,
                available: self.resources,
            })?;
        self.resources = remaining;
        Ok(*cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::location::Coordinates;

    #[test]
    fn kind_lookup_is_exact() {
        assert_eq!(UnitKind::from_name("Procyon"), Some(UnitKind::Procyon));
        assert_eq!(UnitKind::from_name("Lacaille"), Some(UnitKind::Lacaille));
        assert_eq!(UnitKind::from_name("luyten"), None);
        assert_eq!(UnitKind::from_name("Lutyen"), None);
    }

    #[test]
    fn pay_deducts_and_returns_cost() {
        let mut unit = Unit::new(UnitKind::Luyten, "Pesho", 2)
            .with_resources(ResourceBundle::new(10, 10, 10));
        let cost = ResourceBundle::new(5, 5, 5);

        assert!(unit.can_pay(&cost));
        assert_eq!(unit.pay(&cost).unwrap(), cost);
        assert_eq!(unit.resources, ResourceBundle::new(5, 5, 5));
    }

    #[test]
    fn pay_refuses_shortfall_without_touching_purse() {
        let mut unit = Unit::new(UnitKind::Procyon, "Gosho", 1)
            .with_resources(ResourceBundle::new(10, 10, 10));
        let cost = ResourceBundle::new(20, 20, 20);

        assert!(!unit.can_pay(&cost));
        assert!(matches!(
            unit.pay(&cost),
            Err(TravelError::InsufficientResources { .. })
        ));
        assert_eq!(unit.resources, ResourceBundle::new(10, 10, 10));
    }

    #[test]
    fn move_to_records_previous_location() {
        let start = Location::new("Inner Galaxy", "Mar Sara", Coordinates::new(1.0, 1.0));
        let end = Location::new("Inner Galaxy", "Chau Sara", Coordinates::new(2.0, 2.0));
        let mut unit = Unit::new(UnitKind::Lacaille, "Ivan", 3).with_location(start.clone());

        unit.move_to(end.clone());

        assert_eq!(unit.current_location, Some(end));
        assert_eq!(unit.previous_location, Some(start));
    }
}
