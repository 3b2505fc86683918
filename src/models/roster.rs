//! Planet roster
//!
//! Tracks which units stand on which planet, and exactly where.

use std::collections::BTreeMap;

use super::location::Location;
use super::unit::UnitId;

/// A unit standing on a planet.
#[derive(Debug, Clone, PartialEq)]
pub struct Occupant {
    pub unit_id: UnitId,
    pub location: Location,
}

/// Lists the units present on a planet.
pub trait Occupancy {
    fn occupants(&self, galaxy: &str, planet: &str) -> Vec<Occupant>;
}

/// In-memory occupancy keyed by (galaxy, planet).
#[derive(Debug, Clone, Default)]
pub struct PlanetRoster {
    planets: BTreeMap<(String, String), Vec<Occupant>>,
}

impl PlanetRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `unit_id` at `location`, moving it if it is already somewhere.
    pub fn place(&mut self, unit_id: UnitId, location: Location) {
        self.remove(unit_id);
        self.planets
            .entry((location.galaxy.clone(), location.planet.clone()))
            .or_default()
            .push(Occupant { unit_id, location });
    }

    /// Move a unit to `destination`. Returns where it stood before, if known.
    pub fn relocate(&mut self, unit_id: UnitId, destination: Location) -> Option<Location> {
        let previous = self.remove(unit_id);
        self.place(unit_id, destination);
        previous
    }

    /// Take a unit off its planet. Returns its last location, if known.
    pub fn remove(&mut self, unit_id: UnitId) -> Option<Location> {
        let mut removed = None;
        for occupants in self.planets.values_mut() {
            if let Some(idx) = occupants.iter().position(|o| o.unit_id == unit_id) {
                removed = Some(occupants.remove(idx).location);
                break;
            }
        }
        self.planets.retain(|_, occupants| !occupants.is_empty());
        removed
    }

    pub fn position_of(&self, unit_id: UnitId) -> Option<&Location> {
        self.planets
            .values()
            .flatten()
            .find(|o| o.unit_id == unit_id)
            .map(|o| &o.location)
    }

    pub fn len(&self) -> usize {
        self.planets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }
}

impl Occupancy for PlanetRoster {
    fn occupants(&self, galaxy: &str, planet: &str) -> Vec<Occupant> {
        self.planets
            .get(&(galaxy.to_string(), planet.to_string()))
            .cloned()
            .unwrap_or_default()
    }
}
