//! Galactic map
//!
//! The priced routes a teleport station can send units along.

use super::errors::LocationSegment;
use super::location::Location;
use super::resources::ResourceBundle;

/// A directed route to `target_location`, costing `cost` per jump.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    target_location: Location,
    cost: ResourceBundle,
}

impl Path {
    pub fn new(target_location: Location, cost: ResourceBundle) -> Self {
        Self {
            target_location,
            cost,
        }
    }

    pub fn target_location(&self) -> &Location {
        &self.target_location
    }

    pub fn cost(&self) -> &ResourceBundle {
        &self.cost
    }
}

/// Ordered paths owned by a station. Never mutated by a teleport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalacticMap {
    paths: Vec<Path>,
}

impl GalacticMap {
    pub fn new(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// First path, in insertion order, whose target has the same galaxy and
    /// planet as `target`. Coordinates are not part of the match.
    pub fn find_path(&self, target: &Location) -> Option<&Path> {
        self.paths
            .iter()
            .find(|p| p.target_location.same_place(target))
    }

    /// Whether any path leads into `galaxy`.
    pub fn knows_galaxy(&self, galaxy: &str) -> bool {
        self.paths
            .iter()
            .any(|p| p.target_location.in_galaxy(galaxy))
    }

    /// Which part of an unmatched `target` the map does not know: the galaxy
    /// when no path enters it, otherwise the planet.
    pub fn unmatched_segment(&self, target: &Location) -> LocationSegment {
        if self.knows_galaxy(&target.galaxy) {
            LocationSegment::Planet
        } else {
            LocationSegment::Galaxy
        }
    }
}

impl FromIterator<Path> for GalacticMap {
    fn from_iter<I: IntoIterator<Item = Path>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
