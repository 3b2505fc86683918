use std::fmt;

/// A point on a planet's surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A place in the universe: a planet inside a galaxy, plus a surface spot.
/// Galaxy and planet names identify the place; coordinates only matter
/// when two units meet on the same planet.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub galaxy: String,
    pub planet: String,
    pub coordinates: Coordinates,
}

impl Location {
    pub fn new(
        galaxy: impl Into<String>,
        planet: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            galaxy: galaxy.into(),
            planet: planet.into(),
            coordinates,
        }
    }

    pub fn in_galaxy(&self, galaxy: &str) -> bool {
        self.galaxy == galaxy
    }

    /// Same galaxy and planet name; coordinates are ignored.
    pub fn same_place(&self, other: &Location) -> bool {
        self.galaxy == other.galaxy && self.planet == other.planet
    }

    /// Same place and the exact same coordinates.
    pub fn same_spot(&self, other: &Location) -> bool {
        self.same_place(other) && self.coordinates == other.coordinates
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({}) at {:.2}, {:.2}",
            self.planet, self.galaxy, self.coordinates.latitude, self.coordinates.longitude
        )
    }
}
