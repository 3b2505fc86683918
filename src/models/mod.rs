//! Domain models
//!
//! Value types for resources, locations and units, plus the galactic map
//! and the planet roster that tracks who stands where. Models are plain
//! data with the small amount of logic needed to keep their invariants.

pub mod constants;
pub mod errors;
pub mod galactic_map;
pub mod location;
pub mod owner;
pub mod resources;
pub mod roster;
pub mod unit;
