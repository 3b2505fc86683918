//! Scenario configuration
//!
//! A scenario is one station, its galactic map and the units that start
//! out in the universe, described in TOML.

pub mod scenario_config;

pub use scenario_config::{OwnerConfig, PathConfig, PlaceConfig, ScenarioConfig, UnitConfig};
