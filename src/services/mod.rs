//! Travel services
//!
//! Command factories that turn text into resources and units, and the
//! teleport station that sells jumps between planets.

pub mod resource_factory;
pub mod teleport_station;
pub mod unit_factory;
