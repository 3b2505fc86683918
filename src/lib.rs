//! Intergalactic Travel Engine
//!
//! Teleport stations that move units between planets of a simulated
//! universe, charging a toll in gold, silver and bronze.
//!
//! # Overview
//!
//! A station owns a galactic map of priced paths. A unit standing in the
//! station's galaxy may buy a jump to any planet the map knows, provided
//! nobody already stands on the exact target spot and the unit can pay.
//! Payment is taken only after every check has passed.
//!
//! # Modules
//!
//! - [`models`] - Domain models (resources, locations, units, galactic map)
//! - [`services`] - Command factories and the teleport station
//! - [`config`] - TOML scenario configuration
//! - [`scenario`] - Host that wires a station, its units and their planets
//! - [`logging`] - `tracing` subscriber setup
//!
//! # Example
//!
//! ```rust
//! use intergalactic_travel::services::resource_factory;
//!
//! let fare = resource_factory::parse("create resources gold(5) silver(5) bronze(5)").unwrap();
//! assert_eq!(fare.gold(), 5);
//! ```

pub mod config;
pub mod logging;
pub mod models;
pub mod scenario;
pub mod services;

// Re-export commonly used types
pub use models::errors::{TravelError, TravelResult};
pub use models::resources::ResourceBundle;
pub use scenario::Scenario;
pub use services::teleport_station::TeleportStation;
