use std::fmt;

use thiserror::Error;

use super::location::Location;
use super::resources::ResourceBundle;

/// Which segment of a destination the galactic map failed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSegment {
    Galaxy,
    Planet,
}

impl fmt::Display for LocationSegment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LocationSegment::Galaxy => write!(f, "Galaxy"),
            LocationSegment::Planet => write!(f, "Planet"),
        }
    }
}

/// Why a unit creation command was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitCommandFault {
    /// The command does not have the `create unit <type> <name> <id>` shape
    MalformedCommand,
    /// The type name is not one of the known unit kinds
    UnknownUnitType(String),
    /// The id segment is not an integer
    InvalidUnitId(String),
}

impl fmt::Display for UnitCommandFault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UnitCommandFault::MalformedCommand => {
                write!(f, "expected `create unit <type> <name> <id>`")
            }
            UnitCommandFault::UnknownUnitType(name) => write!(f, "unknown unit type `{}`", name),
            UnitCommandFault::InvalidUnitId(id) => write!(f, "`{}` is not a valid unit id", id),
        }
    }
}

/// Errors raised by command parsing, teleportation and scenario setup
#[derive(Error, Debug)]
pub enum TravelError {
    /// The text does not follow the resource creation grammar
    #[error("Invalid command: {command:?}")]
    InvalidCommand { command: String },

    /// A numeric amount does not fit the currency range
    #[error("Amount {amount} for {currency} is out of range")]
    Overflow { currency: String, amount: String },

    #[error("Invalid unit creation command {command:?}: {fault}")]
    InvalidUnitCreationCommand { command: String, fault: UnitCommandFault },

    #[error("Missing argument: {parameter}")]
    ArgumentMissing { parameter: &'static str },

    #[error("unit_to_teleport.current_location {current} is out of range of {station_galaxy}")]
    TeleportOutOfRange { current: String, station_galaxy: String },

    #[error("{segment} {name} is not on the galactic map of this station")]
    LocationNotFound { segment: LocationSegment, name: String },

    #[error("Cannot teleport to {destination}: units will overlap")]
    InvalidTeleportationLocation { destination: Location },

    #[error("There is no such thing as a FREE LUNCH: fare {cost}, unit holds {available}")]
    InsufficientResources { cost: ResourceBundle, available: ResourceBundle },

    #[error("Station treasury cannot hold another fare of {fare}")]
    TreasuryFull { fare: ResourceBundle },

    #[error("Owner {requester} is not allowed to collect profits of this station")]
    UnauthorizedAccess { requester: u64 },

    #[error("Configuration error in {field}: {message}")]
    Config { field: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using TravelError
pub type TravelResult<T> = Result<T, TravelError>;
