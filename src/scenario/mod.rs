//! Scenario host
//!
//! Owns one teleport station, the units in play and the roster of who
//! stands where. Every teleport goes through [`Scenario::teleport`], which
//! holds the only mutable handle on the unit for the whole check-then-pay
//! sequence and then moves the unit once the station has been paid.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::config::ScenarioConfig;
use crate::models::errors::{TravelError, TravelResult};
use crate::models::location::Location;
use crate::models::roster::PlanetRoster;
use crate::models::unit::{Unit, UnitId};
use crate::services::teleport_station::TeleportStation;
use crate::services::{resource_factory, unit_factory};

pub struct Scenario {
    station: TeleportStation,
    units: BTreeMap<UnitId, Unit>,
    roster: PlanetRoster,
}

impl Scenario {
    /// An empty universe around `station`.
    pub fn new(station: TeleportStation) -> Self {
        Self {
            station,
            units: BTreeMap::new(),
            roster: PlanetRoster::new(),
        }
    }

    /// Build the station and create every configured unit through the
    /// command factories.
    pub fn from_config(config: &ScenarioConfig) -> TravelResult<Self> {
        let station = TeleportStation::new(
            config.owner(),
            config.galactic_map(),
            config.station.to_location(),
        );
        let mut scenario = Scenario::new(station);

        for unit_config in &config.units {
            let mut unit = unit_factory::parse(&unit_config.command)?;
            if let Some(command) = &unit_config.resources {
                unit.resources = resource_factory::parse(command)?;
            }
            unit.current_location = Some(unit_config.place.to_location());
            scenario.add_unit(unit)?;
        }

        info!(
            units = scenario.units.len(),
            paths = scenario.station.galactic_map().len(),
            "scenario ready"
        );
        Ok(scenario)
    }

    /// Bring a unit into play, standing wherever its current location says.
    pub fn add_unit(&mut self, unit: Unit) -> TravelResult<()> {
        if self.units.contains_key(&unit.id) {
            return Err(TravelError::Config {
                field: "units".to_string(),
                message: format!("unit id {} is already taken", unit.id),
            });
        }
        if let Some(location) = &unit.current_location {
            self.roster.place(unit.id, location.clone());
        }
        debug!(unit = unit.id, kind = unit.kind.name(), name = %unit.name, "unit added");
        self.units.insert(unit.id, unit);
        Ok(())
    }

    /// Teleport a unit through the station and, once paid, move it.
    /// An unknown `unit_id` is reported as a missing `unit_to_teleport`.
    pub fn teleport(&mut self, unit_id: UnitId, destination: &Location) -> TravelResult<()> {
        let unit = self.units.get_mut(&unit_id);
        self.station.teleport_unit(unit, Some(destination), &self.roster)?;

        if let Some(unit) = self.units.get_mut(&unit_id) {
            unit.move_to(destination.clone());
        }
        self.roster.relocate(unit_id, destination.clone());
        debug!(unit = unit_id, %destination, "unit relocated");
        Ok(())
    }

    pub fn station(&self) -> &TeleportStation {
        &self.station
    }

    pub fn station_mut(&mut self) -> &mut TeleportStation {
        &mut self.station
    }

    pub fn unit(&self, unit_id: UnitId) -> Option<&Unit> {
        self.units.get(&unit_id)
    }

    pub fn roster(&self) -> &PlanetRoster {
        &self.roster
    }
}
