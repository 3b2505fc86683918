//! Teleport station
//!
//! Sells jumps along the paths of its galactic map. A teleport is a
//! validate-then-commit transaction: every check runs before the unit is
//! asked to pay, and a rejected request leaves the unit, the occupants and
//! the station exactly as they were.
//!
//! Checks run in this order and the first failure wins:
//!
//! 1. both arguments are present
//! 2. the unit stands in the station's galaxy
//! 3. the map has a path to the destination's galaxy and planet
//! 4. no other unit stands on the exact destination spot
//! 5. the unit can afford the path's cost
//! 6. the treasury can hold the fare
//!
//! Only then is the unit charged, once, and the fare added to the treasury.
//! Moving the unit is left to the caller.

use tracing::{debug, info, warn};

use crate::models::errors::{LocationSegment, TravelError, TravelResult};
use crate::models::galactic_map::{GalacticMap, Path};
use crate::models::location::Location;
use crate::models::owner::BusinessOwner;
use crate::models::resources::ResourceBundle;
use crate::models::roster::Occupancy;
use crate::models::unit::Traveler;

pub struct TeleportStation {
    owner: BusinessOwner,
    galactic_map: GalacticMap,
    location: Location,
    /// Fares collected since the owner last drew profits.
    treasury: ResourceBundle,
}

impl TeleportStation {
    pub fn new(owner: BusinessOwner, galactic_map: GalacticMap, location: Location) -> Self {
        Self {
            owner,
            galactic_map,
            location,
            treasury: ResourceBundle::EMPTY,
        }
    }

    pub fn owner(&self) -> &BusinessOwner {
        &self.owner
    }

    pub fn galactic_map(&self) -> &GalacticMap {
        &self.galactic_map
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn treasury(&self) -> &ResourceBundle {
        &self.treasury
    }

    /// Charge `unit_to_teleport` for a jump to `destination`.
    ///
    /// `occupancy` tells the station who already stands on the target
    /// planet. On success the unit has paid the path's cost exactly once;
    /// on any error nothing has changed.
    pub fn teleport_unit<T, O>(
        &mut self,
        unit_to_teleport: Option<&mut T>,
        destination: Option<&Location>,
        occupancy: &O,
    ) -> TravelResult<()>
    where
        T: Traveler + ?Sized,
        O: Occupancy + ?Sized,
    {
        let unit = unit_to_teleport.ok_or(TravelError::ArgumentMissing {
            parameter: "unit_to_teleport",
        })?;
        let destination = destination.ok_or(TravelError::ArgumentMissing {
            parameter: "destination",
        })?;

        let fare = match self.validate(&*unit, destination, occupancy) {
            Ok(fare) => fare,
            Err(err) => {
                warn!(unit = unit.id(), %destination, error = %err, "teleport rejected");
                return Err(err);
            }
        };

        let payment = match unit.pay(&fare) {
            Ok(payment) => payment,
            Err(err) => {
                warn!(unit = unit.id(), %destination, error = %err, "payment refused");
                return Err(err);
            }
        };
        if payment != fare {
            warn!(unit = unit.id(), %fare, %payment, "unit paid a different amount than the fare");
        }
        // validate() proved the fare fits, so this never saturates
        self.treasury = self.treasury.saturating_add(&fare);

        info!(
            unit = unit.id(),
            %destination,
            %payment,
            "teleport settled"
        );
        Ok(())
    }

    /// Hand every collected fare to the station owner and empty the treasury.
    pub fn pay_profits(&mut self, owner: &BusinessOwner) -> TravelResult<ResourceBundle> {
        if owner.identification_number != self.owner.identification_number {
            warn!(
                requester = owner.identification_number,
                owner = self.owner.identification_number,
                "profit payout refused"
            );
            return Err(TravelError::UnauthorizedAccess {
                requester: owner.identification_number,
            });
        }

        let profits = std::mem::take(&mut self.treasury);
        info!(owner = %self.owner.nickname, %profits, "profits paid out");
        Ok(profits)
    }

    /// Run every check and return the fare to charge.
    fn validate<T, O>(
        &self,
        unit: &T,
        destination: &Location,
        occupancy: &O,
    ) -> TravelResult<ResourceBundle>
    where
        T: Traveler + ?Sized,
        O: Occupancy + ?Sized,
    {
        self.check_range(unit)?;
        debug!(unit = unit.id(), "range checked");

        let path = self.resolve_path(destination)?;
        debug!(unit = unit.id(), target = %path.target_location(), "path resolved");

        check_occupancy(unit, path, destination, occupancy)?;
        debug!(unit = unit.id(), "destination free");

        let fare = *path.cost();
        if !unit.can_pay(&fare) {
            return Err(TravelError::InsufficientResources {
                cost: fare,
                available: *unit.resources(),
            });
        }
        debug!(unit = unit.id(), %fare, "funds checked");

        if self.treasury.checked_add(&fare).is_none() {
            return Err(TravelError::TreasuryFull { fare });
        }

        Ok(fare)
    }

    /// A unit may only use a station in its own galaxy. A unit that is
    /// nowhere is out of range of every station.
    fn check_range<T: Traveler + ?Sized>(&self, unit: &T) -> TravelResult<()> {
        match unit.current_location() {
            Some(current) if current.in_galaxy(&self.location.galaxy) => Ok(()),
            current => Err(TravelError::TeleportOutOfRange {
                current: current
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "unknown".to_string()),
                station_galaxy: self.location.galaxy.clone(),
            }),
        }
    }

    fn resolve_path(&self, destination: &Location) -> TravelResult<&Path> {
        self.galactic_map.find_path(destination).ok_or_else(|| {
            let segment = self.galactic_map.unmatched_segment(destination);
            let name = match segment {
                LocationSegment::Galaxy => destination.galaxy.clone(),
                LocationSegment::Planet => destination.planet.clone(),
            };
            TravelError::LocationNotFound { segment, name }
        })
    }
}

/// Reject the jump if another unit already stands on the destination spot.
/// The traveler itself never blocks its own jump.
fn check_occupancy<T, O>(
    unit: &T,
    path: &Path,
    destination: &Location,
    occupancy: &O,
) -> TravelResult<()>
where
    T: Traveler + ?Sized,
    O: Occupancy + ?Sized,
{
    let target = path.target_location();
    let overlaps = occupancy
        .occupants(&target.galaxy, &target.planet)
        .iter()
        .any(|o| o.unit_id != unit.id() && o.location.same_spot(destination));

    if overlaps {
        return Err(TravelError::InvalidTeleportationLocation {
            destination: destination.clone(),
        });
    }
    Ok(())
}
