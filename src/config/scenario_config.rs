use std::path::Path as FsPath;

use serde::{Deserialize, Serialize};

use crate::models::errors::{TravelError, TravelResult};
use crate::models::galactic_map::{GalacticMap, Path};
use crate::models::location::{Coordinates, Location};
use crate::models::owner::BusinessOwner;
use crate::models::resources::ResourceBundle;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub owner: OwnerConfig,
    pub station: PlaceConfig,
    pub paths: Vec<PathConfig>,
    #[serde(default)]
    pub units: Vec<UnitConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerConfig {
    pub id: u64,
    pub nickname: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceConfig {
    pub galaxy: String,
    pub planet: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(flatten)]
    pub target: PlaceConfig,
    pub cost: ResourceBundle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitConfig {
    /// `create unit <type> <name> <id>`
    pub command: String,
    /// `create resources gold(<n>) silver(<n>) bronze(<n>)`; empty purse when absent
    pub resources: Option<String>,
    #[serde(flatten)]
    pub place: PlaceConfig,
}

impl ScenarioConfig {
    /// Load and validate a scenario from a TOML file
    pub fn from_file<P: AsRef<FsPath>>(path: P) -> TravelResult<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a scenario from TOML text
    pub fn from_toml_str(content: &str) -> TravelResult<Self> {
        let config: ScenarioConfig = toml::from_str(content).map_err(|e| TravelError::Config {
            field: "toml".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TravelResult<()> {
        require_name("owner.nickname", &self.owner.nickname)?;
        self.station.validate("station")?;

        if self.paths.is_empty() {
            return Err(config_error("paths", "a station needs at least one path"));
        }
        for (i, path) in self.paths.iter().enumerate() {
            path.target.validate(&format!("paths[{}]", i))?;
        }
        for (i, unit) in self.units.iter().enumerate() {
            let field = format!("units[{}]", i);
            require_name(&format!("{}.command", field), &unit.command)?;
            unit.place.validate(&field)?;
        }
        Ok(())
    }

    pub fn owner(&self) -> BusinessOwner {
        BusinessOwner::new(self.owner.id, self.owner.nickname.clone())
    }

    pub fn galactic_map(&self) -> GalacticMap {
        self.paths
            .iter()
            .map(|p| Path::new(p.target.to_location(), p.cost))
            .collect()
    }
}

impl PlaceConfig {
    pub fn to_location(&self) -> Location {
        Location::new(
            self.galaxy.clone(),
            self.planet.clone(),
            Coordinates::new(self.latitude, self.longitude),
        )
    }

    fn validate(&self, field: &str) -> TravelResult<()> {
        require_name(&format!("{}.galaxy", field), &self.galaxy)?;
        require_name(&format!("{}.planet", field), &self.planet)?;
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(config_error(field, "coordinates must be finite"));
        }
        Ok(())
    }
}

fn require_name(field: &str, value: &str) -> TravelResult<()> {
    if value.trim().is_empty() {
        return Err(config_error(field, "cannot be empty"));
    }
    Ok(())
}

fn config_error(field: &str, message: &str) -> TravelError {
    TravelError::Config {
        field: field.to_string(),
        message: message.to_string(),
    }
}
