use std::path::{Path, PathBuf};

use arm_planner::{
    collision::{GridMap, PlanarArmConfig},
    Configuration, RrtPlannerConfig,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Error;

#[derive(Debug, Serialize, Deserialize, Clone, Default, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ArmPlannerConfig {
    // TOML format has a restriction that if a table itself contains tables,
    // all keys with non-table values must be emitted first.
    // Therefore, these fields must be located at the start of the struct.
    /// Path to the occupancy grid map, relative to this file.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_path: Option<String>,
    #[serde(skip)]
    map_full_path: Option<PathBuf>,
    /// Start joint angles [rad]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Vec<f64>>,
    /// Goal joint angles [rad]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Vec<f64>>,

    #[serde(default)]
    pub arm: PlanarArmConfig,
    #[serde(default)]
    pub planner: RrtPlannerConfig,
}

impl ArmPlannerConfig {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_str(
            &fs_err::read_to_string(&path)
                .map_err(|e| Error::NoFile(path.as_ref().to_owned(), e))?,
            path,
        )
    }

    pub fn from_str<P: AsRef<Path>>(s: &str, path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let mut config: ArmPlannerConfig =
            toml::from_str(s).map_err(|e| Error::TomlParseFailure(path.to_owned(), e))?;
        config.map_full_path = config
            .map_path
            .as_ref()
            .map(|map_path| resolve_relative_path(path, map_path))
            .transpose()?;
        debug!("{config:?}");
        Ok(config)
    }

    /// Path of the map, resolved against the directory of the config file
    pub fn map_full_path(&self) -> Option<&Path> {
        self.map_full_path
            .as_deref()
            .or_else(|| self.map_path.as_deref().map(Path::new))
    }

    /// Use `path` as the map instead of `map_path`
    pub fn set_map_path(&mut self, path: PathBuf) {
        self.map_path = Some(path.to_string_lossy().into_owned());
        self.map_full_path = Some(path);
    }

    pub fn load_map(&self) -> Result<GridMap, Error> {
        let path = self.map_full_path().ok_or(Error::NoMapPath)?;
        Ok(GridMap::from_file(path)?)
    }

    pub fn start_configuration(&self) -> Result<Configuration, Error> {
        self.start
            .clone()
            .map(Configuration::from)
            .ok_or(Error::NoConfiguration("start"))
    }

    pub fn goal_configuration(&self) -> Result<Configuration, Error> {
        self.goal
            .clone()
            .map(Configuration::from)
            .ok_or(Error::NoConfiguration("goal"))
    }
}

fn resolve_relative_path<P: AsRef<Path>>(base_path: P, path: &str) -> Result<PathBuf, Error> {
    Ok(base_path
        .as_ref()
        .parent()
        .ok_or_else(|| Error::NoParentDirectory(base_path.as_ref().to_owned()))?
        .join(path))
}
