use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("arm-planner-apps: No map is specified.")]
    NoMapPath,
    #[error("arm-planner-apps: No {} configuration is specified.", .0)]
    NoConfiguration(&'static str),
    #[error("arm-planner-apps: Failed to parse {:?} as toml ({}).", .0, .1)]
    TomlParseFailure(PathBuf, #[source] toml::de::Error),
    #[error("arm-planner-apps: No File {:?} is found ({}).", .0, .1)]
    NoFile(PathBuf, #[source] std::io::Error),
    #[error("arm-planner-apps: No ParentDirectory {:?} is found.", .0)]
    NoParentDirectory(PathBuf),
    #[error("arm-planner-apps: Failed to parse angles {:?} ({}).", .0, .1)]
    InvalidAngles(String, #[source] std::num::ParseFloatError),
    #[error("arm-planner-apps: arm-planner: {:?}", .0)]
    ArmPlanner(#[from] arm_planner::Error),
}
