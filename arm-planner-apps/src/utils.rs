use std::path::PathBuf;

use arm_planner::Configuration;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::Error;

const ARM_PLANNER_CONFIG_ENV_NAME: &str = "ARM_PLANNER_CONFIG_PATH";

/// Get planner config path from input or env ARM_PLANNER_CONFIG_PATH
pub fn get_apps_planner_config(config: Option<PathBuf>) -> Option<PathBuf> {
    if config.is_some() {
        config
    } else {
        std::env::var(ARM_PLANNER_CONFIG_ENV_NAME)
            .map(|s| {
                warn!("### ENV VAR {} is used ###", s);
                PathBuf::from(s)
            })
            .ok()
    }
}

/// Install the tracing subscriber, writing to stderr
///
/// The log level is taken from `RUST_LOG` (`info` by default).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Parse comma separated joint angles such as `0.0,1.57`
pub fn parse_angles(s: &str) -> Result<Configuration, Error> {
    s.split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| Error::InvalidAngles(s.to_owned(), e))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Configuration::from)
}
