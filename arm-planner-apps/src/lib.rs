mod error;
mod planner_config;
pub mod utils;

pub use error::*;
pub use planner_config::*;
