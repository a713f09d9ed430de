mod grid_map;
mod oracle;
mod planar_arm;

pub use self::{grid_map::*, oracle::*, planar_arm::*};
