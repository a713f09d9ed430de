/*
Copyright 2017 Takashi Ogura

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/
//! # Motion Planning Library for Planar Arms
//!
//! Get the collision free sequence of joint angles of an arm with revolute
//! joints, using RRT (Rapidly-exploring Random Tree) in the joint space. The
//! collision check is abstracted by [`CollisionOracle`]; an occupancy grid
//! based oracle for planar arms is in [`collision`].
//!
//! ```
//! use arm_planner::{collision::FreeSpace, Configuration, RrtPlannerBuilder};
//!
//! let planner = RrtPlannerBuilder::new().step_length(0.2).finalize().unwrap();
//! let start = Configuration::from([0.0, 0.0]);
//! let goal = Configuration::from([1.0, 0.5]);
//! let outcome = planner.plan_with_seed(&FreeSpace, &start, &goal, 1).unwrap();
//! let path = outcome.path().unwrap();
//! assert_eq!(path.first(), Some(&start));
//! assert!(arm_planner::distance(path.last().unwrap(), &goal) < 0.2);
//! ```

#![warn(rust_2018_idioms)]

mod errors;

pub mod collision;

mod configuration;

mod path;

mod planner;

mod sampler;

mod steer;

pub mod tree;

pub use crate::{
    collision::CollisionOracle,
    configuration::*,
    errors::*,
    path::*,
    planner::*,
    sampler::*,
    steer::*,
    tree::{NearestStrategy, Tree},
};
