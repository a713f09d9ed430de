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

use std::{collections::TryReserveError, io};

use thiserror::Error;

/// Which end of the planning request is concerned by an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationPart {
    Start,
    Goal,
}

/// Error for `arm_planner`
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("DoF mismatch {} != {}", .0, .1)]
    DofMismatch(usize, usize),
    #[error("DoF must be at least 2, but {} is given", .0)]
    InvalidDof(usize),
    #[error("Collision error: {part:?} configuration is not valid")]
    Collision { part: ConfigurationPart },
    #[error("Non finite angle in {part:?} configuration at joint {index}")]
    NonFiniteAngle {
        part: ConfigurationPart,
        index: usize,
    },
    #[error("Invalid planner config: {}", .0)]
    InvalidConfig(String),
    #[error("Failed to grow the tree: {}", .0)]
    ResourceExhausted(#[from] TryReserveError),
    #[error("Map shape mismatch: {width}x{height} needs {expected} cells, but {actual} given")]
    MapShape {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    #[error("failed to parse {}", .0)]
    ParseError(String),
    #[error("IO error {:?}", source)]
    Io {
        #[from]
        source: io::Error,
    },
}

/// Result for `arm_planner`
pub type Result<T> = ::std::result::Result<T, Error>;
