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
use crate::configuration::Configuration;

/// Validity test of a configuration against the environment
///
/// The planner only looks at the boolean answer. Implementations must be
/// cheap to call repeatedly and must not depend on the planner state.
pub trait CollisionOracle {
    /// Returns `true` if the arm in `config` does not collide with anything
    fn is_valid(&self, config: &Configuration) -> bool;
}

impl<F> CollisionOracle for F
where
    F: Fn(&Configuration) -> bool,
{
    fn is_valid(&self, config: &Configuration) -> bool {
        self(config)
    }
}

/// Oracle which accepts every configuration
#[derive(Clone, Copy, Debug, Default)]
pub struct FreeSpace;

impl CollisionOracle for FreeSpace {
    fn is_valid(&self, _config: &Configuration) -> bool {
        true
    }
}
