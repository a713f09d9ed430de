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
use std::f64::consts::TAU;

use rand::Rng;

use crate::configuration::Configuration;

/// Random configuration generator
///
/// Every joint angle is drawn uniformly from `[0, 2π)`. If a goal bias is
/// set, the goal itself is returned with that probability instead.
#[derive(Clone, Debug)]
pub struct Sampler {
    dof: usize,
    goal: Option<Configuration>,
    goal_bias: f64,
}

impl Sampler {
    /// Sampler without goal bias
    pub fn uniform(dof: usize) -> Self {
        Self {
            dof,
            goal: None,
            goal_bias: 0.0,
        }
    }

    /// Sampler which returns `goal` with the probability `goal_bias`
    ///
    /// `goal_bias` is clamped to `[0, 1]`.
    pub fn with_goal_bias(goal: Configuration, goal_bias: f64) -> Self {
        Self {
            dof: goal.dof(),
            goal: Some(goal.wrapped()),
            goal_bias: goal_bias.clamp(0.0, 1.0),
        }
    }

    pub fn dof(&self) -> usize {
        self.dof
    }

    pub fn goal_bias(&self) -> f64 {
        self.goal_bias
    }

    /// Draw a configuration
    ///
    /// Without goal bias exactly `dof` values are taken from `rng`, so the
    /// sequence only depends on the seed of `rng`.
    pub fn sample<R>(&self, rng: &mut R) -> Configuration
    where
        R: Rng + ?Sized,
    {
        if let Some(goal) = &self.goal {
            if self.goal_bias > 0.0 && rng.gen::<f64>() < self.goal_bias {
                return goal.clone();
            }
        }
        generate_random_joint_positions(rng, self.dof)
    }
}

/// Generate random joint angles in `[0, 2π)`
pub fn generate_random_joint_positions<R>(rng: &mut R, dof: usize) -> Configuration
where
    R: Rng + ?Sized,
{
    (0..dof)
        .map(|_| rng.gen_range(0.0..TAU))
        .collect::<Vec<_>>()
        .into()
}
