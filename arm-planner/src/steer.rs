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
use crate::{
    collision::CollisionOracle,
    configuration::{distance, shortest_angular_delta, wrap_angle, Configuration},
    errors::*,
};

/// Result of [`Extender::extend`]
#[derive(Clone, Debug, PartialEq)]
pub enum Extension {
    /// The configuration reached by the step, to be added to the tree
    Reached(Configuration),
    /// The step ended in collision
    Blocked,
}

impl Extension {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Extension::Blocked)
    }
}

/// Bounded step toward a target configuration
#[derive(Clone, Debug)]
pub struct Extender {
    step_length: f64,
    intermediate_checks: usize,
}

impl Extender {
    /// Create an extender which moves at most `step_length` per step
    ///
    /// `step_length` must be finite and strictly positive.
    pub fn new(step_length: f64) -> Result<Self> {
        if !(step_length.is_finite() && step_length > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "step_length must be positive, but {step_length} is given"
            )));
        }
        Ok(Self {
            step_length,
            intermediate_checks: 0,
        })
    }

    /// Also validate `num` evenly spaced configurations inside each step
    pub fn intermediate_checks(mut self, num: usize) -> Self {
        self.intermediate_checks = num;
        self
    }

    pub fn step_length(&self) -> f64 {
        self.step_length
    }

    /// Move from `from` toward `toward` by at most the step length
    ///
    /// The direction is the shortest rotation of every joint, so the move never
    /// goes the long way around. The reached configuration (wrapped to
    /// `[0, 2π)`) is returned only if `oracle` accepts it and every
    /// intermediate check.
    pub fn extend<O>(&self, from: &Configuration, toward: &Configuration, oracle: &O) -> Extension
    where
        O: CollisionOracle + ?Sized,
    {
        let dist = distance(from, toward);
        let deltas = from
            .iter()
            .zip(toward.iter())
            .map(|(&f, &t)| shortest_angular_delta(f, t))
            .collect::<Vec<_>>();
        let ratio = if dist > self.step_length {
            self.step_length / dist
        } else {
            1.0
        };
        let point_at = |t: f64| -> Configuration {
            from.iter()
                .zip(&deltas)
                .map(|(&f, &d)| wrap_angle(f + d * ratio * t))
                .collect::<Vec<_>>()
                .into()
        };

        let candidate = if ratio < 1.0 {
            point_at(1.0)
        } else {
            toward.wrapped()
        };
        if !oracle.is_valid(&candidate) {
            return Extension::Blocked;
        }
        let n = self.intermediate_checks;
        for k in 1..=n {
            if !oracle.is_valid(&point_at(k as f64 / (n + 1) as f64)) {
                return Extension::Blocked;
            }
        }
        Extension::Reached(candidate)
    }
}
