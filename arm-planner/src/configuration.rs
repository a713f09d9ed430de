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
//! Joint space of a revolute arm and its periodic metric

use std::{
    f64::consts::{PI, TAU},
    fmt,
    ops::Deref,
};

use serde::{Deserialize, Serialize};

/// A pose of the arm: one angle [rad] per joint.
///
/// Every coordinate is periodic with period 2π, so the space is a torus.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(Vec<f64>);

impl Configuration {
    pub fn new(angles: Vec<f64>) -> Self {
        Self(angles)
    }

    /// Number of joints
    pub fn dof(&self) -> usize {
        self.0.len()
    }

    pub fn angles(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Index of the first angle which is NaN or infinite
    pub fn first_non_finite(&self) -> Option<usize> {
        self.0.iter().position(|a| !a.is_finite())
    }

    /// Angular distance to `other`, see [`distance`]
    pub fn distance(&self, other: &Configuration) -> f64 {
        distance(&self.0, &other.0)
    }

    /// Same configuration with every angle wrapped into `[0, 2π)`
    pub fn wrapped(&self) -> Self {
        Self(self.0.iter().copied().map(wrap_angle).collect())
    }
}

impl Deref for Configuration {
    type Target = [f64];
    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Configuration {
    fn from(angles: Vec<f64>) -> Self {
        Self(angles)
    }
}

impl From<&[f64]> for Configuration {
    fn from(angles: &[f64]) -> Self {
        Self(angles.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Configuration {
    fn from(angles: [f64; N]) -> Self {
        Self(angles.to_vec())
    }
}

impl From<Configuration> for Vec<f64> {
    fn from(config: Configuration) -> Self {
        config.0
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, angle) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{angle:.6}")?;
        }
        write!(f, "]")
    }
}

/// Wrap an angle into `[0, 2π)`
///
/// ```
/// use std::f64::consts::PI;
/// assert!((arm_planner::wrap_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
/// assert_eq!(arm_planner::wrap_angle(0.5), 0.5);
/// ```
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly 2π for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Minimal rotation between two angles, in `[0, π]`
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % TAU;
    diff.min(TAU - diff)
}

/// Signed minimal rotation which brings `from` onto `to`, in `(-π, π]`
///
/// ```
/// use std::f64::consts::PI;
/// let delta = arm_planner::shortest_angular_delta(0.1, 2.0 * PI - 0.1);
/// assert!((delta + 0.2).abs() < 1e-12);
/// ```
pub fn shortest_angular_delta(from: f64, to: f64) -> f64 {
    let delta = wrap_angle(to - from);
    if delta > PI {
        delta - TAU
    } else {
        delta
    }
}

/// Aggregate angular distance between two configurations
///
/// Each coordinate contributes its minimal rotation (so that angles wrapping
/// past ±π are close), and the contributions are combined by the Euclidean
/// norm.
///
/// ```
/// use std::f64::consts::PI;
/// let d = arm_planner::distance(&[0.0, 0.0], &[2.0 * PI - 0.3, 0.4]);
/// assert!((d - 0.5).abs() < 1e-12);
/// ```
pub fn distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(&a, &b)| {
            let d = angular_difference(a, b);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}
