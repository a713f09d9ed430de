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
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{CollisionOracle, GridMap};
use crate::configuration::Configuration;

/// Kinematic description of a planar arm made of revolute joints
///
/// The arm is a chain of links of equal length whose first joint is fixed at
/// `base`. Each angle is the absolute direction of the corresponding link in
/// the map frame, so the end of link `i` is the end of link `i - 1` moved by
/// `link_length * (cos θ_i, sin θ_i)`.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanarArm {
    /// Length of each link [cells]
    pub link_length: f64,
    /// Position of the first joint [cells]
    pub base: [f64; 2],
}

impl PlanarArm {
    pub fn new(link_length: f64, base: [f64; 2]) -> Self {
        Self { link_length, base }
    }

    /// Arm mounted at the middle of the bottom edge of `map`
    pub fn for_map(map: &GridMap, link_length: f64) -> Self {
        Self::new(link_length, [map.width() as f64 / 2.0, 0.0])
    }

    /// Positions of the base and of the end of every link
    pub fn link_endpoints(&self, config: &Configuration) -> Vec<[f64; 2]> {
        let mut points = Vec::with_capacity(config.dof() + 1);
        let mut point = self.base;
        points.push(point);
        for angle in config.iter() {
            point = [
                point[0] + self.link_length * angle.cos(),
                point[1] + self.link_length * angle.sin(),
            ];
            points.push(point);
        }
        points
    }

    /// Position of the tip of the last link
    pub fn end_effector(&self, config: &Configuration) -> [f64; 2] {
        let mut point = self.base;
        for angle in config.iter() {
            point[0] += self.link_length * angle.cos();
            point[1] += self.link_length * angle.sin();
        }
        point
    }
}

/// Config for [`PlanarArm`]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PlanarArmConfig {
    #[serde(default = "default_link_length")]
    pub link_length: f64,
    /// Base position in cells. The middle of the bottom edge of the map is
    /// used if not set.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<[f64; 2]>,
}

fn default_link_length() -> f64 {
    10.0
}

impl Default for PlanarArmConfig {
    fn default() -> Self {
        Self {
            link_length: default_link_length(),
            base: None,
        }
    }
}

impl PlanarArmConfig {
    pub fn create_arm(&self, map: &GridMap) -> PlanarArm {
        match self.base {
            Some(base) => PlanarArm::new(self.link_length, base),
            None => PlanarArm::for_map(map, self.link_length),
        }
    }
}

/// Collision oracle of a [`PlanarArm`] in a [`GridMap`]
///
/// A configuration is valid if every joint lies inside the map and no cell
/// crossed by a link is an obstacle.
#[derive(Clone, Debug)]
pub struct GridArmOracle<'a> {
    map: &'a GridMap,
    arm: PlanarArm,
}

impl<'a> GridArmOracle<'a> {
    pub fn new(map: &'a GridMap, arm: PlanarArm) -> Self {
        Self { map, arm }
    }

    pub fn map(&self) -> &GridMap {
        self.map
    }

    pub fn arm(&self) -> &PlanarArm {
        &self.arm
    }

    fn to_cell(&self, point: [f64; 2]) -> (usize, usize) {
        // cell size is 1; the caller made sure the point is inside the map
        let x = (point[0] as usize).min(self.map.width() - 1);
        let y = (point[1] as usize).min(self.map.height() - 1);
        (x, y)
    }

    fn contains(&self, point: [f64; 2]) -> bool {
        point[0] >= 0.0
            && point[0] < self.map.width() as f64
            && point[1] >= 0.0
            && point[1] < self.map.height() as f64
    }

    fn is_valid_segment(&self, p0: [f64; 2], p1: [f64; 2]) -> bool {
        if !self.contains(p0) || !self.contains(p1) {
            return false;
        }
        let mut line = BresenhamLine::new(self.to_cell(p0), self.to_cell(p1));
        line.all(|(x, y)| self.map.is_free(x, y))
    }
}

impl CollisionOracle for GridArmOracle<'_> {
    fn is_valid(&self, config: &Configuration) -> bool {
        self.arm
            .link_endpoints(config)
            .windows(2)
            .all(|link| self.is_valid_segment(link[0], link[1]))
    }
}

/// Cells crossed by the segment between two cells, both ends included
#[derive(Debug)]
pub struct BresenhamLine {
    x: i64,
    y: i64,
    end: (i64, i64),
    dx: i64,
    dy: i64,
    step_x: i64,
    step_y: i64,
    err: i64,
    done: bool,
}

impl BresenhamLine {
    pub fn new(start: (usize, usize), end: (usize, usize)) -> Self {
        let (x0, y0) = (start.0 as i64, start.1 as i64);
        let (x1, y1) = (end.0 as i64, end.1 as i64);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            end: (x1, y1),
            dx,
            dy,
            step_x: if x0 < x1 { 1 } else { -1 },
            step_y: if y0 < y1 { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.done {
            return None;
        }
        let current = (self.x as usize, self.y as usize);
        if (self.x, self.y) == self.end {
            self.done = true;
            return Some(current);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.step_x;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.step_y;
        }
        Some(current)
    }
}
