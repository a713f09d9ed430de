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
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::configuration::{distance, Configuration};

/// Sequence of configurations from the start to the goal
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlannedPath(Vec<Configuration>);

impl PlannedPath {
    pub fn new(configurations: Vec<Configuration>) -> Self {
        Self(configurations)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn configurations(&self) -> &[Configuration] {
        &self.0
    }

    pub fn first(&self) -> Option<&Configuration> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Configuration> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Configuration> {
        self.0.iter()
    }

    /// Sum of the distances between consecutive configurations
    pub fn total_distance(&self) -> f64 {
        self.0.windows(2).map(|w| distance(&w[0], &w[1])).sum()
    }

    /// Longest distance between consecutive configurations
    pub fn max_step(&self) -> f64 {
        self.0
            .windows(2)
            .map(|w| distance(&w[0], &w[1]))
            .fold(0.0, f64::max)
    }

    pub fn into_inner(self) -> Vec<Configuration> {
        self.0
    }

    /// Plain joint angles, one `Vec` per waypoint
    pub fn to_vecs(&self) -> Vec<Vec<f64>> {
        self.0.iter().map(|c| c.to_vec()).collect()
    }
}

impl Index<usize> for PlannedPath {
    type Output = Configuration;
    fn index(&self, index: usize) -> &Configuration {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a PlannedPath {
    type Item = &'a Configuration;
    type IntoIter = std::slice::Iter<'a, Configuration>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for PlannedPath {
    type Item = Configuration;
    type IntoIter = std::vec::IntoIter<Configuration>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
