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
//! Rooted tree of configurations grown by the planner

use rayon::prelude::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    configuration::{distance, Configuration},
    errors::*,
    path::PlannedPath,
};

/// Below this size the parallel search falls back to the sequential scan.
const MIN_PARALLEL_VERTICES: usize = 2048;

/// How [`Tree::nearest`] searches the vertices
///
/// Both strategies return the same vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum NearestStrategy {
    /// Sequential scan of all vertices
    #[default]
    Linear,
    /// Scan of all vertices split on the rayon thread pool
    Parallel,
}

/// Vertex of [`Tree`]
#[derive(Clone, Debug)]
pub struct Vertex {
    config: Configuration,
    parent: Option<usize>,
}

impl Vertex {
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Index of the parent, `None` for the root
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }
}

/// Append-only tree of configurations
///
/// The root is at index 0 and every other vertex has a parent whose index is
/// strictly smaller than its own, so the parent links never form a cycle.
#[derive(Clone, Debug)]
pub struct Tree {
    vertices: Vec<Vertex>,
    strategy: NearestStrategy,
}

impl Tree {
    /// Create a tree which only holds `root`
    pub fn new(root: Configuration) -> Self {
        Self::with_strategy(root, NearestStrategy::default())
    }

    pub fn with_strategy(root: Configuration, strategy: NearestStrategy) -> Self {
        Self {
            vertices: vec![Vertex {
                config: root,
                parent: None,
            }],
            strategy,
        }
    }

    pub fn strategy(&self) -> NearestStrategy {
        self.strategy
    }

    /// Append `config` as a child of `parent` and return its index
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not in the tree.
    pub fn add_vertex(&mut self, config: Configuration, parent: usize) -> Result<usize> {
        assert!(
            parent < self.vertices.len(),
            "parent {parent} is out of range (len = {})",
            self.vertices.len()
        );
        self.vertices.try_reserve(1)?;
        self.vertices.push(Vertex {
            config,
            parent: Some(parent),
        });
        Ok(self.vertices.len() - 1)
    }

    /// Index of the vertex closest to `query`, the oldest one on a tie
    pub fn nearest(&self, query: &Configuration) -> usize {
        match self.strategy {
            NearestStrategy::Parallel if self.vertices.len() >= MIN_PARALLEL_VERTICES => {
                self.nearest_parallel(query)
            }
            _ => self.nearest_linear(query),
        }
    }

    fn nearest_linear(&self, query: &Configuration) -> usize {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (distance(&v.config, query), i))
            .reduce(closer)
            .map(|(_, i)| i)
            .unwrap_or(0)
    }

    fn nearest_parallel(&self, query: &Configuration) -> usize {
        self.vertices
            .par_iter()
            .enumerate()
            .map(|(i, v)| (distance(&v.config, query), i))
            .reduce_with(closer)
            .map(|(_, i)| i)
            .unwrap_or(0)
    }

    /// # Panics
    ///
    /// Panics if `index` is not in the tree.
    pub fn vertex_config(&self, index: usize) -> &Configuration {
        &self.vertices[index].config
    }

    /// Parent of `index`, `None` for the root
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the tree.
    pub fn parent(&self, index: usize) -> Option<usize> {
        self.vertices[index].parent
    }

    pub fn root_index(&self) -> usize {
        0
    }

    /// Index of the most recently added vertex
    pub fn last_index(&self) -> usize {
        self.vertices.len() - 1
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: the root is created with the tree.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Configurations from the root to `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the tree.
    pub fn path_to(&self, index: usize) -> PlannedPath {
        let mut indices = vec![index];
        let mut current = index;
        while let Some(parent) = self.parent(current) {
            indices.push(parent);
            current = parent;
        }
        PlannedPath::new(
            indices
                .into_iter()
                .rev()
                .map(|i| self.vertices[i].config.clone())
                .collect(),
        )
    }
}

/// Picks the smaller distance, then the smaller index.
fn closer(a: (f64, usize), b: (f64, usize)) -> (f64, usize) {
    if b.0 < a.0 || (b.0 == a.0 && b.1 < a.1) {
        b
    } else {
        a
    }
}
