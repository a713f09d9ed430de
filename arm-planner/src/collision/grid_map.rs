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
use std::{path::Path, str::FromStr};

use tracing::debug;

use crate::errors::*;

/// Occupancy grid of the workspace
///
/// Cells are stored row-major: the cell `(x, y)` is at `y * width + x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    occupied: Vec<bool>,
}

impl GridMap {
    /// Create a map from occupancy flags
    pub fn new(width: usize, height: usize, occupied: Vec<bool>) -> Result<Self> {
        let expected = width * height;
        if occupied.len() != expected || expected == 0 {
            return Err(Error::MapShape {
                width,
                height,
                expected,
                actual: occupied.len(),
            });
        }
        Ok(Self {
            width,
            height,
            occupied,
        })
    }

    /// Create a map from raw cell values, non zero values are obstacles
    pub fn from_cells(width: usize, height: usize, cells: &[f64]) -> Result<Self> {
        Self::new(width, height, cells.iter().map(|&v| v != 0.0).collect())
    }

    /// Map without any obstacle
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            occupied: vec![false; width * height],
        }
    }

    /// Load a map from a text file, see [`GridMap::from_str`] for the format
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs_err::read_to_string(path.as_ref())?;
        let map = text.parse::<Self>()?;
        debug!(
            "loaded map {:?} ({}x{})",
            path.as_ref(),
            map.width,
            map.height
        );
        Ok(map)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the cell is inside the map and is an obstacle
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.occupied[y * self.width + x]
    }

    /// Returns `true` if the cell is inside the map and is not an obstacle
    pub fn is_free(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && !self.occupied[y * self.width + x]
    }

    /// Mark the cells of the rectangle `[x0, x1] x [y0, y1]` as obstacles
    ///
    /// The rectangle is clipped to the map.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        for y in y0.min(self.height)..=y1.min(self.height - 1) {
            for x in x0.min(self.width)..=x1.min(self.width - 1) {
                self.occupied[y * self.width + x] = true;
            }
        }
    }

    /// Number of obstacle cells
    pub fn num_occupied(&self) -> usize {
        self.occupied.iter().filter(|&&o| o).count()
    }
}

/// Parse the text map format
///
/// One line per row (the first line is `y = 0`), cell values separated by
/// white spaces or commas. `0` is free space and any other number is an
/// obstacle. Empty lines and lines starting with `#` are ignored.
///
/// ```
/// let map: arm_planner::collision::GridMap = "0 0 1\n0 1 0\n".parse().unwrap();
/// assert_eq!(map.width(), 3);
/// assert_eq!(map.height(), 2);
/// assert!(map.is_occupied(2, 0));
/// assert!(map.is_free(0, 1));
/// ```
impl FromStr for GridMap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut width = None;
        let mut cells = Vec::new();
        let mut height = 0;
        for (line_no, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let row = line
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|v| !v.is_empty())
                .map(|v| {
                    v.parse::<f64>().map_err(|e| {
                        Error::ParseError(format!("map line {}: {v:?} ({e})", line_no + 1))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(Error::ParseError(format!(
                        "map line {}: expected {w} cells, but got {}",
                        line_no + 1,
                        row.len()
                    )));
                }
                Some(_) => {}
            }
            cells.extend(row);
            height += 1;
        }
        let width = width.ok_or_else(|| Error::ParseError("map is empty".to_owned()))?;
        Self::from_cells(width, height, &cells)
    }
}
