//! Flood propagation from water sources.

use std::collections::VecDeque;

use crate::location::GridLocation;
use crate::terrain::Terrain;

/// Which cells are under water at one water height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloodMask {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl FloodMask {
    pub fn dry(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Out-of-bounds cells are reported dry
    pub fn is_flooded(&self, location: GridLocation) -> bool {
        location.row < self.rows
            && location.col < self.cols
            && self.cells[location.row * self.cols + location.col]
    }

    pub fn flooded_count(&self) -> usize {
        self.cells.iter().filter(|&&flooded| flooded).count()
    }

    pub fn dry_count(&self) -> usize {
        self.cells.len() - self.flooded_count()
    }

    /// True when every cell flooded here is also flooded in `other`
    pub fn is_subset_of(&self, other: &FloodMask) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(&mine, &theirs)| !mine || theirs)
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells
            .chunks(self.cols)
            .map(<[bool]>::to_vec)
            .collect()
    }

    fn set(&mut self, index: usize) {
        self.cells[index] = true;
    }

    fn get(&self, index: usize) -> bool {
        self.cells[index]
    }
}

/// Floods the terrain from its sources at water `height`.
///
/// A cell is flooded when a 4-connected path of cells at or below `height`
/// links it to a source whose own elevation is at or below `height`. Low
/// ground that no source reaches stays dry.
pub fn flooded_regions_in(terrain: &Terrain, height: f64) -> FloodMask {
    let rows = terrain.rows();
    let cols = terrain.cols();
    let heights = terrain.heights();
    let mut mask = FloodMask::dry(rows, cols);
    if terrain.is_empty() {
        return mask;
    }

    let mut queue = VecDeque::new();
    for &source in terrain.sources() {
        let index = source.row * cols + source.col;
        if !mask.get(index) && heights[index] <= height {
            mask.set(index);
            queue.push_back(source);
        }
    }

    while let Some(current) = queue.pop_front() {
        for neighbor in current.neighbors(rows, cols) {
            let index = neighbor.row * cols + neighbor.col;
            if !mask.get(index) && heights[index] <= height {
                mask.set(index);
                queue.push_back(neighbor);
            }
        }
    }

    tracing::trace!(
        target: "rising_tides::flood",
        height,
        flooded = mask.flooded_count(),
        cells = heights.len(),
        "flood fill complete"
    );
    mask
}
