//! Flood analytics over a borrowed terrain.
//!
//! Every query is a pure function of the terrain and its arguments. Working
//! state (flood mask, BFS queue, union-find) is allocated per call, so one
//! `RisingTides` can be shared across threads.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::flood::{flooded_regions_in, FloodMask};
use crate::location::GridLocation;
use crate::terrain::Terrain;
use crate::union_find::WeightedQuickUnion;

/// Lowest and highest elevation in a terrain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extrema {
    pub lowest: f64,
    pub highest: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct RisingTides<'a> {
    terrain: &'a Terrain,
}

impl<'a> RisingTides<'a> {
    pub fn new(terrain: &'a Terrain) -> Self {
        Self { terrain }
    }

    pub fn terrain(&self) -> &'a Terrain {
        self.terrain
    }

    /// `None` when the grid has no cells
    pub fn elevation_extrema(&self) -> Option<Extrema> {
        let mut heights = self.terrain.heights().iter().copied();
        let first = heights.next()?;
        let (lowest, highest) =
            heights.fold((first, first), |(lo, hi), h| (lo.min(h), hi.max(h)));
        Some(Extrema { lowest, highest })
    }

    pub fn flooded_regions_in(&self, height: f64) -> FloodMask {
        flooded_regions_in(self.terrain, height)
    }

    /// Threshold test on the cell's own elevation.
    ///
    /// Unlike [`RisingTides::flooded_regions_in`] this ignores whether any
    /// source can reach the cell: an isolated basin below `height` reports
    /// `true` here while staying dry in the flood mask. Cells outside the
    /// grid report `false`.
    pub fn is_flooded(&self, height: f64, cell: GridLocation) -> bool {
        self.terrain
            .height_at(cell)
            .is_some_and(|elevation| elevation <= height)
    }

    /// Elevation of `cell` minus `height`: positive above water, negative
    /// below. Returns `0.0` for an empty grid or a cell outside it.
    pub fn height_above_water(&self, height: f64, cell: GridLocation) -> f64 {
        self.terrain
            .height_at(cell)
            .map_or(0.0, |elevation| elevation - height)
    }

    /// Cells left dry by the flood at `height`
    pub fn total_visible_land(&self, height: f64) -> usize {
        self.flooded_regions_in(height).dry_count()
    }

    /// Land at `height` minus land at `new_height`. Negative when the second
    /// level uncovers land.
    pub fn land_lost(&self, height: f64, new_height: f64) -> i64 {
        let current = self.total_visible_land(height) as i64;
        let future = self.total_visible_land(new_height) as i64;
        current - future
    }

    /// Number of 8-connected groups of dry cells at `height`
    pub fn num_of_islands(&self, height: f64) -> usize {
        let mask = self.flooded_regions_in(height);
        let islands = count_islands(&mask);
        tracing::debug!(
            target: "rising_tides::analytics",
            height,
            dry = mask.dry_count(),
            islands,
            "counted islands"
        );
        islands
    }
}

/// Labels dry cells with a single row-major pass. Each dry cell is joined to
/// its dry north-west, north, north-east and west neighbors; the other half of
/// the 8-neighborhood is covered when those cells are scanned.
pub(crate) fn count_islands(mask: &FloodMask) -> usize {
    let rows = mask.rows();
    let cols = mask.cols();
    let mut uf = WeightedQuickUnion::new(rows, cols);

    for row in 0..rows {
        for col in 0..cols {
            let current = GridLocation::new(row, col);
            if mask.is_flooded(current) {
                continue;
            }
            for neighbor in current.scanned_neighbors(cols) {
                if !mask.is_flooded(neighbor) {
                    uf.union(current, neighbor);
                }
            }
        }
    }

    let mut roots = HashSet::new();
    for row in 0..rows {
        for col in 0..cols {
            let cell = GridLocation::new(row, col);
            if !mask.is_flooded(cell) {
                roots.insert(uf.find(cell));
            }
        }
    }
    roots.len()
}
