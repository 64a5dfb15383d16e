//! Grid coordinates

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cell position in the terrain grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridLocation {
    pub row: usize,
    pub col: usize,
}

impl GridLocation {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Orthogonal neighbors (4-connectivity) inside a `rows` x `cols` grid
    pub fn neighbors(self, rows: usize, cols: usize) -> Vec<GridLocation> {
        let mut neighbors = Vec::with_capacity(4);

        // North
        if self.row > 0 {
            neighbors.push(GridLocation::new(self.row - 1, self.col));
        }
        // South
        if self.row + 1 < rows {
            neighbors.push(GridLocation::new(self.row + 1, self.col));
        }
        // West
        if self.col > 0 {
            neighbors.push(GridLocation::new(self.row, self.col - 1));
        }
        // East
        if self.col + 1 < cols {
            neighbors.push(GridLocation::new(self.row, self.col + 1));
        }

        neighbors
    }

    /// The already-scanned half of the 8-neighborhood in row-major order:
    /// north-west, north, north-east and west.
    pub fn scanned_neighbors(self, cols: usize) -> Vec<GridLocation> {
        let mut neighbors = Vec::with_capacity(4);

        if self.row > 0 {
            let north = self.row - 1;
            if self.col > 0 {
                neighbors.push(GridLocation::new(north, self.col - 1));
            }
            neighbors.push(GridLocation::new(north, self.col));
            if self.col + 1 < cols {
                neighbors.push(GridLocation::new(north, self.col + 1));
            }
        }
        if self.col > 0 {
            neighbors.push(GridLocation::new(self.row, self.col - 1));
        }

        neighbors
    }
}

impl From<(usize, usize)> for GridLocation {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
