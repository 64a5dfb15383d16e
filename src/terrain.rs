//! Terrain model - height grid and water sources

use crate::error::TerrainError;
use crate::location::GridLocation;

/// Rectangular elevation grid plus the cells water originates from.
///
/// Heights are stored row-major; cell `(row, col)` lives at
/// `row * cols + col`. A terrain is never mutated once built, so any number
/// of queries may borrow it at the same time.
#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    rows: usize,
    cols: usize,
    heights: Vec<f64>,
    sources: Vec<GridLocation>,
}

impl Terrain {
    /// Builds a terrain from nested rows.
    ///
    /// Zero rows, or rows of zero length, produce an empty terrain rather
    /// than an error.
    pub fn new(
        heights: Vec<Vec<f64>>,
        sources: Vec<GridLocation>,
    ) -> Result<Self, TerrainError> {
        let rows = heights.len();
        let cols = heights.first().map_or(0, Vec::len);

        let mut flat = Vec::with_capacity(rows * cols);
        for (row, values) in heights.into_iter().enumerate() {
            if values.len() != cols {
                return Err(TerrainError::Ragged {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            for (col, value) in values.into_iter().enumerate() {
                if !value.is_finite() {
                    return Err(TerrainError::NonFiniteHeight {
                        location: GridLocation::new(row, col),
                        value,
                    });
                }
                flat.push(value);
            }
        }

        for &location in &sources {
            if location.row >= rows || location.col >= cols {
                return Err(TerrainError::SourceOutOfBounds {
                    location,
                    rows,
                    cols,
                });
            }
        }

        Ok(Self {
            rows,
            cols,
            heights: flat,
            sources,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.heights.len()
    }

    /// True when the grid has no rows or no columns
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn sources(&self) -> &[GridLocation] {
        &self.sources
    }

    pub fn contains(&self, location: GridLocation) -> bool {
        location.row < self.rows && location.col < self.cols
    }

    /// Flattened index of `location`, or `None` outside the grid
    pub fn index_of(&self, location: GridLocation) -> Option<usize> {
        self.contains(location)
            .then(|| location.row * self.cols + location.col)
    }

    pub fn height_at(&self, location: GridLocation) -> Option<f64> {
        self.index_of(location).map(|index| self.heights[index])
    }

    /// Row-major iterator over `(location, height)`
    pub fn cells(&self) -> impl Iterator<Item = (GridLocation, f64)> + '_ {
        let cols = self.cols;
        self.heights
            .iter()
            .enumerate()
            .map(move |(index, &height)| (GridLocation::new(index / cols, index % cols), height))
    }

    pub(crate) fn heights(&self) -> &[f64] {
        &self.heights
    }
}
