use thiserror::Error;

use crate::location::GridLocation;

#[derive(Debug, Error, PartialEq)]
pub enum TerrainError {
    #[error("terrain row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("terrain height at {location} is not finite ({value})")]
    NonFiniteHeight { location: GridLocation, value: f64 },
    #[error("source {location} lies outside the {rows}x{cols} terrain")]
    SourceOutOfBounds {
        location: GridLocation,
        rows: usize,
        cols: usize,
    },
    #[error("probe {location} lies outside the {rows}x{cols} terrain")]
    ProbeOutOfBounds {
        location: GridLocation,
        rows: usize,
        cols: usize,
    },
}
