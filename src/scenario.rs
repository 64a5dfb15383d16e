use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{analytics::Extrema, error::TerrainError, location::GridLocation, terrain::Terrain};

fn default_log_level() -> String {
    "info".to_string()
}

/// A terrain plus the questions to ask about it.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    pub heights: Vec<Vec<f64>>,
    #[serde(default)]
    pub sources: Vec<GridLocation>,
    #[serde(default)]
    pub water_levels: Vec<f64>,
    #[serde(default)]
    pub probes: Vec<GridLocation>,
    #[serde(default)]
    pub rise: Option<WaterRise>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Change in water level to measure land loss across
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WaterRise {
    pub from: f64,
    pub to: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(scenario)
    }
}

impl Scenario {
    pub fn build_terrain(&self) -> Result<Terrain, TerrainError> {
        Terrain::new(self.heights.clone(), self.sources.clone())
    }

    /// Water levels to report on.
    ///
    /// CLI overrides win over configured levels. With neither, `steps` levels
    /// are spread evenly from the lowest to the highest elevation.
    pub fn levels(&self, overrides: &[f64], steps: usize, extrema: Option<Extrema>) -> Vec<f64> {
        if !overrides.is_empty() {
            return overrides.to_vec();
        }
        if !self.water_levels.is_empty() {
            return self.water_levels.clone();
        }
        match (extrema, steps) {
            (None, _) | (_, 0) => Vec::new(),
            (Some(extrema), 1) => vec![extrema.lowest],
            (Some(extrema), steps) => {
                let span = extrema.highest - extrema.lowest;
                (0..steps)
                    .map(|step| extrema.lowest + span * step as f64 / (steps - 1) as f64)
                    .collect()
            }
        }
    }
}
