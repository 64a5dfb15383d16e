//! Human and JSON summaries of flood queries

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::analytics::{count_islands, Extrema, RisingTides};
use crate::error::TerrainError;
use crate::location::GridLocation;
use crate::scenario::WaterRise;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelSummary {
    pub level: f64,
    pub flooded: usize,
    pub visible_land: usize,
    pub islands: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeSummary {
    pub level: f64,
    pub location: GridLocation,
    pub flooded: bool,
    pub height_above_water: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandChange {
    pub from: f64,
    pub to: f64,
    pub lost: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub scenario: String,
    pub generated_at: String,
    pub rows: usize,
    pub cols: usize,
    pub extrema: Option<Extrema>,
    pub levels: Vec<LevelSummary>,
    pub probes: Vec<ProbeSummary>,
    pub land_change: Option<LandChange>,
}

impl Report {
    /// Runs every query for `levels`. Probes are evaluated at each level and
    /// must lie inside the terrain.
    pub fn build(
        scenario: &str,
        tides: &RisingTides<'_>,
        levels: &[f64],
        probes: &[GridLocation],
        rise: Option<WaterRise>,
    ) -> Result<Self, TerrainError> {
        let terrain = tides.terrain();
        if let Some(&location) = probes.iter().find(|&&p| !terrain.contains(p)) {
            return Err(TerrainError::ProbeOutOfBounds {
                location,
                rows: terrain.rows(),
                cols: terrain.cols(),
            });
        }

        let mut level_summaries = Vec::with_capacity(levels.len());
        let mut probe_summaries = Vec::with_capacity(levels.len() * probes.len());
        for &level in levels {
            let mask = tides.flooded_regions_in(level);
            level_summaries.push(LevelSummary {
                level,
                flooded: mask.flooded_count(),
                visible_land: mask.dry_count(),
                islands: count_islands(&mask),
            });
            for &location in probes {
                probe_summaries.push(ProbeSummary {
                    level,
                    location,
                    flooded: tides.is_flooded(level, location),
                    height_above_water: tides.height_above_water(level, location),
                });
            }
        }

        let land_change = rise.map(|rise| LandChange {
            from: rise.from,
            to: rise.to,
            lost: tides.land_lost(rise.from, rise.to),
        });

        tracing::info!(
            target: "rising_tides::report",
            scenario,
            levels = level_summaries.len(),
            probes = probe_summaries.len(),
            "report built"
        );

        Ok(Self {
            scenario: scenario.to_string(),
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            rows: terrain.rows(),
            cols: terrain.cols(),
            extrema: tides.elevation_extrema(),
            levels: level_summaries,
            probes: probe_summaries,
            land_change,
        })
    }

    pub fn render_text(&self) -> String {
        let mut out = format!(
            "Terrain '{}' ({} x {})\n",
            self.scenario, self.rows, self.cols
        );
        match self.extrema {
            Some(extrema) => out.push_str(&format!(
                "Lowest point: {:.2}  Highest point: {:.2}\n",
                extrema.lowest, extrema.highest
            )),
            None => out.push_str("Terrain is empty\n"),
        }

        for summary in &self.levels {
            out.push_str(&format!(
                "Water at {:.2}: {} cells flooded, {} cells of land visible, {} island(s)\n",
                summary.level, summary.flooded, summary.visible_land, summary.islands
            ));
        }

        for probe in &self.probes {
            out.push_str(&format!(
                "Cell {} at water {:.2}: {}, {}\n",
                probe.location,
                probe.level,
                if probe.flooded { "flooded" } else { "dry" },
                describe_height(probe.height_above_water)
            ));
        }

        if let Some(change) = &self.land_change {
            out.push_str(&format!(
                "Raising water from {:.2} to {:.2}: {}\n",
                change.from,
                change.to,
                describe_land_change(change.lost)
            ));
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }

    pub fn write_to(&self, path: impl AsRef<Path>, json: bool) -> Result<()> {
        let path = path.as_ref();
        let body = if json {
            self.to_json()?
        } else {
            self.render_text()
        };
        fs::write(path, body).with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// Magnitude is always printed positive; the wording carries the sign.
pub fn describe_height(height_above_water: f64) -> String {
    if height_above_water < 0.0 {
        format!("{:.2} meters below water", -height_above_water)
    } else {
        format!("{:.2} meters above water", height_above_water)
    }
}

pub fn describe_land_change(lost: i64) -> String {
    if lost < 0 {
        format!("will gain {} cells of land", lost.unsigned_abs())
    } else {
        format!("will lose {} cells of land", lost)
    }
}
