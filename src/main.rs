use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rising_tides::{
    report::Report,
    scenario::{ScenarioLoader, WaterRise},
    GridLocation, RisingTides,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Flood analysis for elevation grids")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/harbor.yaml")]
    scenario: PathBuf,

    /// Water level to analyze; repeat for several (overrides the scenario)
    #[arg(long = "level", allow_negative_numbers = true)]
    levels: Vec<f64>,

    /// Number of evenly spaced levels when none are configured
    #[arg(long, default_value_t = 5)]
    steps: usize,

    /// Cell to probe as ROW,COL; repeat for several (adds to the scenario)
    #[arg(long = "probe", value_parser = parse_location)]
    probes: Vec<GridLocation>,

    /// Land change between two levels as FROM,TO (overrides the scenario)
    #[arg(long, value_parser = parse_rise, allow_hyphen_values = true)]
    rise: Option<WaterRise>,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log filter (RUST_LOG takes precedence)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loader = ScenarioLoader::new(".");
    let scenario = loader.load(&cli.scenario)?;

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| scenario.logging.level.clone());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let terrain = scenario
        .build_terrain()
        .with_context(|| format!("Scenario '{}' has an invalid terrain", scenario.name))?;
    let tides = RisingTides::new(&terrain);

    let levels = scenario.levels(&cli.levels, cli.steps, tides.elevation_extrema());
    let mut probes = scenario.probes.clone();
    probes.extend(cli.probes.iter().copied());
    let rise = cli.rise.or(scenario.rise);

    tracing::info!(
        scenario = %scenario.name,
        rows = terrain.rows(),
        cols = terrain.cols(),
        sources = terrain.sources().len(),
        "terrain loaded"
    );

    let report = Report::build(&scenario.name, &tides, &levels, &probes, rise)
        .with_context(|| format!("Scenario '{}' has an invalid probe", scenario.name))?;
    match &cli.output {
        Some(path) => {
            report.write_to(path, cli.json)?;
            println!("Report written to {}", path.display());
        }
        None if cli.json => println!("{}", report.to_json()?),
        None => print!("{}", report.render_text()),
    }
    Ok(())
}

fn parse_pair(value: &str) -> Result<(&str, &str), String> {
    value
        .split_once(',')
        .map(|(a, b)| (a.trim(), b.trim()))
        .ok_or_else(|| format!("expected two comma separated values, got '{value}'"))
}

fn parse_location(value: &str) -> Result<GridLocation, String> {
    let (row, col) = parse_pair(value)?;
    let row = row
        .parse::<usize>()
        .map_err(|_| format!("unable to parse row from '{row}'"))?;
    let col = col
        .parse::<usize>()
        .map_err(|_| format!("unable to parse column from '{col}'"))?;
    Ok(GridLocation::new(row, col))
}

fn parse_rise(value: &str) -> Result<WaterRise, String> {
    let (from, to) = parse_pair(value)?;
    let from = from
        .parse::<f64>()
        .map_err(|_| format!("unable to parse float from '{from}'"))?;
    let to = to
        .parse::<f64>()
        .map_err(|_| format!("unable to parse float from '{to}'"))?;
    Ok(WaterRise { from, to })
}
