use std::path::PathBuf;

use rising_tides::{
    report::Report,
    scenario::{ScenarioLoader, WaterRise},
    GridLocation, RisingTides, TerrainError,
};

fn scenario_loader() -> ScenarioLoader {
    ScenarioLoader::new(env!("CARGO_MANIFEST_DIR"))
}

fn scenario_path() -> PathBuf {
    PathBuf::from("scenarios/harbor.yaml")
}

#[test]
fn scenario_loader_reads_fixture() {
    let scenario = scenario_loader().load(scenario_path()).expect("scenario parses");
    assert_eq!(scenario.name, "harbor");
    assert_eq!(scenario.heights.len(), 5);
    assert_eq!(scenario.sources, vec![GridLocation::new(0, 0)]);
    assert_eq!(scenario.water_levels, vec![0.5, 1.5, 3.0, 5.0, 8.0]);
    assert_eq!(scenario.rise, Some(WaterRise { from: 0.5, to: 3.0 }));
}

#[test]
fn missing_scenario_reports_path() {
    let err = scenario_loader()
        .load("scenarios/does_not_exist.yaml")
        .unwrap_err();
    assert!(format!("{err:#}").contains("does_not_exist.yaml"));
}

#[test]
fn pond_is_cut_off_until_causeway_floods() {
    let scenario = scenario_loader().load(scenario_path()).unwrap();
    let terrain = scenario.build_terrain().unwrap();
    let tides = RisingTides::new(&terrain);
    let pond = GridLocation::new(2, 2);

    // Below the causeway the pond is under the water line but the sea
    // cannot reach it.
    assert!(tides.is_flooded(1.5, pond));
    assert!(!tides.flooded_regions_in(1.5).is_flooded(pond));

    // Once the causeway at 2.5 floods, the sea pours in.
    assert!(tides.flooded_regions_in(3.0).is_flooded(pond));
}

#[test]
fn harbor_level_sweep() {
    let scenario = scenario_loader().load(scenario_path()).unwrap();
    let terrain = scenario.build_terrain().unwrap();
    let tides = RisingTides::new(&terrain);

    let extrema = tides.elevation_extrema().expect("terrain has cells");
    assert_eq!(extrema.lowest, 0.0);
    assert_eq!(extrema.highest, 7.5);

    let land: Vec<usize> = scenario
        .water_levels
        .iter()
        .map(|&level| tides.total_visible_land(level))
        .collect();
    assert_eq!(land, vec![14, 14, 11, 6, 0]);

    let islands: Vec<usize> = scenario
        .water_levels
        .iter()
        .map(|&level| tides.num_of_islands(level))
        .collect();
    // The causeway joins both headlands until it floods.
    assert_eq!(islands, vec![1, 1, 2, 1, 0]);

    assert_eq!(tides.land_lost(0.5, 3.0), 3);
    assert_eq!(tides.land_lost(8.0, 0.5), -14);
}

#[test]
fn harbor_report() {
    let scenario = scenario_loader().load(scenario_path()).unwrap();
    let terrain = scenario.build_terrain().unwrap();
    let tides = RisingTides::new(&terrain);
    let levels = scenario.levels(&[], 5, tides.elevation_extrema());

    let report = Report::build(
        &scenario.name,
        &tides,
        &levels,
        &scenario.probes,
        scenario.rise,
    )
    .expect("fixture probes lie inside the terrain");
    assert_eq!(report.levels.len(), 5);
    assert_eq!(report.probes.len(), 10);
    for summary in &report.levels {
        assert_eq!(summary.islands, tides.num_of_islands(summary.level));
        assert_eq!(summary.visible_land, tides.total_visible_land(summary.level));
    }

    let text = report.render_text();
    assert!(text.contains("Terrain 'harbor' (5 x 8)"));
    assert!(text.contains("Cell (3, 6) at water 8.00: flooded, 0.50 meters below water"));
    assert!(text.contains("Raising water from 0.50 to 3.00: will lose 3 cells of land"));
}

#[test]
fn report_written_to_disk() {
    let scenario = scenario_loader().load(scenario_path()).unwrap();
    let terrain = scenario.build_terrain().unwrap();
    let tides = RisingTides::new(&terrain);
    let report = Report::build(&scenario.name, &tides, &[3.0], &[], None).unwrap();

    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("harbor.json");
    report.write_to(&path, true).unwrap();

    let data = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert_eq!(json["scenario"], "harbor");
    assert_eq!(json["levels"][0]["visible_land"], 11);
    assert_eq!(json["levels"][0]["islands"], 2);
}

#[test]
fn probe_outside_harbor_is_rejected() {
    let scenario = scenario_loader().load(scenario_path()).unwrap();
    let terrain = scenario.build_terrain().unwrap();
    let tides = RisingTides::new(&terrain);

    let mut probes = scenario.probes.clone();
    probes.push(GridLocation::new(9, 9));
    let err = Report::build(&scenario.name, &tides, &[2.0], &probes, None).unwrap_err();
    assert_eq!(
        err,
        TerrainError::ProbeOutOfBounds {
            location: GridLocation::new(9, 9),
            rows: 5,
            cols: 8
        }
    );
    assert!(err.to_string().contains("probe (9, 9) lies outside the 5x8 terrain"));
}

#[test]
fn archipelago_islands() {
    let scenario = scenario_loader()
        .load("scenarios/archipelago.yaml")
        .unwrap();
    let terrain = scenario.build_terrain().unwrap();
    let tides = RisingTides::new(&terrain);

    // Sources sit above the water, nothing floods.
    assert_eq!(tides.num_of_islands(0.5), 1);
    assert_eq!(tides.total_visible_land(0.5), 30);

    // Diagonal peaks form one island, the eastern peak another.
    assert_eq!(tides.num_of_islands(1.0), 2);
    // Flooding the middle of the diagonal splits it.
    assert_eq!(tides.num_of_islands(2.0), 3);
    assert_eq!(tides.num_of_islands(3.0), 2);
    assert_eq!(tides.num_of_islands(4.0), 1);
    assert_eq!(tides.num_of_islands(5.0), 0);
}
