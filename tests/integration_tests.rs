use tempfile::TempDir;

use mudvolcano_atlas::dataset::{gas_seeps, mud_volcanoes};
use mudvolcano_atlas::models::MudVolcano;
use mudvolcano_atlas::render::{
    build_scene, volcano_table, MapConfig, MapScene, MarkerStyle,
};
use mudvolcano_atlas::utils::parse_coordinate_pair;
use mudvolcano_atlas::writers::{SceneWriter, TableWriter};

#[test]
fn test_render_pipeline_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let volcanoes = mud_volcanoes();
    let seeps = gas_seeps();
    let scene = build_scene(MapConfig::default(), &volcanoes, &seeps);

    // Every record in both datasets places a marker
    assert_eq!(scene.marker_count(), volcanoes.len() + seeps.len());
    assert!(scene.skipped.is_empty());

    // Scene document round-trips through the collaborator boundary
    let scene_path = temp_dir.path().join("scene.json");
    SceneWriter::new().write_scene(&scene, &scene_path).unwrap();
    assert!(scene_path.exists());

    let decoded: MapScene =
        serde_json::from_str(&std::fs::read_to_string(&scene_path).unwrap()).unwrap();
    assert_eq!(decoded.marker_count(), scene.marker_count());
    assert!((decoded.config.center_latitude - 25.0).abs() < f64::EPSILON);
    assert_eq!(decoded.config.zoom_level, 2);

    // Table lands next to it
    let table_path = temp_dir.path().join("volcanoes.csv");
    TableWriter::new()
        .write_table(&volcano_table(&volcanoes), &table_path)
        .unwrap();
    assert!(table_path.exists());
}

#[test]
fn test_niikappu_places_as_alert() {
    let scene = build_scene(MapConfig::default(), &mud_volcanoes(), &[]);

    let niikappu = scene.layers[0]
        .markers
        .iter()
        .find(|m| m.name == "Niikappu")
        .expect("Niikappu must place on the map");

    assert!((niikappu.position.latitude - 42.417).abs() < 0.000001);
    assert!((niikappu.position.longitude - 142.183).abs() < 0.000001);
    assert_eq!(niikappu.style, MarkerStyle::Alert);
    assert_eq!(niikappu.popup.title, "Niikappu");
}

#[test]
fn test_devils_woodyard_western_longitude() {
    let position = parse_coordinate_pair("10.180° N, 61.358° W").unwrap();
    assert!((position.latitude - 10.180).abs() < 0.000001);
    assert!((position.longitude - -61.358).abs() < 0.000001);
}

#[test]
fn test_one_bad_record_does_not_break_the_rest() {
    let mut volcanoes = mud_volcanoes();
    volcanoes[0].coordinate_text = "22.983 N; 121.209 E".to_string();
    let bad_name = volcanoes[0].name.clone();

    let scene = build_scene(MapConfig::default(), &volcanoes, &gas_seeps());

    assert_eq!(scene.layers[0].markers.len(), 12);
    assert_eq!(scene.layers[1].markers.len(), 8);
    assert_eq!(scene.skipped.len(), 1);
    assert_eq!(scene.skipped[0].name, bad_name);

    // The broken record still shows up in the tabular view
    let table = volcano_table(&volcanoes);
    assert!(table.rows.iter().any(|row| row[0] == bad_name));
}

#[test]
fn test_config_file_overrides_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("map.toml");
    std::fs::write(&config_path, "center_latitude = 10.0\nzoom_level = 6\n").unwrap();

    let config = MapConfig::load(&config_path).unwrap();
    assert!((config.center_latitude - 10.0).abs() < f64::EPSILON);
    // Omitted key falls back to the default
    assert!((config.center_longitude - 0.0).abs() < f64::EPSILON);
    assert_eq!(config.zoom_level, 6);
}

#[test]
fn test_seep_layer_is_independent() {
    let scene = build_scene(MapConfig::default(), &[], &gas_seeps());

    assert_eq!(scene.layers[0].markers.len(), 0);
    assert_eq!(scene.layers[1].name, "Gas Seeps");
    assert_eq!(scene.layers[1].markers.len(), 8);
    assert!(scene.layers[1]
        .markers
        .iter()
        .all(|m| m.style == MarkerStyle::Normal));
}

#[test]
fn test_volcano_record_shape() {
    let volcanoes = mud_volcanoes();
    let lei_gong_hou: &MudVolcano = volcanoes
        .iter()
        .find(|v| v.name == "Lei-Gong-Hou")
        .unwrap();

    assert_eq!(lei_gong_hou.region, "Eastern Taiwan");
    assert_eq!(lei_gong_hou.methane_flow_tons_per_year, Some(29.0));
    assert!(!lei_gong_hou.is_eruptive);

    // Taiwan sits in the eastern hemisphere; the longitude must be positive
    let position = parse_coordinate_pair(&lei_gong_hou.coordinate_text).unwrap();
    assert!(position.longitude > 0.0);
}
