//! Tests for the model layer (CircleSpec) and persisted settings.

use eno_cursor::model::constants::*;
use eno_cursor::model::CircleSpec;
use eno_cursor::storage::{load_from, save_to, PersistedSettings};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// === Default Values Tests ===

#[test]
fn circle_spec_defaults() {
    let spec = CircleSpec::default();
    assert!(approx_eq(spec.inner_diameter, 650.0));
    assert!(approx_eq(spec.outer_diameter, 1000.0));
    assert_eq!(spec.inner_color, "#d0723b");
    assert_eq!(spec.outer_color, "#e74b4b");
    assert!(spec.is_well_ordered());
}

#[test]
fn editing_limits_leave_room_between_circles() {
    assert!(MAX_OUTER_SIZE - MAX_INNER_SIZE >= SIZE_DIFFERENCE);
    assert!(approx_eq(MIN_SIZE, 1.0));
}

// === Size Coupling Tests ===

#[test]
fn growing_inner_pushes_outer() {
    let spec = CircleSpec::default().with_inner_size(1000.0);
    assert!(approx_eq(spec.outer_diameter, 1200.0));
    assert!(spec.is_well_ordered());
}

#[test]
fn growing_inner_below_outer_keeps_outer() {
    let spec = CircleSpec::default().with_inner_size(900.0);
    assert!(approx_eq(spec.outer_diameter, DEFAULT_OUTER_SIZE));
}

#[test]
fn shrinking_outer_pulls_inner() {
    let spec = CircleSpec::default().with_outer_size(600.0);
    assert!(approx_eq(spec.inner_diameter, 400.0));

    let tiny = CircleSpec::default().with_outer_size(50.0);
    assert!(approx_eq(tiny.inner_diameter, MIN_SIZE));
}

#[test]
fn sizes_never_drop_below_minimum() {
    let spec = CircleSpec::default().with_inner_size(-5.0);
    assert!(approx_eq(spec.inner_diameter, MIN_SIZE));
}

// === Persistence Tests ===

#[test]
fn settings_round_trip_through_file() {
    let path = std::env::temp_dir()
        .join(format!("eno-cursor-model-tests-{}", std::process::id()))
        .join(CONFIG_FILE_NAME);
    let spec = CircleSpec::default()
        .with_outer_size(800.0)
        .with_inner_color("#112233");
    let settings = PersistedSettings::from_spec(&spec, true, false);

    save_to(&path, &settings).expect("save settings");
    let loaded = load_from(&path).expect("load settings");
    assert_eq!(loaded, settings);
    assert_eq!(loaded.to_spec(), spec);

    let _ = std::fs::remove_dir_all(path.parent().expect("has parent"));
}

#[test]
fn settings_file_shape() {
    let json = r##"{
        "inner": { "size": 120, "color": "#abcdef" },
        "outer": { "size": 480, "color": "#123456" },
        "running": true,
        "autoStart": true
    }"##;
    let settings: PersistedSettings = serde_json::from_str(json).expect("valid settings");
    let spec = settings.to_spec();
    assert!(approx_eq(spec.inner_diameter, 120.0));
    assert_eq!(spec.outer_color, "#123456");
    assert!(settings.running);
    assert!(settings.auto_start);
}
