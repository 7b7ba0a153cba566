#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let config = EditorConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, EditorConfig::default());
    assert_eq!(config.min_table_size, 40.0);
    assert_eq!(config.zoom.min, 0.2);
    assert_eq!(config.zoom.max, 2.0);
    assert_eq!(config.zoom.step, 0.1);
    assert_eq!(config.print_scale, 2.0);
}

#[test]
fn overrides_are_parsed() {
    let config = EditorConfig::from_lookup(lookup(&[
        ("SEATPLAN_MIN_TABLE_SIZE", "60"),
        ("SEATPLAN_ZOOM_MIN", "0.5"),
        ("SEATPLAN_ZOOM_MAX", " 3 "),
        ("SEATPLAN_ZOOM_STEP", "0.25"),
        ("SEATPLAN_PRINT_SCALE", "1.5"),
    ]))
    .unwrap();
    assert_eq!(config.min_table_size, 60.0);
    assert_eq!(config.zoom, ZoomLimits { min: 0.5, max: 3.0, step: 0.25 });
    assert_eq!(config.print_scale, 1.5);
}

#[test]
fn not_a_number_is_rejected() {
    let err = EditorConfig::from_lookup(lookup(&[("SEATPLAN_ZOOM_STEP", "fast")])).unwrap_err();
    assert_eq!(err, ConfigError::NotANumber { var: "SEATPLAN_ZOOM_STEP", value: "fast".into() });
    assert_eq!(err.to_string(), "SEATPLAN_ZOOM_STEP is not a number: fast");
}

#[test]
fn non_positive_is_rejected() {
    let err = EditorConfig::from_lookup(lookup(&[("SEATPLAN_MIN_TABLE_SIZE", "0")])).unwrap_err();
    assert_eq!(err, ConfigError::NotPositive { var: "SEATPLAN_MIN_TABLE_SIZE", value: 0.0 });

    let err = EditorConfig::from_lookup(lookup(&[("SEATPLAN_PRINT_SCALE", "-2")])).unwrap_err();
    assert!(matches!(err, ConfigError::NotPositive { var: "SEATPLAN_PRINT_SCALE", .. }));
}

#[test]
fn infinity_is_rejected() {
    let err = EditorConfig::from_lookup(lookup(&[("SEATPLAN_ZOOM_MAX", "inf")])).unwrap_err();
    assert!(matches!(err, ConfigError::NotPositive { var: "SEATPLAN_ZOOM_MAX", .. }));
}

#[test]
fn inverted_zoom_range_is_rejected() {
    let err =
        EditorConfig::from_lookup(lookup(&[("SEATPLAN_ZOOM_MIN", "1.5"), ("SEATPLAN_ZOOM_MAX", "1.0")])).unwrap_err();
    assert_eq!(err, ConfigError::EmptyZoomRange { min: 1.5, max: 1.0 });
}

#[test]
fn equal_zoom_bounds_are_allowed() {
    let config =
        EditorConfig::from_lookup(lookup(&[("SEATPLAN_ZOOM_MIN", "1"), ("SEATPLAN_ZOOM_MAX", "1")])).unwrap();
    assert_eq!(config.zoom.min, config.zoom.max);
}
