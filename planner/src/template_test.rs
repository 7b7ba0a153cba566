#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use super::*;
use crate::doc::parse_chair_id;

#[test]
fn builtin_knows_studio1() {
    assert_eq!(builtin("studio1"), Some(studio1()));
    assert!(builtin("ballroom").is_none());
    assert_eq!(builtin_names(), &["studio1"]);
}

#[test]
fn studio1_has_eight_default_tables() {
    let t = studio1();
    assert_eq!(t.tables.len(), 8);
    assert!(t.assignments.is_empty());
    assert_eq!(t.floorplan.as_deref(), Some(STUDIO1_FLOORPLAN));
    for table in &t.tables {
        assert_eq!((table.width, table.height, table.rotation, table.chair_count), (80.0, 204.0, 0.0, 8));
    }
}

#[test]
fn studio1_ids_and_names_are_numbered() {
    let t = studio1();
    let ids: Vec<&str> = t.tables.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.first(), Some(&"studio1_t1"));
    assert_eq!(ids.last(), Some(&"studio1_t8"));
    assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 8);
    assert_eq!(t.tables[4].name, "Table 5");
}

#[test]
fn studio1_layout_is_two_rows_of_four() {
    let t = studio1();
    assert_eq!((t.tables[0].x, t.tables[0].y), (240.0, 220.0));
    assert_eq!((t.tables[3].x, t.tables[3].y), (1100.0, 220.0));
    assert_eq!((t.tables[4].x, t.tables[4].y), (240.0, 680.0));
}

#[test]
fn studio1_tables_stay_clear_of_walls() {
    let hall = STUDIO1_HALL;
    let divider = STUDIO1_DIVIDER;
    for table in studio1().tables {
        let right = table.x + table.width;
        assert!(right <= divider.x || table.x >= divider.x + divider.width, "{} overlaps the divider", table.name);
        assert!(table.x >= hall.x && right <= hall.x + hall.width, "{} leaves the hall", table.name);
        assert!(table.y >= hall.y && table.y + table.height <= hall.y + hall.height, "{} leaves the hall", table.name);
    }
}

#[test]
fn studio1_table_ids_make_parsable_chairs() {
    for table in studio1().tables {
        let chair = crate::doc::chair_id(&table.id, 8);
        assert_eq!(parse_chair_id(&chair), Some((table.id.as_str(), 8)));
    }
}

#[test]
fn template_deserializes_without_optional_fields() {
    let t: Template = serde_json::from_str(r#"{"tables": []}"#).unwrap();
    assert_eq!(t, Template::default());
}
