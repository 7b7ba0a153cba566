use serde_json::json;

use super::*;
use crate::doc::{Participant, Table};

fn sample_plan() -> SeatingPlan {
    let mut plan = SeatingPlan::new();
    plan.tables.push(Table {
        id: "t_1700000000".into(),
        name: "Table 1".into(),
        x: 100.0,
        y: 100.0,
        width: 80.0,
        height: 204.0,
        rotation: 45.5,
        chair_count: 8,
    });
    plan.participants.push(Participant { id: "p1".into(), name: "Ada".into() });
    plan.participants.push(Participant { id: "p2".into(), name: "Grace \"Amazing\" Hopper".into() });
    plan.assignments.insert("t_1700000000_3".into(), Some("p1".into()));
    plan.assignments.insert("t_1700000000_4".into(), None);
    plan.floorplan = Some("studio1".into());
    plan
}

#[test]
fn plan_survives_save_and_load() {
    let plan = sample_plan();
    let text = to_json(&plan).unwrap();
    assert_eq!(from_json(&text).unwrap(), plan);
}

#[test]
fn saved_form_uses_document_field_names() {
    let text = to_json(&sample_plan()).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["tables"][0]["chairs"], json!(8));
    assert_eq!(value["assignments"]["t_1700000000_3"], json!("p1"));
    assert_eq!(value["assignments"]["t_1700000000_4"], json!(null));
    assert_eq!(value["floorplan"], json!("studio1"));
}

#[test]
fn missing_floorplan_loads_as_none() {
    let plan = from_json(r#"{"tables": [], "participants": [], "assignments": {}}"#).unwrap();
    assert_eq!(plan, SeatingPlan::new());
}

#[test]
fn non_json_is_a_syntax_error() {
    assert!(matches!(from_json("{tables:"), Err(PlanFileError::Syntax(_))));
}

#[test]
fn wrong_top_level_shapes_are_rejected() {
    let cases = [
        "[]",
        "42",
        r#"{"participants": [], "assignments": {}}"#,
        r#"{"tables": {}, "participants": [], "assignments": {}}"#,
        r#"{"tables": [], "participants": "Ada", "assignments": {}}"#,
        r#"{"tables": [], "participants": [], "assignments": []}"#,
        r#"{"tables": [], "participants": []}"#,
    ];
    for text in cases {
        assert!(matches!(from_json(text), Err(PlanFileError::Shape(_))), "accepted {text}");
    }
}

#[test]
fn shape_error_names_the_field() {
    let err = from_json(r#"{"tables": [], "participants": [], "assignments": 3}"#).unwrap_err();
    assert_eq!(err.to_string(), "invalid plan file format: `assignments` must be an object");
}

#[test]
fn malformed_entry_is_a_contents_error() {
    let text = r#"{"tables": [{"id": "t1"}], "participants": [], "assignments": {}}"#;
    assert!(matches!(from_json(text), Err(PlanFileError::Contents(_))));
}

#[test]
fn unknown_fields_are_ignored() {
    let text = r#"{"tables": [], "participants": [], "assignments": {}, "version": 2}"#;
    assert!(from_json(text).is_ok());
}
