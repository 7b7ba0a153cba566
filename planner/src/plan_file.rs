//! Plan files: the seating plan saved as JSON.
//!
//! The saved form is the document as-is,
//! `{"tables": [...], "participants": [...], "assignments": {...}, "floorplan": ...}`.
//! Loading checks the top-level shape before decoding so a wrong file is
//! reported plainly instead of as a serde path error.

#[cfg(test)]
#[path = "plan_file_test.rs"]
mod plan_file_test;

use serde_json::Value;
use tracing::{info, warn};

use crate::doc::SeatingPlan;

/// Error returned when saving or loading a plan file.
#[derive(Debug, thiserror::Error)]
pub enum PlanFileError {
    /// The text is not JSON at all.
    #[error("plan file is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),
    /// The JSON does not have the plan's top-level shape.
    #[error("invalid plan file format: {0}")]
    Shape(&'static str),
    /// The shape is right but an entry inside it is malformed.
    #[error("invalid plan file contents: {0}")]
    Contents(#[source] serde_json::Error),
    #[error("failed to serialize plan: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Serialize a plan as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`PlanFileError::Serialize`] if serialization fails.
pub fn to_json(plan: &SeatingPlan) -> Result<String, PlanFileError> {
    let text = serde_json::to_string_pretty(plan).map_err(PlanFileError::Serialize)?;
    info!(
        tables = plan.tables.len(),
        participants = plan.participants.len(),
        bytes = text.len(),
        "serialized plan"
    );
    Ok(text)
}

/// Parse and validate a plan from JSON text.
///
/// A missing `floorplan` loads as `None`.
///
/// # Errors
///
/// Returns [`PlanFileError::Syntax`] for non-JSON input,
/// [`PlanFileError::Shape`] when `tables`/`participants` are not arrays or
/// `assignments` is not an object, and [`PlanFileError::Contents`] when an
/// entry inside them is malformed.
pub fn from_json(text: &str) -> Result<SeatingPlan, PlanFileError> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        warn!(error = %e, "rejected plan file");
        PlanFileError::Syntax(e)
    })?;
    check_shape(&value).inspect_err(|e| warn!(error = %e, "rejected plan file"))?;
    let plan: SeatingPlan = serde_json::from_value(value).map_err(|e| {
        warn!(error = %e, "rejected plan file");
        PlanFileError::Contents(e)
    })?;
    info!(tables = plan.tables.len(), participants = plan.participants.len(), "loaded plan");
    Ok(plan)
}

fn check_shape(value: &Value) -> Result<(), PlanFileError> {
    let Some(obj) = value.as_object() else {
        return Err(PlanFileError::Shape("expected a JSON object"));
    };
    if !obj.get("tables").is_some_and(Value::is_array) {
        return Err(PlanFileError::Shape("`tables` must be an array"));
    }
    if !obj.get("participants").is_some_and(Value::is_array) {
        return Err(PlanFileError::Shape("`participants` must be an array"));
    }
    if !obj.get("assignments").is_some_and(Value::is_object) {
        return Err(PlanFileError::Shape("`assignments` must be an object"));
    }
    Ok(())
}
