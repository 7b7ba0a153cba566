//! Document model: participants, tables, seat assignments, and the plan that holds them.
//!
//! This module defines the data that describes a seating plan (`Participant`,
//! `Table`, `SeatingPlan`), a sparse-update type for incremental table edits
//! (`TablePatch`), and the chair identifier helpers (`chair_id`,
//! `parse_chair_id`). Chairs are never stored; a chair is the pair of a table
//! id and a seat number, encoded as `{table_id}_{seat}`.
//!
//! A `SeatingPlan` is a value. The history store owns the current one and only
//! ever replaces it with a new plan produced by the reducer.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a participant (`p_<hex>` when generated here).
pub type ParticipantId = String;

/// Identifier of a table (`t_<hex>` when generated here). May contain underscores.
pub type TableId = String;

/// Chair id (`{table_id}_{seat}`) to the participant sitting there, if any.
pub type Assignments = BTreeMap<String, Option<ParticipantId>>;

/// A person who can be seated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

impl Participant {
    /// Create a participant with a freshly generated id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: new_participant_id(), name: name.into() }
    }
}

/// A table on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Unique identifier for this table.
    pub id: TableId,
    /// Display name shown on the table and in exports.
    pub name: String,
    /// Left edge of the unrotated bounding box in canvas units.
    pub x: f64,
    /// Top edge of the unrotated bounding box in canvas units.
    pub y: f64,
    /// Width of the table in canvas units.
    pub width: f64,
    /// Height of the table in canvas units.
    pub height: f64,
    /// Clockwise rotation in degrees around the table center.
    pub rotation: f64,
    /// Number of chairs; seats are numbered `1..=chair_count`.
    #[serde(rename = "chairs")]
    pub chair_count: u32,
}

impl Table {
    /// Center of the table in canvas units. Rotation does not move it.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether `seat` names one of this table's chairs.
    #[must_use]
    pub fn has_seat(&self, seat: u32) -> bool {
        (1..=self.chair_count).contains(&seat)
    }

    /// Return a copy with every field present in `patch` applied.
    #[must_use]
    pub fn patched(&self, patch: &TablePatch) -> Self {
        let mut next = self.clone();
        if let Some(ref name) = patch.name {
            next.name.clone_from(name);
        }
        if let Some(x) = patch.x {
            next.x = x;
        }
        if let Some(y) = patch.y {
            next.y = y;
        }
        if let Some(w) = patch.width {
            next.width = w;
        }
        if let Some(h) = patch.height {
            next.height = h;
        }
        if let Some(r) = patch.rotation {
            next.rotation = r;
        }
        if let Some(c) = patch.chair_count {
            next.chair_count = c;
        }
        next
    }
}

/// Sparse update for a table. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TablePatch {
    /// Id of the table to update.
    pub id: TableId,
    /// New display name, if being updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New x position, if being updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New y position, if being updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New width, if being updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// New height, if being updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// New rotation in degrees, if being updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// New chair count, if being updated.
    #[serde(default, rename = "chairs", skip_serializing_if = "Option::is_none")]
    pub chair_count: Option<u32>,
}

impl TablePatch {
    /// An empty patch addressed at `id`.
    #[must_use]
    pub fn new(id: impl Into<TableId>) -> Self {
        Self { id: id.into(), ..Default::default() }
    }
}

/// The whole seating plan: tables, participants, and who sits where.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeatingPlan {
    pub tables: Vec<Table>,
    pub participants: Vec<Participant>,
    pub assignments: Assignments,
    /// Venue floorplan drawn beneath the tables, if any.
    #[serde(default)]
    pub floorplan: Option<String>,
}

impl SeatingPlan {
    /// The empty plan the editor starts from and RESET returns to.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Chair id currently holding `participant_id`, if any.
    #[must_use]
    pub fn chair_of(&self, participant_id: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|(_, occupant)| occupant.as_deref() == Some(participant_id))
            .map(|(chair, _)| chair.as_str())
    }

    /// Participant sitting in `chair`, if any.
    #[must_use]
    pub fn occupant(&self, chair: &str) -> Option<&str> {
        self.assignments.get(chair).and_then(|p| p.as_deref())
    }

    /// Participants that hold no chair, in list order.
    #[must_use]
    pub fn unseated(&self) -> Vec<&Participant> {
        self.participants
            .iter()
            .filter(|p| self.chair_of(&p.id).is_none())
            .collect()
    }
}

/// Format the chair id for `seat` at `table_id`.
#[must_use]
pub fn chair_id(table_id: &str, seat: u32) -> String {
    format!("{table_id}_{seat}")
}

/// Split a chair id into `(table_id, seat)`.
///
/// The seat is the segment after the last underscore and must be a positive
/// integer; everything before it is the table id, underscores included.
#[must_use]
pub fn parse_chair_id(chair: &str) -> Option<(&str, u32)> {
    let (table_id, seat) = chair.rsplit_once('_')?;
    if table_id.is_empty() || seat.is_empty() || !seat.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match seat.parse::<u32>() {
        Ok(n) if n > 0 => Some((table_id, n)),
        _ => None,
    }
}

/// Whether `chair` is one of the chairs of `table_id`.
#[must_use]
pub fn chair_belongs_to(chair: &str, table_id: &str) -> bool {
    parse_chair_id(chair).is_some_and(|(t, _)| t == table_id)
}

#[must_use]
pub fn new_participant_id() -> ParticipantId {
    format!("p_{}", Uuid::new_v4().simple())
}

#[must_use]
pub fn new_table_id() -> TableId {
    format!("t_{}", Uuid::new_v4().simple())
}
