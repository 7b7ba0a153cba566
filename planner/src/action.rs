//! Edit actions accepted by the history store.
//!
//! The JSON form mirrors the action objects the browser host sends, e.g.
//! `{"type": "ASSIGN_SEAT", "participantId": "p_1", "tableId": "t_1", "seatNumber": 2}`.

use serde::{Deserialize, Serialize};

use crate::doc::{Participant, ParticipantId, SeatingPlan, TableId, TablePatch};
use crate::template::Template;

/// A single edit to the seating plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    AddParticipant {
        name: String,
    },
    DeleteParticipant {
        id: ParticipantId,
    },
    ImportParticipants {
        participants: Vec<Participant>,
    },
    AddTable,
    DeleteTable {
        id: TableId,
    },
    UpdateTable {
        table: TablePatch,
    },
    #[serde(rename_all = "camelCase")]
    AssignSeat {
        participant_id: ParticipantId,
        table_id: TableId,
        seat_number: u32,
    },
    #[serde(rename_all = "camelCase")]
    UnassignSeat {
        participant_id: ParticipantId,
    },
    LoadPlan {
        plan: SeatingPlan,
    },
    LoadTemplate {
        template: Template,
    },
    Undo,
    Redo,
    Reset,
}

impl Action {
    /// Short name used in log events.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddParticipant { .. } => "add_participant",
            Self::DeleteParticipant { .. } => "delete_participant",
            Self::ImportParticipants { .. } => "import_participants",
            Self::AddTable => "add_table",
            Self::DeleteTable { .. } => "delete_table",
            Self::UpdateTable { .. } => "update_table",
            Self::AssignSeat { .. } => "assign_seat",
            Self::UnassignSeat { .. } => "unassign_seat",
            Self::LoadPlan { .. } => "load_plan",
            Self::LoadTemplate { .. } => "load_template",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Reset => "reset",
        }
    }
}
