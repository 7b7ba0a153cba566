//! The document reducer: `(plan, action) -> new plan`.
//!
//! [`reduce`] never mutates its input. It returns `None` when the action has
//! no effect on the plan (blank name, seat already taken by the same person,
//! unknown id, and so on); the history store uses that to avoid recording
//! empty undo steps. `UNDO`, `REDO` and `RESET` act on the history, not the
//! plan, so they are always `None` here.

#[cfg(test)]
#[path = "reducer_test.rs"]
mod reducer_test;

use crate::action::Action;
use crate::consts::{
    DEFAULT_CHAIR_COUNT, DEFAULT_TABLE_HEIGHT, DEFAULT_TABLE_WIDTH, DEFAULT_TABLE_X, DEFAULT_TABLE_Y,
};
use crate::doc::{Participant, SeatingPlan, Table, TablePatch, chair_belongs_to, chair_id, new_table_id};
use crate::template::Template;

/// Apply `action` to `plan`, returning the replacement plan or `None` for a no-op.
#[must_use]
pub fn reduce(plan: &SeatingPlan, action: &Action) -> Option<SeatingPlan> {
    match action {
        Action::AddParticipant { name } => add_participant(plan, name),
        Action::DeleteParticipant { id } => delete_participant(plan, id),
        Action::ImportParticipants { participants } => import_participants(plan, participants),
        Action::AddTable => Some(add_table(plan)),
        Action::DeleteTable { id } => delete_table(plan, id),
        Action::UpdateTable { table } => update_table(plan, table),
        Action::AssignSeat { participant_id, table_id, seat_number } => {
            assign_seat(plan, participant_id, table_id, *seat_number)
        }
        Action::UnassignSeat { participant_id } => unassign_seat(plan, participant_id),
        Action::LoadPlan { plan: incoming } => Some(incoming.clone()),
        Action::LoadTemplate { template } => Some(load_template(plan, template)),
        Action::Undo | Action::Redo | Action::Reset => None,
    }
}

fn add_participant(plan: &SeatingPlan, name: &str) -> Option<SeatingPlan> {
    if name.trim().is_empty() {
        return None;
    }
    let mut next = plan.clone();
    next.participants.push(Participant::new(name));
    Some(next)
}

fn delete_participant(plan: &SeatingPlan, id: &str) -> Option<SeatingPlan> {
    let listed = plan.participants.iter().any(|p| p.id == id);
    let seated = plan.chair_of(id).is_some();
    if !listed && !seated {
        return None;
    }
    let mut next = plan.clone();
    next.participants.retain(|p| p.id != id);
    clear_participant(&mut next, id);
    Some(next)
}

fn import_participants(plan: &SeatingPlan, incoming: &[Participant]) -> Option<SeatingPlan> {
    let fresh: Vec<Participant> = incoming
        .iter()
        .filter(|p| !plan.participants.iter().any(|existing| existing.name == p.name))
        .cloned()
        .collect();
    if fresh.is_empty() {
        return None;
    }
    let mut next = plan.clone();
    next.participants.extend(fresh);
    Some(next)
}

fn add_table(plan: &SeatingPlan) -> SeatingPlan {
    let table = Table {
        id: new_table_id(),
        name: format!("Table {}", plan.tables.len() + 1),
        x: DEFAULT_TABLE_X,
        y: DEFAULT_TABLE_Y,
        width: DEFAULT_TABLE_WIDTH,
        height: DEFAULT_TABLE_HEIGHT,
        rotation: 0.0,
        chair_count: DEFAULT_CHAIR_COUNT,
    };
    let mut next = plan.clone();
    next.tables.push(table);
    next
}

fn delete_table(plan: &SeatingPlan, id: &str) -> Option<SeatingPlan> {
    let listed = plan.tables.iter().any(|t| t.id == id);
    let referenced = plan.assignments.keys().any(|chair| chair_belongs_to(chair, id));
    if !listed && !referenced {
        return None;
    }
    let mut next = plan.clone();
    next.tables.retain(|t| t.id != id);
    next.assignments.retain(|chair, _| !chair_belongs_to(chair, id));
    Some(next)
}

fn update_table(plan: &SeatingPlan, patch: &TablePatch) -> Option<SeatingPlan> {
    let index = plan.tables.iter().position(|t| t.id == patch.id)?;
    let updated = plan.tables[index].patched(patch);
    if updated == plan.tables[index] {
        return None;
    }
    let mut next = plan.clone();
    next.tables[index] = updated;
    Some(next)
}

/// Seat `participant_id` at `table_id`/`seat`, swapping with whoever sits there.
///
/// The occupant of the target chair moves into the participant's previous
/// chair. If the participant had no chair, the occupant loses theirs.
fn assign_seat(plan: &SeatingPlan, participant_id: &str, table_id: &str, seat: u32) -> Option<SeatingPlan> {
    let target = chair_id(table_id, seat);
    let original = plan.chair_of(participant_id).map(str::to_owned);
    if original.as_deref() == Some(target.as_str()) {
        return None;
    }

    let occupant = plan.occupant(&target).map(str::to_owned);
    let mut next = plan.clone();
    next.assignments.insert(target, Some(participant_id.to_owned()));
    if let Some(original) = original {
        next.assignments.insert(original, occupant);
    }
    Some(next)
}

fn unassign_seat(plan: &SeatingPlan, participant_id: &str) -> Option<SeatingPlan> {
    plan.chair_of(participant_id)?;
    let mut next = plan.clone();
    clear_participant(&mut next, participant_id);
    Some(next)
}

fn load_template(plan: &SeatingPlan, template: &Template) -> SeatingPlan {
    SeatingPlan {
        tables: template.tables.clone(),
        participants: plan.participants.clone(),
        assignments: template.assignments.clone(),
        floorplan: template.floorplan.clone(),
    }
}

/// Null out every chair held by `participant_id`. Keys stay in the map.
fn clear_participant(plan: &mut SeatingPlan, participant_id: &str) {
    for occupant in plan.assignments.values_mut() {
        if occupant.as_deref() == Some(participant_id) {
            *occupant = None;
        }
    }
}
