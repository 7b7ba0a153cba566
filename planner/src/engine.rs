//! The editor engine: undo history, camera, selection, and pointer gestures in one place.
//!
//! `EditorCore` has no browser dependencies so it can be tested natively; the
//! [`crate::wasm::Editor`] wrapper exposes it to JavaScript. Input handlers
//! return [`Effect`]s telling the host what to do next (redraw, change the
//! cursor, persist a committed action).
//!
//! Table drags update a preview on every pointer move and commit a single
//! UPDATE_TABLE on release, so a whole gesture is one undo step.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::Serialize;
use tracing::debug;

use crate::action::Action;
use crate::camera::{Camera, Point};
use crate::config::EditorConfig;
use crate::doc::{ParticipantId, SeatingPlan, Table, TableId, chair_id};
use crate::geometry::{Frame, moved_origin, resize, rotation_toward};
use crate::history::History;
use crate::hit::{HitPart, ScreenRect, chair_at, hit_test};
use crate::input::{Button, DragState, Key, Modifiers, UiState, WheelDelta};
use crate::plan_file::{self, PlanFileError};
use crate::roster;

/// What the host should do after an input or edit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    RenderNeeded,
    SetCursor { cursor: String },
    SelectionChanged { table_id: Option<TableId> },
    /// An action changed the plan and is now on the undo stack.
    Committed { action: Action },
}

/// Core editor state: all logic that doesn't depend on the browser.
#[derive(Debug, Default)]
pub struct EditorCore {
    pub history: History,
    pub camera: Camera,
    pub ui: UiState,
    pub input: DragState,
    pub config: EditorConfig,
}

impl EditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Document ---

    /// Apply an edit through the history.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.commit(action, &mut effects);
        effects
    }

    pub fn undo(&mut self) -> Vec<Effect> {
        self.dispatch(Action::Undo)
    }

    pub fn redo(&mut self) -> Vec<Effect> {
        self.dispatch(Action::Redo)
    }

    /// Replace the plan with one parsed from a plan file.
    ///
    /// # Errors
    ///
    /// Returns the [`PlanFileError`] from parsing; the plan is left unchanged.
    pub fn load_plan_json(&mut self, text: &str) -> Result<Vec<Effect>, PlanFileError> {
        let plan = plan_file::from_json(text)?;
        Ok(self.dispatch(Action::LoadPlan { plan }))
    }

    /// Import participants from spreadsheet rows (first row is a header).
    pub fn import_roster_rows(&mut self, rows: &[Vec<String>]) -> Vec<Effect> {
        let participants = roster::participants_from_rows(rows);
        if participants.is_empty() {
            return Vec::new();
        }
        self.dispatch(Action::ImportParticipants { participants })
    }

    // --- View ---

    pub fn zoom_in(&mut self) -> Vec<Effect> {
        let changed = self.camera.zoom_in(self.config.zoom);
        render_if(changed)
    }

    pub fn zoom_out(&mut self) -> Vec<Effect> {
        let changed = self.camera.zoom_out(self.config.zoom);
        render_if(changed)
    }

    pub fn set_zoom(&mut self, zoom: f64) -> Vec<Effect> {
        let changed = self.camera.set_zoom(zoom, self.config.zoom);
        render_if(changed)
    }

    /// Tell the engine where the participant list is on screen.
    pub fn set_roster_panel(&mut self, rect: Option<ScreenRect>) {
        self.ui.roster_panel = rect;
    }

    /// Select a table (or clear the selection with `None`).
    pub fn select_table(&mut self, id: Option<TableId>) -> Vec<Effect> {
        let id = id.filter(|id| self.plan().table(id).is_some());
        let mut effects = Vec::new();
        self.set_selection(id, &mut effects);
        effects
    }

    // --- Queries ---

    #[must_use]
    pub fn plan(&self) -> &SeatingPlan {
        self.history.present()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The currently selected table id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.ui.selected_id.as_deref()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// A table as it should be drawn right now, including any drag in progress.
    #[must_use]
    pub fn display_table(&self, id: &str) -> Option<Table> {
        let table = self.plan().table(id)?;
        match self.input.pending_patch() {
            Some(patch) if patch.id == id => Some(table.patched(&patch)),
            _ => Some(table.clone()),
        }
    }

    /// The participant being carried and the screen point they're at.
    #[must_use]
    pub fn carried_participant(&self) -> Option<(&str, Point)> {
        match &self.input {
            DragState::DraggingParticipant { participant_id, last_screen } => {
                Some((participant_id.as_str(), *last_screen))
            }
            _ => None,
        }
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Effect> {
        if !self.input.is_idle() {
            return Vec::new();
        }
        match button {
            Button::Primary => {}
            Button::Middle => {
                self.input = DragState::Panning { last_screen: screen_pt };
                return vec![self.cursor_effect()];
            }
            Button::Secondary => return Vec::new(),
        }

        let world = self.camera.screen_to_world(screen_pt);
        let hit = hit_test(world, self.plan(), &self.camera, self.selection());
        let mut effects = Vec::new();

        let Some(hit) = hit else {
            self.set_selection(None, &mut effects);
            self.input = DragState::Panning { last_screen: screen_pt };
            effects.push(self.cursor_effect());
            return effects;
        };

        let Some(table) = self.plan().table(&hit.table_id).cloned() else {
            return effects;
        };

        match hit.part {
            HitPart::ResizeHandle(handle) => {
                let origin = Frame::of(&table);
                self.input = DragState::ResizingTable { id: table.id, handle, origin, preview: None };
            }
            HitPart::RotateHandle => {
                let center = Frame::of(&table).center;
                self.input =
                    DragState::RotatingTable { id: table.id, center, orig_rotation: table.rotation, preview: None };
            }
            HitPart::Chair(seat) => {
                let chair = chair_id(&table.id, seat);
                if let Some(occupant) = self.plan().occupant(&chair).map(str::to_owned) {
                    return self.begin_participant_drag(occupant, screen_pt);
                }
                self.start_move(&table, world, &mut effects);
            }
            HitPart::Body => self.start_move(&table, world, &mut effects),
        }

        effects.push(self.cursor_effect());
        effects.push(Effect::RenderNeeded);
        effects
    }

    /// Start carrying a participant, e.g. from the participant list.
    pub fn begin_participant_drag(&mut self, participant_id: ParticipantId, screen_pt: Point) -> Vec<Effect> {
        if !self.input.is_idle() || self.plan().participant(&participant_id).is_none() {
            return Vec::new();
        }
        self.input = DragState::DraggingParticipant { participant_id, last_screen: screen_pt };
        vec![self.cursor_effect(), Effect::RenderNeeded]
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Effect> {
        let world = self.camera.screen_to_world(screen_pt);
        let min_size = self.config.min_table_size;

        match &mut self.input {
            DragState::Idle => return Vec::new(),
            DragState::Panning { last_screen } => {
                let (dx, dy) = (screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                *last_screen = screen_pt;
                self.camera.pan_by(dx, dy);
            }
            DragState::MovingTable { grab_offset, preview, .. } => {
                *preview = Some(moved_origin(world, *grab_offset));
            }
            DragState::RotatingTable { center, preview, .. } => {
                *preview = Some(rotation_toward(*center, world));
            }
            DragState::ResizingTable { handle, origin, preview, .. } => {
                *preview = Some(resize(origin, *handle, world, min_size));
            }
            DragState::DraggingParticipant { last_screen, .. } => {
                *last_screen = screen_pt;
            }
        }
        vec![Effect::RenderNeeded]
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, _button: Button, _modifiers: Modifiers) -> Vec<Effect> {
        let gesture = std::mem::take(&mut self.input);
        let mut effects = Vec::new();

        match gesture {
            DragState::Idle => return effects,
            DragState::Panning { .. } => {}
            DragState::DraggingParticipant { participant_id, .. } => {
                if let Some(action) = self.drop_participant(participant_id, screen_pt) {
                    self.commit(action, &mut effects);
                }
            }
            table_drag => {
                if let Some(patch) = table_drag.pending_patch() {
                    debug!(table = %patch.id, "committing table drag");
                    self.commit(Action::UpdateTable { table: patch }, &mut effects);
                }
            }
        }

        effects.push(self.cursor_effect());
        effects.push(Effect::RenderNeeded);
        effects
    }

    pub fn on_wheel(&mut self, delta: WheelDelta, modifiers: Modifiers) -> Vec<Effect> {
        if modifiers.command() {
            if delta.dy < 0.0 {
                return self.zoom_in();
            }
            if delta.dy > 0.0 {
                return self.zoom_out();
            }
            return Vec::new();
        }
        self.camera.pan_by(-delta.dx, -delta.dy);
        vec![Effect::RenderNeeded]
    }

    pub fn on_key_down(&mut self, key: Key, modifiers: Modifiers) -> Vec<Effect> {
        if !self.input.is_idle() {
            return Vec::new();
        }
        match key.0.as_str() {
            "Delete" | "Backspace" => match self.ui.selected_id.clone() {
                Some(id) => self.dispatch(Action::DeleteTable { id }),
                None => Vec::new(),
            },
            "z" | "Z" if modifiers.command() && modifiers.shift => self.redo(),
            "z" | "Z" if modifiers.command() => self.undo(),
            "y" | "Y" if modifiers.command() => self.redo(),
            _ => Vec::new(),
        }
    }

    // --- Internals ---

    /// Decide what dropping a carried participant at `screen_pt` means.
    ///
    /// On a chair: take that seat. Over the participant list: nothing.
    /// Anywhere else: leave their seat.
    fn drop_participant(&self, participant_id: ParticipantId, screen_pt: Point) -> Option<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        if let Some((table_id, seat)) = chair_at(world, self.plan()) {
            return Some(Action::AssignSeat { participant_id, table_id: table_id.to_owned(), seat_number: seat });
        }
        if self.ui.roster_panel.is_some_and(|panel| panel.contains(screen_pt)) {
            return None;
        }
        Some(Action::UnassignSeat { participant_id })
    }

    fn start_move(&mut self, table: &Table, world: Point, effects: &mut Vec<Effect>) {
        self.set_selection(Some(table.id.clone()), effects);
        self.input = DragState::MovingTable {
            id: table.id.clone(),
            grab_offset: Point::new(world.x - table.x, world.y - table.y),
            preview: None,
        };
    }

    fn commit(&mut self, action: Action, effects: &mut Vec<Effect>) {
        if !self.history.dispatch(&action) {
            return;
        }
        effects.push(Effect::Committed { action });
        let still_there = self
            .ui
            .selected_id
            .as_deref()
            .is_none_or(|id| self.plan().table(id).is_some());
        if !still_there {
            self.set_selection(None, effects);
        }
        effects.push(Effect::RenderNeeded);
    }

    fn set_selection(&mut self, id: Option<TableId>, effects: &mut Vec<Effect>) {
        if self.ui.selected_id == id {
            return;
        }
        self.ui.selected_id.clone_from(&id);
        effects.push(Effect::SelectionChanged { table_id: id });
    }

    fn cursor_effect(&self) -> Effect {
        Effect::SetCursor { cursor: self.input.cursor().to_owned() }
    }
}

fn render_if(changed: bool) -> Vec<Effect> {
    if changed { vec![Effect::RenderNeeded] } else { Vec::new() }
}
