//! JavaScript bindings for the editor.
//!
//! Structured values cross the boundary as JSON strings: actions in, plans and
//! effect lists out. Errors surface as `JsValue` strings the host shows to the
//! user.

use wasm_bindgen::prelude::*;

use crate::action::Action;
use crate::camera::Point;
use crate::engine::{EditorCore, Effect};
use crate::hit::ScreenRect;
use crate::input::{Button, Key, Modifiers, WheelDelta};
use crate::{plan_file, print, roster, template};

/// The editor as seen from JavaScript. Wraps [`EditorCore`].
#[wasm_bindgen]
pub struct Editor {
    core: EditorCore,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Editor {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self { core: EditorCore::new() }
    }

    // --- Document ---

    /// Apply an action given as JSON. Returns the effects as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error string if the action JSON is malformed.
    pub fn dispatch(&mut self, action_json: &str) -> Result<String, JsValue> {
        let action: Action = serde_json::from_str(action_json).map_err(to_js)?;
        effects_json(&self.core.dispatch(action))
    }

    /// # Errors
    ///
    /// Returns an error string if the effects fail to serialize.
    pub fn undo(&mut self) -> Result<String, JsValue> {
        effects_json(&self.core.undo())
    }

    /// # Errors
    ///
    /// Returns an error string if the effects fail to serialize.
    pub fn redo(&mut self) -> Result<String, JsValue> {
        effects_json(&self.core.redo())
    }

    #[wasm_bindgen(js_name = canUndo)]
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.core.can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.core.can_redo()
    }

    /// The present plan as a plan file.
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    #[wasm_bindgen(js_name = planJson)]
    pub fn plan_json(&self) -> Result<String, JsValue> {
        plan_file::to_json(self.core.plan()).map_err(to_js)
    }

    /// Load a plan file. The current plan is kept if the file is invalid.
    ///
    /// # Errors
    ///
    /// Returns the validation message for a malformed file.
    #[wasm_bindgen(js_name = loadPlanJson)]
    pub fn load_plan_json(&mut self, text: &str) -> Result<String, JsValue> {
        let effects = self.core.load_plan_json(text).map_err(to_js)?;
        effects_json(&effects)
    }

    /// Load a built-in template by name, keeping the participants.
    ///
    /// # Errors
    ///
    /// Returns an error string for an unknown template name.
    #[wasm_bindgen(js_name = loadTemplate)]
    pub fn load_template(&mut self, name: &str) -> Result<String, JsValue> {
        let template = template::builtin(name).ok_or_else(|| JsValue::from_str(&format!("unknown template: {name}")))?;
        effects_json(&self.core.dispatch(Action::LoadTemplate { template }))
    }

    /// Import participants from spreadsheet rows given as a JSON array of arrays.
    ///
    /// # Errors
    ///
    /// Returns an error string if the rows are not an array of arrays of
    /// strings, numbers, booleans, or `null`.
    #[wasm_bindgen(js_name = importRosterRows)]
    pub fn import_roster_rows(&mut self, rows_json: &str) -> Result<String, JsValue> {
        let cells: Vec<Vec<Option<roster::Cell>>> = serde_json::from_str(rows_json).map_err(to_js)?;
        effects_json(&self.core.import_roster_rows(&roster::text_rows(cells)))
    }

    /// Spreadsheet export rows as a JSON array of arrays.
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    #[wasm_bindgen(js_name = exportRosterRows)]
    pub fn export_roster_rows(&self) -> Result<String, JsValue> {
        serde_json::to_string(&roster::export_rows(self.core.plan())).map_err(to_js)
    }

    /// Page layout for exporting the visible viewport to PDF, as JSON (`null` for an empty viewport).
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    #[wasm_bindgen(js_name = printLayout)]
    pub fn print_layout(&self, viewport_w: f64, viewport_h: f64) -> Result<String, JsValue> {
        serde_json::to_string(&print::layout(viewport_w, viewport_h, self.core.config.print_scale)).map_err(to_js)
    }

    // --- View ---

    /// # Errors
    ///
    /// Returns an error string if the effects fail to serialize.
    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&mut self) -> Result<String, JsValue> {
        effects_json(&self.core.zoom_in())
    }

    /// # Errors
    ///
    /// Returns an error string if the effects fail to serialize.
    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&mut self) -> Result<String, JsValue> {
        effects_json(&self.core.zoom_out())
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.core.camera.zoom
    }

    #[wasm_bindgen(js_name = setRosterPanel)]
    pub fn set_roster_panel(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.core.set_roster_panel(Some(ScreenRect { x, y, width, height }));
    }

    #[must_use]
    pub fn selection(&self) -> Option<String> {
        self.core.selection().map(str::to_owned)
    }

    // --- Input events ---

    /// # Errors
    ///
    /// Returns an error string if the effects fail to serialize.
    #[wasm_bindgen(js_name = pointerDown)]
    #[allow(clippy::fn_params_excessive_bools)]
    pub fn pointer_down(
        &mut self,
        x: f64,
        y: f64,
        button: i16,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> Result<String, JsValue> {
        let mods = Modifiers { shift, ctrl, alt, meta };
        effects_json(&self.core.on_pointer_down(Point::new(x, y), Button::from_dom(button), mods))
    }

    /// Start dragging a participant from the participant list.
    ///
    /// # Errors
    ///
    /// Returns an error string if the effects fail to serialize.
    #[wasm_bindgen(js_name = beginParticipantDrag)]
    pub fn begin_participant_drag(&mut self, participant_id: String, x: f64, y: f64) -> Result<String, JsValue> {
        effects_json(&self.core.begin_participant_drag(participant_id, Point::new(x, y)))
    }

    /// # Errors
    ///
    /// Returns an error string if the effects fail to serialize.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<String, JsValue> {
        effects_json(&self.core.on_pointer_move(Point::new(x, y), Modifiers::default()))
    }

    /// # Errors
    ///
    /// Returns an error string if the effects fail to serialize.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, x: f64, y: f64, button: i16) -> Result<String, JsValue> {
        effects_json(&self.core.on_pointer_up(Point::new(x, y), Button::from_dom(button), Modifiers::default()))
    }

    /// # Errors
    ///
    /// Returns an error string if the effects fail to serialize.
    pub fn wheel(&mut self, dx: f64, dy: f64, ctrl: bool, meta: bool) -> Result<String, JsValue> {
        let mods = Modifiers { ctrl, meta, ..Modifiers::default() };
        effects_json(&self.core.on_wheel(WheelDelta { dx, dy }, mods))
    }

    /// # Errors
    ///
    /// Returns an error string if the effects fail to serialize.
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: String, shift: bool, ctrl: bool, meta: bool) -> Result<String, JsValue> {
        let mods = Modifiers { shift, ctrl, meta, ..Modifiers::default() };
        effects_json(&self.core.on_key_down(Key(key), mods))
    }

    /// A table with any in-progress drag applied, as JSON (`null` if unknown).
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    #[wasm_bindgen(js_name = displayTable)]
    pub fn display_table(&self, id: &str) -> Result<String, JsValue> {
        serde_json::to_string(&self.core.display_table(id)).map_err(to_js)
    }
}

fn effects_json(effects: &[Effect]) -> Result<String, JsValue> {
    serde_json::to_string(effects).map_err(to_js)
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}
