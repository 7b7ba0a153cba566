//! Input model: modifier keys, mouse buttons, and the drag state machine.
//!
//! `Modifiers`, `Button`, `Key` and `WheelDelta` describe raw events from the
//! host. `UiState` is the editor state that is not part of the document
//! (selection, where the participant list sits on screen). `DragState` is the
//! gesture being tracked between pointer-down and pointer-up; it carries what
//! is needed to preview the gesture and commit it on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::{ParticipantId, TableId, TablePatch};
use crate::geometry::{Bounds, Frame, Handle};
use crate::hit::ScreenRect;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Command on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Middle,
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` value.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// A keyboard key as reported by the browser (e.g. `"Delete"`, `"z"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Wheel / trackpad scroll delta in pixels.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    pub dx: f64,
    pub dy: f64,
}

/// Editor state visible to the renderer but outside the undo history.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The currently selected table, if any.
    pub selected_id: Option<TableId>,
    /// Screen rectangle of the participant list. Dropping a participant here
    /// leaves their seat alone.
    pub roster_panel: Option<ScreenRect>,
}

/// The gesture in progress.
#[derive(Debug, Clone, Default)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Scrolling the workspace by dragging empty canvas.
    Panning {
        last_screen: Point,
    },
    /// Moving a table.
    MovingTable {
        id: TableId,
        /// Pointer position minus table top-left at drag start, in canvas units.
        grab_offset: Point,
        /// Top-left under the latest pointer sample; `None` until the pointer moves.
        preview: Option<Point>,
    },
    /// Rotating a table around its center.
    RotatingTable {
        id: TableId,
        /// Rotation pivot captured at drag start.
        center: Point,
        /// Rotation in degrees at drag start.
        orig_rotation: f64,
        /// Rotation under the latest pointer sample.
        preview: Option<f64>,
    },
    /// Resizing a table by one of its corner handles.
    ResizingTable {
        id: TableId,
        handle: Handle,
        /// Table geometry at drag start.
        origin: Frame,
        /// Bounds under the latest pointer sample.
        preview: Option<Bounds>,
    },
    /// Carrying a participant from the list or from a chair.
    DraggingParticipant {
        participant_id: ParticipantId,
        last_screen: Point,
    },
}

impl DragState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The table affected by the gesture and the patch the gesture would commit now.
    #[must_use]
    pub fn pending_patch(&self) -> Option<TablePatch> {
        match self {
            Self::MovingTable { id, preview: Some(origin), .. } => Some(TablePatch {
                x: Some(origin.x),
                y: Some(origin.y),
                ..TablePatch::new(id.clone())
            }),
            Self::RotatingTable { id, orig_rotation, preview: Some(rotation), .. }
                if (rotation - orig_rotation).abs() > f64::EPSILON =>
            {
                Some(TablePatch { rotation: Some(*rotation), ..TablePatch::new(id.clone()) })
            }
            Self::ResizingTable { id, preview: Some(b), .. } => Some(TablePatch {
                x: Some(b.x),
                y: Some(b.y),
                width: Some(b.width),
                height: Some(b.height),
                ..TablePatch::new(id.clone())
            }),
            _ => None,
        }
    }

    /// CSS cursor for the gesture.
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        match self {
            Self::Idle => "default",
            Self::Panning { .. } | Self::DraggingParticipant { .. } => "grabbing",
            Self::MovingTable { .. } => "move",
            Self::RotatingTable { .. } => "alias",
            Self::ResizingTable { handle: Handle::Tl | Handle::Br, .. } => "nwse-resize",
            Self::ResizingTable { handle: Handle::Tr | Handle::Bl, .. } => "nesw-resize",
        }
    }
}
