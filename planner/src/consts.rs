//! Shared numeric constants for the planner crate.

// ── New tables ──────────────────────────────────────────────────

/// Left edge of a freshly added table, in canvas units.
pub const DEFAULT_TABLE_X: f64 = 100.0;

/// Top edge of a freshly added table, in canvas units.
pub const DEFAULT_TABLE_Y: f64 = 100.0;

/// Width of a freshly added table, in canvas units.
pub const DEFAULT_TABLE_WIDTH: f64 = 80.0;

/// Height of a freshly added table, in canvas units.
pub const DEFAULT_TABLE_HEIGHT: f64 = 204.0;

/// Chair count of a freshly added table.
pub const DEFAULT_CHAIR_COUNT: u32 = 8;

// ── Chairs ──────────────────────────────────────────────────────

/// Side length of a chair square, in canvas units.
pub const CHAIR_SIZE: f64 = 24.0;

/// Gap between a table edge and its row of chairs, in canvas units.
pub const CHAIR_GAP: f64 = 15.0;

// ── Geometry ────────────────────────────────────────────────────

/// Smallest width or height a resize may produce, in canvas units.
pub const MIN_TABLE_SIZE: f64 = 40.0;

// ── Camera ──────────────────────────────────────────────────────

/// Lower zoom bound.
pub const ZOOM_MIN: f64 = 0.2;

/// Upper zoom bound.
pub const ZOOM_MAX: f64 = 2.0;

/// Zoom change per toolbar click.
pub const ZOOM_STEP: f64 = 0.1;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for resize handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

/// Distance above the top edge to the rotate handle, in screen pixels.
pub const ROTATE_HANDLE_OFFSET_PX: f64 = 24.0;

// ── Export ──────────────────────────────────────────────────────

/// Pixel scale applied when capturing the viewport for PDF export.
pub const PRINT_SCALE: f64 = 2.0;

/// Label written in the table column for participants without a seat.
pub const UNASSIGNED_LABEL: &str = "Unassigned";
