//! Seating plan editor core.
//!
//! This crate is compiled to WebAssembly for the browser editor and natively
//! for the `seatplan` command-line tool. It owns the seating plan document and
//! its undo history, the geometry behind moving/rotating/resizing tables, the
//! hit-testing that turns pointer drops into seat assignments, and the plan
//! and roster file formats. Drawing, XLSX encoding, and PDF rasterization stay
//! in the host.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`doc`] | Participants, tables, assignments, and chair ids |
//! | [`action`] | The edit actions |
//! | [`reducer`] | Pure `(plan, action) -> plan` function |
//! | [`history`] | Undo/redo stack around the plan |
//! | [`engine`] | Testable [`engine::EditorCore`]: history + camera + gestures |
//! | [`geometry`] | Rotation, corner, and resize math |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`input`] | Input event types and the drag state machine |
//! | [`hit`] | Chair layout and hit-testing |
//! | [`plan_file`] | JSON plan files |
//! | [`roster`] | Spreadsheet rows and CSV for participant import/export |
//! | [`template`] | Built-in venue templates |
//! | [`print`] | PDF page layout |
//! | [`config`] | Editor configuration |
//! | [`consts`] | Shared numeric constants (default table, chair layout, zoom limits) |
//! | [`wasm`] | JavaScript bindings |

pub mod action;
pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod history;
pub mod hit;
pub mod input;
pub mod plan_file;
pub mod print;
pub mod reducer;
pub mod roster;
pub mod template;
pub mod wasm;
