//! Hit-testing against tables, their chairs, and the selected table's handles.
//!
//! Chairs are laid out around each table: half of them (rounded up) along the
//! top edge and the rest along the bottom, evenly spaced, at a fixed gap from
//! the edge. The layout rotates with the table.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::camera::{Camera, Point};
use crate::consts::{CHAIR_GAP, CHAIR_SIZE, HANDLE_RADIUS_PX, ROTATE_HANDLE_OFFSET_PX};
use crate::doc::{SeatingPlan, Table};
use crate::geometry::{Frame, Handle};

/// Which part of a table was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(Handle),
    RotateHandle,
    Chair(u32),
}

/// Result of a hit test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub table_id: String,
    pub part: HitPart,
}

/// A chair's place relative to its table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChairSlot {
    pub seat: u32,
    /// Chair center in table axes, relative to the table center.
    pub center: Point,
    /// Whether the chair sits along the top edge.
    pub top_side: bool,
}

/// An axis-aligned rectangle in screen space, e.g. the participant list panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

/// Lay out the chairs of `table`.
#[must_use]
pub fn chair_slots(table: &Table) -> Vec<ChairSlot> {
    let count = table.chair_count;
    let top_count = count.div_ceil(2);
    let half_w = table.width / 2.0;
    let half_h = table.height / 2.0;

    (0..count)
        .map(|i| {
            let top_side = i < top_count;
            let side_index = if top_side { i } else { i - top_count };
            let on_side = if top_side { top_count } else { count - top_count };
            let spacing = table.width / f64::from(on_side + 1);
            let x = f64::from(side_index + 1) * spacing - half_w;
            let y = if top_side {
                -half_h - CHAIR_GAP - CHAIR_SIZE / 2.0
            } else {
                half_h + CHAIR_GAP + CHAIR_SIZE / 2.0
            };
            ChairSlot { seat: i + 1, center: Point::new(x, y), top_side }
        })
        .collect()
}

/// Canvas position of a chair's center, or `None` if the seat doesn't exist.
#[must_use]
pub fn chair_center(table: &Table, seat: u32) -> Option<Point> {
    let frame = Frame::of(table);
    chair_slots(table)
        .into_iter()
        .find(|slot| slot.seat == seat)
        .map(|slot| frame.to_world(slot.center))
}

/// Canvas position of the rotate handle: above the top edge's midpoint.
#[must_use]
pub fn rotate_handle_position(table: &Table, camera: &Camera) -> Point {
    let frame = Frame::of(table);
    let offset = camera.screen_dist_to_world(ROTATE_HANDLE_OFFSET_PX);
    frame.to_world(Point::new(0.0, -table.height / 2.0 - offset))
}

/// The chair under `world_pt`, as `(table_id, seat)`. Later tables win.
#[must_use]
pub fn chair_at<'a>(world_pt: Point, plan: &'a SeatingPlan) -> Option<(&'a str, u32)> {
    plan.tables.iter().rev().find_map(|table| {
        let local = Frame::of(table).to_local(world_pt);
        chair_slots(table)
            .into_iter()
            .find(|slot| within_square(local, slot.center, CHAIR_SIZE / 2.0))
            .map(|slot| (table.id.as_str(), slot.seat))
    })
}

/// Test what is under `world_pt`.
///
/// The selected table's handles are checked first, then chairs, then table
/// bodies, each from the topmost (last) table down.
#[must_use]
pub fn hit_test(world_pt: Point, plan: &SeatingPlan, camera: &Camera, selected_id: Option<&str>) -> Option<Hit> {
    if let Some(table) = selected_id.and_then(|id| plan.table(id)) {
        if let Some(part) = handle_at(world_pt, table, camera) {
            return Some(Hit { table_id: table.id.clone(), part });
        }
    }

    if let Some((table_id, seat)) = chair_at(world_pt, plan) {
        return Some(Hit { table_id: table_id.to_owned(), part: HitPart::Chair(seat) });
    }

    plan.tables
        .iter()
        .rev()
        .find(|table| body_contains(table, world_pt))
        .map(|table| Hit { table_id: table.id.clone(), part: HitPart::Body })
}

/// Whether `world_pt` lies on the (rotated) table surface.
#[must_use]
pub fn body_contains(table: &Table, world_pt: Point) -> bool {
    let local = Frame::of(table).to_local(world_pt);
    local.x.abs() <= table.width / 2.0 && local.y.abs() <= table.height / 2.0
}

fn handle_at(world_pt: Point, table: &Table, camera: &Camera) -> Option<HitPart> {
    let radius = camera.screen_dist_to_world(HANDLE_RADIUS_PX);
    let frame = Frame::of(table);

    if let Some(handle) = Handle::ALL
        .into_iter()
        .find(|h| distance(frame.corner(*h), world_pt) <= radius)
    {
        return Some(HitPart::ResizeHandle(handle));
    }

    if distance(rotate_handle_position(table, camera), world_pt) <= radius {
        return Some(HitPart::RotateHandle);
    }
    None
}

fn within_square(p: Point, center: Point, half: f64) -> bool {
    (p.x - center.x).abs() <= half && (p.y - center.y).abs() <= half
}

fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}
