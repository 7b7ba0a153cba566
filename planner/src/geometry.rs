//! Table geometry: rotation transforms, corner positions, and the move/rotate/resize math
//! used while dragging.
//!
//! Rotations are stored in degrees (clockwise on screen, since canvas y grows
//! downward) and converted to radians only inside the trig calls.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::doc::Table;

/// One of the four resize handles on a table's corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    Tl,
    Tr,
    Bl,
    Br,
}

impl Handle {
    pub const ALL: [Handle; 4] = [Handle::Tl, Handle::Tr, Handle::Bl, Handle::Br];

    /// The diagonally opposite corner, which stays fixed while this one is dragged.
    #[must_use]
    pub fn opposite(self) -> Handle {
        match self {
            Self::Tl => Self::Br,
            Self::Tr => Self::Bl,
            Self::Bl => Self::Tr,
            Self::Br => Self::Tl,
        }
    }

    /// Unit offset of this corner from the table center in table axes: `-1` for left/top.
    #[must_use]
    pub fn signs(self) -> (f64, f64) {
        match self {
            Self::Tl => (-1.0, -1.0),
            Self::Tr => (1.0, -1.0),
            Self::Bl => (-1.0, 1.0),
            Self::Br => (1.0, 1.0),
        }
    }
}

/// Position and size of a table, without rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// The geometry of a table captured at drag start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub center: Point,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees.
    pub rotation: f64,
}

impl Frame {
    #[must_use]
    pub fn of(table: &Table) -> Self {
        let (cx, cy) = table.center();
        Self { center: Point::new(cx, cy), width: table.width, height: table.height, rotation: table.rotation }
    }

    #[must_use]
    pub fn from_bounds(bounds: Bounds, rotation: f64) -> Self {
        Self { center: bounds.center(), width: bounds.width, height: bounds.height, rotation }
    }

    /// Canvas position of a corner after rotation.
    #[must_use]
    pub fn corner(&self, handle: Handle) -> Point {
        let (sx, sy) = handle.signs();
        let local = Point::new(sx * self.width / 2.0, sy * self.height / 2.0);
        self.center.add(rotate(local, self.rotation))
    }

    /// Express a canvas point in the table's own axes, relative to its center.
    #[must_use]
    pub fn to_local(&self, world: Point) -> Point {
        rotate(world.sub(self.center), -self.rotation)
    }

    /// Map a point in table axes (relative to the center) back to canvas space.
    #[must_use]
    pub fn to_world(&self, local: Point) -> Point {
        self.center.add(rotate(local, self.rotation))
    }
}

/// Rotate a vector about the origin by `degrees`.
#[must_use]
pub fn rotate(v: Point, degrees: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Rotation in degrees that points from `center` toward `pointer`.
///
/// Zero is along +x; values lie in `(-180, 180]`.
#[must_use]
pub fn rotation_toward(center: Point, pointer: Point) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees()
}

/// New top-left for a table being moved: pointer minus the grab offset.
#[must_use]
pub fn moved_origin(pointer: Point, grab_offset: Point) -> Point {
    pointer.sub(grab_offset)
}

/// Resize `frame` by dragging `handle` to `pointer`, keeping the opposite corner pinned.
///
/// Both dimensions are clamped to at least `min_size`. The returned bounds
/// describe the unrotated box; the rotation itself is unchanged.
#[must_use]
pub fn resize(frame: &Frame, handle: Handle, pointer: Point, min_size: f64) -> Bounds {
    let fixed = frame.corner(handle.opposite());
    let local = rotate(pointer.sub(fixed), -frame.rotation);

    let (sx, sy) = handle.signs();
    let width = (local.x * sx).max(min_size);
    let height = (local.y * sy).max(min_size);

    let half = rotate(Point::new(sx * width / 2.0, sy * height / 2.0), frame.rotation);
    let center = fixed.add(half);

    Bounds { x: center.x - width / 2.0, y: center.y - height / 2.0, width, height }
}
