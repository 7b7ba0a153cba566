#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn frame(x: f64, y: f64, width: f64, height: f64, rotation: f64) -> Frame {
    Frame::from_bounds(Bounds { x, y, width, height }, rotation)
}

// --- Handle ---

#[test]
fn opposite_is_diagonal() {
    assert_eq!(Handle::Tl.opposite(), Handle::Br);
    assert_eq!(Handle::Tr.opposite(), Handle::Bl);
    assert_eq!(Handle::Bl.opposite(), Handle::Tr);
    assert_eq!(Handle::Br.opposite(), Handle::Tl);
}

#[test]
fn opposite_twice_is_identity() {
    for h in Handle::ALL {
        assert_eq!(h.opposite().opposite(), h);
    }
}

#[test]
fn handle_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Handle::Br).unwrap(), "\"br\"");
}

// --- rotate ---

#[test]
fn rotate_zero_is_identity() {
    let v = Point::new(3.0, -4.0);
    assert!(point_approx_eq(rotate(v, 0.0), v));
}

#[test]
fn rotate_ninety_turns_x_into_y() {
    // Canvas y grows downward, so +90 is clockwise on screen.
    assert!(point_approx_eq(rotate(Point::new(1.0, 0.0), 90.0), Point::new(0.0, 1.0)));
}

#[test]
fn rotate_back_and_forth_round_trips() {
    let v = Point::new(12.5, -7.0);
    for deg in [15.0, 45.0, 90.0, 137.0, -60.0, 359.0] {
        assert!(point_approx_eq(rotate(rotate(v, deg), -deg), v), "deg {deg}");
    }
}

#[test]
fn rotate_full_turn_is_identity() {
    let v = Point::new(2.0, 5.0);
    assert!(point_approx_eq(rotate(v, 360.0), v));
}

// --- rotation_toward ---

#[test]
fn rotation_toward_cardinal_directions() {
    let c = Point::new(10.0, 10.0);
    assert!(approx_eq(rotation_toward(c, Point::new(20.0, 10.0)), 0.0));
    assert!(approx_eq(rotation_toward(c, Point::new(10.0, 20.0)), 90.0));
    assert!(approx_eq(rotation_toward(c, Point::new(0.0, 10.0)), 180.0));
    assert!(approx_eq(rotation_toward(c, Point::new(10.0, 0.0)), -90.0));
}

#[test]
fn rotation_toward_inverts_rotate() {
    let c = Point::new(50.0, 80.0);
    for deg in [0.0, 30.0, 45.0, 120.0, -150.0] {
        let pointer = c.add(rotate(Point::new(40.0, 0.0), deg));
        assert!(approx_eq(rotation_toward(c, pointer), deg), "deg {deg}");
    }
}

// --- moved_origin ---

#[test]
fn moved_origin_subtracts_grab_offset() {
    let origin = moved_origin(Point::new(150.0, 130.0), Point::new(20.0, 10.0));
    assert_eq!(origin, Point::new(130.0, 120.0));
}

#[test]
fn moved_origin_with_zero_offset_is_pointer() {
    let p = Point::new(7.0, 9.0);
    assert_eq!(moved_origin(p, Point::new(0.0, 0.0)), p);
}

// --- Frame ---

#[test]
fn frame_of_table_uses_center() {
    let table = Table {
        id: "t1".into(),
        name: "Table 1".into(),
        x: 100.0,
        y: 100.0,
        width: 80.0,
        height: 204.0,
        rotation: 30.0,
        chair_count: 8,
    };
    let f = Frame::of(&table);
    assert_eq!(f.center, Point::new(140.0, 202.0));
    assert_eq!(f.rotation, 30.0);
}

#[test]
fn corners_unrotated_match_bounds() {
    let f = frame(10.0, 20.0, 100.0, 50.0, 0.0);
    assert!(point_approx_eq(f.corner(Handle::Tl), Point::new(10.0, 20.0)));
    assert!(point_approx_eq(f.corner(Handle::Tr), Point::new(110.0, 20.0)));
    assert!(point_approx_eq(f.corner(Handle::Bl), Point::new(10.0, 70.0)));
    assert!(point_approx_eq(f.corner(Handle::Br), Point::new(110.0, 70.0)));
}

#[test]
fn corners_rotated_ninety() {
    // 100x50 centered at (60, 45), turned a quarter clockwise.
    let f = frame(10.0, 20.0, 100.0, 50.0, 90.0);
    assert!(point_approx_eq(f.corner(Handle::Tl), Point::new(85.0, -5.0)));
    assert!(point_approx_eq(f.corner(Handle::Br), Point::new(35.0, 95.0)));
}

#[test]
fn to_local_and_to_world_round_trip() {
    let f = frame(0.0, 0.0, 80.0, 40.0, 33.0);
    let world = Point::new(17.0, -3.0);
    assert!(point_approx_eq(f.to_world(f.to_local(world)), world));
}

#[test]
fn to_local_of_corner_is_half_extent() {
    let f = frame(0.0, 0.0, 80.0, 40.0, 71.0);
    assert!(point_approx_eq(f.to_local(f.corner(Handle::Tr)), Point::new(40.0, -20.0)));
}

// --- resize ---

#[test]
fn resize_br_unrotated_grows_from_top_left() {
    let f = frame(100.0, 100.0, 80.0, 200.0, 0.0);
    let b = resize(&f, Handle::Br, Point::new(250.0, 350.0), 40.0);
    assert!(approx_eq(b.x, 100.0));
    assert!(approx_eq(b.y, 100.0));
    assert!(approx_eq(b.width, 150.0));
    assert!(approx_eq(b.height, 250.0));
}

#[test]
fn resize_tl_unrotated_pins_bottom_right() {
    let f = frame(100.0, 100.0, 80.0, 200.0, 0.0);
    let b = resize(&f, Handle::Tl, Point::new(50.0, 60.0), 40.0);
    assert!(approx_eq(b.x, 50.0));
    assert!(approx_eq(b.y, 60.0));
    assert!(approx_eq(b.x + b.width, 180.0));
    assert!(approx_eq(b.y + b.height, 300.0));
}

#[test]
fn resize_br_keeps_top_left_pinned_at_any_rotation() {
    for rotation in [0.0, 45.0, 90.0, 200.0, -30.0] {
        let f = frame(100.0, 100.0, 80.0, 204.0, rotation);
        let pinned = f.corner(Handle::Tl);
        let pointer = f.corner(Handle::Br).add(Point::new(35.0, 12.0));

        let b = resize(&f, Handle::Br, pointer, 40.0);
        let after = Frame::from_bounds(b, rotation);
        assert!(point_approx_eq(after.corner(Handle::Tl), pinned), "rotation {rotation}");
    }
}

#[test]
fn resize_every_handle_pins_its_opposite() {
    let f = frame(0.0, 0.0, 120.0, 60.0, 45.0);
    for h in Handle::ALL {
        let pinned = f.corner(h.opposite());
        let pointer = f.corner(h).add(Point::new(10.0, -8.0));
        let after = Frame::from_bounds(resize(&f, h, pointer, 40.0), f.rotation);
        assert!(point_approx_eq(after.corner(h.opposite()), pinned), "handle {h:?}");
    }
}

#[test]
fn resize_pointer_on_handle_is_unchanged() {
    let f = frame(100.0, 100.0, 80.0, 204.0, 45.0);
    let b = resize(&f, Handle::Br, f.corner(Handle::Br), 40.0);
    assert!(approx_eq(b.x, 100.0));
    assert!(approx_eq(b.y, 100.0));
    assert!(approx_eq(b.width, 80.0));
    assert!(approx_eq(b.height, 204.0));
}

#[test]
fn resize_clamps_to_min_size() {
    let f = frame(100.0, 100.0, 80.0, 204.0, 0.0);
    let b = resize(&f, Handle::Br, Point::new(110.0, 105.0), 40.0);
    assert_eq!(b.width, 40.0);
    assert_eq!(b.height, 40.0);
    assert!(approx_eq(b.x, 100.0));
    assert!(approx_eq(b.y, 100.0));
}

#[test]
fn resize_past_opposite_corner_clamps_instead_of_flipping() {
    let f = frame(100.0, 100.0, 80.0, 204.0, 0.0);
    let b = resize(&f, Handle::Br, Point::new(0.0, 0.0), 40.0);
    assert_eq!(b.width, 40.0);
    assert_eq!(b.height, 40.0);
}

#[test]
fn resize_clamped_rotated_still_pins() {
    let f = frame(100.0, 100.0, 80.0, 204.0, 90.0);
    let pinned = f.corner(Handle::Tl);
    let b = resize(&f, Handle::Br, pinned, 40.0);
    assert_eq!(b.width, 40.0);
    assert_eq!(b.height, 40.0);
    assert!(point_approx_eq(Frame::from_bounds(b, 90.0).corner(Handle::Tl), pinned));
}
