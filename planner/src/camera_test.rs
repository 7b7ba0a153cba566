#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_add_and_sub() {
    let a = Point::new(5.0, 7.0);
    let b = Point::new(2.0, -1.0);
    assert_eq!(a.add(b), Point::new(7.0, 6.0));
    assert_eq!(a.sub(b), Point::new(3.0, 8.0));
    assert_eq!(a.sub(b).add(b), a);
}

// --- Camera defaults ---

#[test]
fn camera_default() {
    let cam = Camera::default();
    assert_eq!(cam.pan_x, 0.0);
    assert_eq!(cam.pan_y, 0.0);
    assert_eq!(cam.zoom, 1.0);
}

#[test]
fn zoom_limits_default() {
    let limits = ZoomLimits::default();
    assert_eq!(limits.min, 0.2);
    assert_eq!(limits.max, 2.0);
    assert_eq!(limits.step, 0.1);
}

// --- Conversions ---

#[test]
fn screen_to_world_identity_at_default() {
    let cam = Camera::default();
    let p = Point::new(42.0, -17.0);
    assert_eq!(cam.screen_to_world(p), p);
}

#[test]
fn screen_to_world_with_pan_and_zoom() {
    let cam = Camera { pan_x: 100.0, pan_y: 50.0, zoom: 2.0 };
    let w = cam.screen_to_world(Point::new(300.0, 250.0));
    assert!(point_approx_eq(w, Point::new(100.0, 100.0)));
}

#[test]
fn world_to_screen_inverts_screen_to_world() {
    let cam = Camera { pan_x: -35.0, pan_y: 12.5, zoom: 0.7 };
    let s = Point::new(123.0, 456.0);
    assert!(point_approx_eq(cam.world_to_screen(cam.screen_to_world(s)), s));
}

#[test]
fn screen_dist_scales_by_zoom() {
    let cam = Camera { zoom: 0.5, ..Camera::default() };
    assert_eq!(cam.screen_dist_to_world(8.0), 16.0);
}

// --- Zoom ---

#[test]
fn set_zoom_clamps_to_limits() {
    let limits = ZoomLimits::default();
    let mut cam = Camera::default();
    assert!(cam.set_zoom(10.0, limits));
    assert_eq!(cam.zoom, 2.0);
    assert!(cam.set_zoom(0.0, limits));
    assert_eq!(cam.zoom, 0.2);
}

#[test]
fn set_zoom_same_value_reports_unchanged() {
    let mut cam = Camera::default();
    assert!(!cam.set_zoom(1.0, ZoomLimits::default()));
}

#[test]
fn zoom_in_steps_up() {
    let mut cam = Camera::default();
    assert!(cam.zoom_in(ZoomLimits::default()));
    assert_eq!(cam.zoom, 1.1);
}

#[test]
fn zoom_out_steps_down() {
    let mut cam = Camera::default();
    assert!(cam.zoom_out(ZoomLimits::default()));
    assert_eq!(cam.zoom, 0.9);
}

#[test]
fn zoom_steps_do_not_drift() {
    let limits = ZoomLimits::default();
    let mut cam = Camera::default();
    for _ in 0..5 {
        cam.zoom_out(limits);
    }
    for _ in 0..3 {
        cam.zoom_in(limits);
    }
    assert_eq!(cam.zoom, 0.8);
}

#[test]
fn zoom_in_stops_at_max() {
    let limits = ZoomLimits::default();
    let mut cam = Camera::default();
    for _ in 0..20 {
        cam.zoom_in(limits);
    }
    assert_eq!(cam.zoom, 2.0);
    assert!(!cam.zoom_in(limits));
}

#[test]
fn zoom_out_stops_at_min() {
    let limits = ZoomLimits::default();
    let mut cam = Camera::default();
    for _ in 0..20 {
        cam.zoom_out(limits);
    }
    assert_eq!(cam.zoom, 0.2);
    assert!(!cam.zoom_out(limits));
}

#[test]
fn custom_limits_are_respected() {
    let limits = ZoomLimits { min: 0.5, max: 1.5, step: 0.25 };
    let mut cam = Camera::default();
    cam.zoom_in(limits);
    cam.zoom_in(limits);
    cam.zoom_in(limits);
    assert_eq!(cam.zoom, 1.5);
}

// --- Pan ---

#[test]
fn pan_by_accumulates() {
    let mut cam = Camera::default();
    cam.pan_by(10.0, -5.0);
    cam.pan_by(2.5, 1.0);
    assert_eq!(cam.pan_x, 12.5);
    assert_eq!(cam.pan_y, -4.0);
}
