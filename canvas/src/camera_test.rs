#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn point_approx_eq(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

// --- Conversions ---

#[test]
fn identity_camera_is_passthrough() {
    let cam = Camera::default();
    let p = Point::new(12.5, -4.0);
    assert_eq!(cam.screen_to_canvas(p), p);
    assert_eq!(cam.canvas_to_screen(p), p);
}

#[test]
fn zoomed_screen_to_canvas_divides() {
    let cam = Camera::new(2.0);
    assert_eq!(cam.screen_to_canvas(Point::new(100.0, 50.0)), Point::new(50.0, 25.0));
    assert_eq!(cam.screen_dist_to_canvas(30.0), 15.0);
}

#[test]
fn conversions_roundtrip() {
    let cam = Camera::new(0.75);
    let p = Point::new(333.0, 91.0);
    assert!(point_approx_eq(cam.canvas_to_screen(cam.screen_to_canvas(p)), p));
}

// --- Zoom normalization ---

#[test]
fn zoom_fallbacks() {
    assert_eq!(normalize_zoom(0.0), 1.0);
    assert_eq!(normalize_zoom(-2.0), 1.0);
    assert_eq!(normalize_zoom(f64::NAN), 1.0);
    assert_eq!(normalize_zoom(f64::INFINITY), 1.0);
}

#[test]
fn zoom_clamped_to_range() {
    assert_eq!(normalize_zoom(0.01), MIN_ZOOM);
    assert_eq!(normalize_zoom(100.0), MAX_ZOOM);
    assert_eq!(normalize_zoom(1.5), 1.5);
}
