#![allow(clippy::float_cmp)]

use super::*;

const MIN: f64 = 20.0;

fn layout() -> Layout {
    Layout::new(100.0, 100.0, 200.0, 100.0, 3)
}

// =============================================================
// translate
// =============================================================

#[test]
fn translate_moves_position_only() {
    let moved = translate(&layout(), 15.0, -5.0);
    assert_eq!(moved, Layout::new(115.0, 95.0, 200.0, 100.0, 3));
}

// =============================================================
// resize: right / bottom edges
// =============================================================

#[test]
fn east_grows_width() {
    let r = resize(&layout(), ResizeHandle::E, 30.0, 99.0, MIN);
    assert_eq!(r, Layout::new(100.0, 100.0, 230.0, 100.0, 3));
}

#[test]
fn south_grows_height() {
    let r = resize(&layout(), ResizeHandle::S, 99.0, 40.0, MIN);
    assert_eq!(r, Layout::new(100.0, 100.0, 200.0, 140.0, 3));
}

#[test]
fn south_east_grows_both() {
    let r = resize(&layout(), ResizeHandle::Se, 10.0, 20.0, MIN);
    assert_eq!((r.x, r.y, r.width, r.height), (100.0, 100.0, 210.0, 120.0));
}

// =============================================================
// resize: left / top edges keep the opposite edge fixed
// =============================================================

#[test]
fn left_and_top_handles_shift_origin_by_growth() {
    let d = 25.0;
    for handle in [ResizeHandle::W, ResizeHandle::Nw, ResizeHandle::Sw] {
        let r = resize(&layout(), handle, -d, 0.0, MIN);
        assert_eq!(r.width, 200.0 + d, "{handle:?}");
        assert_eq!(r.x, 100.0 - d, "{handle:?}");
        assert_eq!(r.right(), layout().right(), "{handle:?}");
    }
    for handle in [ResizeHandle::N, ResizeHandle::Ne, ResizeHandle::Nw] {
        let r = resize(&layout(), handle, 0.0, -d, MIN);
        assert_eq!(r.height, 100.0 + d, "{handle:?}");
        assert_eq!(r.y, 100.0 - d, "{handle:?}");
        assert_eq!(r.bottom(), layout().bottom(), "{handle:?}");
    }
}

#[test]
fn west_shrink_moves_x_right() {
    let r = resize(&layout(), ResizeHandle::W, 50.0, 0.0, MIN);
    assert_eq!((r.x, r.width), (150.0, 150.0));
}

#[test]
fn edge_handles_ignore_cross_axis() {
    let r = resize(&layout(), ResizeHandle::N, 500.0, 0.0, MIN);
    assert_eq!(r, layout());
    let r = resize(&layout(), ResizeHandle::E, 0.0, 500.0, MIN);
    assert_eq!(r, layout());
}

// =============================================================
// resize: minimum size floor
// =============================================================

#[test]
fn huge_negative_delta_hits_floor_for_every_handle() {
    for handle in ResizeHandle::ALL {
        let r = resize(&layout(), handle, -10_000.0, -10_000.0, MIN);
        assert!(r.width >= MIN && r.height >= MIN, "{handle:?} -> {r:?}");
        let r = resize(&layout(), handle, 10_000.0, 10_000.0, MIN);
        assert!(r.width >= MIN && r.height >= MIN, "{handle:?} -> {r:?}");
    }
}

#[test]
fn floor_on_left_edge_keeps_right_edge() {
    let r = resize(&layout(), ResizeHandle::W, 10_000.0, 0.0, MIN);
    assert_eq!(r.width, MIN);
    assert_eq!(r.right(), layout().right());
}

#[test]
fn resize_preserves_z_index() {
    assert_eq!(resize(&layout(), ResizeHandle::Nw, 5.0, 5.0, MIN).z_index, 3);
}

// =============================================================
// clamp_to_bounds
// =============================================================

#[test]
fn clamp_pulls_back_inside() {
    let bounds = Bounds { width: 1000.0, height: 500.0 };
    let off = Layout::new(-50.0, 480.0, 200.0, 100.0, 0);
    let c = clamp_to_bounds(&off, bounds);
    assert_eq!((c.x, c.y), (0.0, 400.0));
    assert_eq!((c.width, c.height), (200.0, 100.0));
}

#[test]
fn clamp_keeps_inside_untouched() {
    let bounds = Bounds { width: 1000.0, height: 500.0 };
    assert_eq!(clamp_to_bounds(&layout(), bounds), layout());
}

#[test]
fn clamp_oversized_pins_to_origin() {
    let bounds = Bounds { width: 100.0, height: 50.0 };
    let c = clamp_to_bounds(&layout(), bounds);
    assert_eq!((c.x, c.y), (0.0, 0.0));
}
