#![allow(clippy::float_cmp)]

use blocks::BlockKind;

use super::*;

fn make_block(x: f64, y: f64, w: f64, h: f64, z: i64) -> Block {
    Block::new(BlockKind::Text, Layout::new(x, y, w, h, z))
}

fn selected(ids: &[BlockId]) -> BTreeSet<BlockId> {
    ids.iter().copied().collect()
}

// =============================================================
// ResizeHandle
// =============================================================

#[test]
fn handle_positions() {
    let l = Layout::new(0.0, 0.0, 100.0, 50.0, 0);
    assert_eq!(ResizeHandle::Nw.position(&l), Point::new(0.0, 0.0));
    assert_eq!(ResizeHandle::N.position(&l), Point::new(50.0, 0.0));
    assert_eq!(ResizeHandle::E.position(&l), Point::new(100.0, 25.0));
    assert_eq!(ResizeHandle::Se.position(&l), Point::new(100.0, 50.0));
    assert_eq!(ResizeHandle::Sw.position(&l), Point::new(0.0, 50.0));
}

#[test]
fn edge_flags_are_consistent() {
    for h in ResizeHandle::ALL {
        assert!(!(h.moves_left() && h.moves_right()), "{h:?}");
        assert!(!(h.moves_top() && h.moves_bottom()), "{h:?}");
        assert!(h.moves_left() || h.moves_right() || h.moves_top() || h.moves_bottom(), "{h:?}");
    }
}

#[test]
fn cursors() {
    assert_eq!(ResizeHandle::W.cursor(), "ew-resize");
    assert_eq!(ResizeHandle::Se.cursor(), "nwse-resize");
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn miss_on_empty_canvas() {
    let b = make_block(0.0, 0.0, 100.0, 100.0, 0);
    let hit = hit_test(Point::new(500.0, 500.0), &[&b], &Camera::default(), &BTreeSet::new(), 24.0);
    assert!(hit.is_none());
}

#[test]
fn top_strip_is_drag_handle() {
    let b = make_block(0.0, 0.0, 100.0, 100.0, 0);
    let hit = hit_test(Point::new(50.0, 10.0), &[&b], &Camera::default(), &BTreeSet::new(), 24.0).unwrap();
    assert_eq!(hit.part, HitPart::DragHandle);
    let hit = hit_test(Point::new(50.0, 60.0), &[&b], &Camera::default(), &BTreeSet::new(), 24.0).unwrap();
    assert_eq!(hit.part, HitPart::Body);
}

#[test]
fn topmost_block_wins() {
    let low = make_block(0.0, 0.0, 100.0, 100.0, 0);
    let high = make_block(50.0, 50.0, 100.0, 100.0, 1);
    let hit = hit_test(Point::new(75.0, 90.0), &[&low, &high], &Camera::default(), &BTreeSet::new(), 24.0).unwrap();
    assert_eq!(hit.block_id, high.id);
}

#[test]
fn handles_only_on_selected() {
    let b = make_block(0.0, 0.0, 100.0, 100.0, 0);
    let corner = Point::new(100.0, 100.0);
    let unselected = hit_test(corner, &[&b], &Camera::default(), &BTreeSet::new(), 24.0).unwrap();
    assert_eq!(unselected.part, HitPart::Body);
    let sel = hit_test(corner, &[&b], &Camera::default(), &selected(&[b.id]), 24.0).unwrap();
    assert_eq!(sel.part, HitPart::Resize(ResizeHandle::Se));
}

#[test]
fn handle_slop_scales_with_zoom() {
    let b = make_block(0.0, 0.0, 100.0, 100.0, 0);
    let near = Point::new(104.0, 104.0);
    let zoomed_out = Camera::new(0.5);
    let hit = hit_test(near, &[&b], &zoomed_out, &selected(&[b.id]), 24.0).unwrap();
    assert_eq!(hit.part, HitPart::Resize(ResizeHandle::Se));
    let zoomed_in = Camera::new(4.0);
    assert!(hit_test(near, &[&b], &zoomed_in, &selected(&[b.id]), 24.0).is_none());
}

#[test]
fn block_without_layout_is_never_hit() {
    let mut b = make_block(0.0, 0.0, 100.0, 100.0, 0);
    b.layout = None;
    assert!(hit_test(Point::new(10.0, 10.0), &[&b], &Camera::default(), &selected(&[b.id]), 24.0).is_none());
}
