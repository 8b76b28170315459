#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;
use crate::consts::DEFAULT_DROP_X;
use crate::data::Unrecognized;

fn wire(tag: &str, data: Value) -> Value {
    json!({
        "id": "6f1c2d1e-8a7b-4c3d-9e0f-112233445566",
        "type": tag,
        "layout": { "x": 10, "y": 20, "width": 200, "height": 100, "zIndex": 3 },
        "style": { "fontFamily": "Inter" },
        "data": data,
    })
}

// =============================================================
// Decode
// =============================================================

#[test]
fn decodes_known_block() {
    let block: Block = serde_json::from_value(wire("heading", json!({ "text": "Hello", "level": "h1" }))).unwrap();
    assert_eq!(block.kind(), Some(BlockKind::Heading));
    assert_eq!(block.layout, Some(Layout::new(10.0, 20.0, 200.0, 100.0, 3)));
    assert_eq!(block.style["fontFamily"], "Inter");
    let BlockData::Heading(h) = &block.data else {
        panic!("expected heading");
    };
    assert_eq!(h.text, "Hello");
}

#[test]
fn unknown_type_roundtrips() {
    let original = wire("hologram", json!({ "beam": 3 }));
    let block: Block = serde_json::from_value(original.clone()).unwrap();
    assert_eq!(block.kind(), None);
    assert_eq!(block.tag(), "hologram");
    assert!(matches!(&block.data, BlockData::Unrecognized(Unrecognized { tag, .. }) if tag == "hologram"));
    let back = serde_json::to_value(&block).unwrap();
    assert_eq!(back["type"], "hologram");
    assert_eq!(back["data"], json!({ "beam": 3 }));
}

#[test]
fn missing_layout_is_none() {
    let mut raw = wire("text", json!({}));
    raw.as_object_mut().unwrap().remove("layout");
    let block: Block = serde_json::from_value(raw).unwrap();
    assert!(block.layout.is_none());
    let back = serde_json::to_value(&block).unwrap();
    assert!(back.get("layout").is_none());
}

#[test]
fn missing_style_and_data_default() {
    let raw = json!({ "id": "6f1c2d1e-8a7b-4c3d-9e0f-112233445566", "type": "quote" });
    let block: Block = serde_json::from_value(raw).unwrap();
    assert!(block.style.is_empty());
    assert_eq!(block.data, BlockData::empty(BlockKind::Quote));
}

#[test]
fn z_index_defaults_to_zero() {
    let layout: Layout = serde_json::from_value(json!({ "x": 0, "y": 0, "width": 10, "height": 10 })).unwrap();
    assert_eq!(layout.z_index, 0);
}

// =============================================================
// Construction
// =============================================================

#[test]
fn from_palette_uses_default_size_and_seed() {
    let block = Block::from_palette(BlockKind::MetricCounter, None, 4);
    let layout = block.layout.unwrap();
    assert_eq!(layout.x, DEFAULT_DROP_X);
    assert_eq!((layout.width, layout.height), BlockKind::MetricCounter.default_size());
    assert_eq!(layout.z_index, 4);
    let BlockData::MetricCounter(m) = &block.data else {
        panic!("expected metric counter");
    };
    assert_eq!(m.trend, "up");
}

#[test]
fn from_palette_at_point() {
    let block = Block::from_palette(BlockKind::Text, Some((300.0, 150.0)), 0);
    let layout = block.layout.unwrap();
    assert_eq!((layout.x, layout.y), (300.0, 150.0));
}

#[test]
fn data_value_matches_payload() {
    let block = Block::new(BlockKind::Quote, Layout::new(0.0, 0.0, 10.0, 10.0, 0));
    assert_eq!(block.data_value(), json!({ "text": "", "author": "", "role": "" }));
}

#[test]
fn layout_edges() {
    let layout = Layout::new(10.0, 20.0, 30.0, 40.0, 0);
    assert_eq!(layout.right(), 40.0);
    assert_eq!(layout.bottom(), 60.0);
}
