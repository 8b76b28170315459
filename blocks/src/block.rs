//! The atomic placeable unit: a typed block with geometry and style.
//!
//! On the wire a block is `{id, type, layout, style, data}`. Decoding never
//! fails on `type` or `data`: see [`BlockData::decode`]. A missing `layout`
//! is kept as `None`; the canvas skips such blocks rather than guessing.

#[cfg(test)]
#[path = "block_test.rs"]
mod block_test;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::warn;
use uuid::Uuid;

use crate::consts::{DEFAULT_DROP_X, DEFAULT_DROP_Y};
use crate::data::{BlockData, BlockKind};
use crate::registry;
use crate::schema::seed_object;

/// Unique identifier for a block.
pub type BlockId = Uuid;

/// Open bag of presentation properties (font family, border, shadow, ...).
pub type Style = Map<String, Value>;

/// Position, size, and stacking order in canvas-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width; never below [`crate::consts::MIN_BLOCK_SIZE`] once the canvas has touched it.
    pub width: f64,
    /// Height; never below [`crate::consts::MIN_BLOCK_SIZE`] once the canvas has touched it.
    pub height: f64,
    /// Stacking order; lower values are drawn beneath higher values.
    #[serde(default)]
    pub z_index: i64,
}

impl Layout {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, z_index: i64) -> Self {
        Self { x, y, width, height, z_index }
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A block record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawBlock")]
pub struct Block {
    /// Immutable identifier.
    pub id: BlockId,
    /// Geometry envelope; `None` when the record arrived without one.
    pub layout: Option<Layout>,
    /// Block-local style overrides.
    pub style: Style,
    /// Type tag and typed payload.
    pub data: BlockData,
}

/// Wire shape used to decode a [`Block`] leniently.
#[derive(Deserialize)]
struct RawBlock {
    id: BlockId,
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    layout: Option<Layout>,
    #[serde(default)]
    style: Style,
    #[serde(default)]
    data: Value,
}

impl From<RawBlock> for Block {
    fn from(raw: RawBlock) -> Self {
        Self { id: raw.id, layout: raw.layout, style: raw.style, data: BlockData::decode(&raw.tag, raw.data) }
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Block", 5)?;
        s.serialize_field("id", &self.id)?;
        s.serialize_field("type", self.data.tag())?;
        match &self.layout {
            Some(layout) => s.serialize_field("layout", layout)?,
            None => s.skip_field("layout")?,
        }
        s.serialize_field("style", &self.style)?;
        s.serialize_field("data", &self.data)?;
        s.end()
    }
}

impl Block {
    /// A block of `kind` with default payload and the given geometry.
    #[must_use]
    pub fn new(kind: BlockKind, layout: Layout) -> Self {
        Self { id: Uuid::new_v4(), layout: Some(layout), style: Style::new(), data: BlockData::empty(kind) }
    }

    /// A block as dropped from the palette: fresh id, the kind's default
    /// size at `(x, y)`, and data seeded from the registry schema.
    #[must_use]
    pub fn from_palette(kind: BlockKind, at: Option<(f64, f64)>, z_index: i64) -> Self {
        let (x, y) = at.unwrap_or((DEFAULT_DROP_X, DEFAULT_DROP_Y));
        let (width, height) = kind.default_size();
        let seed = registry::meta(kind).map(|m| seed_object(&m.editable_props)).unwrap_or_default();
        let data = match BlockData::try_decode(kind, Value::Object(seed)) {
            Ok(data) => data,
            Err(e) => {
                warn!(tag = kind.tag(), error = %e, "schema seed does not decode; using empty payload");
                BlockData::empty(kind)
            }
        };
        Self { id: Uuid::new_v4(), layout: Some(Layout::new(x, y, width, height, z_index)), style: Style::new(), data }
    }

    /// The block's kind, or `None` for unrecognized data.
    #[must_use]
    pub fn kind(&self) -> Option<BlockKind> {
        self.data.kind()
    }

    /// Wire type tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        self.data.tag()
    }

    /// The payload as JSON, for schema-driven consumers.
    ///
    /// Returns `Value::Null` if the payload cannot be represented.
    #[must_use]
    pub fn data_value(&self) -> Value {
        match self.data.to_value() {
            Ok(v) => v,
            Err(e) => {
                warn!(id = %self.id, error = %e, "block payload does not encode");
                Value::Null
            }
        }
    }
}
