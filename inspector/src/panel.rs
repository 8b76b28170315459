//! The inspector panel for one block.
//!
//! Header (label and category), a read-only layout readout, and one control
//! per registered property. Each top-level control reports through the
//! host's `(name, value)` callback, which the host applies as a shallow data
//! patch. Blocks whose type has no registry entry get the raw data as a
//! diagnostic instead of controls.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use std::rc::Rc;

use blocks::{Block, BlockId, BlockMeta, Category, DataPatch, Layout, registry};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::control::{ChangeFn, Control};
use crate::dispatch::render_prop;

/// Host callback: property name and its full replacement value.
pub type UpdateFn = Rc<dyn Fn(&str, Value)>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(rename = "type")]
    pub tag: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "body", rename_all = "camelCase")]
pub enum PanelBody {
    Properties { controls: Vec<Control> },
    /// Registered type with an empty schema.
    NoEditableProperties { message: String },
    /// Type without a registry entry; `raw` is the data as pretty JSON.
    Unregistered { message: String, raw: String },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub id: BlockId,
    pub header: Header,
    /// Read-only; layout is edited on the canvas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(flatten)]
    pub body: PanelBody,
}

impl Panel {
    /// Property controls, empty unless the body holds properties.
    #[must_use]
    pub fn controls(&self) -> &[Control] {
        match &self.body {
            PanelBody::Properties { controls } => controls,
            _ => &[],
        }
    }

    /// Top-level control for `name`.
    #[must_use]
    pub fn control(&self, name: &str) -> Option<&Control> {
        self.controls().iter().find(|c| c.name == name)
    }

    /// Control at a dotted path: the first segment names a property, the rest
    /// is resolved by [`Control::find`].
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&Control> {
        let (head, rest) = path.split_once('.').unwrap_or((path, ""));
        let top = self.control(head)?;
        if rest.is_empty() {
            return Some(top);
        }
        top.find(rest).or_else(|| top.find(path))
    }
}

/// Build the inspector panel for `block` from its registry entry.
#[must_use]
pub fn inspect(block: &Block, on_update: impl Fn(&str, Value) + 'static) -> Panel {
    let Some(meta) = block.kind().and_then(registry::meta) else {
        warn!(id = %block.id, tag = block.tag(), "inspecting unregistered block type");
        return unregistered(block);
    };
    inspect_with(block, meta, on_update)
}

/// Build the inspector panel for `block` against an explicit schema.
#[must_use]
pub fn inspect_with(block: &Block, meta: &BlockMeta, on_update: impl Fn(&str, Value) + 'static) -> Panel {
    let header = Header { label: meta.label.clone(), category: Some(meta.category), tag: block.tag().to_owned() };
    if meta.editable_props.is_empty() {
        return Panel {
            id: block.id,
            header,
            layout: block.layout,
            body: PanelBody::NoEditableProperties { message: "no editable properties".to_owned() },
        };
    }

    let on_update: UpdateFn = Rc::new(on_update);
    let data = match block.data_value() {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    let controls = meta
        .editable_props
        .iter()
        .map(|prop| {
            let value = data.get(&prop.name).cloned().unwrap_or(Value::Null);
            let name = prop.name.clone();
            let on_update = on_update.clone();
            let on_change: ChangeFn = Rc::new(move |value: Value| {
                debug!(prop = %name, "property changed");
                on_update(name.as_str(), value);
            });
            render_prop(prop, &value, &data, on_change)
        })
        .collect();

    Panel { id: block.id, header, layout: block.layout, body: PanelBody::Properties { controls } }
}

fn unregistered(block: &Block) -> Panel {
    let raw = serde_json::to_string_pretty(&block.data_value()).unwrap_or_default();
    Panel {
        id: block.id,
        header: Header { label: block.tag().to_owned(), category: None, tag: block.tag().to_owned() },
        layout: block.layout,
        body: PanelBody::Unregistered { message: format!("unsupported component type: {}", block.tag()), raw },
    }
}

/// The shallow data patch for one `(name, value)` update.
#[must_use]
pub fn patch_for(name: &str, value: Value) -> DataPatch {
    let mut patch = DataPatch::new();
    patch.insert(name.to_owned(), value);
    patch
}
