//! Property-schema DSL: which fields of a block's data are editable and how.
//!
//! An [`EditableProp`] names a key of the block's `data`, a caption, and a
//! [`PropKind`] that selects the editing control. `object_array` props carry a
//! nested `item_schema` made of the same descriptors, so structured lists of
//! any depth are described without new code per shape.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use uuid::Uuid;

use crate::data::BlockKind;
use crate::kind::Category;

/// Editing control selector for a property.
///
/// Serialized as a snake_case string. Strings outside the known set decode to
/// [`PropKind::Other`] so schema/editor drift stays visible instead of failing
/// to load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropKind {
    #[default]
    Text,
    Textarea,
    Number,
    Color,
    Checkbox,
    Select,
    Url,
    Image,
    Date,
    Json,
    StringArray,
    ObjectArray,
    ChartData,
    CompetitivePositioning,
    MarketSegments,
    SkillMatrix,
    CompetitorFeatures,
    /// A kind this build has no editor for.
    Other(String),
}

impl PropKind {
    /// Every kind with an editor, in dispatch-table order.
    pub const KNOWN: &'static [PropKind] = &[
        Self::Text,
        Self::Textarea,
        Self::Number,
        Self::Color,
        Self::Checkbox,
        Self::Select,
        Self::Url,
        Self::Image,
        Self::Date,
        Self::Json,
        Self::StringArray,
        Self::ObjectArray,
        Self::ChartData,
        Self::CompetitivePositioning,
        Self::MarketSegments,
        Self::SkillMatrix,
        Self::CompetitorFeatures,
    ];

    /// Wire name, e.g. `"object_array"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Color => "color",
            Self::Checkbox => "checkbox",
            Self::Select => "select",
            Self::Url => "url",
            Self::Image => "image",
            Self::Date => "date",
            Self::Json => "json",
            Self::StringArray => "string_array",
            Self::ObjectArray => "object_array",
            Self::ChartData => "chart_data",
            Self::CompetitivePositioning => "competitive_positioning",
            Self::MarketSegments => "market_segments",
            Self::SkillMatrix => "skill_matrix",
            Self::CompetitorFeatures => "competitor_features",
            Self::Other(name) => name,
        }
    }

    /// Whether this kind bypasses the generic controls for a specialized editor.
    #[must_use]
    pub fn is_specialized(&self) -> bool {
        matches!(
            self,
            Self::ChartData
                | Self::CompetitivePositioning
                | Self::MarketSegments
                | Self::SkillMatrix
                | Self::CompetitorFeatures
        )
    }
}

impl From<String> for PropKind {
    fn from(raw: String) -> Self {
        Self::KNOWN
            .iter()
            .find(|k| k.as_str() == raw)
            .cloned()
            .unwrap_or(Self::Other(raw))
    }
}

impl From<PropKind> for String {
    fn from(kind: PropKind) -> Self {
        kind.as_str().to_owned()
    }
}

/// Descriptor for one editable property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableProp {
    /// Key into the block's `data`.
    pub name: String,
    /// Human caption. Empty means "use the name".
    #[serde(default)]
    pub label: String,
    /// Control selector. Absent means plain text.
    #[serde(default)]
    pub kind: PropKind,
    /// Choices for `select`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Field schema of each item for `object_array`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item_schema: Vec<EditableProp>,
    /// Sibling field on the parent data that a specialized editor reads as context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sibling: Option<String>,
}

impl EditableProp {
    #[must_use]
    pub fn new(name: &str, label: &str, kind: PropKind) -> Self {
        Self {
            name: name.to_owned(),
            label: label.to_owned(),
            kind,
            options: Vec::new(),
            item_schema: Vec::new(),
            sibling: None,
        }
    }

    #[must_use]
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, PropKind::Text)
    }

    #[must_use]
    pub fn textarea(name: &str, label: &str) -> Self {
        Self::new(name, label, PropKind::Textarea)
    }

    #[must_use]
    pub fn number(name: &str, label: &str) -> Self {
        Self::new(name, label, PropKind::Number)
    }

    #[must_use]
    pub fn color(name: &str, label: &str) -> Self {
        Self::new(name, label, PropKind::Color)
    }

    #[must_use]
    pub fn checkbox(name: &str, label: &str) -> Self {
        Self::new(name, label, PropKind::Checkbox)
    }

    #[must_use]
    pub fn url(name: &str, label: &str) -> Self {
        Self::new(name, label, PropKind::Url)
    }

    #[must_use]
    pub fn image(name: &str, label: &str) -> Self {
        Self::new(name, label, PropKind::Image)
    }

    #[must_use]
    pub fn date(name: &str, label: &str) -> Self {
        Self::new(name, label, PropKind::Date)
    }

    #[must_use]
    pub fn json(name: &str, label: &str) -> Self {
        Self::new(name, label, PropKind::Json)
    }

    #[must_use]
    pub fn string_array(name: &str, label: &str) -> Self {
        Self::new(name, label, PropKind::StringArray)
    }

    #[must_use]
    pub fn select(name: &str, label: &str, options: &[&str]) -> Self {
        Self {
            options: options.iter().map(|o| (*o).to_owned()).collect(),
            ..Self::new(name, label, PropKind::Select)
        }
    }

    #[must_use]
    pub fn object_array(name: &str, label: &str, item_schema: Vec<EditableProp>) -> Self {
        Self { item_schema, ..Self::new(name, label, PropKind::ObjectArray) }
    }

    /// Attach a sibling-field reference for specialized editors.
    #[must_use]
    pub fn with_sibling(mut self, sibling: &str) -> Self {
        self.sibling = Some(sibling.to_owned());
        self
    }

    /// Caption to display: the label, or the name when no label is set.
    #[must_use]
    pub fn caption(&self) -> &str {
        if self.label.is_empty() { &self.name } else { &self.label }
    }

    /// Default value for a fresh field of this kind.
    #[must_use]
    pub fn default_value(&self) -> Value {
        match &self.kind {
            PropKind::Text
            | PropKind::Textarea
            | PropKind::Color
            | PropKind::Url
            | PropKind::Image
            | PropKind::Date => json!(""),
            PropKind::Select => json!(self.options.first().map_or("", String::as_str)),
            PropKind::Number => json!(0),
            PropKind::Checkbox => json!(false),
            PropKind::StringArray
            | PropKind::ObjectArray
            | PropKind::MarketSegments
            | PropKind::CompetitorFeatures => json!([]),
            PropKind::Json | PropKind::ChartData | PropKind::CompetitivePositioning | PropKind::SkillMatrix => {
                json!({})
            }
            PropKind::Other(_) => Value::Null,
        }
    }
}

/// Seed an object with the default value of every descriptor.
#[must_use]
pub fn seed_object(props: &[EditableProp]) -> Map<String, Value> {
    props
        .iter()
        .map(|p| (p.name.clone(), p.default_value()))
        .collect()
}

/// A new `object_array` item: a fresh `id` plus a defaulted value per field.
#[must_use]
pub fn new_array_item(item_schema: &[EditableProp]) -> Value {
    let mut item = Map::new();
    item.insert("id".to_owned(), json!(Uuid::new_v4().to_string()));
    item.extend(seed_object(item_schema));
    Value::Object(item)
}

/// Registry entry for one block kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockMeta {
    /// The kind this entry describes.
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Display label for palettes and inspector headers.
    pub label: String,
    /// Palette category.
    pub category: Category,
    /// Ordered property descriptors. May be empty.
    pub editable_props: Vec<EditableProp>,
}

impl BlockMeta {
    /// Look up a descriptor by property name.
    #[must_use]
    pub fn prop(&self, name: &str) -> Option<&EditableProp> {
        self.editable_props.iter().find(|p| p.name == name)
    }
}
