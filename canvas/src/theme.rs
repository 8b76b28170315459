//! Deck-level theme. Theme values sit beneath block-local style: a block
//! that sets `fontFamily` itself keeps it.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use blocks::Style;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::DEFAULT_FONT_FAMILY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub font_family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self { font_family: DEFAULT_FONT_FAMILY.to_owned(), text_color: None, accent_color: None, background: None }
    }
}

impl Theme {
    /// Style keys the theme contributes to every block.
    #[must_use]
    pub fn defaults(&self) -> Style {
        let mut style = Style::new();
        if !self.font_family.is_empty() {
            style.insert("fontFamily".to_owned(), Value::String(self.font_family.clone()));
        }
        if let Some(color) = &self.text_color {
            style.insert("color".to_owned(), Value::String(color.clone()));
        }
        if let Some(accent) = &self.accent_color {
            style.insert("accentColor".to_owned(), Value::String(accent.clone()));
        }
        style
    }

    /// Theme defaults overlaid by `block_style`.
    #[must_use]
    pub fn merge(&self, block_style: &Style) -> Style {
        let mut style = self.defaults();
        for (k, v) in block_style {
            style.insert(k.clone(), v.clone());
        }
        style
    }
}
