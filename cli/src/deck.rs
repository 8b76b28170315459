//! Deck file: theme, blocks, and comment markers in one JSON document.

#[cfg(test)]
#[path = "deck_test.rs"]
mod deck_test;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use blocks::{Block, BlockStore};
use canvas::render::CommentMarker;
use canvas::theme::Theme;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CliError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Deck {
    pub theme: Theme,
    pub blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<CommentMarker>,
}

impl Deck {
    /// Read a deck. A missing file is an empty deck.
    ///
    /// # Errors
    ///
    /// I/O failures other than not-found, and malformed JSON.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "deck file not found; starting empty");
                return Ok(Self::default());
            }
            Err(source) => return Err(CliError::Read { path: path.to_owned(), source }),
        };
        let deck: Self = serde_json::from_str(&text)?;
        debug!(path = %path.display(), blocks = deck.blocks.len(), "deck loaded");
        Ok(deck)
    }

    /// # Errors
    ///
    /// JSON encoding or write failures.
    pub fn save(&self, path: &Path) -> Result<(), CliError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|source| CliError::Write { path: path.to_owned(), source })?;
        debug!(path = %path.display(), blocks = self.blocks.len(), "deck saved");
        Ok(())
    }

    #[must_use]
    pub fn store(&self) -> BlockStore {
        let mut store = BlockStore::new();
        store.load(self.blocks.clone());
        store
    }

    /// Replace the block list with the store's contents, in draw order.
    pub fn sync(&mut self, store: &BlockStore) {
        self.blocks = store.sorted().into_iter().cloned().collect();
    }
}
