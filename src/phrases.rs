//! Read-only phrase dataset injected into the round selector.

use crate::error::PhraseBookError;
use crate::types::PhraseEntry;
use std::path::Path;
use std::sync::Arc;

/// Built-in dataset, embedded at compile time
const DEFAULT_PHRASES: &str = include_str!("../data/phrases.json");

/// A validated, non-empty, ordered sequence of phrase entries.
///
/// Cheap to clone; the entries are shared.
#[derive(Debug, Clone)]
pub struct PhraseBook {
    entries: Arc<[PhraseEntry]>,
}

impl PhraseBook {
    pub fn new(entries: Vec<PhraseEntry>) -> Result<Self, PhraseBookError> {
        if entries.is_empty() {
            return Err(PhraseBookError::Empty);
        }

        for (index, entry) in entries.iter().enumerate() {
            let blank = [
                ("theme", &entry.theme),
                ("official_prompt", &entry.official_prompt),
                ("impostor_prompt", &entry.impostor_prompt),
            ]
            .into_iter()
            .find(|(_, value)| value.trim().is_empty());

            if let Some((field, _)) = blank {
                return Err(PhraseBookError::BlankField { index, field });
            }
        }

        Ok(Self {
            entries: entries.into(),
        })
    }

    /// Parse a JSON array of entries
    pub fn from_json(json: &str) -> Result<Self, PhraseBookError> {
        let entries: Vec<PhraseEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PhraseBookError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let book = Self::from_json(&json)?;
        tracing::info!("Loaded {} phrase entries from {}", book.len(), path.display());
        Ok(book)
    }

    /// The dataset that ships with the binary
    pub fn builtin() -> Result<Self, PhraseBookError> {
        Self::from_json(DEFAULT_PHRASES)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PhraseEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[PhraseEntry] {
        &self.entries
    }

    pub fn themes(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.theme.clone()).collect()
    }
}
