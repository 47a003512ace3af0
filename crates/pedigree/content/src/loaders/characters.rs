//! Character name table loader.

use std::collections::HashMap;
use std::path::Path;

pub use crate::builders::CharacterEntry;
use crate::loaders::{LoadResult, read_file};

/// Character table with lookup by variant id.
#[derive(Debug, Clone, Default)]
pub struct CharacterCatalog {
    entries: Vec<CharacterEntry>,
    by_id: HashMap<String, usize>,
}

impl CharacterCatalog {
    pub fn new(entries: Vec<CharacterEntry>) -> Self {
        let by_id = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.chara_id.to_string(), index))
            .collect();
        Self { entries, by_id }
    }

    /// Load the character table from a JSON array.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let content = read_file(path)?;
        let entries: Vec<CharacterEntry> = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse character table JSON at {}: {}", path.display(), e)
        })?;

        tracing::info!(
            characters = entries.len(),
            path = %path.display(),
            "loaded character table"
        );
        Ok(Self::new(entries))
    }

    pub fn get(&self, id: &str) -> Option<&CharacterEntry> {
        self.by_id.get(id).map(|&index| &self.entries[index])
    }

    /// Display name of a variant id.
    pub fn name(&self, id: &str) -> Option<&str> {
        self.get(id).map(|entry| entry.chara_name.as_str())
    }

    /// Character family of a variant id, as the string used for affinity keys.
    pub fn base_id(&self, id: &str) -> Option<String> {
        self.get(id).map(|entry| entry.chara_id_base.to_string())
    }

    /// Distinct base ids in the table, sorted as strings.
    pub fn base_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .entries
            .iter()
            .map(|entry| entry.chara_id_base.to_string())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    pub fn entries(&self) -> &[CharacterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
