//! Content loaders for reading planner data from files.
//!
//! Each loader reads one file format and returns the value `pedigree-core`
//! consumes.

pub mod affinity;
pub mod characters;
pub mod config;
pub mod factory;
pub mod tree;

pub use affinity::AffinityTableLoader;
pub use characters::{CharacterCatalog, CharacterEntry};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use tree::TreeLoader;

use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Reads a JSON file into any deserializable value (vendor dumps, tables).
pub fn read_json<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let content = read_file(path)?;
    serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse JSON at {}: {}", path.display(), e))
}

/// Writes `value` as pretty JSON, creating parent directories as needed.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> LoadResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::RelationRecord;

    #[test]
    fn write_then_read_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dumps").join("relation.json");
        let records = vec![RelationRecord {
            relation_type: 101,
            relation_point: 5,
        }];

        write_json(&path, &records).unwrap();
        let read: Vec<RelationRecord> = read_json(&path).unwrap();
        assert_eq!(read, records);
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = read_json::<Vec<RelationRecord>>(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
