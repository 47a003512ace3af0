//! Affinity table loader.

use std::path::Path;

use pedigree_core::AffinityTable;

use crate::loaders::{LoadResult, read_file};

/// Loader for the affinity lookup table.
///
/// File format: a JSON object from sorted, comma-joined base ids to points.
///
/// ```json
/// { "1001,1005": 21, "1001,1005,1012": 7 }
/// ```
pub struct AffinityTableLoader;

impl AffinityTableLoader {
    pub fn load(path: &Path) -> LoadResult<AffinityTable> {
        let content = read_file(path)?;
        let table: AffinityTable = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse affinity table JSON at {}: {}", path.display(), e)
        })?;

        tracing::info!(entries = table.len(), path = %path.display(), "loaded affinity table");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedigree_core::AffinityOracle;

    #[test]
    fn loads_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("affinity.json");
        std::fs::write(&path, r#"{ "1001,1005": 21, "1001,1005,1012": 7 }"#).unwrap();

        let table = AffinityTableLoader::load(&path).unwrap();
        assert_eq!(table.points_for(["1005", "1001"]), 21);
        assert_eq!(table.points_for(["1012", "1001", "1005"]), 7);
    }

    #[test]
    fn negative_points_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("affinity.json");
        std::fs::write(&path, r#"{ "1001,1005": -3 }"#).unwrap();

        let err = AffinityTableLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("affinity table"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = AffinityTableLoader::load(Path::new("/nonexistent/affinity.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/affinity.json"));
    }
}
