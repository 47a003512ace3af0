//! Saved ancestry tree loader.

use std::path::Path;

use pedigree_core::AncestryTree;

use crate::loaders::{LoadResult, read_file, write_json};

/// Loader for ancestry tree snapshots saved by the planner UI.
pub struct TreeLoader;

impl TreeLoader {
    pub fn load(path: &Path) -> LoadResult<AncestryTree> {
        let content = read_file(path)?;
        let tree: AncestryTree = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse tree JSON at {}: {}", path.display(), e)
        })?;

        tracing::debug!(slots = tree.len(), path = %path.display(), "loaded tree");
        Ok(tree)
    }

    pub fn save(path: &Path, tree: &AncestryTree) -> LoadResult<()> {
        write_json(path, tree)
    }
}
