//! Content factory for loading planner data from a data directory.

use std::path::{Path, PathBuf};

use pedigree_core::{AffinityTable, AncestryTree, PlannerConfig};

use crate::loaders::{AffinityTableLoader, CharacterCatalog, ConfigLoader, LoadResult, TreeLoader};

/// Content factory that loads planner content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── affinity.json
/// ├── characters.json
/// └── trees/
///     ├── main.json
///     └── backup.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const AFFINITY_FILE: &'static str = "affinity.json";
    pub const CHARACTERS_FILE: &'static str = "characters.json";
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const TREES_DIR: &'static str = "trees";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load planner configuration from `config.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<PlannerConfig> {
        ConfigLoader::load_or_default(&self.config_path())
    }

    /// Load the affinity table from `affinity.json`.
    pub fn load_affinity_table(&self) -> LoadResult<AffinityTable> {
        AffinityTableLoader::load(&self.affinity_path())
    }

    /// Load the character table from `characters.json`.
    pub fn load_characters(&self) -> LoadResult<CharacterCatalog> {
        CharacterCatalog::load(&self.characters_path())
    }

    /// Load a saved tree from `trees/{name}.json`.
    pub fn load_tree(&self, name: &str) -> LoadResult<AncestryTree> {
        TreeLoader::load(&self.tree_path(name))
    }

    pub fn affinity_path(&self) -> PathBuf {
        self.data_dir.join(Self::AFFINITY_FILE)
    }

    pub fn characters_path(&self) -> PathBuf {
        self.data_dir.join(Self::CHARACTERS_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(Self::CONFIG_FILE)
    }

    pub fn tree_path(&self, name: &str) -> PathBuf {
        self.data_dir
            .join(Self::TREES_DIR)
            .join(format!("{}.json", name))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedigree_core::{Individual, TreeCoord};

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(factory.tree_path("main"), Path::new("/tmp/data/trees/main.json"));
    }

    #[test]
    fn loads_everything_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        std::fs::write(factory.affinity_path(), r#"{ "1001,1002": 3 }"#).unwrap();
        std::fs::write(factory.characters_path(), "[]").unwrap();
        let tree = AncestryTree::new().with(TreeCoord::SUBJECT, Individual::new("100101", "1001"));
        TreeLoader::save(&factory.tree_path("main"), &tree).unwrap();

        assert_eq!(factory.load_config().unwrap(), PlannerConfig::default());
        assert_eq!(factory.load_affinity_table().unwrap().len(), 1);
        assert!(factory.load_characters().unwrap().is_empty());
        assert_eq!(factory.load_tree("main").unwrap(), tree);
    }
}
