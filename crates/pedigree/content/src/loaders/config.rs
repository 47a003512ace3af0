//! Planner configuration loader.

use std::path::Path;

use pedigree_core::PlannerConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for planner configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<PlannerConfig> {
        let content = read_file(path)?;
        let config: PlannerConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> LoadResult<PlannerConfig> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(PlannerConfig::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "attempts_per_ancestor = 3\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.attempts_per_ancestor, 3);
        assert_eq!(
            config.high_affinity_threshold,
            PlannerConfig::DEFAULT_HIGH_AFFINITY_THRESHOLD
        );
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, PlannerConfig::default());
    }
}
