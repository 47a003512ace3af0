//! CLI configuration.
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use pedigree_content::ContentFactory;
use pedigree_core::PlannerConfig;

use crate::dirs;

/// Resolved command-line configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub data_dir: PathBuf,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PEDIGREE_DATA_DIR` - Data directory (default: platform data directory)
    pub fn from_env() -> Self {
        let data_dir = env::var_os("PEDIGREE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(dirs::data_dir);
        Self { data_dir }
    }

    /// Applies a `--data-dir` override.
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Result<Self> {
        if let Some(dir) = data_dir {
            if !dir.is_dir() {
                anyhow::bail!("Data directory not found: {}", dir.display());
            }
            self.data_dir = dir;
        }
        Ok(self)
    }

    pub fn content(&self) -> ContentFactory {
        ContentFactory::new(&self.data_dir)
    }

    /// Planner settings from `config.toml` in the data directory.
    pub fn planner(&self) -> Result<PlannerConfig> {
        self.content().load_config()
    }
}
