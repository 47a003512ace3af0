//! Command implementations for the planner CLI
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod affinity;
mod build_affinity;
mod build_characters;
mod inspiration;

pub use affinity::Affinity;
pub use build_affinity::BuildAffinity;
pub use build_characters::BuildCharacters;
pub use inspiration::Inspiration;

use std::path::Path;

use anyhow::Result;
use clap::Args;
use pedigree_content::{ContentFactory, TreeLoader};
use pedigree_core::{AncestryTree, PlannerConfig, TreeCoord};

/// Tree selection shared by the evaluation commands.
#[derive(Args)]
pub struct TreeArgs {
    /// Tree file, or the name of a tree saved under `<data-dir>/trees/`
    #[arg(short, long, value_name = "TREE")]
    tree: String,

    /// Slot to evaluate, as LEVEL-POSITION
    #[arg(short, long, value_name = "COORD", default_value = "1-1")]
    coord: TreeCoord,
}

impl TreeArgs {
    /// The selected slot; it must lie inside the pedigree.
    pub fn coord(&self) -> Result<TreeCoord> {
        if !self.coord.is_in_pedigree() {
            anyhow::bail!(
                "Coordinate {} is outside the {}-generation pedigree",
                self.coord,
                PlannerConfig::MAX_LEVEL
            );
        }
        Ok(self.coord)
    }

    pub fn load(&self, content: &ContentFactory) -> Result<AncestryTree> {
        let path = Path::new(&self.tree);
        if path.is_file() {
            TreeLoader::load(path)
        } else {
            content.load_tree(&self.tree)
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// JSON output
    Json,
}
