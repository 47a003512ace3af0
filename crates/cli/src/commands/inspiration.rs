//! List inspiration chances for a tree slot

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use pedigree_content::CharacterCatalog;
use pedigree_core::{InspirationChance, InspirationPlanner, SparkKind};

use super::{OutputFormat, TreeArgs};
use crate::config::CliConfig;

/// List inspiration chances for a tree slot
#[derive(Parser)]
pub struct Inspiration {
    #[command(flatten)]
    tree: TreeArgs,

    /// Only show sparks at or above this chance (percent)
    #[arg(short, long, value_name = "PERCENT", default_value_t = 0.0)]
    min_chance: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Inspiration {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let content = config.content();
        let tree = self.tree.load(&content)?;
        let table = content.load_affinity_table()?;
        let planner = InspirationPlanner::with_config(&table, config.planner()?);

        let characters = if content.characters_path().is_file() {
            content.load_characters()?
        } else {
            tracing::debug!("no character table, unique sparks keep their ids");
            CharacterCatalog::default()
        };

        let rows: Vec<InspirationChance> = planner
            .inspiration_report(&tree, self.tree.coord()?)?
            .into_iter()
            .filter(|row| row.chance >= self.min_chance)
            .collect();

        match self.format {
            OutputFormat::Summary => print_summary(&rows, &characters),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&rows)
                    .context("Failed to serialize inspiration chances to JSON")?;
                println!("{}", json);
            }
        }

        Ok(())
    }
}

fn print_summary(rows: &[InspirationChance], characters: &CharacterCatalog) {
    println!("{}", style("=== Inspiration Chances ===").bold().green());
    println!();

    if rows.is_empty() {
        println!("  No inheritable sparks.");
        return;
    }

    for row in rows {
        let label = match row.kind {
            SparkKind::Unique => characters.name(&row.label).unwrap_or(&row.label),
            _ => row.label.as_str(),
        };
        println!(
            "  {:>6.2}%  {}  {} (x{})",
            row.chance,
            style(row.kind).dim(),
            style(label).bold(),
            row.sources
        );
    }
}
