//! Show the affinity breakdown of a tree slot

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use pedigree_core::{AffinityReport, AffinityTier, InspirationPlanner, LineAffinity};

use super::{OutputFormat, TreeArgs};
use crate::config::CliConfig;

/// Show the affinity breakdown of a tree slot
#[derive(Parser)]
pub struct Affinity {
    #[command(flatten)]
    tree: TreeArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Affinity {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let content = config.content();
        let tree = self.tree.load(&content)?;
        let table = content.load_affinity_table()?;
        let planner = InspirationPlanner::with_config(&table, config.planner()?);

        let coord = self.tree.coord()?;
        let Some(report) = planner.affinity_report(&tree, coord) else {
            anyhow::bail!("No slot selected (coordinate {})", coord);
        };

        match self.format {
            OutputFormat::Summary => print_summary(&report),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize affinity report to JSON")?;
                println!("{}", json);
            }
        }

        Ok(())
    }
}

fn print_summary(report: &AffinityReport) {
    println!("{} {}", style("Slot:").bold().cyan(), report.coord);
    println!();

    print_line("Left line:", &report.base.left);
    print_line("Right line:", &report.base.right);

    println!("{}", style("Parents:").bold().yellow());
    println!("  left + right: {}", report.base.parents);
    println!();

    println!("{} {}", style("Base affinity:").bold().cyan(), report.base.total);
    println!("{} {}", style("Race affinity:").bold().cyan(), report.race);

    let total = match report.tier {
        AffinityTier::High => style(report.total).bold().green(),
        AffinityTier::Medium => style(report.total).bold().yellow(),
        AffinityTier::Low => style(report.total).bold().red(),
    };
    println!("{} {} ({})", style("Total:").bold().cyan(), total, report.tier);
}

fn print_line(title: &str, line: &LineAffinity) {
    println!("{}", style(title).bold().yellow());
    println!("  parent:        {}", line.parent);
    println!("  grandparent 1: {}", line.grandparent1);
    println!("  grandparent 2: {}", line.grandparent2);
    println!();
}
