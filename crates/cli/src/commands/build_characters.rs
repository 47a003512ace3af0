//! Build characters.json from text and card dumps

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use pedigree_content::{CardRecord, TextRecord, build_character_table, read_json, write_json};

use crate::config::CliConfig;

/// Build characters.json from text and card dumps
#[derive(Parser)]
pub struct BuildCharacters {
    /// Localized text dump (category, index, text)
    #[arg(long, value_name = "FILE")]
    texts: PathBuf,

    /// Card dump (id, chara_id)
    #[arg(long, value_name = "FILE")]
    cards: PathBuf,

    /// Output file (defaults to `<data-dir>/characters.json`)
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,
}

impl BuildCharacters {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let texts: Vec<TextRecord> = read_json(&self.texts)?;
        let cards: Vec<CardRecord> = read_json(&self.cards)?;

        let entries = build_character_table(&texts, &cards);

        let out = self.out.unwrap_or_else(|| config.content().characters_path());
        write_json(&out, &entries)?;

        println!(
            "{} {} characters -> {}",
            style("Character table:").bold().green(),
            entries.len(),
            out.display()
        );
        Ok(())
    }
}
