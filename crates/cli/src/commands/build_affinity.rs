//! Build affinity.json from relation dumps

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use pedigree_content::{
    CharacterCatalog, RelationMemberRecord, RelationRecord, build_affinity_table, read_json,
    write_json,
};

use crate::config::CliConfig;

/// Build affinity.json from relation dumps
#[derive(Parser)]
pub struct BuildAffinity {
    /// Relation dump (relation_type, relation_point)
    #[arg(long, value_name = "FILE")]
    relations: PathBuf,

    /// Relation membership dump (relation_type, chara_id)
    #[arg(long, value_name = "FILE")]
    members: PathBuf,

    /// Character table limiting which base ids are combined
    #[arg(long, value_name = "FILE")]
    characters: Option<PathBuf>,

    /// Output file (defaults to `<data-dir>/affinity.json`)
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,
}

impl BuildAffinity {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let relations: Vec<RelationRecord> = read_json(&self.relations)?;
        let members: Vec<RelationMemberRecord> = read_json(&self.members)?;
        let known = match &self.characters {
            Some(path) => Some(CharacterCatalog::load(path)?.base_ids()),
            None => None,
        };

        let table = build_affinity_table(&relations, &members, known.as_deref());

        let out = self.out.unwrap_or_else(|| config.content().affinity_path());
        write_json(&out, &table)?;

        println!(
            "{} {} entries -> {}",
            style("Affinity table:").bold().green(),
            table.len(),
            out.display()
        );
        Ok(())
    }
}
