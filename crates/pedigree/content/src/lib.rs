//! Static planner content: loaders and offline builders.
//!
//! This crate owns every file the planner reads or produces:
//! - Affinity lookup table (JSON object of sorted base-id keys)
//! - Character name table (JSON array)
//! - Saved ancestry tree snapshots (JSON, UI layout)
//! - Planner configuration (TOML)
//!
//! The builders turn vendor master-data dumps into the first two files. Content
//! is handed to `pedigree-core` as plain values; the engine never touches disk.

pub mod builders;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builders::{
    CARD_NAME_CATEGORY, CardRecord, RelationMemberRecord, RelationRecord, TextRecord,
    build_affinity_table, build_character_table,
};

#[cfg(feature = "loaders")]
pub use loaders::{
    AffinityTableLoader, CharacterCatalog, CharacterEntry, ConfigLoader, ContentFactory,
    LoadResult, TreeLoader, read_json, write_json,
};
