//! Offline builders for the planner's static tables.
//!
//! Input records mirror the vendor master-data tables they are exported from.
//! Builders are pure; reading dumps and writing results is left to the caller.

pub mod affinity;
pub mod characters;

pub use affinity::{RelationMemberRecord, RelationRecord, build_affinity_table};
pub use characters::{
    CARD_NAME_CATEGORY, CardRecord, CharacterEntry, TextRecord, build_character_table,
};
