//! Inheritance probability engine.
//!
//! 1. [`collect_inheritable_sparks`] gathers sparks from the six ancestors, each
//!    weighted by the affinity of its own line.
//! 2. [`single_attempt_chance`] turns a spark and weight into a per-attempt chance.
//! 3. [`group_by_label`] merges the same spark offered by several ancestors.
//! 4. [`chance_at_least_once`] combines every attempt of every source.

pub mod aggregate;
pub mod chance;
pub mod error;
pub mod probability;

pub use aggregate::{SparkEntry, collect_inheritable_sparks};
pub use chance::{attempt_chance, base_chance, parse_kind, single_attempt_chance};
pub use error::InheritanceError;
pub use probability::{
    InspirationChance, SparkGroup, SparkSource, chance_at_least_once, group_by_label,
    inspiration_chances,
};
