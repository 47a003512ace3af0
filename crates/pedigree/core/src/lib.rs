//! Pedigree affinity and inheritance engine.
//!
//! `pedigree-core` holds the pure computations of the pedigree planner: given an
//! [`AncestryTree`] snapshot, a [`TreeCoord`] and an injected
//! [`AffinityOracle`], it resolves the family slots that matter, scores their
//! affinity, and estimates how likely each ancestor's sparks are to be inherited
//! over a career. Nothing here performs I/O or keeps state between calls.
pub mod affinity;
pub mod config;
pub mod error;
pub mod family;
pub mod inheritance;
pub mod planner;
pub mod tree;

pub use affinity::{
    AffinityCalculator, AffinityOracle, AffinityTable, AffinityTier, BaseAffinity, LineAffinity,
    compute_base_affinity, compute_race_affinity,
};
pub use config::PlannerConfig;
pub use error::{ErrorSeverity, PlannerError};
pub use family::{FamilyPositions, LineCoords, Relation, Side, resolve_family_positions};
pub use inheritance::{
    InheritanceError, InspirationChance, SparkEntry, SparkGroup, SparkSource,
    chance_at_least_once, collect_inheritable_sparks, group_by_label, inspiration_chances,
    single_attempt_chance,
};
pub use planner::{AffinityReport, InspirationPlanner};
pub use tree::{AncestryTree, CoordParseError, Individual, Spark, SparkKind, TreeCoord};
