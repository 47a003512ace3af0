//! Affinity scoring.
//!
//! - `table`: the injected lookup of points per sorted base-id combination
//! - `base`: the seven-way pedigree affinity and its per-line breakdown
//! - `race`: the shared race-win bonus
//!
//! [`AffinityCalculator`] bundles an oracle with both computations.

pub mod base;
pub mod race;
pub mod table;

pub use base::{BaseAffinity, LineAffinity, compute_base_affinity};
pub use race::{compute_race_affinity, shared_races};
pub use table::{AffinityOracle, AffinityTable};

use crate::config::PlannerConfig;
use crate::tree::{AncestryTree, TreeCoord};

/// Display band for a total affinity score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AffinityTier {
    Low,
    Medium,
    High,
}

impl AffinityTier {
    /// Bands `total` using the thresholds in `config`.
    pub fn from_total(total: u32, config: &PlannerConfig) -> Self {
        if total >= config.high_affinity_threshold {
            Self::High
        } else if total >= config.medium_affinity_threshold {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Affinity computations over an injected oracle.
pub struct AffinityCalculator<'a, O: AffinityOracle + ?Sized> {
    oracle: &'a O,
}

impl<'a, O: AffinityOracle + ?Sized> AffinityCalculator<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &'a O {
        self.oracle
    }

    pub fn base_affinity(&self, tree: &AncestryTree, coord: TreeCoord) -> Option<BaseAffinity> {
        compute_base_affinity(tree, coord, self.oracle)
    }

    pub fn race_affinity(&self, tree: &AncestryTree, coord: TreeCoord) -> u32 {
        compute_race_affinity(tree, coord)
    }

    /// Displayed affinity: base total plus race bonus (0 for the unset coordinate).
    pub fn total_affinity(&self, tree: &AncestryTree, coord: TreeCoord) -> u32 {
        let base = self
            .base_affinity(tree, coord)
            .map_or(0, |affinity| affinity.total);
        base.saturating_add(self.race_affinity(tree, coord))
    }

    /// Display band of [`total_affinity`](Self::total_affinity).
    pub fn tier(
        &self,
        tree: &AncestryTree,
        coord: TreeCoord,
        config: &PlannerConfig,
    ) -> AffinityTier {
        AffinityTier::from_total(self.total_affinity(tree, coord), config)
    }
}
