//! Ancestry tree data model.
//!
//! The tree is a sparse two-level map (level → position → individual). The
//! engine only reads it; editing belongs to the caller.

mod coord;
mod individual;
mod spark;

use std::collections::BTreeMap;

pub use coord::{CoordParseError, TreeCoord};
pub use individual::Individual;
pub use spark::{Spark, SparkKind};

/// Sparse snapshot of a pedigree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AncestryTree {
    levels: BTreeMap<u32, BTreeMap<u32, Individual>>,
}

impl AncestryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places an individual at `coord`, returning whatever occupied the slot.
    pub fn insert(&mut self, coord: TreeCoord, individual: Individual) -> Option<Individual> {
        self.levels
            .entry(coord.level)
            .or_default()
            .insert(coord.position, individual)
    }

    /// Builder variant of [`insert`](Self::insert).
    pub fn with(mut self, coord: TreeCoord, individual: Individual) -> Self {
        self.insert(coord, individual);
        self
    }

    /// Clears the slot at `coord`.
    pub fn remove(&mut self, coord: TreeCoord) -> Option<Individual> {
        let level = self.levels.get_mut(&coord.level)?;
        let removed = level.remove(&coord.position);
        if level.is_empty() {
            self.levels.remove(&coord.level);
        }
        removed
    }

    /// Returns the individual at `coord`, or `None` when the coordinate is out of
    /// range, the slot is empty, or the stored individual has no id.
    pub fn individual(&self, coord: TreeCoord) -> Option<&Individual> {
        if !coord.is_valid() {
            return None;
        }
        self.levels
            .get(&coord.level)?
            .get(&coord.position)
            .filter(|individual| individual.is_present())
    }

    /// Base id of the individual at `coord`, if any.
    pub fn base_id(&self, coord: TreeCoord) -> Option<&str> {
        self.individual(coord)?.base_id()
    }

    /// Iterates over every stored slot in level, then position order.
    pub fn iter(&self) -> impl Iterator<Item = (TreeCoord, &Individual)> + '_ {
        self.levels.iter().flat_map(|(&level, positions)| {
            positions
                .iter()
                .map(move |(&position, individual)| (TreeCoord::new(level, position), individual))
        })
    }

    /// Number of stored slots, present or not.
    pub fn len(&self) -> usize {
        self.levels.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
