//! Pedigree (base) affinity.
//!
//! Seven lookups are summed for a subject `S` with parents `L`, `R` and
//! grandparents `L1`, `L2`, `R1`, `R2`:
//!
//! ```text
//! S+L   S+R   L+R
//! S+L+L1   S+L+L2   S+R+R1   S+R+R2
//! ```
//!
//! Every key is built from the ids that are present, so an empty slot shrinks
//! the combination rather than zeroing it.

use crate::family::{Relation, Side, resolve_family_positions};
use crate::tree::{AncestryTree, TreeCoord};

use super::table::{AffinityOracle, AffinityTable};

/// Affinity contributed along one parent line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineAffinity {
    /// Subject + parent.
    pub parent: u32,
    /// Subject + parent + first grandparent.
    pub grandparent1: u32,
    /// Subject + parent + second grandparent.
    pub grandparent2: u32,
}

impl LineAffinity {
    pub fn get(&self, relation: Relation) -> u32 {
        match relation {
            Relation::Parent => self.parent,
            Relation::Grandparent1 => self.grandparent1,
            Relation::Grandparent2 => self.grandparent2,
        }
    }

    /// Sum of the three lookups, saturating at `u32::MAX`.
    pub fn sum(&self) -> u32 {
        self.parent
            .saturating_add(self.grandparent1)
            .saturating_add(self.grandparent2)
    }
}

/// Breakdown of the base affinity at one coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseAffinity {
    /// Sum of all seven contributions.
    pub total: u32,
    /// Left parent + right parent, without the subject.
    pub parents: u32,
    pub left: LineAffinity,
    pub right: LineAffinity,
}

impl BaseAffinity {
    pub fn line(&self, side: Side) -> &LineAffinity {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Affinity weight governing sparks passed down from the ancestor at
    /// `(side, relation)`.
    pub fn weight(&self, side: Side, relation: Relation) -> u32 {
        self.line(side).get(relation)
    }
}

fn lookup<O>(oracle: &O, ids: &[Option<&str>]) -> u32
where
    O: AffinityOracle + ?Sized,
{
    oracle.points(&AffinityTable::key_for(ids.iter().flatten().copied()))
}

/// Computes the base affinity breakdown for the individual at `coord`.
///
/// Returns `None` only for the unset coordinate; empty slots contribute nothing.
pub fn compute_base_affinity<O>(
    tree: &AncestryTree,
    coord: TreeCoord,
    oracle: &O,
) -> Option<BaseAffinity>
where
    O: AffinityOracle + ?Sized,
{
    let family = resolve_family_positions(coord)?;

    let subject = tree.base_id(coord);
    let line = |side: Side| {
        let coords = family.side(side);
        let parent = tree.base_id(coords.parent);
        let grandparent1 = tree.base_id(coords.grandparent1);
        let grandparent2 = tree.base_id(coords.grandparent2);

        LineAffinity {
            parent: lookup(oracle, &[subject, parent]),
            grandparent1: lookup(oracle, &[subject, parent, grandparent1]),
            grandparent2: lookup(oracle, &[subject, parent, grandparent2]),
        }
    };

    let left = line(Side::Left);
    let right = line(Side::Right);
    let parents = lookup(
        oracle,
        &[
            tree.base_id(family.left.parent),
            tree.base_id(family.right.parent),
        ],
    );

    Some(BaseAffinity {
        total: left.sum().saturating_add(right.sum()).saturating_add(parents),
        parents,
        left,
        right,
    })
}
