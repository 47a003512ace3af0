//! Shared-race affinity bonus.

use std::collections::BTreeSet;

use crate::family::{LineCoords, resolve_family_positions};
use crate::tree::{AncestryTree, TreeCoord};

/// Number of race wins two individuals have in common.
///
/// Iterates the smaller set and probes the larger one.
pub fn shared_races(a: &BTreeSet<String>, b: &BTreeSet<String>) -> u32 {
    let (probe, target) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    probe.iter().filter(|race| target.contains(*race)).count() as u32
}

fn races(tree: &AncestryTree, coord: TreeCoord) -> Option<&BTreeSet<String>> {
    tree.individual(coord).map(|individual| &individual.races)
}

fn overlap(tree: &AncestryTree, a: TreeCoord, b: TreeCoord) -> u32 {
    match (races(tree, a), races(tree, b)) {
        (Some(a), Some(b)) => shared_races(a, b),
        _ => 0,
    }
}

fn line_overlap(tree: &AncestryTree, line: &LineCoords) -> u32 {
    overlap(tree, line.parent, line.grandparent1) + overlap(tree, line.parent, line.grandparent2)
}

/// Computes the race affinity bonus for the individual at `coord`.
///
/// Sums the shared race wins of the two parents, and of each parent with each of
/// its own parents. The subject's races do not take part.
pub fn compute_race_affinity(tree: &AncestryTree, coord: TreeCoord) -> u32 {
    let Some(family) = resolve_family_positions(coord) else {
        return 0;
    };

    overlap(tree, family.left.parent, family.right.parent)
        + line_overlap(tree, &family.left)
        + line_overlap(tree, &family.right)
}
