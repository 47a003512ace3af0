//! Collecting the sparks an individual can inherit.

use crate::affinity::{AffinityOracle, compute_base_affinity};
use crate::family::{Relation, Side, resolve_family_positions};
use crate::tree::{AncestryTree, Spark, SparkKind, TreeCoord};

/// Sparks of one kind offered by one ancestor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparkEntry<'t> {
    /// Slot of the ancestor offering the sparks.
    pub ancestor: TreeCoord,
    pub side: Side,
    pub relation: Relation,
    pub kind: SparkKind,
    /// One spark for single-valued kinds, one or more for skill and race kinds.
    pub sparks: &'t [Spark],
    /// Affinity of the subject with this ancestor's line.
    pub affinity_weight: u32,
}

/// Collects every inheritable spark offered to the individual at `coord`.
///
/// Walks the two parents and four grandparents, reading aptitude, unique, skill
/// and race-achievement sparks (stat sparks are not inherited by chance). Each
/// entry is weighted by the affinity of that ancestor's own line, not the tree
/// total. Empty slots and empty spark fields emit nothing.
pub fn collect_inheritable_sparks<'t, O>(
    tree: &'t AncestryTree,
    coord: TreeCoord,
    oracle: &O,
) -> Vec<SparkEntry<'t>>
where
    O: AffinityOracle + ?Sized,
{
    let (Some(family), Some(affinity)) = (
        resolve_family_positions(coord),
        compute_base_affinity(tree, coord, oracle),
    ) else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for (side, relation, ancestor) in family.iter() {
        let Some(individual) = tree.individual(ancestor) else {
            continue;
        };

        for kind in SparkKind::INHERITABLE {
            let sparks = individual.sparks(kind);
            if sparks.is_empty() {
                continue;
            }

            entries.push(SparkEntry {
                ancestor,
                side,
                relation,
                kind,
                sparks,
                affinity_weight: affinity.weight(side, relation),
            });
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affinity::AffinityTable;
    use crate::tree::Individual;

    fn tree() -> AncestryTree {
        AncestryTree::new()
            .with(TreeCoord::SUBJECT, Individual::new("s", "S"))
            .with(
                TreeCoord::new(2, 1),
                Individual::new("l", "L")
                    .with_stat_spark(Spark::new("Speed", 3))
                    .with_aptitude_spark(Spark::new("Turf", 2))
                    .with_skill_spark(Spark::new("Corner Recovery", 1))
                    .with_skill_spark(Spark::new("Swinging Maestro", 2)),
            )
            .with(
                TreeCoord::new(3, 4),
                Individual::new("r2", "R2").with_unique_spark(Spark::new("100201", 1)),
            )
    }

    #[test]
    fn skips_stat_sparks_and_empty_fields() {
        let tree = tree();
        let table = AffinityTable::new();
        let entries = collect_inheritable_sparks(&tree, TreeCoord::SUBJECT, &table);

        let kinds: Vec<_> = entries.iter().map(|entry| entry.kind).collect();
        assert_eq!(kinds, [SparkKind::Aptitude, SparkKind::Skill, SparkKind::Unique]);
        assert_eq!(entries[1].sparks.len(), 2);
        assert_eq!(entries[2].ancestor, TreeCoord::new(3, 4));
        assert_eq!(entries[2].side, Side::Right);
        assert_eq!(entries[2].relation, Relation::Grandparent2);
    }

    #[test]
    fn weights_come_from_the_ancestor_line() {
        let table = AffinityTable::new()
            .with(["S", "L"], 30)
            .with(["R2", "S"], 12);
        let tree = tree();
        let entries = collect_inheritable_sparks(&tree, TreeCoord::SUBJECT, &table);

        // Left parent: S+L. Right grandparent 2 with no right parent: S+R2.
        assert_eq!(entries[0].affinity_weight, 30);
        assert_eq!(entries[2].affinity_weight, 12);
    }

    #[test]
    fn unset_coordinate_collects_nothing() {
        let tree = tree();
        let table = AffinityTable::new();
        assert!(collect_inheritable_sparks(&tree, TreeCoord::UNSET, &table).is_empty());
    }
}
