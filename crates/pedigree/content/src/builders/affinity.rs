//! Affinity table builder.
//!
//! The vendor data assigns each relation type a point value and lists the
//! characters that belong to it. A combination of characters earns the points of
//! every relation type all of them belong to:
//!
//! ```text
//! points(a, b)    = Σ point[t] for t in types(a) ∩ types(b)
//! points(a, b, c) = Σ point[t] for t in types(a) ∩ types(b) ∩ types(c)
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};

use pedigree_core::AffinityTable;
use serde::{Deserialize, Serialize};

/// Row of the relation dump: a relation type and its point value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRecord {
    pub relation_type: u32,
    pub relation_point: u32,
}

/// Row of the relation membership dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationMemberRecord {
    pub relation_type: u32,
    /// Base character id.
    pub chara_id: u32,
}

static NO_TYPES: BTreeSet<u32> = BTreeSet::new();

fn types_of<'m>(memberships: &'m BTreeMap<String, BTreeSet<u32>>, id: &str) -> &'m BTreeSet<u32> {
    memberships.get(id).unwrap_or(&NO_TYPES)
}

/// Builds the affinity table for every 2- and 3-combination of `known_base_ids`.
///
/// When `known_base_ids` is `None`, every character named in `members` is used.
/// Combinations worth 0 points are left out; a lookup miss reads as 0 anyway.
pub fn build_affinity_table(
    relations: &[RelationRecord],
    members: &[RelationMemberRecord],
    known_base_ids: Option<&[String]>,
) -> AffinityTable {
    let points: HashMap<u32, u32> = relations
        .iter()
        .map(|relation| (relation.relation_type, relation.relation_point))
        .collect();

    // Relation types each character belongs to.
    let mut memberships: BTreeMap<String, BTreeSet<u32>> = BTreeMap::new();
    for member in members {
        if !points.contains_key(&member.relation_type) {
            tracing::warn!(
                relation_type = member.relation_type,
                chara_id = member.chara_id,
                "relation member without a point value, skipping"
            );
            continue;
        }
        memberships
            .entry(member.chara_id.to_string())
            .or_default()
            .insert(member.relation_type);
    }

    let ids: Vec<String> = match known_base_ids {
        Some(known) => {
            let mut ids = known.to_vec();
            ids.sort_unstable();
            ids.dedup();
            ids
        }
        None => memberships.keys().cloned().collect(),
    };

    let score = |types: &BTreeSet<u32>| -> u32 {
        types
            .iter()
            .map(|t| points.get(t).copied().unwrap_or(0))
            .fold(0u32, u32::saturating_add)
    };

    let mut table = AffinityTable::new();
    for (i, a) in ids.iter().enumerate() {
        for (j, b) in ids.iter().enumerate().skip(i + 1) {
            let shared: BTreeSet<u32> = types_of(&memberships, a)
                .intersection(types_of(&memberships, b))
                .copied()
                .collect();
            if shared.is_empty() {
                continue;
            }

            let pair = score(&shared);
            if pair > 0 {
                table.insert([a.as_str(), b.as_str()], pair);
            }

            for c in ids.iter().skip(j + 1) {
                let triple: BTreeSet<u32> = shared
                    .intersection(types_of(&memberships, c))
                    .copied()
                    .collect();
                let triple_points = score(&triple);
                if triple_points > 0 {
                    table.insert([a.as_str(), b.as_str(), c.as_str()], triple_points);
                }
            }
        }
    }

    tracing::info!(
        characters = ids.len(),
        relation_types = points.len(),
        entries = table.len(),
        "built affinity table"
    );
    table
}
