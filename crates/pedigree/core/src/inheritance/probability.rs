//! Grouping sparks across ancestors and aggregating attempts.

use std::collections::HashMap;

use crate::config::PlannerConfig;
use crate::tree::SparkKind;

use super::aggregate::SparkEntry;
use super::chance::attempt_chance;
use super::error::InheritanceError;

/// One ancestor offering a spark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparkSource {
    /// Level of the spark on this ancestor.
    pub level: u8,
    pub affinity_weight: u32,
}

/// Every ancestor offering the same spark label of the same kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparkGroup {
    pub label: String,
    pub kind: SparkKind,
    pub sources: Vec<SparkSource>,
}

/// Groups collected sparks by `(label, kind)`, keeping first-seen order.
pub fn group_by_label(entries: &[SparkEntry<'_>]) -> Vec<SparkGroup> {
    let mut groups: Vec<SparkGroup> = Vec::new();
    let mut index: HashMap<(&str, SparkKind), usize> = HashMap::new();

    for entry in entries {
        for spark in entry.sparks {
            let source = SparkSource {
                level: spark.level,
                affinity_weight: entry.affinity_weight,
            };

            let slot = *index
                .entry((spark.stat.as_str(), entry.kind))
                .or_insert_with(|| {
                    groups.push(SparkGroup {
                        label: spark.stat.clone(),
                        kind: entry.kind,
                        sources: Vec::new(),
                    });
                    groups.len() - 1
                });
            groups[slot].sources.push(source);
        }
    }

    groups
}

/// Chance, in percent, that a grouped spark is inherited at least once.
///
/// Each source gets `attempts_per_ancestor` independent attempts at its own
/// single-attempt chance `p_i`:
///
/// ```text
/// chance = 1 - Π (1 - p_i)
/// ```
pub fn chance_at_least_once(
    group: &SparkGroup,
    attempts_per_ancestor: u32,
) -> Result<f64, InheritanceError> {
    let attempts = i32::try_from(attempts_per_ancestor).unwrap_or(i32::MAX);
    let mut miss = 1.0_f64;

    for source in &group.sources {
        let chance = attempt_chance(group.kind, source.level, source.affinity_weight)?;
        miss *= (1.0 - chance / 100.0).powi(attempts);
    }

    Ok(((1.0 - miss) * 100.0).clamp(0.0, 100.0))
}

/// One row of the inspiration chance list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InspirationChance {
    pub label: String,
    pub kind: SparkKind,
    /// Number of ancestors offering the spark.
    pub sources: usize,
    /// Percent chance of inheriting it at least once over a career.
    pub chance: f64,
}

/// Computes the inspiration chance list, highest chance first.
pub fn inspiration_chances(
    entries: &[SparkEntry<'_>],
    config: &PlannerConfig,
) -> Result<Vec<InspirationChance>, InheritanceError> {
    let mut rows = group_by_label(entries)
        .into_iter()
        .map(|group| {
            let chance = chance_at_least_once(&group, config.attempts_per_ancestor)?;
            Ok(InspirationChance {
                sources: group.sources.len(),
                label: group.label,
                kind: group.kind,
                chance,
            })
        })
        .collect::<Result<Vec<_>, InheritanceError>>()?;

    rows.sort_by(|a, b| b.chance.total_cmp(&a.chance));
    Ok(rows)
}
