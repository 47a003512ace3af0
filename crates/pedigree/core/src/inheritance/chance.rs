//! Per-attempt inheritance chance.

use crate::tree::{Spark, SparkKind};

use super::error::InheritanceError;

/// Parses a spark kind tag such as `"skillSpark"`.
pub fn parse_kind(tag: &str) -> Result<SparkKind, InheritanceError> {
    tag.parse()
        .map_err(|_| InheritanceError::UnknownKind(tag.to_string()))
}

/// Base chance, in percent, of passing a spark on in one attempt.
///
/// | kind | 1 | 2 | 3 |
/// |---|---|---|---|
/// | stat | 70 | 80 | 90 |
/// | aptitude | 1 | 3 | 5 |
/// | unique | 5 | 10 | 15 |
/// | skill | 3 | 6 | 9 |
/// | race achievement | 1 | 2 | 3 |
/// | scenario | 3 | 6 | 9 |
pub const fn base_chance(kind: SparkKind, level: u8) -> Result<u32, InheritanceError> {
    let row: [u32; 3] = match kind {
        SparkKind::Stat => [70, 80, 90],
        SparkKind::Aptitude => [1, 3, 5],
        SparkKind::Unique => [5, 10, 15],
        SparkKind::Skill => [3, 6, 9],
        SparkKind::RaceAchievement => [1, 2, 3],
        SparkKind::Scenario => [3, 6, 9],
    };

    match level {
        1..=3 => Ok(row[level as usize - 1]),
        _ => Err(InheritanceError::UnsupportedLevel { kind, level }),
    }
}

/// Chance, in percent, that `spark` is inherited in a single attempt.
///
/// ```text
/// chance = clamp(base * (1 + affinity_weight / 100), 0, 100)
/// ```
pub fn single_attempt_chance(
    spark: &Spark,
    affinity_weight: u32,
    kind: SparkKind,
) -> Result<f64, InheritanceError> {
    attempt_chance(kind, spark.level, affinity_weight)
}

/// [`single_attempt_chance`] for a bare `(kind, level)` pair.
pub fn attempt_chance(
    kind: SparkKind,
    level: u8,
    affinity_weight: u32,
) -> Result<f64, InheritanceError> {
    let base = f64::from(base_chance(kind, level)?);
    let scaled = base * (1.0 + f64::from(affinity_weight) / 100.0);
    Ok(scaled.clamp(0.0, 100.0))
}
