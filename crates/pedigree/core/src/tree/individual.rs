use std::collections::BTreeSet;

use super::spark::{Spark, SparkKind};

/// One character placed in a pedigree slot.
///
/// `id` names the costume/variant; `base_id` names the character family and is
/// the key used for affinity lookups. An individual without an `id` counts as
/// absent everywhere scores are computed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Individual {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub base_id: Option<String>,

    /// Race wins, used for the race affinity bonus.
    #[cfg_attr(feature = "serde", serde(default))]
    pub races: BTreeSet<String>,

    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "spark_field::deserialize"
        )
    )]
    pub stat_spark: Option<Spark>,

    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "spark_field::deserialize"
        )
    )]
    pub aptitude_spark: Option<Spark>,

    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "spark_field::deserialize"
        )
    )]
    pub unique_spark: Option<Spark>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub skill_spark: Vec<Spark>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub race_achievement_spark: Vec<Spark>,
}

impl Individual {
    pub fn new(id: impl Into<String>, base_id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            base_id: Some(base_id.into()),
            ..Self::default()
        }
    }

    /// Returns true when the slot holds a real character.
    pub fn is_present(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }

    pub fn base_id(&self) -> Option<&str> {
        self.base_id.as_deref()
    }

    /// Sparks of one kind as a slice; single-valued kinds yield zero or one entry.
    pub fn sparks(&self, kind: SparkKind) -> &[Spark] {
        match kind {
            SparkKind::Stat => self.stat_spark.as_slice(),
            SparkKind::Aptitude => self.aptitude_spark.as_slice(),
            SparkKind::Unique => self.unique_spark.as_slice(),
            SparkKind::Skill => &self.skill_spark,
            SparkKind::RaceAchievement => &self.race_achievement_spark,
            SparkKind::Scenario => &[],
        }
    }

    pub fn with_races<I, S>(mut self, races: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.races = races.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_stat_spark(mut self, spark: Spark) -> Self {
        self.stat_spark = Some(spark);
        self
    }

    pub fn with_aptitude_spark(mut self, spark: Spark) -> Self {
        self.aptitude_spark = Some(spark);
        self
    }

    pub fn with_unique_spark(mut self, spark: Spark) -> Self {
        self.unique_spark = Some(spark);
        self
    }

    pub fn with_skill_spark(mut self, spark: Spark) -> Self {
        self.skill_spark.push(spark);
        self
    }

    pub fn with_race_achievement_spark(mut self, spark: Spark) -> Self {
        self.race_achievement_spark.push(spark);
        self
    }
}

/// The UI stores a cleared spark as `{}`; read that as no spark.
#[cfg(feature = "serde")]
mod spark_field {
    use serde::{Deserialize, Deserializer, de::Error};

    use super::Spark;

    #[derive(Deserialize)]
    struct RawSpark {
        stat: Option<String>,
        level: Option<u8>,
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Spark>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawSpark>::deserialize(deserializer)? {
            None
            | Some(RawSpark {
                stat: None,
                level: None,
            }) => Ok(None),
            Some(RawSpark {
                stat: Some(stat),
                level: Some(level),
            }) => Ok(Some(Spark { stat, level })),
            Some(_) => Err(D::Error::custom("spark needs both `stat` and `level`")),
        }
    }
}
