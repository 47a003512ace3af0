//! Spark records and their kinds.

/// One inheritable trait record declared by an individual.
///
/// `stat` is the label the spark is grouped by: a stat or aptitude name, a skill
/// or race name, or for unique sparks the owning character's id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spark {
    pub stat: String,
    pub level: u8,
}

impl Spark {
    pub fn new(stat: impl Into<String>, level: u8) -> Self {
        Self {
            stat: stat.into(),
            level,
        }
    }
}

/// Kind tag of a spark.
///
/// The string forms are the field names the planner UI stores sparks under.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SparkKind {
    /// Blue spark (speed, stamina, ...). Not probabilistically inherited.
    #[strum(serialize = "statSpark")]
    #[cfg_attr(feature = "serde", serde(rename = "statSpark"))]
    Stat,
    /// Pink spark (track, distance or strategy aptitude).
    #[strum(serialize = "aptitudeSpark")]
    #[cfg_attr(feature = "serde", serde(rename = "aptitudeSpark"))]
    Aptitude,
    /// Green spark tied to the owning character.
    #[strum(serialize = "uniqueSpark")]
    #[cfg_attr(feature = "serde", serde(rename = "uniqueSpark"))]
    Unique,
    /// White skill spark.
    #[strum(serialize = "skillSpark")]
    #[cfg_attr(feature = "serde", serde(rename = "skillSpark"))]
    Skill,
    /// White spark granted for winning a race.
    #[strum(serialize = "raceAchievementSpark")]
    #[cfg_attr(feature = "serde", serde(rename = "raceAchievementSpark"))]
    RaceAchievement,
    /// White spark granted by the training scenario.
    #[strum(serialize = "scenario")]
    #[cfg_attr(feature = "serde", serde(rename = "scenario"))]
    Scenario,
}

impl SparkKind {
    /// Kinds read from ancestors when collecting inheritable sparks.
    pub const INHERITABLE: [SparkKind; 4] = [
        SparkKind::Aptitude,
        SparkKind::Unique,
        SparkKind::Skill,
        SparkKind::RaceAchievement,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_forms_match_ui_field_names() {
        assert_eq!(SparkKind::RaceAchievement.to_string(), "raceAchievementSpark");
        assert_eq!("uniqueSpark".parse::<SparkKind>(), Ok(SparkKind::Unique));
        assert!("greenSpark".parse::<SparkKind>().is_err());
    }

    #[test]
    fn stat_sparks_are_not_collected() {
        assert!(!SparkKind::INHERITABLE.contains(&SparkKind::Stat));
        assert!(!SparkKind::INHERITABLE.contains(&SparkKind::Scenario));
    }
}
