//! Saved tree snapshots in the planner UI's JSON layout.

use pedigree_core::{AffinityOracle, AffinityTable, AncestryTree, Spark, SparkKind, TreeCoord};

const SNAPSHOT: &str = r#"{
    "1": { "1": { "id": "100101", "baseId": "1001", "races": [] } },
    "2": {
        "1": {
            "id": "100201",
            "baseId": "1002",
            "races": ["Satsuki Sho", "Tokyo Yushun"],
            "statSpark": { "stat": "Speed", "level": 3 },
            "aptitudeSpark": {},
            "uniqueSpark": { "stat": "100201", "level": 2 },
            "skillSpark": [{ "stat": "Corner Recovery", "level": 1 }]
        },
        "2": { "races": ["Satsuki Sho"] }
    }
}"#;

#[test]
fn reads_ui_snapshot() {
    let tree: AncestryTree = serde_json::from_str(SNAPSHOT).unwrap();

    let parent = tree.individual(TreeCoord::new(2, 1)).unwrap();
    assert_eq!(parent.base_id(), Some("1002"));
    assert_eq!(parent.races.len(), 2);
    assert_eq!(parent.stat_spark, Some(Spark::new("Speed", 3)));
    // An empty object means the spark was cleared.
    assert!(parent.sparks(SparkKind::Aptitude).is_empty());
    assert_eq!(parent.sparks(SparkKind::Unique), [Spark::new("100201", 2)]);
    assert!(parent.race_achievement_spark.is_empty());

    // Stored without an id: present in the map, absent for scoring.
    assert_eq!(tree.len(), 3);
    assert!(tree.individual(TreeCoord::new(2, 2)).is_none());
}

#[test]
fn half_filled_spark_is_rejected() {
    let json = r#"{ "1": { "1": { "id": "a", "aptitudeSpark": { "stat": "Turf" } } } }"#;
    assert!(serde_json::from_str::<AncestryTree>(json).is_err());
}

#[test]
fn tree_round_trips_through_json() {
    let tree: AncestryTree = serde_json::from_str(SNAPSHOT).unwrap();
    let json = serde_json::to_string(&tree).unwrap();
    assert!(json.contains("\"baseId\":\"1002\""));
    assert!(!json.contains("aptitudeSpark"));
    assert_eq!(serde_json::from_str::<AncestryTree>(&json).unwrap(), tree);
}

#[test]
fn table_reads_json_object() {
    let table: AffinityTable =
        serde_json::from_str(r#"{ "1001,1002": 21, "1001,1002,1003": 9 }"#).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.points_for(["1002", "1001"]), 21);
}
