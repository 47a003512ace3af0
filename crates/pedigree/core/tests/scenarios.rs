//! End-to-end scenarios over small synthetic tables.

use pedigree_core::{
    AffinityTable, AncestryTree, Individual, InspirationPlanner, PlannerConfig, Spark, SparkKind,
    TreeCoord, chance_at_least_once, collect_inheritable_sparks, compute_base_affinity,
    compute_race_affinity, group_by_label, resolve_family_positions,
};

#[test]
fn subject_only_tree_scores_zero() {
    let tree = AncestryTree::new().with(TreeCoord::SUBJECT, Individual::new("100101", "1001"));
    let table = AffinityTable::new().with(["1001", "1002"], 30);

    let family = resolve_family_positions(TreeCoord::new(1, 1)).unwrap();
    assert_eq!(family.left.parent, TreeCoord::new(2, 1));
    assert_eq!(family.right.parent, TreeCoord::new(2, 2));
    assert_eq!(family.left.grandparent1, TreeCoord::new(3, 1));
    assert_eq!(family.left.grandparent2, TreeCoord::new(3, 2));
    assert_eq!(family.right.grandparent1, TreeCoord::new(3, 3));
    assert_eq!(family.right.grandparent2, TreeCoord::new(3, 4));

    let affinity = compute_base_affinity(&tree, TreeCoord::SUBJECT, &table).unwrap();
    assert_eq!(affinity.total, 0);
    assert_eq!(compute_race_affinity(&tree, TreeCoord::SUBJECT), 0);
    assert!(collect_inheritable_sparks(&tree, TreeCoord::SUBJECT, &table).is_empty());
}

#[test]
fn parents_pair_alone_drives_the_total() {
    let table = AffinityTable::new().with(["A", "B"], 50);
    let tree = AncestryTree::new()
        .with(TreeCoord::SUBJECT, Individual::new("s", "unknown"))
        .with(TreeCoord::new(2, 1), Individual::new("a", "A"))
        .with(TreeCoord::new(2, 2), Individual::new("b", "B"));

    let affinity = compute_base_affinity(&tree, TreeCoord::SUBJECT, &table).unwrap();

    assert_eq!(affinity.left.parent, 0);
    assert_eq!(affinity.right.parent, 0);
    assert_eq!(affinity.parents, 50);
    assert_eq!(affinity.total, 50);
}

#[test]
fn same_skill_from_two_ancestors() {
    // S+L = 80 and S+R = 20; grandparents absent so their triples read the same pairs,
    // which does not matter here because only the parents carry sparks.
    let table = AffinityTable::new().with(["L", "S"], 80).with(["R", "S"], 20);
    let tree = AncestryTree::new()
        .with(TreeCoord::SUBJECT, Individual::new("s", "S"))
        .with(
            TreeCoord::new(2, 1),
            Individual::new("l", "L").with_skill_spark(Spark::new("Sirius Symboli", 3)),
        )
        .with(
            TreeCoord::new(2, 2),
            Individual::new("r", "R").with_skill_spark(Spark::new("Sirius Symboli", 3)),
        );

    let entries = collect_inheritable_sparks(&tree, TreeCoord::SUBJECT, &table);
    let groups = group_by_label(&entries);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].kind, SparkKind::Skill);

    let chance = chance_at_least_once(&groups[0], PlannerConfig::ATTEMPTS_PER_ANCESTOR).unwrap();
    let expected = (1.0 - (1.0 - 0.162_f64).powi(2) * (1.0 - 0.108_f64).powi(2)) * 100.0;
    assert!((chance - expected).abs() < 1e-9);
    assert_eq!(format!("{chance:.2}"), "44.12");
}

#[test]
fn unset_selection_degrades_everywhere() {
    let table = AffinityTable::new().with(["A", "B"], 50);
    let tree = AncestryTree::new()
        .with(TreeCoord::new(2, 1), Individual::new("a", "A").with_races(["Oaks"]))
        .with(TreeCoord::new(2, 2), Individual::new("b", "B").with_races(["Oaks"]));

    for coord in [TreeCoord::UNSET, TreeCoord::new(0, 1), TreeCoord::new(1, 0)] {
        assert!(resolve_family_positions(coord).is_none());
        assert!(compute_base_affinity(&tree, coord, &table).is_none());
        assert_eq!(compute_race_affinity(&tree, coord), 0);
        assert!(collect_inheritable_sparks(&tree, coord, &table).is_empty());
    }
}

#[test]
fn parent_slot_as_subject_reads_deeper_levels() {
    let table = AffinityTable::new()
        .with(["P", "Q"], 5)
        .with(["P", "X"], 7)
        .with(["P", "X", "Y"], 9);
    let tree = AncestryTree::new()
        .with(TreeCoord::new(2, 1), Individual::new("p", "P"))
        .with(TreeCoord::new(3, 1), Individual::new("x", "X"))
        .with(TreeCoord::new(3, 2), Individual::new("q", "Q"))
        .with(TreeCoord::new(4, 1), Individual::new("y", "Y"));

    let affinity = compute_base_affinity(&tree, TreeCoord::new(2, 1), &table).unwrap();

    assert_eq!(affinity.left.parent, 7);
    assert_eq!(affinity.left.grandparent1, 9);
    // Great-grandparent slot (4, 2) is empty: the triple shrinks to P+X.
    assert_eq!(affinity.left.grandparent2, 7);
    assert_eq!(affinity.right.parent, 5);
    assert_eq!(affinity.parents, 0);
    assert_eq!(affinity.total, 7 + 9 + 7 + 5 + 5 + 5);
}

#[test]
fn planner_uses_configured_attempts() {
    let table = AffinityTable::new();
    let tree = AncestryTree::new()
        .with(TreeCoord::SUBJECT, Individual::new("s", "S"))
        .with(
            TreeCoord::new(2, 1),
            Individual::new("l", "L").with_unique_spark(Spark::new("100101", 2)),
        );

    let single =
        InspirationPlanner::with_config(&table, PlannerConfig::with_attempts_per_ancestor(1));
    let rows = single.inspiration_report(&tree, TreeCoord::SUBJECT).unwrap();
    assert!((rows[0].chance - 10.0).abs() < 1e-9);

    let double = InspirationPlanner::new(&table);
    let rows = double.inspiration_report(&tree, TreeCoord::SUBJECT).unwrap();
    assert!((rows[0].chance - 19.0).abs() < 1e-9);
}
