//! Entry point used by frontends.

use crate::affinity::{AffinityCalculator, AffinityOracle, AffinityTier, BaseAffinity};
use crate::config::PlannerConfig;
use crate::inheritance::{
    InheritanceError, InspirationChance, collect_inheritable_sparks, inspiration_chances,
};
use crate::tree::{AncestryTree, TreeCoord};

/// Affinity figures shown for one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffinityReport {
    pub coord: TreeCoord,
    pub base: BaseAffinity,
    pub race: u32,
    /// `base.total + race`.
    pub total: u32,
    pub tier: AffinityTier,
}

/// Stateless planner over an injected affinity oracle.
///
/// Holds no tree: every call takes the caller's current snapshot.
pub struct InspirationPlanner<'a, O: AffinityOracle + ?Sized> {
    calculator: AffinityCalculator<'a, O>,
    config: PlannerConfig,
}

impl<'a, O: AffinityOracle + ?Sized> InspirationPlanner<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self::with_config(oracle, PlannerConfig::default())
    }

    pub fn with_config(oracle: &'a O, config: PlannerConfig) -> Self {
        Self {
            calculator: AffinityCalculator::new(oracle),
            config,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn calculator(&self) -> &AffinityCalculator<'a, O> {
        &self.calculator
    }

    /// Affinity breakdown for `coord`, or `None` when nothing is selected.
    pub fn affinity_report(&self, tree: &AncestryTree, coord: TreeCoord) -> Option<AffinityReport> {
        let base = self.calculator.base_affinity(tree, coord)?;
        let race = self.calculator.race_affinity(tree, coord);
        let total = base.total.saturating_add(race);

        Some(AffinityReport {
            coord,
            base,
            race,
            total,
            tier: AffinityTier::from_total(total, &self.config),
        })
    }

    /// Inspiration chances for `coord`, highest first.
    pub fn inspiration_report(
        &self,
        tree: &AncestryTree,
        coord: TreeCoord,
    ) -> Result<Vec<InspirationChance>, InheritanceError> {
        let entries = collect_inheritable_sparks(tree, coord, self.calculator.oracle());
        inspiration_chances(&entries, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affinity::AffinityTable;
    use crate::tree::{Individual, Spark, SparkKind};

    #[test]
    fn reports_for_subject() {
        let table = AffinityTable::new()
            .with(["A", "B"], 100)
            .with(["A", "S"], 40)
            .with(["B", "S"], 20);
        let tree = AncestryTree::new()
            .with(TreeCoord::SUBJECT, Individual::new("s", "S"))
            .with(
                TreeCoord::new(2, 1),
                Individual::new("a", "A")
                    .with_races(["Arima Kinen"])
                    .with_aptitude_spark(Spark::new("Dirt", 3)),
            )
            .with(
                TreeCoord::new(2, 2),
                Individual::new("b", "B")
                    .with_races(["Arima Kinen"])
                    .with_aptitude_spark(Spark::new("Dirt", 1)),
            );

        let planner = InspirationPlanner::new(&table);

        let report = planner.affinity_report(&tree, TreeCoord::SUBJECT).unwrap();
        // Missing grandparents shrink the triples to the subject+parent pairs.
        assert_eq!(report.base.left.sum(), 120);
        assert_eq!(report.base.right.sum(), 60);
        assert_eq!(report.base.total, 280);
        assert_eq!(report.race, 1);
        assert_eq!(report.total, 281);
        assert_eq!(report.tier, AffinityTier::High);

        let rows = planner.inspiration_report(&tree, TreeCoord::SUBJECT).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, SparkKind::Aptitude);
        assert_eq!(rows[0].sources, 2);

        // Dirt 3 at weight 40: 7%; Dirt 1 at weight 20: 1.2%.
        let expected = (1.0 - (0.93_f64).powi(2) * (0.988_f64).powi(2)) * 100.0;
        assert!((rows[0].chance - expected).abs() < 1e-9);
    }

    #[test]
    fn report_total_saturates() {
        let table = AffinityTable::new().with(["A", "B"], u32::MAX);
        let tree = AncestryTree::new()
            .with(TreeCoord::new(2, 1), Individual::new("a", "A").with_races(["Oaks"]))
            .with(TreeCoord::new(2, 2), Individual::new("b", "B").with_races(["Oaks"]));

        let report = InspirationPlanner::new(&table)
            .affinity_report(&tree, TreeCoord::SUBJECT)
            .unwrap();
        assert_eq!(report.base.total, u32::MAX);
        assert_eq!(report.race, 1);
        assert_eq!(report.total, u32::MAX);
    }

    #[test]
    fn unset_selection_reports_nothing() {
        let table = AffinityTable::new();
        let planner = InspirationPlanner::new(&table);
        let tree = AncestryTree::new();

        assert!(planner.affinity_report(&tree, TreeCoord::UNSET).is_none());
        assert!(planner
            .inspiration_report(&tree, TreeCoord::UNSET)
            .unwrap()
            .is_empty());
    }
}
