/// Planner configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Independent inheritance attempts each ancestor gets during one career.
    pub attempts_per_ancestor: u32,

    /// Lowest total affinity shown in the medium band.
    pub medium_affinity_threshold: u32,

    /// Lowest total affinity shown in the high band.
    pub high_affinity_threshold: u32,
}

impl PlannerConfig {
    // ===== compile-time constants =====
    /// Deepest level of the pedigree (subject, parents, grandparents, great-grandparents).
    pub const MAX_LEVEL: u32 = 4;

    // ===== runtime-tunable defaults =====
    /// Two inspiration events per career.
    pub const ATTEMPTS_PER_ANCESTOR: u32 = 2;
    pub const DEFAULT_MEDIUM_AFFINITY_THRESHOLD: u32 = 51;
    pub const DEFAULT_HIGH_AFFINITY_THRESHOLD: u32 = 151;

    pub fn new() -> Self {
        Self {
            attempts_per_ancestor: Self::ATTEMPTS_PER_ANCESTOR,
            medium_affinity_threshold: Self::DEFAULT_MEDIUM_AFFINITY_THRESHOLD,
            high_affinity_threshold: Self::DEFAULT_HIGH_AFFINITY_THRESHOLD,
        }
    }

    pub fn with_attempts_per_ancestor(attempts_per_ancestor: u32) -> Self {
        Self {
            attempts_per_ancestor,
            ..Self::new()
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}
