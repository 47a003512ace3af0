use std::collections::HashMap;

/// Read-only source of affinity points for sorted base-id combinations.
///
/// Injected into the affinity calculator so tests can use small synthetic tables.
pub trait AffinityOracle: Send + Sync {
    /// Points for a canonical key; unknown keys are worth 0.
    fn points(&self, key: &str) -> u32;

    /// Points for an unordered combination of base ids.
    fn points_for<'a, I>(&self, ids: I) -> u32
    where
        I: IntoIterator<Item = &'a str>,
        Self: Sized,
    {
        self.points(&AffinityTable::key_for(ids))
    }
}

/// Map-backed affinity table keyed by `"id,id"` and `"id,id,id"` strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AffinityTable {
    entries: HashMap<String, u32>,
}

impl AffinityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the canonical key: ids sorted as strings (not numbers), comma-joined.
    pub fn key_for<'a, I>(ids: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ids: Vec<&str> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.join(",")
    }

    /// Sets the points for an unordered combination of base ids.
    pub fn insert<'a, I>(&mut self, ids: I, points: u32) -> Option<u32>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.entries.insert(Self::key_for(ids), points)
    }

    /// Builder variant of [`insert`](Self::insert).
    pub fn with<'a, I>(mut self, ids: I, points: u32) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.insert(ids, points);
        self
    }

    /// Stores a value under an already canonical key.
    pub fn insert_key(&mut self, key: impl Into<String>, points: u32) -> Option<u32> {
        self.entries.insert(key.into(), points)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(key, &points)| (key.as_str(), points))
    }
}

impl AffinityOracle for AffinityTable {
    fn points(&self, key: &str) -> u32 {
        self.entries.get(key).copied().unwrap_or(0)
    }
}

impl FromIterator<(String, u32)> for AffinityTable {
    fn from_iter<T: IntoIterator<Item = (String, u32)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_sorts_lexicographically_not_numerically() {
        assert_eq!(AffinityTable::key_for(["1005", "1001"]), "1001,1005");
        // "1012" < "912" as strings.
        assert_eq!(AffinityTable::key_for(["912", "1012", "1001"]), "1001,1012,912");
    }

    #[test]
    fn lookup_is_order_independent_and_misses_are_zero() {
        let table = AffinityTable::new().with(["B", "A"], 21);

        assert_eq!(table.points("A,B"), 21);
        assert_eq!(table.points_for(["A", "B"]), 21);
        assert_eq!(table.points_for(["B", "A"]), 21);
        assert_eq!(table.points_for(["A", "C"]), 0);
        assert_eq!(table.points(""), 0);
    }
}
