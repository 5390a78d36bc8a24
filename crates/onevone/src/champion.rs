//! Read-only champion lookup shared by every widget on the page.

use std::collections::BTreeMap;

use onevone_net::ChampionRecord;

/// Champion records keyed by display name.
///
/// Names are unique; when a dataset repeats a name the later record wins.
#[derive(Debug, Clone, Default)]
pub struct ChampionIndex {
    by_name: BTreeMap<String, ChampionRecord>,
}

impl ChampionIndex {
    /// Build an index from fetched records.
    pub fn new(records: impl IntoIterator<Item = ChampionRecord>) -> Self {
        let mut by_name = BTreeMap::new();
        for record in records {
            if let Some(previous) = by_name.insert(record.name.clone(), record) {
                tracing::warn!(
                    target: "onevone::bootstrap",
                    name = %previous.name,
                    "duplicate champion name, keeping the later record"
                );
            }
        }
        Self { by_name }
    }

    /// Look up a champion by display name.
    pub fn get(&self, name: &str) -> Option<&ChampionRecord> {
        self.by_name.get(name)
    }

    /// All display names, sorted ascending.
    pub fn pool(&self) -> Vec<String> {
        self.by_name.keys().cloned().collect()
    }

    /// Number of champions.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
