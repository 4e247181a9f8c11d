//! Channel index - the in-memory name snapshot captured at startup

/// Snapshot of all channel names, captured once at process startup.
///
/// Existence checks run against this index instead of a live query, so no
/// storage round trip is needed per request. The snapshot is written once
/// before the server starts serving and only read afterward; it is NOT
/// refreshed, so channels added to the store after boot are invisible to
/// existence checks until restart. Callers share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ChannelIndex {
    /// Names sorted ascending so membership checks can binary search
    names: Vec<String>,
}

impl ChannelIndex {
    /// Build an index from the channel names enumerated at startup.
    ///
    /// The names are sorted internally; input order does not matter.
    #[must_use]
    pub fn from_names(mut names: Vec<String>) -> Self {
        names.sort_unstable();
        Self { names }
    }

    /// Exact, case-sensitive membership check
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }

    /// Number of channels in the snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the snapshot is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All names in the snapshot, ascending
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
