//! Channel entity - a named entry in the voting catalog

/// Channel entity
///
/// The only entity in the system: a channel with a unique, immutable name
/// and a running vote tally. The tally has no floor or ceiling and may go
/// negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    /// Storage identity, assigned by the database on insert
    pub id: i64,
    /// Public identifier used in URLs and vote lookups; unique, case-sensitive
    pub name: String,
    /// Running vote counter, mutated only by +1/-1 deltas
    pub vote: i64,
}

impl Channel {
    /// Create a channel from its stored fields
    #[must_use]
    pub fn new(id: i64, name: String, vote: i64) -> Self {
        Self { id, name, vote }
    }

    /// Whether the tally is below zero
    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.vote < 0
    }
}
