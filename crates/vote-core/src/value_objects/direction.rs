//! Vote direction - the two recognized vote words

use std::fmt;

/// Vote direction
///
/// Exactly two actions are recognized, each mapping to a ±1 delta on the
/// channel tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteDirection {
    Upvote,
    Downvote,
}

impl VoteDirection {
    /// Parse a vote word.
    ///
    /// The match is literal and case-sensitive: no trimming, no case
    /// folding. Anything other than `upvote` or `downvote` is rejected.
    #[must_use]
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "upvote" => Some(Self::Upvote),
            "downvote" => Some(Self::Downvote),
            _ => None,
        }
    }

    /// Delta applied to the channel tally
    #[inline]
    #[must_use]
    pub fn delta(self) -> i64 {
        match self {
            Self::Upvote => 1,
            Self::Downvote => -1,
        }
    }

    /// Past-tense form used in confirmation messages
    #[must_use]
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Upvote => "upvoted",
            Self::Downvote => "downvoted",
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upvote => write!(f, "upvote"),
            Self::Downvote => write!(f, "downvote"),
        }
    }
}
