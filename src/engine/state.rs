//! Dealing session state.

use super::BUST_LEVEL;

/// Where a single dealing session stands after its latest card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealState {
    /// Below the bust level; another card will be drawn.
    Accumulating,
    /// Landed exactly on the bust level.
    Standing,
    /// The latest card went over the bust level.
    Busted,
}

impl DealState {
    /// Classifies a running total.
    #[must_use]
    pub const fn for_total(total: u32) -> Self {
        if total < BUST_LEVEL {
            Self::Accumulating
        } else if total == BUST_LEVEL {
            Self::Standing
        } else {
            Self::Busted
        }
    }

    /// Returns whether the session is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Accumulating)
    }
}
