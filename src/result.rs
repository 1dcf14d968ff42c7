//! Settlement result types for a completed house deal.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Result of settling one participant against the house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Participant beat the house and was credited the bet.
    Win,
    /// House beat the participant and the bet was debited.
    Lose,
    /// Equal totals; no points moved.
    Push,
}

/// Settlement for a single participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// The participant id.
    pub participant_id: String,
    /// The participant's recorded result.
    pub result: u32,
    /// The bet that was settled.
    pub bet: u64,
    /// The outcome of the comparison.
    pub outcome: Outcome,
    /// Points balance after settlement.
    pub points: i64,
}

/// Summary of a house deal and the settlements it triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// The house's recorded total (bust-corrected).
    pub house_total: u32,
    /// Whether the house's last card went over the bust level.
    pub house_bust: bool,
    /// Settlements in registry order.
    pub settlements: Vec<Settlement>,
}

impl RoundSummary {
    /// Returns the settlement for the given participant id.
    #[must_use]
    pub fn settlement(&self, participant_id: &str) -> Option<&Settlement> {
        self.settlements
            .iter()
            .find(|s| s.participant_id == participant_id)
    }
}
