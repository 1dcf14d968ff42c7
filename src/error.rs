//! Error types for deck and round operations.

use thiserror::Error;

/// Errors raised by the deck itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards remain to be drawn.
    #[error("deck exhausted")]
    Exhausted,
}

/// Errors that can occur while placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Participant not registered with the engine.
    #[error("participant not found")]
    ParticipantNotFound,
    /// The bet is not strictly below the participant's points.
    #[error("bet of {bet} needs more than {points} points")]
    InsufficientPoints {
        /// Requested bet.
        bet: u64,
        /// Points held when the bet was requested.
        points: i64,
    },
}

/// Errors that can occur before a deal starts.
///
/// Once a dealing loop has begun it always runs to completion, so these are
/// only ever precondition failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The inter-card delay is outside the permitted range.
    #[error("delay of {delay_ms}ms is outside 0..={max_ms}ms")]
    InvalidDelay {
        /// Requested delay.
        delay_ms: i64,
        /// Largest delay accepted by this deal.
        max_ms: i64,
    },
    /// Participant not registered with the engine.
    #[error("participant not found")]
    ParticipantNotFound,
    /// Participant has not placed a bet this round.
    #[error("participant has not placed a bet")]
    NoBet,
}

/// The pause between two draws ended early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pause interrupted")]
pub struct PauseInterrupted;
