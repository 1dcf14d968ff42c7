//! Participants and their betting invariant.

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::BetError;
use crate::result::Outcome;

/// A player seated at the table.
///
/// Identity is the id string: equality, hashing and ordering ignore every
/// other field. Ordering is ascending by id.
#[derive(Debug, Clone)]
pub struct Participant {
    id: String,
    name: String,
    points: i64,
    bet: u64,
    result: u32,
}

impl Participant {
    /// Creates a participant with no bet and a zero result.
    pub fn new(id: impl Into<String>, name: impl Into<String>, initial_points: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            points: initial_points,
            bet: 0,
            result: 0,
        }
    }

    /// Returns the participant id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the participant.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the points balance.
    #[must_use]
    pub const fn points(&self) -> i64 {
        self.points
    }

    /// Overwrites the points balance.
    ///
    /// The balance is signed: settling a bet the balance no longer covers
    /// takes it below zero.
    pub const fn set_points(&mut self, points: i64) {
        self.points = points;
    }

    /// Returns the current bet (0 when none is placed).
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Places or clears a bet.
    ///
    /// A zero amount always succeeds and clears the bet. A positive amount
    /// must be strictly less than the current points; on rejection the
    /// previous bet is kept.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientPoints`] if `amount >= points`.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::Participant;
    ///
    /// let mut p = Participant::new("1", "Ada", 100);
    /// assert!(p.set_bet(99).is_ok());
    /// assert!(p.set_bet(100).is_err());
    /// assert_eq!(p.bet(), 99);
    /// assert!(p.set_bet(0).is_ok());
    /// assert_eq!(p.bet(), 0);
    /// ```
    pub const fn set_bet(&mut self, amount: u64) -> Result<(), BetError> {
        if amount == 0 {
            self.bet = 0;
            return Ok(());
        }
        if self.points <= 0 || amount >= self.points.unsigned_abs() {
            return Err(BetError::InsufficientPoints {
                bet: amount,
                points: self.points,
            });
        }
        self.bet = amount;
        Ok(())
    }

    #[expect(
        clippy::cast_possible_wrap,
        reason = "a bet is only accepted below a positive i64 balance"
    )]
    const fn signed_bet(&self) -> i64 {
        self.bet as i64
    }

    /// Clears the bet.
    pub const fn reset_bet(&mut self) {
        self.bet = 0;
    }

    /// Returns the total recorded by the most recent deal.
    #[must_use]
    pub const fn result(&self) -> u32 {
        self.result
    }

    /// Records the total of a deal.
    pub const fn set_result(&mut self, result: u32) {
        self.result = result;
    }

    /// Settles the current bet against the house total.
    ///
    /// Beating the house credits the bet, falling short debits it, and a tie
    /// leaves the balance alone. Each call applies the adjustment again.
    pub const fn apply_win_loss(&mut self, house_total: u32) -> Outcome {
        if self.result > house_total {
            self.points += self.signed_bet();
            Outcome::Win
        } else if self.result < house_total {
            self.points -= self.signed_bet();
            Outcome::Lose
        } else {
            Outcome::Push
        }
    }
}

impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Participant {}

impl Hash for Participant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Participant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Participant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player: id={}, name={}, bet={}, points={}, result={}",
            self.id, self.name, self.bet, self.points, self.result
        )
    }
}
