//! Deck construction and drawing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered stack of cards. Draws come off the top.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    /// Cards in the deck; the top card is the last element.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds `sets` standard 52-card sets (at least one) and shuffles them.
    pub fn shuffled<R: Rng + ?Sized>(sets: u8, rng: &mut R) -> Self {
        let sets = sets.max(1);
        let mut cards = Vec::with_capacity(sets as usize * DECK_SIZE);

        for _ in 0..sets {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a deck that yields `draws` in the given order.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, Deck, Rank, Suit};
    ///
    /// let first = Card::new(Suit::Hearts, Rank::Ace);
    /// let second = Card::new(Suit::Clubs, Rank::Two);
    /// let mut deck = Deck::stacked(&[first, second]);
    /// assert_eq!(deck.draw(), Ok(first));
    /// assert_eq!(deck.draw(), Ok(second));
    /// assert!(deck.is_empty());
    /// ```
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] when no cards remain. The deck never
    /// refills itself.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted)
    }

    /// Returns the remaining cards, top card last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
