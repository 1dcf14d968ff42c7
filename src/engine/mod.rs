//! Round engine and table state.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::observer::RoundObserver;
use crate::options::TableOptions;
use crate::pacer::{DefaultPacer, Pacer};
use crate::participant::Participant;
use crate::sync::Mutex;

mod deal;
mod registry;
mod settle;
pub mod state;

pub use state::DealState;

/// Score at which a deal stops. Going over it is a bust.
pub const BUST_LEVEL: u32 = 21;

/// Runs rounds for one table: participants, observers, and the shared deck.
///
/// A round is played by placing bets, dealing each betting participant in
/// turn with [`deal_participant`](Self::deal_participant), and finishing with
/// a single [`deal_house`](Self::deal_house), which settles every bet, clears
/// all bets, and shuffles a fresh deck.
///
/// State lives behind locks so observers can be handed `&RoundEngine` while
/// a deal is in progress. The engine does not coordinate concurrent deals;
/// callers sharing one table must take turns.
pub struct RoundEngine {
    /// Table options.
    options: TableOptions,
    /// Cards left in the current deck.
    deck: Mutex<Deck>,
    /// Registered participants (`id` -> participant), ascending by id.
    participants: Mutex<BTreeMap<String, Participant>>,
    /// Observers in registration order.
    observers: Mutex<Vec<Arc<dyn RoundObserver>>>,
    /// Random number generator for every shuffle.
    rng: Mutex<ChaCha8Rng>,
    /// Pause between draws.
    pacer: Box<dyn Pacer>,
}

impl RoundEngine {
    /// Creates an engine whose shuffles are driven by `seed`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use twentyone::{RoundEngine, TableOptions};
    ///
    /// let engine = RoundEngine::new(TableOptions::default(), 42);
    /// assert_eq!(engine.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(options.decks, &mut rng);

        Self {
            options,
            deck: Mutex::new(deck),
            participants: Mutex::new(BTreeMap::new()),
            observers: Mutex::new(Vec::new()),
            rng: Mutex::new(rng),
            pacer: Box::new(DefaultPacer::default()),
        }
    }

    /// Replaces the pause used between draws.
    #[must_use]
    pub fn with_pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    /// Returns the table options.
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Shuffles a fresh deck, discarding whatever was left.
    pub fn reshuffle(&self) {
        let deck = self.fresh_deck();
        self.deck.replace(deck);
    }

    /// Replaces the current deck, e.g. with a [`Deck::stacked`] one.
    pub fn set_deck(&self, deck: Deck) {
        self.deck.replace(deck);
    }

    /// Returns the number of cards left in the current deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    fn fresh_deck(&self) -> Deck {
        Deck::shuffled(self.options.decks, &mut *self.rng.lock())
    }

    /// Draws the top card, shuffling a fresh deck first if this one is empty.
    fn draw(&self) -> Card {
        let mut deck = self.deck.lock();
        loop {
            match deck.draw() {
                Ok(card) => return card,
                Err(DeckError::Exhausted) => {
                    log::debug!("deck exhausted mid-deal, shuffling a fresh one");
                    *deck = self.fresh_deck();
                }
            }
        }
    }

    /// Calls `event` on every observer, in registration order.
    fn notify(&self, event: impl Fn(&dyn RoundObserver)) {
        let observers = self.observers.snapshot();
        for observer in &observers {
            event(&**observer);
        }
    }
}
