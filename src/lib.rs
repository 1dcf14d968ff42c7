//! A bust-threshold card round engine with optional `no_std` support.
//!
//! The crate provides a [`RoundEngine`] that owns a shared deck and a
//! registry of [`Participant`]s. Each participant draws until their score
//! reaches 21, the house does the same, and bets are settled by whoever got
//! closer without going over. [`RoundObserver`]s watch every card.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Participant, RoundEngine, TableOptions};
//!
//! let engine = RoundEngine::new(TableOptions::default(), 42);
//! engine.add_participant(Participant::new("1", "Ada", 100));
//! engine.place_bet("1", 10).unwrap();
//! engine.deal_participant("1", 100).unwrap();
//! let summary = engine.deal_house(100).unwrap();
//! let _ = summary;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod engine;
pub mod error;
pub mod observer;
pub mod options;
pub mod pacer;
pub mod participant;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use engine::{BUST_LEVEL, DealState, RoundEngine};
pub use error::{BetError, DealError, DeckError, PauseInterrupted};
pub use observer::{LogObserver, RoundObserver};
pub use options::TableOptions;
#[cfg(feature = "std")]
pub use pacer::ThreadPacer;
pub use pacer::{NoPause, Pacer};
pub use participant::Participant;
pub use result::{Outcome, RoundSummary, Settlement};
