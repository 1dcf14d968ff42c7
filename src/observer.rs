//! Round lifecycle notifications.

use crate::card::Card;
use crate::engine::RoundEngine;
use crate::participant::Participant;

/// Receives round lifecycle events from a [`RoundEngine`].
///
/// Callbacks run synchronously inside the dealing call, in registration
/// order, with no engine lock held, so an observer may read the engine it is
/// handed. Every method defaults to doing nothing. Observers cannot fail: an
/// implementation that can go wrong must deal with it internally.
pub trait RoundObserver {
    /// A card that kept the participant at or under the bust level.
    fn on_next_card(&self, _participant: &Participant, _card: &Card, _engine: &RoundEngine) {}

    /// The card that took the participant over the bust level.
    fn on_bust_card(&self, _participant: &Participant, _card: &Card, _engine: &RoundEngine) {}

    /// The participant's recorded result once their deal has finished.
    fn on_participant_result(&self, _participant: &Participant, _result: u32, _engine: &RoundEngine) {
    }

    /// A card that kept the house at or under the bust level.
    fn on_next_house_card(&self, _card: &Card, _engine: &RoundEngine) {}

    /// The card that took the house over the bust level.
    fn on_house_bust_card(&self, _card: &Card, _engine: &RoundEngine) {}

    /// The house's recorded total, after every participant was settled.
    fn on_house_result(&self, _house_result: u32, _engine: &RoundEngine) {}
}

/// Writes every event through the [`log`] facade.
///
/// Individual cards go to `debug`; busts and results go to `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl RoundObserver for LogObserver {
    fn on_next_card(&self, participant: &Participant, card: &Card, _engine: &RoundEngine) {
        log::debug!("card dealt to {} .. {card}", participant.name());
    }

    fn on_bust_card(&self, participant: &Participant, card: &Card, _engine: &RoundEngine) {
        log::info!("card dealt to {} .. {card} ... BUSTED", participant.name());
    }

    fn on_participant_result(&self, participant: &Participant, result: u32, _engine: &RoundEngine) {
        log::info!("{}, final result={result}", participant.name());
    }

    fn on_next_house_card(&self, card: &Card, _engine: &RoundEngine) {
        log::debug!("card dealt to house .. {card}");
    }

    fn on_house_bust_card(&self, card: &Card, _engine: &RoundEngine) {
        log::info!("card dealt to house .. {card} ... HOUSE BUSTED");
    }

    fn on_house_result(&self, house_result: u32, engine: &RoundEngine) {
        log::info!("house, final result={house_result}");
        for participant in engine.participants() {
            log::info!("{participant}");
        }
    }
}
