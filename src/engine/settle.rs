use alloc::string::String;
use alloc::vec::Vec;

use crate::result::{Outcome, Settlement};

use super::RoundEngine;

impl RoundEngine {
    /// Settles one registered participant against `house_total`.
    ///
    /// Returns `None` if the participant is not registered. Calling this
    /// twice in a round applies the adjustment twice; [`deal_house`]
    /// already calls it once for everyone.
    ///
    /// [`deal_house`]: Self::deal_house
    pub fn apply_win_loss(&self, participant_id: &str, house_total: u32) -> Option<Outcome> {
        self.participants
            .lock()
            .get_mut(participant_id)
            .map(|participant| participant.apply_win_loss(house_total))
    }

    /// Settles every participant once, in registry order.
    pub(super) fn settle_all(&self, house_total: u32) -> Vec<Settlement> {
        let mut participants = self.participants.lock();
        let mut settlements = Vec::with_capacity(participants.len());

        for participant in participants.values_mut() {
            let bet = participant.bet();
            let outcome = participant.apply_win_loss(house_total);
            log::debug!(
                "{} settled {outcome:?} on {} vs {house_total}",
                participant.id(),
                participant.result()
            );

            settlements.push(Settlement {
                participant_id: String::from(participant.id()),
                result: participant.result(),
                bet,
                outcome,
                points: participant.points(),
            });
        }

        settlements
    }

    /// Clears every participant's bet.
    pub(super) fn reset_bets(&self) {
        for participant in self.participants.lock().values_mut() {
            participant.reset_bet();
        }
    }
}
