use crate::card::Card;
use crate::error::DealError;
use crate::result::RoundSummary;

use super::{DealState, RoundEngine};

impl RoundEngine {
    /// Draws until the running total reaches the bust level.
    ///
    /// `on_card` sees every card with the state it produced. A busting card
    /// is reported first and then taken back out of the total, so the
    /// returned total never exceeds the bust level.
    fn play_out(&self, delay_ms: u64, mut on_card: impl FnMut(&Card, DealState)) -> (u32, DealState) {
        let mut total = 0;
        let mut state = DealState::Accumulating;

        while !state.is_terminal() {
            if let Err(err) = self.pacer.pause(delay_ms) {
                log::warn!("{err}; dealing next card anyway");
            }

            let card = self.draw();
            total += card.score();
            state = DealState::for_total(total);
            on_card(&card, state);

            if state == DealState::Busted {
                log::trace!("bust at {total}, keeping {}", total - card.score());
                total -= card.score();
            }
        }

        (total, state)
    }

    /// Deals to a registered participant until they reach or pass the bust
    /// level, and records their result.
    ///
    /// Observers receive every card and then the result. Returns the
    /// recorded result, which excludes a busting card.
    ///
    /// # Errors
    ///
    /// Returns an error if `delay_ms` is outside `0..=max_participant_delay_ms`,
    /// the participant is not registered, or they have no bet placed. Nothing
    /// is drawn in those cases.
    pub fn deal_participant(&self, participant_id: &str, delay_ms: i64) -> Result<u32, DealError> {
        let max_ms = self.options.max_participant_delay_ms;
        if !(0..=max_ms).contains(&delay_ms) {
            return Err(DealError::InvalidDelay { delay_ms, max_ms });
        }

        let mut participant = self
            .participant(participant_id)
            .ok_or(DealError::ParticipantNotFound)?;
        if participant.bet() == 0 {
            return Err(DealError::NoBet);
        }

        let (result, _) = self.play_out(delay_ms.unsigned_abs(), |card, state| {
            if state == DealState::Busted {
                self.notify(|o| o.on_bust_card(&participant, card, self));
            } else {
                self.notify(|o| o.on_next_card(&participant, card, self));
            }
        });

        participant.set_result(result);
        {
            let mut participants = self.participants.lock();
            if let Some(stored) = participants.get_mut(participant_id) {
                stored.set_result(result);
            }
        }
        log::debug!("{} finished on {result}", participant.id());

        self.notify(|o| o.on_participant_result(&participant, result, self));
        Ok(result)
    }

    /// Deals the house's hand and closes the round.
    ///
    /// After the house stops, every registered participant is settled against
    /// the house total, observers receive the house result, every bet is
    /// cleared, and a fresh deck is shuffled.
    ///
    /// # Errors
    ///
    /// Returns an error if `delay_ms` is negative. There is no upper bound.
    pub fn deal_house(&self, delay_ms: i64) -> Result<RoundSummary, DealError> {
        if delay_ms < 0 {
            return Err(DealError::InvalidDelay {
                delay_ms,
                max_ms: i64::MAX,
            });
        }

        let (house_total, state) = self.play_out(delay_ms.unsigned_abs(), |card, state| {
            if state == DealState::Busted {
                self.notify(|o| o.on_house_bust_card(card, self));
            } else {
                self.notify(|o| o.on_next_house_card(card, self));
            }
        });

        let settlements = self.settle_all(house_total);
        self.notify(|o| o.on_house_result(house_total, self));

        self.reset_bets();
        self.reshuffle();

        Ok(RoundSummary {
            house_total,
            house_bust: state == DealState::Busted,
            settlements,
        })
    }
}
