use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::error::BetError;
use crate::observer::RoundObserver;
use crate::participant::Participant;

use super::RoundEngine;

impl RoundEngine {
    /// Registers a participant, replacing any existing one with the same id.
    pub fn add_participant(&self, participant: Participant) {
        let id = String::from(participant.id());
        if self.participants.lock().insert(id, participant).is_some() {
            log::debug!("replaced an existing participant");
        }
    }

    /// Returns a copy of the participant with the given id.
    pub fn participant(&self, participant_id: &str) -> Option<Participant> {
        self.participants.lock().get(participant_id).cloned()
    }

    /// Unregisters a participant.
    ///
    /// Returns whether anything was removed.
    pub fn remove_participant(&self, participant_id: &str) -> bool {
        self.participants.lock().remove(participant_id).is_some()
    }

    /// Returns copies of every participant, in ascending id order.
    pub fn participants(&self) -> Vec<Participant> {
        self.participants.lock().values().cloned().collect()
    }

    /// Returns the number of registered participants.
    pub fn participant_count(&self) -> usize {
        self.participants.lock().len()
    }

    /// Places a bet for a registered participant.
    ///
    /// Zero clears the bet. A positive bet must be strictly below the
    /// participant's points; otherwise it is refused and the previous bet
    /// stays in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the participant is not registered or cannot
    /// cover the bet.
    pub fn place_bet(&self, participant_id: &str, amount: u64) -> Result<(), BetError> {
        let mut participants = self.participants.lock();
        let participant = participants
            .get_mut(participant_id)
            .ok_or(BetError::ParticipantNotFound)?;
        participant.set_bet(amount)
    }

    /// Registers an observer. The same observer may be added more than once.
    pub fn add_observer(&self, observer: Arc<dyn RoundObserver>) {
        self.observers.lock().push(observer);
    }

    /// Removes the first registration of `observer`, compared by pointer.
    ///
    /// Returns whether anything was removed.
    pub fn remove_observer(&self, observer: &Arc<dyn RoundObserver>) -> bool {
        let mut observers = self.observers.lock();
        let Some(index) = observers.iter().position(|o| Arc::ptr_eq(o, observer)) else {
            return false;
        };
        observers.remove(index);
        true
    }

    /// Returns the number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.lock().len()
    }
}
