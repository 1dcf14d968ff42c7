//! Table configuration options.

/// Configuration options for a round engine.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(2)
///     .with_max_participant_delay(250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Number of 52-card sets in each freshly shuffled deck (at least 1 is used).
    pub decks: u8,
    /// Largest inter-card delay accepted when dealing to a participant, in
    /// milliseconds. House deals have no upper bound.
    pub max_participant_delay_ms: i64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            max_participant_delay_ms: 1000,
        }
    }
}

impl TableOptions {
    /// Sets the number of sets per deck.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(3);
    /// assert_eq!(options.decks, 3);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the participant delay ceiling.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_participant_delay(500);
    /// assert_eq!(options.max_participant_delay_ms, 500);
    /// ```
    #[must_use]
    pub const fn with_max_participant_delay(mut self, max_ms: i64) -> Self {
        self.max_participant_delay_ms = max_ms;
        self
    }
}
