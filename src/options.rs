//! Game configuration options.

/// Configuration options for a game of War.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_ante_cards(2)
///     .with_max_rounds(1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of face-down cards each player antes per war.
    pub ante_cards: u8,
    /// Maximum number of rounds [`play_game`](crate::Game::play_game)
    /// will play before stopping. 0 to play until a pile is exhausted.
    pub max_rounds: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            ante_cards: 3,
            max_rounds: 0,
        }
    }
}

impl GameOptions {
    /// Sets the number of ante cards per war.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_ante_cards(1);
    /// assert_eq!(options.ante_cards, 1);
    /// ```
    #[must_use]
    pub const fn with_ante_cards(mut self, ante_cards: u8) -> Self {
        self.ante_cards = ante_cards;
        self
    }

    /// Sets the maximum number of rounds per game. 0 disables the cap.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_rounds(500);
    /// assert_eq!(options.max_rounds, 500);
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}
