//! Round and game result types.

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player one (the first pile).
    One,
    /// Player two (the second pile).
    Two,
}

/// Outcome of a single comparison, as reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player one's card ranked higher.
    PlayerOneWins,
    /// Player two's card ranked higher.
    PlayerTwoWins,
    /// The cards tied; a war begins (or continues).
    War,
}

/// Result of a single resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The round winner, or `None` if a war exhausted a pile before the
    /// tie resolved. In that case the pot is abandoned and its cards leave
    /// the game.
    pub winner: Option<Player>,
    /// Number of cards in the pot, awarded to the winner or lost on abort.
    pub pot_size: usize,
    /// Number of wars fought during the round.
    pub wars: u32,
}

/// Result of a full game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// The game winner, or `None` if both piles emptied simultaneously or
    /// the round cap stopped play first.
    pub winner: Option<Player>,
    /// Number of rounds played.
    pub rounds: u32,
    /// Cards left in player one's pile.
    pub player_one_cards: usize,
    /// Cards left in player two's pile.
    pub player_two_cards: usize,
}
