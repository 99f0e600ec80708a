//! Game engine and round flow.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::EmptyPileError;
use crate::observer::RoundObserver;
use crate::options::GameOptions;
use crate::pile::Pile;
use crate::result::{GameResult, Player};

mod round;

pub use round::play_round;

/// A game of War between two players.
///
/// The game owns the two piles and the options. Use [`GameOptions`] to
/// configure the ante size and an optional round cap.
#[derive(Debug, Clone)]
pub struct Game {
    /// Player one's pile.
    pub player_one: Pile,
    /// Player two's pile.
    pub player_two: Pile,
    /// Game options.
    pub options: GameOptions,
    /// Rounds played so far.
    rounds_played: u32,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// A standard 52-card deck is shuffled and half of it dealt to player
    /// two; both halves are shuffled again before play begins.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// assert_eq!(game.cards_in_play(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut deck_one = Deck::standard();
        deck_one.shuffle(&mut rng);

        let mut deck_two = Deck::new();
        let deal = deck_one.draw_pile_size() / 2;
        for _ in 0..deal {
            if let Some(card) = deck_one.draw() {
                deck_two.add_to_discard(card);
            }
        }

        deck_one.shuffle(&mut rng);
        deck_two.shuffle(&mut rng);

        Self::from_piles(deck_one.into_pile(), deck_two.into_pile(), options)
    }

    /// Creates a game from two prepared piles.
    #[must_use]
    pub const fn from_piles(player_one: Pile, player_two: Pile, options: GameOptions) -> Self {
        Self {
            player_one,
            player_two,
            options,
            rounds_played: 0,
        }
    }

    /// Returns the number of cards in player one's pile.
    #[must_use]
    pub fn player_one_cards(&self) -> usize {
        self.player_one.len()
    }

    /// Returns the number of cards in player two's pile.
    #[must_use]
    pub fn player_two_cards(&self) -> usize {
        self.player_two.len()
    }

    /// Returns the total number of cards still in play.
    ///
    /// Starts at 52 for a standard game and only decreases when a war
    /// strands the pot.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.player_one.len() + self.player_two.len()
    }

    /// Returns whether the game is over (either pile is empty).
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.player_one.is_empty() || self.player_two.is_empty()
    }

    /// Returns the number of rounds played so far.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Plays rounds until one pile is exhausted, then reports the result.
    ///
    /// If [`GameOptions::max_rounds`] is non-zero, play also stops once
    /// that many rounds have been played; an unfinished game reports no
    /// winner.
    ///
    /// # Errors
    ///
    /// Propagates [`EmptyPileError`] from [`play_round`](Self::play_round).
    /// The loop only starts rounds while both piles are non-empty, so this
    /// is not expected to occur.
    pub fn play_game<O: RoundObserver>(
        &mut self,
        observer: &mut O,
    ) -> Result<GameResult, EmptyPileError> {
        while !self.is_over() {
            if self.options.max_rounds != 0 && self.rounds_played >= self.options.max_rounds {
                break;
            }
            self.play_round(observer)?;
        }

        Ok(self.result())
    }

    /// Reports the current standing as a [`GameResult`].
    fn result(&self) -> GameResult {
        let winner = match (self.player_one.is_empty(), self.player_two.is_empty()) {
            (false, true) => Some(Player::One),
            (true, false) => Some(Player::Two),
            // Simultaneous exhaustion (war abort) or round cap reached.
            _ => None,
        };

        GameResult {
            winner,
            rounds: self.rounds_played,
            player_one_cards: self.player_one.len(),
            player_two_cards: self.player_two.len(),
        }
    }
}
