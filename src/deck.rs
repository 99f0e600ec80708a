//! Dealing deck with separate draw and discard piles.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::pile::Pile;

/// A deck of cards split into a draw pile and a discard pile.
///
/// Cards are drawn from the top of the draw pile; dealt or spent cards can
/// be parked in the discard pile and folded back in on the next
/// [`shuffle`](Self::shuffle). This is the dealing abstraction used to set
/// up a game; during play each player holds a [`Pile`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    /// Cards available to draw, front = top.
    draw_pile: VecDeque<Card>,
    /// Cards set aside, in the order they were discarded.
    discard_pile: Vec<Card>,
}

impl Deck {
    /// Creates a new empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            draw_pile: VecDeque::new(),
            discard_pile: Vec::new(),
        }
    }

    /// Creates a full 52-card deck in suit-then-rank order.
    #[must_use]
    pub fn standard() -> Self {
        let mut draw_pile = VecDeque::with_capacity(DECK_SIZE);

        for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
            for rank in 1..=13 {
                draw_pile.push_back(Card::new(suit, rank));
            }
        }

        Self {
            draw_pile,
            discard_pile: Vec::new(),
        }
    }

    /// Removes and returns the top card of the draw pile.
    ///
    /// Returns `None` if the draw pile is empty, even when the discard
    /// pile still holds cards; call [`shuffle`](Self::shuffle) to fold the
    /// discard pile back in.
    pub fn draw(&mut self) -> Option<Card> {
        self.draw_pile.pop_front()
    }

    /// Adds a card to the discard pile.
    pub fn add_to_discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Folds the discard pile into the draw pile and shuffles everything.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.draw_pile.extend(self.discard_pile.drain(..));
        self.draw_pile.make_contiguous().shuffle(rng);
    }

    /// Returns the number of cards in the draw pile.
    #[must_use]
    pub fn draw_pile_size(&self) -> usize {
        self.draw_pile.len()
    }

    /// Returns the total number of cards in the deck, both piles included.
    #[must_use]
    pub fn size(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    /// Returns whether both piles are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty() && self.discard_pile.is_empty()
    }

    /// Converts the deck into a playing [`Pile`].
    ///
    /// Draw-pile cards keep their order; any discard-pile cards follow
    /// beneath them in discard order.
    #[must_use]
    pub fn into_pile(mut self) -> Pile {
        self.draw_pile.extend(self.discard_pile.drain(..));
        self.draw_pile.into_iter().collect()
    }
}
