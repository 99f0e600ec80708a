//! A player's pile of cards.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::error::EmptyPileError;

/// An ordered pile of cards with queue semantics.
///
/// The front of the pile is the top (the next card to draw); the back is
/// the bottom, where won cards are appended. Cards drawn from the top and
/// appended to the bottom cycle through in FIFO order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    /// Cards in the pile, front = top.
    cards: VecDeque<Card>,
}

impl Pile {
    /// Creates a new empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Returns whether the pile has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyPileError`] if the pile is empty. Callers are expected
    /// to check [`is_empty`](Self::is_empty) first.
    pub fn draw_from_top(&mut self) -> Result<Card, EmptyPileError> {
        self.cards.pop_front().ok_or(EmptyPileError)
    }

    /// Appends a card to the bottom of the pile.
    pub fn append_to_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Returns an iterator over the cards, top to bottom.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Shuffles the pile in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }
}

impl From<Vec<Card>> for Pile {
    /// Builds a pile from a vector, first element on top.
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
