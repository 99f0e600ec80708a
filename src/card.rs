//! Card types and deck constants.

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// Returns the suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when comparing cards.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the comparison value of the card in War, where the Ace
    /// outranks every other card (Ace = 14, King = 13, and so on down).
    #[must_use]
    pub const fn war_value(self) -> u8 {
        match self.rank {
            1 => 14,
            rank => rank,
        }
    }

    /// Compares two cards by War ranking.
    ///
    /// Equal ranks tie regardless of suit; the Ace beats everything,
    /// including the King; otherwise the higher rank wins.
    ///
    /// # Example
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use warrs::{Card, Suit};
    ///
    /// let ace = Card::new(Suit::Spades, 1);
    /// let king = Card::new(Suit::Hearts, 13);
    /// assert_eq!(ace.war_cmp(king), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn war_cmp(self, other: Self) -> Ordering {
        self.war_value().cmp(&other.war_value())
    }

    /// Returns the rank name ("Ace", "2", ..., "King").
    #[must_use]
    pub const fn rank_name(self) -> &'static str {
        match self.rank {
            1 => "Ace",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "Jack",
            12 => "Queen",
            13 => "King",
            _ => "?",
        }
    }

    /// Returns the display name of the card, such as "Ace of Spades".
    #[must_use]
    pub fn name(self) -> String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank_name(), self.suit.name())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
