//! An engine for the card game War with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that shuffles and splits a standard
//! deck between two players and drives rounds of War, including the "war"
//! escalation on ties. Round-by-round reporting goes through the
//! [`RoundObserver`] trait, keeping the resolver itself pure.
//!
//! # Example
//!
//! ```
//! use warrs::{Game, GameOptions, NullObserver};
//!
//! let options = GameOptions::default().with_max_rounds(10_000);
//! let mut game = Game::new(options, 42);
//! let result = game.play_game(&mut NullObserver).unwrap();
//! assert_eq!(result.rounds, game.rounds_played());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod observer;
pub mod options;
pub mod pile;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::EmptyPileError;
pub use game::{Game, play_round};
pub use observer::{NullObserver, RoundObserver};
pub use options::GameOptions;
pub use pile::Pile;
pub use result::{GameResult, Player, RoundOutcome, RoundResult};
