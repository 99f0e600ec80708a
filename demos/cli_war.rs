//! CLI War example.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use warrs::{Card, Game, GameOptions, Player, RoundObserver, RoundOutcome, Suit};

/// Prints every comparison as it happens.
struct PrintingObserver;

impl RoundObserver for PrintingObserver {
    fn on_cards_played(&mut self, first: Card, second: Card) {
        println!("Player one plays {}", format_card(first));
        println!("Player two plays {}", format_card(second));
    }

    fn on_round_outcome(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::PlayerOneWins => println!("Player one wins that round!"),
            RoundOutcome::PlayerTwoWins => println!("Player two wins that round!"),
            RoundOutcome::War => println!("WAR!"),
        }
    }
}

fn main() {
    println!("War CLI example");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_max_rounds(10_000);
    let mut game = Game::new(options, seed);

    let result = match game.play_game(&mut PrintingObserver) {
        Ok(result) => result,
        Err(err) => {
            println!("Game error: {err}");
            return;
        }
    };

    println!();
    println!("Rounds played: {}", result.rounds);
    println!("Player1: {}", result.player_one_cards);
    println!("Player2: {}", result.player_two_cards);

    match result.winner {
        Some(Player::One) => println!("Player 1 Wins!"),
        Some(Player::Two) => println!("Player 2 Wins!"),
        None => println!("No winner."),
    }
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.name(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
