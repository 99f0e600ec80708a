//! Round resolution: draw, compare, war escalation, pot transfer.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::Card;
use crate::error::EmptyPileError;
use crate::observer::RoundObserver;
use crate::pile::Pile;
use crate::result::{Player, RoundOutcome, RoundResult};

use super::Game;

const fn outcome_of(ordering: Ordering) -> RoundOutcome {
    match ordering {
        Ordering::Greater => RoundOutcome::PlayerOneWins,
        Ordering::Less => RoundOutcome::PlayerTwoWins,
        Ordering::Equal => RoundOutcome::War,
    }
}

/// Draws one comparison card per side into the pot and compares them.
fn draw_and_compare<O: RoundObserver>(
    player_one: &mut Pile,
    player_two: &mut Pile,
    pot: &mut Vec<Card>,
    observer: &mut O,
) -> Result<Ordering, EmptyPileError> {
    let first = player_one.draw_from_top()?;
    let second = player_two.draw_from_top()?;
    pot.push(first);
    pot.push(second);

    observer.on_cards_played(first, second);
    let ordering = first.war_cmp(second);
    observer.on_round_outcome(outcome_of(ordering));

    Ok(ordering)
}

/// Plays a single round of War over two piles, mutating both in place.
///
/// One card is drawn from the top of each pile and compared. On a tie,
/// each side antes `ante_cards` face-down cards and one fresh comparison
/// card, repeating until the tie breaks or a pile runs out mid-war. Every
/// drawn card goes into a transient pot: a resolved round appends the
/// whole pot to the bottom of the winner's pile in draw order, while a
/// pile running out mid-war ends the round with `winner: None` and the
/// pot stranded. Stranded cards are permanently out of the game.
///
/// # Errors
///
/// Returns [`EmptyPileError`] if either pile is empty on entry. Emptiness
/// is checked before every draw after that, so the war loop itself cannot
/// fail.
pub fn play_round<O: RoundObserver>(
    player_one: &mut Pile,
    player_two: &mut Pile,
    ante_cards: u8,
    observer: &mut O,
) -> Result<RoundResult, EmptyPileError> {
    let mut pot: Vec<Card> = Vec::new();
    let mut wars = 0_u32;

    let mut ordering = draw_and_compare(player_one, player_two, &mut pot, observer)?;

    while ordering == Ordering::Equal {
        wars += 1;

        // Face-down antes. A war either side cannot cover ends the round
        // immediately; the pot stays undistributed.
        for _ in 0..ante_cards {
            if player_one.is_empty() || player_two.is_empty() {
                return Ok(RoundResult {
                    winner: None,
                    pot_size: pot.len(),
                    wars,
                });
            }
            pot.push(player_one.draw_from_top()?);
            pot.push(player_two.draw_from_top()?);
        }

        if player_one.is_empty() || player_two.is_empty() {
            return Ok(RoundResult {
                winner: None,
                pot_size: pot.len(),
                wars,
            });
        }

        ordering = draw_and_compare(player_one, player_two, &mut pot, observer)?;
    }

    let winner = if ordering == Ordering::Greater {
        Player::One
    } else {
        Player::Two
    };
    let pot_size = pot.len();

    let winning_pile = match winner {
        Player::One => player_one,
        Player::Two => player_two,
    };
    for card in pot {
        winning_pile.append_to_bottom(card);
    }

    Ok(RoundResult {
        winner: Some(winner),
        pot_size,
        wars,
    })
}

impl Game {
    /// Plays a single round with the configured ante size.
    ///
    /// See [`play_round`] for the round contract.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyPileError`] if either pile is empty on entry.
    pub fn play_round<O: RoundObserver>(
        &mut self,
        observer: &mut O,
    ) -> Result<RoundResult, EmptyPileError> {
        let result = play_round(
            &mut self.player_one,
            &mut self.player_two,
            self.options.ante_cards,
            observer,
        )?;
        self.rounds_played += 1;

        Ok(result)
    }
}
