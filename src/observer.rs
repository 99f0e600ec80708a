//! Round reporting, decoupled from resolution.

use crate::card::Card;
use crate::result::RoundOutcome;

/// Receives round-by-round events from the resolver.
///
/// All methods have no-op defaults, so an implementation only overrides
/// what it cares about. The resolver calls [`on_cards_played`] once per
/// comparison (the face-down ante cards of a war are not reported),
/// immediately followed by [`on_round_outcome`].
///
/// [`on_cards_played`]: Self::on_cards_played
/// [`on_round_outcome`]: Self::on_round_outcome
pub trait RoundObserver {
    /// Called when both players reveal a comparison card.
    fn on_cards_played(&mut self, first: Card, second: Card) {
        let _ = (first, second);
    }

    /// Called with the outcome of each comparison.
    fn on_round_outcome(&mut self, outcome: RoundOutcome) {
        let _ = outcome;
    }
}

/// An observer that ignores every event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullObserver;

impl RoundObserver for NullObserver {}
