//! Game integration tests.

use core::cmp::Ordering;
use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use warrs::{
    Card, DECK_SIZE, Deck, EmptyPileError, Game, GameOptions, NullObserver, Pile, Player,
    RoundObserver, RoundOutcome, Suit, play_round,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn pile(cards: &[Card]) -> Pile {
    Pile::from(cards.to_vec())
}

/// Records every observer event in order.
#[derive(Default)]
struct RecordingObserver {
    plays: Vec<(Card, Card)>,
    outcomes: Vec<RoundOutcome>,
}

impl RoundObserver for RecordingObserver {
    fn on_cards_played(&mut self, first: Card, second: Card) {
        self.plays.push((first, second));
    }

    fn on_round_outcome(&mut self, outcome: RoundOutcome) {
        self.outcomes.push(outcome);
    }
}

#[test]
fn war_cmp_is_antisymmetric_over_all_ranks() {
    for first_rank in 1..=13 {
        for second_rank in 1..=13 {
            let first = card(Suit::Spades, first_rank);
            let second = card(Suit::Hearts, second_rank);
            assert_eq!(
                first.war_cmp(second),
                second.war_cmp(first).reverse(),
                "ranks {first_rank} vs {second_rank}"
            );
        }
    }
}

#[test]
fn ace_beats_king_both_ways() {
    let ace = card(Suit::Hearts, 1);
    let king = card(Suit::Diamonds, 13);

    assert_eq!(ace.war_cmp(king), Ordering::Greater);
    assert_eq!(king.war_cmp(ace), Ordering::Less);
}

#[test]
fn equal_ranks_tie_regardless_of_suit() {
    assert_eq!(
        card(Suit::Spades, 7).war_cmp(card(Suit::Hearts, 7)),
        Ordering::Equal
    );
    assert_eq!(
        card(Suit::Clubs, 1).war_cmp(card(Suit::Diamonds, 1)),
        Ordering::Equal
    );
}

#[test]
fn higher_rank_wins_without_aces() {
    assert_eq!(
        card(Suit::Spades, 13).war_cmp(card(Suit::Hearts, 12)),
        Ordering::Greater
    );
    assert_eq!(
        card(Suit::Spades, 2).war_cmp(card(Suit::Hearts, 9)),
        Ordering::Less
    );
}

#[test]
fn card_display_names() {
    assert_eq!(card(Suit::Spades, 1).name(), "Ace of Spades");
    assert_eq!(card(Suit::Hearts, 10).name(), "10 of Hearts");
    assert_eq!(format!("{}", card(Suit::Clubs, 12)), "Queen of Clubs");
}

#[test]
fn pile_is_fifo() {
    let mut pile = pile(&[card(Suit::Spades, 2), card(Suit::Hearts, 3)]);
    pile.append_to_bottom(card(Suit::Clubs, 4));

    assert_eq!(pile.len(), 3);
    assert_eq!(pile.draw_from_top(), Ok(card(Suit::Spades, 2)));
    assert_eq!(pile.draw_from_top(), Ok(card(Suit::Hearts, 3)));
    assert_eq!(pile.draw_from_top(), Ok(card(Suit::Clubs, 4)));
    assert_eq!(pile.draw_from_top(), Err(EmptyPileError));
}

#[test]
fn standard_deck_has_52_unique_cards() {
    let mut deck = Deck::standard();
    let mut seen = HashSet::new();

    while let Some(card) = deck.draw() {
        assert!(seen.insert(card));
    }
    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn deck_shuffle_folds_discard_back_in() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut deck = Deck::standard();

    for _ in 0..10 {
        let drawn = deck.draw().unwrap();
        deck.add_to_discard(drawn);
    }
    assert_eq!(deck.draw_pile_size(), DECK_SIZE - 10);
    assert_eq!(deck.size(), DECK_SIZE);

    deck.shuffle(&mut rng);
    assert_eq!(deck.draw_pile_size(), DECK_SIZE);
}

#[test]
fn seeded_setup_is_deterministic() {
    let options = GameOptions::default();
    let first = Game::new(options, 42);
    let second = Game::new(options, 42);

    assert_eq!(first.player_one, second.player_one);
    assert_eq!(first.player_two, second.player_two);
    assert_eq!(first.player_one_cards(), 26);
    assert_eq!(first.player_two_cards(), 26);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_ante_cards(2)
        .with_max_rounds(500);

    assert_eq!(options.ante_cards, 2);
    assert_eq!(options.max_rounds, 500);
}

#[test]
fn single_card_round_awards_pot_in_draw_order() {
    let mut player_one = pile(&[card(Suit::Spades, 13)]);
    let mut player_two = pile(&[card(Suit::Hearts, 2)]);
    let mut observer = RecordingObserver::default();

    let result = play_round(&mut player_one, &mut player_two, 3, &mut observer).unwrap();

    assert_eq!(result.winner, Some(Player::One));
    assert_eq!(result.pot_size, 2);
    assert_eq!(result.wars, 0);

    let won: Vec<Card> = player_one.cards().copied().collect();
    assert_eq!(won, vec![card(Suit::Spades, 13), card(Suit::Hearts, 2)]);
    assert!(player_two.is_empty());

    assert_eq!(
        observer.plays,
        vec![(card(Suit::Spades, 13), card(Suit::Hearts, 2))]
    );
    assert_eq!(observer.outcomes, vec![RoundOutcome::PlayerOneWins]);
}

#[test]
fn war_collects_ten_card_pot() {
    // Tie on 7s, three antes each, then King beats 5.
    let mut player_one = pile(&[
        card(Suit::Spades, 7),
        card(Suit::Clubs, 2),
        card(Suit::Clubs, 3),
        card(Suit::Clubs, 4),
        card(Suit::Spades, 13),
    ]);
    let mut player_two = pile(&[
        card(Suit::Hearts, 7),
        card(Suit::Diamonds, 2),
        card(Suit::Diamonds, 3),
        card(Suit::Diamonds, 4),
        card(Suit::Hearts, 5),
    ]);
    let mut observer = RecordingObserver::default();

    let result = play_round(&mut player_one, &mut player_two, 3, &mut observer).unwrap();

    assert_eq!(result.winner, Some(Player::One));
    assert_eq!(result.pot_size, 10);
    assert_eq!(result.wars, 1);
    assert_eq!(player_one.len(), 10);
    assert!(player_two.is_empty());

    // Only the two comparisons are reported, not the face-down antes.
    assert_eq!(observer.plays.len(), 2);
    assert_eq!(
        observer.outcomes,
        vec![RoundOutcome::War, RoundOutcome::PlayerOneWins]
    );

    // Pot lands on the winner's bottom in draw order.
    let won: Vec<Card> = player_one.cards().copied().collect();
    assert_eq!(won[0], card(Suit::Spades, 7));
    assert_eq!(won[1], card(Suit::Hearts, 7));
    assert_eq!(won[8], card(Suit::Spades, 13));
    assert_eq!(won[9], card(Suit::Hearts, 5));
}

#[test]
fn war_abort_strands_the_pot() {
    // Player one cannot cover the three antes; the round ends with the
    // pot undistributed and those cards permanently out of play.
    let mut player_one = pile(&[card(Suit::Spades, 7), card(Suit::Clubs, 2)]);
    let mut player_two = pile(&[
        card(Suit::Hearts, 7),
        card(Suit::Diamonds, 2),
        card(Suit::Diamonds, 3),
        card(Suit::Diamonds, 4),
        card(Suit::Hearts, 5),
    ]);

    let result = play_round(&mut player_one, &mut player_two, 3, &mut NullObserver).unwrap();

    assert_eq!(result.winner, None);
    assert_eq!(result.pot_size, 4);
    assert_eq!(result.wars, 1);
    assert!(player_one.is_empty());
    assert_eq!(player_two.len(), 3);
}

#[test]
fn resolved_rounds_conserve_cards() {
    let mut player_one = pile(&[
        card(Suit::Spades, 9),
        card(Suit::Clubs, 5),
        card(Suit::Clubs, 6),
    ]);
    let mut player_two = pile(&[
        card(Suit::Hearts, 4),
        card(Suit::Diamonds, 5),
        card(Suit::Diamonds, 6),
    ]);
    let before = player_one.len() + player_two.len();

    let result = play_round(&mut player_one, &mut player_two, 3, &mut NullObserver).unwrap();

    assert!(result.winner.is_some());
    assert_eq!(player_one.len() + player_two.len(), before);
}

#[test]
fn custom_ante_count_shrinks_the_war() {
    // Tie on 8s, one ante each, then Ace beats 9.
    let mut player_one = pile(&[
        card(Suit::Spades, 8),
        card(Suit::Clubs, 2),
        card(Suit::Spades, 1),
    ]);
    let mut player_two = pile(&[
        card(Suit::Hearts, 8),
        card(Suit::Diamonds, 2),
        card(Suit::Hearts, 9),
    ]);

    let result = play_round(&mut player_one, &mut player_two, 1, &mut NullObserver).unwrap();

    assert_eq!(result.winner, Some(Player::One));
    assert_eq!(result.pot_size, 6);
    assert_eq!(player_one.len(), 6);
}

#[test]
fn round_on_empty_pile_is_an_error() {
    let mut player_one = Pile::new();
    let mut player_two = pile(&[card(Suit::Hearts, 2)]);

    let result = play_round(&mut player_one, &mut player_two, 3, &mut NullObserver);
    assert_eq!(result.unwrap_err(), EmptyPileError);
}

#[test]
fn game_play_round_counts_rounds() {
    let player_one = pile(&[card(Suit::Spades, 13), card(Suit::Clubs, 3)]);
    let player_two = pile(&[card(Suit::Hearts, 2), card(Suit::Diamonds, 4)]);
    let mut game = Game::from_piles(player_one, player_two, GameOptions::default());

    assert_eq!(game.rounds_played(), 0);
    game.play_round(&mut NullObserver).unwrap();
    assert_eq!(game.rounds_played(), 1);
    assert_eq!(game.cards_in_play(), 4);
}

#[test]
fn simultaneous_exhaustion_has_no_winner() {
    // A tie with no cards left to ante empties both piles at once.
    let player_one = pile(&[card(Suit::Spades, 7)]);
    let player_two = pile(&[card(Suit::Hearts, 7)]);
    let mut game = Game::from_piles(player_one, player_two, GameOptions::default());

    let result = game.play_game(&mut NullObserver).unwrap();

    assert_eq!(result.winner, None);
    assert_eq!(result.rounds, 1);
    assert_eq!(result.player_one_cards, 0);
    assert_eq!(result.player_two_cards, 0);
    assert!(game.is_over());
}

#[test]
fn full_game_runs_to_completion_under_cap() {
    let options = GameOptions::default().with_max_rounds(5_000);
    let mut game = Game::new(options, 7);

    let result = game.play_game(&mut NullObserver).unwrap();

    assert!(result.rounds >= 1);
    assert!(result.rounds <= 5_000);
    assert!(result.player_one_cards + result.player_two_cards <= DECK_SIZE);
    assert_eq!(result.player_one_cards, game.player_one_cards());
    assert_eq!(result.player_two_cards, game.player_two_cards());

    match result.winner {
        Some(Player::One) => assert_eq!(result.player_two_cards, 0),
        Some(Player::Two) => assert_eq!(result.player_one_cards, 0),
        None => {}
    }
}
