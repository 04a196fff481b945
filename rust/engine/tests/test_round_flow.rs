use blackjack_engine::cards::{Card, Rank as R, Suit as S};
use blackjack_engine::deck::Deck;
use blackjack_engine::errors::GameError;
use blackjack_engine::interaction::{IntegerBounds, Interaction, ScriptedInteraction};
use blackjack_engine::player::{PlayerId, PlayerRegistry};
use blackjack_engine::round::{Phase, RoundEngine};
use blackjack_engine::rules::Outcome;

/// Deals dealer first, then players in order, then hits and dealer draws.
fn stacked(ranks: &[R]) -> Deck {
    Deck::stacked(ranks.iter().map(|&r| Card::new(r, S::Clubs)).collect())
}

fn engine(players: usize) -> RoundEngine {
    RoundEngine::new(PlayerRegistry::with_default_balance(players).unwrap(), Some(1))
}

fn balance(engine: &RoundEngine, id: usize) -> u64 {
    engine.registry().bank(PlayerId(id)).unwrap().balance()
}

#[test]
fn player_blackjack_pays_two_and_a_half_times() {
    let mut eng = engine(1);
    let deck = stacked(&[R::Nine, R::Seven, R::Ace, R::King, R::Two]);
    let mut io = ScriptedInteraction::new(["10", "stay"]);
    let report = eng.play_round_with_deck(deck, &mut io).unwrap();

    let r = &report.results[0];
    assert_eq!(r.outcome, Outcome::Blackjack);
    assert_eq!(r.credit, 2_500);
    assert_eq!(balance(&eng, 1), 10_000 - 1_000 + 2_500);
    assert_eq!(r.net(), 1_500);
}

#[test]
fn bust_forfeits_the_stake() {
    let mut eng = engine(1);
    let deck = stacked(&[R::Ten, R::Seven, R::Ten, R::Five, R::Eight, R::Two]);
    let mut io = ScriptedInteraction::new(["20", "hit"]);
    let report = eng.play_round_with_deck(deck, &mut io).unwrap();

    assert_eq!(report.results[0].outcome, Outcome::Bust);
    assert_eq!(report.results[0].value, 23);
    assert_eq!(balance(&eng, 1), 8_000);
    assert!(io.messages().iter().any(|m| m == "Player 1 busted!"));
    // every player busted, so the dealer never draws
    assert!(!report.dealer_played);
    assert_eq!(report.dealer_cards.len(), 2);
}

#[test]
fn equal_totals_push() {
    let mut eng = engine(1);
    let deck = stacked(&[R::Ten, R::Eight, R::Nine, R::Nine]);
    let mut io = ScriptedInteraction::new(["15", "stay"]);
    let report = eng.play_round_with_deck(deck, &mut io).unwrap();

    assert_eq!(report.results[0].outcome, Outcome::Push);
    assert_eq!(report.results[0].net(), 0);
    assert_eq!(balance(&eng, 1), 10_000);
}

#[test]
fn dealer_stops_at_soft_17() {
    let mut eng = engine(1);
    let deck = stacked(&[R::Ace, R::Six, R::Ten, R::Eight, R::Five]);
    let mut io = ScriptedInteraction::new(["10", "STAY"]);
    let report = eng.play_round_with_deck(deck, &mut io).unwrap();

    assert_eq!(report.dealer_value, 17);
    assert_eq!(report.dealer_cards.len(), 2);
    assert_eq!(report.results[0].outcome, Outcome::Win);
    assert_eq!(balance(&eng, 1), 11_000);
}

#[test]
fn dealer_draws_below_17_and_can_bust() {
    let mut eng = engine(2);
    // dealer 16, P1 15 hits into bust, P2 stays on 17, dealer draws a King
    let deck = stacked(&[
        R::Ten, R::Six, R::Ten, R::Five, R::Ten, R::Seven, R::Nine, R::King,
    ]);
    let mut io = ScriptedInteraction::new(["10", "10", "hit", "stay"]);
    let report = eng.play_round_with_deck(deck, &mut io).unwrap();

    assert!(report.dealer_played);
    assert_eq!(report.dealer_value, 26);
    assert_eq!(report.results[0].outcome, Outcome::Bust);
    assert_eq!(report.results[1].outcome, Outcome::Win);
    assert_eq!(balance(&eng, 1), 9_000);
    assert_eq!(balance(&eng, 2), 11_000);
}

#[test]
fn dealer_blackjack_only_pushes_against_blackjack() {
    let mut eng = engine(2);
    let deck = stacked(&[R::King, R::Ace, R::Ace, R::Queen, R::Ten, R::Queen]);
    let mut io = ScriptedInteraction::new(["10", "10", "stay", "stay"]);
    let report = eng.play_round_with_deck(deck, &mut io).unwrap();

    assert_eq!(report.results[0].outcome, Outcome::Push);
    assert_eq!(report.results[1].outcome, Outcome::Lose);
    assert_eq!(balance(&eng, 1), 10_000);
    assert_eq!(balance(&eng, 2), 9_000);
}

#[test]
fn hole_card_stays_hidden_until_dealer_turn() {
    let mut eng = engine(1);
    let deck = stacked(&[R::Ten, R::Seven, R::Ten, R::Nine]);
    let mut io = ScriptedInteraction::new(["5", "stay"]);
    eng.play_round_with_deck(deck, &mut io).unwrap();

    let msgs = io.messages();
    let hidden = msgs
        .iter()
        .position(|m| m == "Dealer's hand: Face Down, Seven of Clubs")
        .expect("hidden dealer hand shown to players");
    let revealed = msgs
        .iter()
        .position(|m| m == "Dealer's hand: Ten of Clubs, Seven of Clubs")
        .expect("dealer hand revealed");
    assert!(hidden < revealed);
}

#[test]
fn invalid_bets_are_reprompted_without_touching_balance() {
    let mut eng = engine(1);
    let deck = stacked(&[R::Ten, R::Seven, R::Ten, R::Nine]);
    let mut io = ScriptedInteraction::new(["abc", "0", "500", "10", "stay"]);
    let report = eng.play_round_with_deck(deck, &mut io).unwrap();

    assert_eq!(report.results[0].bet, 1_000);
    assert_eq!(report.results[0].balance_before, 10_000);
    let bet_prompts = io
        .prompts()
        .iter()
        .filter(|p| p.contains("amount you would like to bet"))
        .count();
    assert_eq!(bet_prompts, 4);
}

#[test]
fn invalid_action_is_reprompted() {
    let mut eng = engine(1);
    let deck = stacked(&[R::Ten, R::Seven, R::Ten, R::Two, R::Six]);
    let mut io = ScriptedInteraction::new(["5", "double", "Hit", "stay"]);
    let report = eng.play_round_with_deck(deck, &mut io).unwrap();

    assert_eq!(report.results[0].value, 18);
    assert!(io.messages().iter().any(|m| m == "Invalid input."));
}

#[test]
fn bankrupt_player_must_top_up_after_reset() {
    let mut eng = RoundEngine::new(PlayerRegistry::new(1, 1).unwrap(), Some(1));
    let deck = stacked(&[R::Ten, R::Nine, R::Ten, R::Seven]);
    let mut io = ScriptedInteraction::new(["1", "stay", "0", "5"]);
    let report = eng.play_round_with_deck(deck, &mut io).unwrap();

    assert_eq!(report.results[0].outcome, Outcome::Lose);
    assert_eq!(report.results[0].balance_after, 0);
    assert_eq!(eng.phase(), Phase::Betting);
    assert_eq!(io.pending(), 2, "no deposit is asked for before the report");

    eng.top_up(&mut io).unwrap();
    assert_eq!(balance(&eng, 1), 500);
    let deposit_prompts = io
        .prompts()
        .iter()
        .filter(|p| p.contains("enter an amount to deposit"))
        .count();
    assert_eq!(deposit_prompts, 2, "a deposit below 1 is rejected");
}

#[test]
fn closed_input_at_top_up_keeps_the_finished_round() {
    let mut eng = RoundEngine::new(PlayerRegistry::new(1, 1).unwrap(), Some(1));
    let deck = stacked(&[R::Ten, R::Nine, R::Ten, R::Seven]);
    let mut io = ScriptedInteraction::new(["1", "stay"]);
    let report = eng.play_round_with_deck(deck, &mut io).unwrap();
    assert_eq!(report.round, 1);
    assert_eq!(report.results[0].outcome, Outcome::Lose);

    assert_eq!(eng.top_up(&mut io), Err(GameError::InputClosed));
    assert_eq!(eng.rounds_played(), 1);
    assert_eq!(balance(&eng, 1), 0);
}

/// Scripted answers, but showing a message that contains `fail_on` fails.
struct BrokenDisplay {
    inner: ScriptedInteraction,
    fail_on: &'static str,
}

impl Interaction for BrokenDisplay {
    fn request_integer(&mut self, prompt: &str, bounds: IntegerBounds) -> Result<u64, GameError> {
        self.inner.request_integer(prompt, bounds)
    }

    fn request_choice(&mut self, prompt: &str, options: &[&str]) -> Result<usize, GameError> {
        self.inner.request_choice(prompt, options)
    }

    fn display(&mut self, message: &str) -> Result<(), GameError> {
        if message.contains(self.fail_on) {
            return Err(GameError::Io("broken pipe".to_string()));
        }
        self.inner.display(message)
    }
}

#[test]
fn failed_payout_message_does_not_pay_twice() {
    let mut eng = engine(1);
    // dealer 19, player 20
    let deck = stacked(&[R::Ten, R::Nine, R::Ten, R::Ten]);
    let mut io = BrokenDisplay {
        inner: ScriptedInteraction::new(["10", "stay"]),
        fail_on: "balance after round",
    };
    let err = eng.play_round_with_deck(deck, &mut io).unwrap_err();

    assert_eq!(err, GameError::Io("broken pipe".to_string()));
    assert_eq!(balance(&eng, 1), 11_000, "stake back plus winnings, once");
    assert_eq!(eng.rounds_played(), 1);
    assert_eq!(eng.phase(), Phase::Betting);
}

#[test]
fn failed_message_before_payout_refunds_the_stake() {
    let mut eng = engine(1);
    let deck = stacked(&[R::Ten, R::Nine, R::Ten, R::Ten]);
    let mut io = BrokenDisplay {
        inner: ScriptedInteraction::new(["10", "stay"]),
        fail_on: "Dealer's hand",
    };
    let err = eng.play_round_with_deck(deck, &mut io).unwrap_err();

    assert_eq!(err, GameError::Io("broken pipe".to_string()));
    assert_eq!(balance(&eng, 1), 10_000);
    assert_eq!(eng.rounds_played(), 0);
}

#[test]
fn closed_input_refunds_open_bets() {
    let mut eng = engine(2);
    let deck = stacked(&[R::Ten, R::Seven, R::Ten, R::Nine, R::Two, R::Three]);
    let mut io = ScriptedInteraction::new(["10", "25"]);
    let err = eng.play_round_with_deck(deck, &mut io).unwrap_err();

    assert_eq!(err, GameError::InputClosed);
    assert_eq!(balance(&eng, 1), 10_000);
    assert_eq!(balance(&eng, 2), 10_000);
    assert_eq!(eng.rounds_played(), 0);
}

#[test]
fn exhausted_deck_is_an_error() {
    let mut eng = engine(1);
    let deck = stacked(&[R::Ten, R::Seven, R::Ten]);
    let mut io = ScriptedInteraction::new(["10"]);
    let err = eng.play_round_with_deck(deck, &mut io).unwrap_err();
    assert_eq!(err, GameError::EmptyDeck);
    assert_eq!(balance(&eng, 1), 10_000);
}

#[test]
fn rounds_start_from_fresh_hands() {
    let mut eng = engine(1);
    let mut io = ScriptedInteraction::new(["5", "stay", "5", "stay"]);
    let first = eng
        .play_round_with_deck(stacked(&[R::Ten, R::Seven, R::Ten, R::Nine]), &mut io)
        .unwrap();
    let second = eng
        .play_round_with_deck(stacked(&[R::Ten, R::Eight, R::Two, R::Three, R::Four]), &mut io)
        .unwrap();

    assert_eq!(first.round, 1);
    assert_eq!(second.round, 2);
    assert_eq!(second.dealer_cards.len(), 2);
    assert_eq!(second.results[0].cards.len(), 2);
    assert_eq!(second.results[0].value, 5);
    assert_eq!(eng.rounds_played(), 2);
}

#[test]
fn shuffled_rounds_record_their_seed() {
    let mut eng = engine(3);
    let mut io = ScriptedInteraction::new(["1", "1", "1", "stay", "stay", "stay"]);
    let report = eng.play_round(&mut io).unwrap();
    assert!(report.deck_seed.is_some());
    assert_eq!(report.results.len(), 3);
    let total_cards: usize = report.results.iter().map(|r| r.cards.len()).sum::<usize>()
        + report.dealer_cards.len();
    assert!(total_cards >= 8);
}
