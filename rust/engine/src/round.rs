use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::bank::{format_chips, CENTS_PER_CHIP};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::interaction::{IntegerBounds, Interaction};
use crate::player::{PlayerId, PlayerRegistry, Seat};
use crate::rules::{dealer_should_draw, settle, validate_bet, Outcome};

const HIT_OR_STAY: [&str; 2] = ["hit", "stay"];
const HIT: usize = 0;

/// Stages of a round, visited strictly in this order every round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Betting,
    Dealing,
    PlayerTurns,
    DealerTurn,
    Payout,
    Reset,
}

impl Phase {
    pub const ORDER: [Phase; 6] = [
        Phase::Betting,
        Phase::Dealing,
        Phase::PlayerTurns,
        Phase::DealerTurn,
        Phase::Payout,
        Phase::Reset,
    ];

    /// Reset loops back to betting.
    pub fn next(self) -> Phase {
        match self {
            Phase::Betting => Phase::Dealing,
            Phase::Dealing => Phase::PlayerTurns,
            Phase::PlayerTurns => Phase::DealerTurn,
            Phase::DealerTurn => Phase::Payout,
            Phase::Payout => Phase::Reset,
            Phase::Reset => Phase::Betting,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Betting => "betting",
            Phase::Dealing => "dealing",
            Phase::PlayerTurns => "player_turns",
            Phase::DealerTurn => "dealer_turn",
            Phase::Payout => "payout",
            Phase::Reset => "reset",
        }
    }
}

/// Everything that lives for exactly one round. Built empty at betting and
/// dropped at reset; nothing carries over into the next round.
#[derive(Debug)]
pub struct RoundState {
    deck: Deck,
    dealer: Hand,
    players: Vec<Hand>,
    /// Stake in cents, aligned with `players`
    bets: Vec<u64>,
    /// Balance in cents before the stake was withdrawn, aligned with `players`
    opening_balances: Vec<u64>,
    /// Set once every credit has been paid; stakes are no longer refundable
    settled: bool,
}

impl RoundState {
    pub fn new(deck: Deck, registry: &PlayerRegistry) -> Self {
        Self {
            deck,
            dealer: Hand::new(Seat::Dealer),
            players: registry.ids().map(|id| Hand::new(Seat::Player(id))).collect(),
            bets: Vec::with_capacity(registry.len()),
            opening_balances: Vec::with_capacity(registry.len()),
            settled: false,
        }
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn players(&self) -> &[Hand] {
        &self.players
    }

    pub fn bets(&self) -> &[u64] {
        &self.bets
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
}

/// Result for one player at the end of a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatResult {
    pub player: PlayerId,
    pub cards: Vec<Card>,
    pub value: u8,
    /// Stake in cents
    pub bet: u64,
    pub outcome: Outcome,
    /// Amount paid back in cents
    pub credit: u64,
    /// Balance in cents before betting
    pub balance_before: u64,
    /// Balance in cents after payout
    pub balance_after: u64,
}

impl SeatResult {
    /// Change in balance over the round, in cents.
    pub fn net(&self) -> i64 {
        self.balance_after as i64 - self.balance_before as i64
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RoundReport {
    pub round: u32,
    /// Seed of the deck used, when it was shuffled from one
    pub deck_seed: Option<u64>,
    pub dealer_cards: Vec<Card>,
    pub dealer_value: u8,
    /// Whether the dealer played out the hand (skipped when every player busts)
    pub dealer_played: bool,
    pub results: Vec<SeatResult>,
}

/// Runs rounds for a fixed table of players.
///
/// Banks persist in the [`PlayerRegistry`] across rounds; every round gets a
/// fresh deck, fresh hands and a fresh bet list.
///
/// # Examples
///
/// ```
/// use blackjack_engine::interaction::ScriptedInteraction;
/// use blackjack_engine::player::PlayerRegistry;
/// use blackjack_engine::round::RoundEngine;
///
/// let registry = PlayerRegistry::with_default_balance(1).unwrap();
/// let mut engine = RoundEngine::new(registry, Some(42));
///
/// // bet 10, then stay
/// let mut io = ScriptedInteraction::new(["10", "stay"]);
/// let report = engine.play_round(&mut io).unwrap();
/// assert_eq!(report.round, 1);
/// assert_eq!(report.results.len(), 1);
/// ```
#[derive(Debug)]
pub struct RoundEngine {
    registry: PlayerRegistry,
    rng: ChaCha20Rng,
    seed: u64,
    rounds_played: u32,
    phase: Phase,
}

impl RoundEngine {
    pub fn new(registry: PlayerRegistry, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            registry,
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed,
            rounds_played: 0,
            phase: Phase::Betting,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut PlayerRegistry {
        &mut self.registry
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Plays one round on a freshly built and shuffled deck.
    pub fn play_round(&mut self, io: &mut dyn Interaction) -> Result<RoundReport, GameError> {
        let deck_seed: u64 = self.rng.random();
        let mut deck = Deck::new_with_seed(deck_seed);
        deck.shuffle();
        let mut report = self.play_round_with_deck(deck, io)?;
        report.deck_seed = Some(deck_seed);
        Ok(report)
    }

    /// Plays one round dealing from `deck` as given.
    ///
    /// If input ends before payout, stakes already withdrawn are returned
    /// to their banks before the error is passed on. Once payout has
    /// credited every player the round counts as played even if a later
    /// message cannot be shown.
    ///
    /// The round stops at reset. Call [`RoundEngine::top_up`] before the
    /// next round to collect deposits from players left without chips.
    pub fn play_round_with_deck(
        &mut self,
        deck: Deck,
        io: &mut dyn Interaction,
    ) -> Result<RoundReport, GameError> {
        top_up_bankrupt(&mut self.registry, io)?;

        let round = self.rounds_played + 1;
        let mut state = RoundState::new(deck, &self.registry);
        match self.run_phases(round, &mut state, io) {
            Ok(report) => {
                self.rounds_played = round;
                self.enter(round, Phase::Reset);
                drop(state);
                self.enter(round, Phase::Betting);
                Ok(report)
            }
            Err(e) if state.settled => {
                self.rounds_played = round;
                self.phase = Phase::Betting;
                tracing::warn!(round, error = %e, "round settled but not fully reported");
                Err(e)
            }
            Err(e) => {
                refund_bets(&mut self.registry, &state)?;
                self.phase = Phase::Betting;
                tracing::warn!(round, error = %e, "round abandoned");
                Err(e)
            }
        }
    }

    /// Reset step between rounds: every player below one chip must deposit
    /// before the next round's betting.
    pub fn top_up(&mut self, io: &mut dyn Interaction) -> Result<(), GameError> {
        tracing::debug!(round = self.rounds_played, "reset top-up");
        top_up_bankrupt(&mut self.registry, io)
    }

    fn run_phases(
        &mut self,
        round: u32,
        state: &mut RoundState,
        io: &mut dyn Interaction,
    ) -> Result<RoundReport, GameError> {
        self.enter(round, Phase::Betting);
        take_bets(&mut self.registry, state, io)?;

        self.enter(round, Phase::Dealing);
        deal(state)?;

        self.enter(round, Phase::PlayerTurns);
        player_turns(state, io)?;

        self.enter(round, Phase::DealerTurn);
        let dealer_played = dealer_turn(state, io)?;

        self.enter(round, Phase::Payout);
        let results = payout(&mut self.registry, state, io)?;

        Ok(RoundReport {
            round,
            deck_seed: None,
            dealer_cards: state.dealer.cards().to_vec(),
            dealer_value: state.dealer.value(),
            dealer_played,
            results,
        })
    }

    fn enter(&mut self, round: u32, phase: Phase) {
        tracing::debug!(round, from = self.phase.as_str(), to = phase.as_str(), "phase");
        self.phase = phase;
    }
}

/// Forces a deposit of at least one chip from every player below one chip.
pub fn top_up_bankrupt(
    registry: &mut PlayerRegistry,
    io: &mut dyn Interaction,
) -> Result<(), GameError> {
    let ids: Vec<PlayerId> = registry.ids().collect();
    for id in ids {
        if !registry.bank(id)?.is_bankrupt() {
            continue;
        }
        io.display(&format!("{} is out of chips.", id))?;
        let chips = io.request_integer(
            &format!("{}, please enter an amount to deposit.", id),
            IntegerBounds::at_least(1),
        )?;
        let bank = registry.bank_mut(id)?;
        bank.deposit(chips.saturating_mul(CENTS_PER_CHIP));
        tracing::info!(player = id.0, chips, "top-up deposit");
    }
    Ok(())
}

fn take_bets(
    registry: &mut PlayerRegistry,
    state: &mut RoundState,
    io: &mut dyn Interaction,
) -> Result<(), GameError> {
    let ids: Vec<PlayerId> = registry.ids().collect();
    for id in ids {
        let bank = registry.bank_mut(id)?;
        let opening = bank.balance();
        io.display(&format!("{}'s balance: {}", id, format_chips(opening)))?;
        loop {
            let chips = io.request_integer(
                &format!("{}, enter the amount you would like to bet", id),
                IntegerBounds::between(1, bank.chips()),
            )?;
            let stake = match validate_bet(chips, bank) {
                Ok(stake) => stake,
                Err(e) => {
                    io.display(&e.to_string())?;
                    continue;
                }
            };
            if !bank.withdraw(stake) {
                io.display("Bet exceeds balance.")?;
                continue;
            }
            state.bets.push(stake);
            state.opening_balances.push(opening);
            tracing::info!(player = id.0, chips, "bet placed");
            io.display(&format!("Bet of {} accepted.", format_chips(stake)))?;
            break;
        }
    }
    Ok(())
}

fn deal(state: &mut RoundState) -> Result<(), GameError> {
    let RoundState {
        deck,
        dealer,
        players,
        ..
    } = state;
    deck.deal_initial(std::iter::once(dealer).chain(players.iter_mut()))
}

fn player_turns(state: &mut RoundState, io: &mut dyn Interaction) -> Result<(), GameError> {
    io.display(&format!("Dealer's hand: {}", state.dealer))?;
    let RoundState { deck, players, .. } = state;
    for hand in players.iter_mut() {
        let seat = hand.seat();
        io.display(&format!("{}: {}", seat, hand))?;
        while !hand.is_bust() {
            let choice = io.request_choice(&format!("{}, enter hit or stay.", seat), &HIT_OR_STAY)?;
            if choice != HIT {
                tracing::debug!(%seat, value = hand.value(), "stay");
                break;
            }
            hand.add(deck.draw()?);
            io.display(&format!("{}: {}", seat, hand))?;
            if hand.is_bust() {
                tracing::info!(%seat, value = hand.value(), "bust");
                io.display(&format!("{} busted!", seat))?;
            }
        }
    }
    Ok(())
}

/// Reveals the hole card and plays the dealer's fixed policy. Returns
/// whether the dealer played (skipped when every player busted).
fn dealer_turn(state: &mut RoundState, io: &mut dyn Interaction) -> Result<bool, GameError> {
    state.dealer.reveal();
    io.display(&format!("Dealer's hand: {}", state.dealer))?;
    if state.players.iter().all(Hand::is_bust) {
        tracing::debug!("all players bust, dealer stands");
        return Ok(false);
    }
    while dealer_should_draw(&state.dealer) {
        let c = state.deck.draw()?;
        state.dealer.add(c);
        io.display(&format!("Dealer's hand: {}", state.dealer))?;
    }
    tracing::info!(value = state.dealer.value(), bust = state.dealer.is_bust(), "dealer stands");
    Ok(true)
}

fn payout(
    registry: &mut PlayerRegistry,
    state: &mut RoundState,
    io: &mut dyn Interaction,
) -> Result<Vec<SeatResult>, GameError> {
    let dealer = &state.dealer;
    let mut results = Vec::with_capacity(state.players.len());
    for ((hand, &bet), &opening) in state
        .players
        .iter()
        .zip(&state.bets)
        .zip(&state.opening_balances)
    {
        let Some(id) = hand.seat().player_id() else {
            continue;
        };
        let outcome = settle(hand, dealer);
        let credit = outcome.credit(bet);
        let bank = registry.bank_mut(id)?;
        bank.deposit(credit);
        tracing::info!(player = id.0, outcome = outcome.as_str(), bet, credit, "settled");

        results.push(SeatResult {
            player: id,
            cards: hand.cards().to_vec(),
            value: hand.value(),
            bet,
            outcome,
            credit,
            balance_before: opening,
            balance_after: bank.balance(),
        });
    }
    state.settled = true;

    for (r, hand) in results.iter().zip(&state.players) {
        io.display(&format!(
            "{}'s balance before round: {}.",
            r.player,
            format_chips(r.balance_before)
        ))?;
        io.display(&describe_outcome(r.player, r.outcome, hand, &state.dealer, r.bet))?;
        io.display(&format!(
            "{}'s balance after round: {}.",
            r.player,
            format_chips(r.balance_after)
        ))?;
    }
    Ok(results)
}

fn refund_bets(registry: &mut PlayerRegistry, state: &RoundState) -> Result<(), GameError> {
    for (hand, &bet) in state.players.iter().zip(&state.bets) {
        if let Some(id) = hand.seat().player_id() {
            registry.bank_mut(id)?.deposit(bet);
        }
    }
    Ok(())
}

fn describe_outcome(id: PlayerId, outcome: Outcome, hand: &Hand, dealer: &Hand, bet: u64) -> String {
    let bet = format_chips(bet);
    match outcome {
        Outcome::Bust => format!("{} bust! Lost {}.", id, bet),
        Outcome::Push if dealer.is_blackjack() => format!(
            "Tie, both the Dealer and {} got blackjacks. {} gets their {} bet back.",
            id, id, bet
        ),
        Outcome::Lose if dealer.is_blackjack() => format!(
            "Dealer's blackjack beats a {}. Lost {} bet.",
            hand.value(),
            bet
        ),
        Outcome::Blackjack => format!("{} got a blackjack!", id),
        Outcome::Win if dealer.is_bust() => {
            format!("The Dealer has bust. {} has won with {} bet.", id, bet)
        }
        Outcome::Win => format!(
            "{}'s {} beats Dealer's {}. Won {}.",
            id,
            hand.value(),
            dealer.value(),
            bet
        ),
        Outcome::Push => format!(
            "A push. {} has {}, Dealer also has {}. {} gets their {} bet back.",
            id,
            hand.value(),
            dealer.value(),
            id,
            bet
        ),
        Outcome::Lose => format!(
            "Dealer's {} beats {}'s {}. Lost {}.",
            dealer.value(),
            id,
            hand.value(),
            bet
        ),
    }
}
