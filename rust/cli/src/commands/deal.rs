//! Deal command handler.
//!
//! Shuffles one deck, deals the opening two cards to the dealer and every
//! player, and prints the table the way the players see it: the dealer's
//! hole card stays face down.

use crate::error::CliError;
use crate::formatters::format_hand;
use blackjack_engine::deck::Deck;
use blackjack_engine::hand::Hand;
use blackjack_engine::player::{PlayerId, Seat};
use std::io::Write;

/// Handle the deal command.
///
/// # Examples
///
/// ```ignore
/// // Internal command handler - not part of public API
/// let mut out = Vec::new();
/// handle_deal_command(2, Some(42), &mut out).unwrap();
/// ```
pub fn handle_deal_command(
    players: usize,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();

    let mut dealer = Hand::new(Seat::Dealer);
    let mut hands: Vec<Hand> = (1..=players)
        .map(|i| Hand::new(Seat::Player(PlayerId(i))))
        .collect();
    deck.deal_initial(std::iter::once(&mut dealer).chain(hands.iter_mut()))?;

    writeln!(out, "deal: players={} seed={}", players, seed)?;
    writeln!(out, "{}", format_hand(&dealer))?;
    for hand in &hands {
        writeln!(out, "{}", format_hand(hand))?;
    }
    writeln!(out, "Cards left: {}", deck.remaining())?;
    Ok(())
}
