use serde::{Deserialize, Serialize};

use crate::bank::{Bank, CENTS_PER_CHIP};
use crate::errors::GameError;
use crate::hand::Hand;

/// The dealer stands on any total at or above this, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

/// Validates a bet in whole chips against the player's bank.
///
/// Runs before any withdrawal is attempted, so a rejected bet never
/// touches the balance.
///
/// # Returns
///
/// The bet converted to cents, ready to withdraw.
///
/// # Errors
///
/// - [`GameError::InvalidBet`] - the bet is zero
/// - [`GameError::InsufficientFunds`] - the bet exceeds the whole chips held
///
/// # Examples
///
/// ```
/// use blackjack_engine::bank::Bank;
/// use blackjack_engine::errors::GameError;
/// use blackjack_engine::rules::validate_bet;
///
/// let bank = Bank::with_chips(50);
/// assert_eq!(validate_bet(20, &bank), Ok(2_000));
/// assert!(matches!(validate_bet(0, &bank), Err(GameError::InvalidBet { .. })));
/// assert!(matches!(
///     validate_bet(51, &bank),
///     Err(GameError::InsufficientFunds { .. })
/// ));
/// ```
pub fn validate_bet(chips: u64, bank: &Bank) -> Result<u64, GameError> {
    if chips == 0 {
        return Err(GameError::InvalidBet {
            amount: chips,
            minimum: 1,
        });
    }
    if chips > bank.chips() {
        return Err(GameError::InsufficientFunds {
            requested: chips,
            available: bank.chips(),
        });
    }
    Ok(chips * CENTS_PER_CHIP)
}

/// Fixed dealer policy: draw below 17, stand on every 17 including soft.
pub fn dealer_should_draw(hand: &Hand) -> bool {
    !hand.is_bust() && hand.value() < DEALER_STANDS_ON
}

/// How a player's hand fared against the dealer's.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Player went over 21; loses regardless of the dealer
    Bust,
    /// Dealer wins
    Lose,
    /// Tie; stake returned
    Push,
    /// Even-money win
    Win,
    /// Natural paid 3:2
    Blackjack,
}

impl Outcome {
    /// Amount credited back to the bank for a stake of `bet` cents. The
    /// stake was withdrawn at betting time, so a win credits stake plus profit.
    pub fn credit(self, bet: u64) -> u64 {
        match self {
            Outcome::Bust | Outcome::Lose => 0,
            Outcome::Push => bet,
            Outcome::Win => bet * 2,
            Outcome::Blackjack => bet * 5 / 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Bust => "bust",
            Outcome::Lose => "lose",
            Outcome::Push => "push",
            Outcome::Win => "win",
            Outcome::Blackjack => "blackjack",
        }
    }
}

/// Settles one player hand against the dealer's final hand.
///
/// Precedence: player bust, dealer natural, player natural, dealer bust,
/// then a straight comparison of totals.
pub fn settle(player: &Hand, dealer: &Hand) -> Outcome {
    if player.is_bust() {
        return Outcome::Bust;
    }
    if dealer.is_blackjack() {
        return if player.is_blackjack() {
            Outcome::Push
        } else {
            Outcome::Lose
        };
    }
    if player.is_blackjack() {
        return Outcome::Blackjack;
    }
    if dealer.is_bust() {
        return Outcome::Win;
    }
    match player.value().cmp(&dealer.value()) {
        std::cmp::Ordering::Greater => Outcome::Win,
        std::cmp::Ordering::Equal => Outcome::Push,
        std::cmp::Ordering::Less => Outcome::Lose,
    }
}
