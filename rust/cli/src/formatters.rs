//! Text formatting for hands and end-of-session summaries.

use blackjack_engine::bank::format_chips;
use blackjack_engine::hand::Hand;
use blackjack_engine::player::PlayerRegistry;
use blackjack_engine::round::RoundReport;

/// One table line for a hand, showing only what the players can see.
///
/// ```rust
/// use blackjack_engine::cards::{Card, Rank, Suit};
/// use blackjack_engine::hand::Hand;
/// use blackjack_engine::player::{PlayerId, Seat};
/// use blackjack_cli::formatters::format_hand;
///
/// let mut hand = Hand::new(Seat::Player(PlayerId(1)));
/// hand.add(Card::new(Rank::Ace, Suit::Spades));
/// hand.add(Card::new(Rank::Six, Suit::Hearts));
/// assert_eq!(format_hand(&hand), "Player 1: Ace of Spades, Six of Hearts (soft 17)");
/// ```
pub fn format_hand(hand: &Hand) -> String {
    let value = hand.visible_value();
    let all_visible = hand.cards().iter().all(|c| c.is_face_up());
    let label = if !all_visible {
        format!("showing {}", value)
    } else if hand.is_blackjack() {
        "blackjack".to_string()
    } else if hand.is_bust() {
        format!("bust {}", value)
    } else if hand.is_soft() {
        format!("soft {}", value)
    } else {
        value.to_string()
    };
    format!("{}: {} ({})", hand.seat(), hand, label)
}

/// Short per-round summary: one line per player.
pub fn format_round_summary(report: &RoundReport) -> Vec<String> {
    report
        .results
        .iter()
        .map(|r| {
            let net = r.net();
            let sign = if net < 0 { "-" } else { "+" };
            format!(
                "{}: {} with {} vs {} ({}{})",
                r.player,
                r.outcome.as_str(),
                r.value,
                report.dealer_value,
                sign,
                format_chips(net.unsigned_abs())
            )
        })
        .collect()
}

/// Final balances, one line per player.
pub fn format_standings(registry: &PlayerRegistry) -> Vec<String> {
    const WIDTH: usize = 12;
    registry
        .ids()
        .filter_map(|id| {
            registry
                .bank(id)
                .ok()
                .map(|b| format!("{:<WIDTH$}{:>WIDTH$}", id.to_string(), format_chips(b.balance())))
        })
        .collect()
}
