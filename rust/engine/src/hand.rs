use std::fmt;

use crate::cards::Card;
use crate::player::Seat;

pub const BLACKJACK: u8 = 21;

/// The cards held by one seat for the current round, in draw order.
///
/// Totals are recomputed from the cards on every query: each Ace starts at
/// 11 and is counted as 1, one at a time, while the total exceeds 21. No
/// card is modified by evaluating the hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    seat: Seat,
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            cards: Vec::new(),
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Best total not exceeding 21 when one exists, otherwise the lowest
    /// achievable total.
    pub fn value(&self) -> u8 {
        best_total(self.cards.iter())
    }

    /// Total with every Ace counted as 1.
    pub fn hard_total(&self) -> u8 {
        let total: u32 = self
            .cards
            .iter()
            .map(|c| if c.rank.is_ace() { 1 } else { u32::from(c.value()) })
            .sum();
        total.min(u32::from(u8::MAX)) as u8
    }

    /// Number of Aces the best total has to count as 1.
    pub fn aces_counted_low(&self) -> usize {
        let raw: u32 = self.cards.iter().map(|c| u32::from(c.value())).sum();
        let best = u32::from(self.value());
        ((raw - best) / 10) as usize
    }

    /// True when an Ace is still counted as 11.
    pub fn is_soft(&self) -> bool {
        let aces = self.cards.iter().filter(|c| c.rank.is_ace()).count();
        aces > self.aces_counted_low()
    }

    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// A natural: exactly two cards totalling 21.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Turns the hole card (and any other face-down card) face up.
    pub fn reveal(&mut self) {
        for c in &mut self.cards {
            c.turn_face_up();
        }
    }

    /// Total of the face-up cards only.
    pub fn visible_value(&self) -> u8 {
        best_total(self.cards.iter().filter(|c| c.is_face_up()))
    }
}

fn best_total<'a>(cards: impl Iterator<Item = &'a Card>) -> u8 {
    let mut total: u32 = 0;
    let mut soft_aces = 0;
    for c in cards {
        total += u32::from(c.value());
        if c.rank.is_ace() {
            soft_aces += 1;
        }
    }
    while total > u32::from(BLACKJACK) && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }
    total.min(u32::from(u8::MAX)) as u8
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown: Vec<String> = self.cards.iter().map(|c| c.to_string()).collect();
        f.write_str(&shown.join(", "))
    }
}
