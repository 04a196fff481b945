use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;
use crate::hand::Hand;

/// A single 52-card deck. Cards are drawn from the front of the sequence
/// and never returned within a round.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Deals exactly `cards`, in order, without shuffling.
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self {
            cards,
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(0),
        }
    }

    /// Permutes the cards not yet drawn.
    pub fn shuffle(&mut self) {
        self.cards[self.position..].shuffle(&mut self.rng);
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        let c = *self.cards.get(self.position).ok_or(GameError::EmptyDeck)?;
        self.position += 1;
        tracing::debug!(card = %c, remaining = self.remaining(), "card drawn");
        Ok(c)
    }

    /// Deals two cards to each hand in the order given. The dealer's first
    /// card goes face down.
    pub fn deal_initial<'a, I>(&mut self, hands: I) -> Result<(), GameError>
    where
        I: IntoIterator<Item = &'a mut Hand>,
    {
        for hand in hands {
            let mut first = self.draw()?;
            if hand.seat().is_dealer() {
                first.turn_face_down();
            }
            hand.add(first);
            hand.add(self.draw()?);
        }
        Ok(())
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
