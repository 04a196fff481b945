use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bank::{Bank, STARTING_CHIPS};
use crate::errors::GameError;

/// Most players a single 52-card deck can serve in one round.
pub const MAX_PLAYERS: usize = 10;

/// Player identifier, numbered from 1 as shown at the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct PlayerId(pub usize);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Who holds a hand at the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The house: plays a fixed policy and holds no bank
    Dealer,
    /// A betting player
    Player(PlayerId),
}

impl Seat {
    pub fn is_dealer(self) -> bool {
        matches!(self, Seat::Dealer)
    }

    pub fn player_id(self) -> Option<PlayerId> {
        match self {
            Seat::Dealer => None,
            Seat::Player(id) => Some(id),
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Dealer => f.write_str("Dealer"),
            Seat::Player(id) => id.fmt(f),
        }
    }
}

/// Banks of every seated player. Outlives individual rounds.
#[derive(Debug, Clone)]
pub struct PlayerRegistry {
    banks: Vec<Bank>,
}

impl PlayerRegistry {
    pub fn new(players: usize, starting_chips: u64) -> Result<Self, GameError> {
        if players == 0 || players > MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount {
                count: players,
                max: MAX_PLAYERS,
            });
        }
        Ok(Self {
            banks: vec![Bank::with_chips(starting_chips); players],
        })
    }

    pub fn with_default_balance(players: usize) -> Result<Self, GameError> {
        Self::new(players, STARTING_CHIPS)
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    /// Player ids in table order.
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> {
        (1..=self.banks.len()).map(PlayerId)
    }

    pub fn bank(&self, id: PlayerId) -> Result<&Bank, GameError> {
        id.0.checked_sub(1)
            .and_then(|i| self.banks.get(i))
            .ok_or(GameError::UnknownPlayer(id.0))
    }

    pub fn bank_mut(&mut self, id: PlayerId) -> Result<&mut Bank, GameError> {
        id.0.checked_sub(1)
            .and_then(|i| self.banks.get_mut(i))
            .ok_or(GameError::UnknownPlayer(id.0))
    }
}
