use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Invalid bet amount: {amount}, minimum: {minimum}")]
    InvalidBet { amount: u64, minimum: u64 },
    #[error("Bet of {requested} exceeds balance of {available}")]
    InsufficientFunds { requested: u64, available: u64 },
    #[error("Invalid player count: {count} (expected 1..={max})")]
    InvalidPlayerCount { count: usize, max: usize },
    #[error("Unknown player {0}")]
    UnknownPlayer(usize),
    #[error("Input closed")]
    InputClosed,
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::Io(e.to_string())
    }
}
