//! # blackjack-engine: Blackjack Round Engine
//!
//! Rules and round orchestration for one dealer against up to ten players
//! on a single 52-card deck. Covers card valuation (Aces counted 11 or 1),
//! bust and blackjack detection, the dealer's stand-on-17 policy and payout
//! settlement. All player input goes through the [`interaction::Interaction`]
//! trait so rounds can be driven from a console or from a script.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Rank, Suit, Card) and deck construction
//! - [`deck`] - Seeded single-deck shuffling and dealing
//! - [`hand`] - Hand totals, soft/hard Aces, bust and blackjack checks
//! - [`bank`] - Player chip balances
//! - [`player`] - Seats and the persistent player registry
//! - [`rules`] - Bet validation, dealer policy and settlement
//! - [`interaction`] - Prompt/response boundary with a scripted adapter
//! - [`round`] - Round state machine
//! - [`logger`] - JSONL round history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_engine::hand::Hand;
//! use blackjack_engine::player::{PlayerId, Seat};
//!
//! let mut hand = Hand::new(Seat::Player(PlayerId(1)));
//! hand.add(Card::new(Rank::Ace, Suit::Spades));
//! hand.add(Card::new(Rank::King, Suit::Hearts));
//! assert!(hand.is_blackjack());
//!
//! hand.add(Card::new(Rank::Five, Suit::Clubs));
//! assert_eq!(hand.value(), 16);
//! assert!(!hand.is_bust());
//! ```
//!
//! ## Settlement
//!
//! ```rust
//! use blackjack_engine::rules::Outcome;
//!
//! // a 10-chip stake, in cents
//! assert_eq!(Outcome::Blackjack.credit(1_000), 2_500);
//! assert_eq!(Outcome::Push.credit(1_000), 1_000);
//! assert_eq!(Outcome::Bust.credit(1_000), 0);
//! ```

pub mod bank;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod interaction;
pub mod logger;
pub mod player;
pub mod round;
pub mod rules;
