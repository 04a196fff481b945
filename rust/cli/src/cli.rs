//! Command-line argument definitions.

use blackjack_engine::player::MAX_PLAYERS;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "blackjack", version, about = "Single-deck blackjack for one dealer and up to ten players")]
pub struct BlackjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play rounds interactively until input ends or the round limit is reached
    Play {
        /// Number of players at the table
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_PLAYERS as u64))]
        players: Option<u64>,
        /// Stop after this many rounds
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,
        /// RNG seed for reproducible shuffles
        #[arg(long)]
        seed: Option<u64>,
        /// Starting balance in whole chips
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        balance: Option<u64>,
        /// Append a JSONL record of every finished round to this file
        #[arg(long)]
        log: Option<String>,
    },
    /// Deal one table and show it as the players would see it
    Deal {
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_PLAYERS as u64))]
        players: Option<u64>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
