//! # Blackjack CLI Library
//!
//! Command-line front end for the blackjack round engine: an interactive
//! table for one dealer and up to ten players sharing a console.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the subcommand.
//! [`run_with_input`] does the same with an explicit input stream, so whole
//! sessions can be driven from memory.
//!
//! ## Example Usage
//!
//! ```
//! use std::io::{self, Cursor};
//! let args = vec!["blackjack", "play", "--players", "1", "--seed", "7"];
//! // input ends before the first bet: the session closes cleanly
//! let mut input = Cursor::new(Vec::new());
//! let code = blackjack_cli::run_with_input(args, &mut input, &mut io::sink(), &mut io::sink());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds interactively
//! - `deal`: Deal one table for inspection
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
mod commands;
mod config;
pub mod console;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{BlackjackCli, Commands};
use commands::{handle_cfg_command, handle_deal_command, handle_play_command};
use config::CliOverrides;

pub use error::CliError;

/// Main entry point for the CLI application, reading answers from stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["blackjack", "deal", "--seed", "42"];
/// let code = blackjack_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    // Use stdin for real input (supports both TTY and piped stdin)
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Like [`run`], with player answers read from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "deal", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BlackjackCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = ui::write_usage(err, &e.to_string(), COMMANDS);
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play {
            players,
            rounds,
            seed,
            balance,
            log,
        } => {
            let overrides = CliOverrides {
                players: players.map(|p| p as usize),
                starting_balance: balance,
                seed,
                rounds,
            };
            handle_play_command(overrides, log, out, err, input)
        }
        Commands::Deal { players, seed } => {
            let overrides = CliOverrides {
                players: players.map(|p| p as usize),
                seed,
                ..CliOverrides::default()
            };
            match config::resolve(&overrides) {
                Ok(r) => handle_deal_command(r.config.players, r.config.seed, out),
                Err(e) => Err(CliError::Config(format!("Invalid configuration: {}", e))),
            }
        }
    };

    if let Err(e) = &result {
        tracing::debug!(error = %e, "command failed");
        if writeln!(err, "Error: {}", e).is_err() {
            return exit_code::ERROR;
        }
    }
    exit_code::for_result(&result)
}
