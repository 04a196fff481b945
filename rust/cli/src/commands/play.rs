//! # Play Command
//!
//! Interactive blackjack for one dealer and up to ten players sharing a
//! console. Rounds repeat until the round limit is reached or input ends
//! (EOF, `q` or `quit` at any prompt). Balances carry over between rounds.
//!
//! With `--log FILE`, every finished round is appended to `FILE` as one
//! JSON line.

use crate::config::{self, CliOverrides};
use crate::console::ConsoleInteraction;
use crate::error::CliError;
use crate::formatters::{format_round_summary, format_standings};
use crate::ui;
use blackjack_engine::errors::GameError;
use blackjack_engine::logger::RoundLogger;
use blackjack_engine::player::PlayerRegistry;
use blackjack_engine::round::RoundEngine;
use std::io::{BufRead, Write};

/// Handle the play command.
///
/// # Arguments
///
/// * `overrides` - Values given on the command line
/// * `log` - Optional JSONL round history path
/// * `out` - Output stream for prompts and table display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for player answers
///
/// # Returns
///
/// * `Ok(())` when the round limit is reached or input ends
/// * `Err(CliError)` on invalid configuration, log file or engine failures
pub fn handle_play_command(
    overrides: CliOverrides,
    log: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let config = match config::resolve(&overrides) {
        Ok(r) => r.config,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let mut logger = match log.as_deref() {
        Some("") => {
            ui::write_error(err, "log path must not be empty")?;
            return Err(CliError::InvalidInput("log path must not be empty".into()));
        }
        Some(path) => match RoundLogger::create(path) {
            Ok(l) => Some(l),
            Err(e) => {
                ui::write_error(err, &format!("Failed to open log {}: {}", path, e))?;
                return Err(CliError::Io(e));
            }
        },
        None => None,
    };

    let registry = PlayerRegistry::new(config.players, config.starting_balance)?;
    let mut engine = RoundEngine::new(registry, config.seed);

    writeln!(
        out,
        "play: players={} balance={} seed={}",
        config.players,
        config.starting_balance,
        engine.seed()
    )?;

    loop {
        if config.rounds.is_some_and(|limit| engine.rounds_played() >= limit) {
            break;
        }
        ui::rule(out, &format!("Round {}", engine.rounds_played() + 1))?;

        let result = {
            let mut io = ConsoleInteraction::new(&mut *stdin, &mut *out);
            engine.play_round(&mut io)
        };
        let Some(report) = continue_session(result, out, err)? else {
            break;
        };
        for line in format_round_summary(&report) {
            writeln!(out, "{}", line)?;
        }
        if let Some(l) = logger.as_mut()
            && let Err(e) = l.log_report(&report)
        {
            ui::display_warning(err, &format!("Failed to write round log: {}", e))?;
        }

        // no deposits are collected for a round that will not be played
        if config.rounds.is_some_and(|limit| engine.rounds_played() >= limit) {
            break;
        }
        let result = {
            let mut io = ConsoleInteraction::new(&mut *stdin, &mut *out);
            engine.top_up(&mut io)
        };
        if continue_session(result, out, err)?.is_none() {
            break;
        }
    }

    ui::rule(out, "Final balances")?;
    writeln!(out, "Rounds played: {}", engine.rounds_played())?;
    for line in format_standings(engine.registry()) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// `None` when the players closed input; other engine errors end the command.
fn continue_session<T>(
    result: Result<T, GameError>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Option<T>, CliError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(GameError::InputClosed) => {
            writeln!(out)?;
            writeln!(out, "Input closed, ending session.")?;
            Ok(None)
        }
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            Err(CliError::Engine(e))
        }
    }
}
