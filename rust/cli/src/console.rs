//! Console adapter: answers the engine's prompts from a line-based reader.

use blackjack_engine::errors::GameError;
use blackjack_engine::interaction::{IntegerBounds, Interaction};
use std::io::{BufRead, Write};

use crate::io_utils::read_stdin_line;
use crate::validation::{ParseResult, parse_amount, parse_option};

/// Reads answers from `input` and writes prompts and messages to `out`.
///
/// EOF or a quit command at any prompt ends the session with
/// [`GameError::InputClosed`].
pub struct ConsoleInteraction<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
}

impl<'a> ConsoleInteraction<'a> {
    pub fn new(input: &'a mut dyn BufRead, out: &'a mut dyn Write) -> Self {
        Self { input, out }
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> ParseResult<T>,
    ) -> Result<T, GameError> {
        loop {
            writeln!(self.out, "{}", prompt)?;
            self.out.flush()?;
            let Some(line) = read_stdin_line(&mut *self.input) else {
                tracing::debug!("input closed at prompt");
                return Err(GameError::InputClosed);
            };
            match parse(&line) {
                ParseResult::Value(v) => return Ok(v),
                ParseResult::Quit => return Err(GameError::InputClosed),
                ParseResult::Invalid(msg) => writeln!(self.out, "{}", msg)?,
            }
        }
    }
}

impl Interaction for ConsoleInteraction<'_> {
    fn request_integer(&mut self, prompt: &str, bounds: IntegerBounds) -> Result<u64, GameError> {
        self.ask(prompt, |line| parse_amount(line, bounds))
    }

    fn request_choice(&mut self, prompt: &str, options: &[&str]) -> Result<usize, GameError> {
        self.ask(prompt, |line| parse_option(line, options))
    }

    fn display(&mut self, message: &str) -> Result<(), GameError> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }
}
