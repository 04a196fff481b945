//! The boundary between the round engine and whoever answers its prompts.
//!
//! The engine never reads or prints directly. It asks an [`Interaction`]
//! for numbers and choices and hands it messages to show. Adapters own
//! parsing and re-prompting; the console adapter lives in the CLI crate,
//! and [`ScriptedInteraction`] replays canned answers for tests.

use std::collections::VecDeque;

use crate::errors::GameError;

/// Inclusive bounds an integer answer must satisfy.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct IntegerBounds {
    pub min: u64,
    pub max: Option<u64>,
}

impl IntegerBounds {
    pub fn at_least(min: u64) -> Self {
        Self { min, max: None }
    }

    pub fn between(min: u64, max: u64) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub fn contains(&self, v: u64) -> bool {
        v >= self.min && self.max.is_none_or(|m| v <= m)
    }

    /// Message shown when an answer falls outside the bounds.
    pub fn describe(&self) -> String {
        match self.max {
            Some(max) => format!("Enter a whole number from {} to {}.", self.min, max),
            None => format!("Enter a whole number of {} or more.", self.min),
        }
    }
}

pub trait Interaction {
    /// Asks until an integer within `bounds` is given.
    fn request_integer(&mut self, prompt: &str, bounds: IntegerBounds) -> Result<u64, GameError>;

    /// Asks until one of `options` is chosen (case-insensitive). Returns its index.
    fn request_choice(&mut self, prompt: &str, options: &[&str]) -> Result<usize, GameError>;

    fn display(&mut self, message: &str) -> Result<(), GameError>;
}

/// Parses an integer answer. `Err` carries the re-prompt message.
pub fn parse_integer(input: &str, bounds: IntegerBounds) -> Result<u64, String> {
    match input.trim().parse::<u64>() {
        Ok(v) if bounds.contains(v) => Ok(v),
        Ok(_) => Err(bounds.describe()),
        Err(_) => Err(format!("Invalid input, {}", bounds.describe().to_lowercase())),
    }
}

/// Matches an answer against `options`, ignoring case and surrounding space.
pub fn parse_choice(input: &str, options: &[&str]) -> Option<usize> {
    let input = input.trim();
    options.iter().position(|o| o.eq_ignore_ascii_case(input))
}

/// Replays a fixed list of answers. Runs out with [`GameError::InputClosed`].
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    messages: Vec<String>,
}

impl ScriptedInteraction {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Answers not yet consumed.
    pub fn pending(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, prompt: &str) -> Result<String, GameError> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or(GameError::InputClosed)
    }
}

impl Interaction for ScriptedInteraction {
    fn request_integer(&mut self, prompt: &str, bounds: IntegerBounds) -> Result<u64, GameError> {
        loop {
            let answer = self.next_answer(prompt)?;
            match parse_integer(&answer, bounds) {
                Ok(v) => return Ok(v),
                Err(msg) => self.messages.push(msg),
            }
        }
    }

    fn request_choice(&mut self, prompt: &str, options: &[&str]) -> Result<usize, GameError> {
        loop {
            let answer = self.next_answer(prompt)?;
            match parse_choice(&answer, options) {
                Some(i) => return Ok(i),
                None => self.messages.push("Invalid input.".to_string()),
            }
        }
    }

    fn display(&mut self, message: &str) -> Result<(), GameError> {
        self.messages.push(message.to_string());
        Ok(())
    }
}
