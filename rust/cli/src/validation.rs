//! Input parsing and validation for interactive commands.
//!
//! Every prompt accepts `q` or `quit` to leave the table. Anything else is
//! parsed with the engine's rules and, when it does not fit, turned into a
//! message the console shows before asking again.

use blackjack_engine::interaction::{IntegerBounds, parse_choice, parse_integer};

/// Result of parsing one line typed at a prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult<T> {
    /// Valid answer
    Value(T),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

pub fn is_quit(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit")
}

/// Parse a chip amount (bet or deposit).
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::{parse_amount, ParseResult};
/// use blackjack_engine::interaction::IntegerBounds;
///
/// let bounds = IntegerBounds::between(1, 100);
/// assert_eq!(parse_amount("25", bounds), ParseResult::Value(25));
/// assert_eq!(parse_amount("Q", bounds), ParseResult::Quit);
/// assert!(matches!(parse_amount("0", bounds), ParseResult::Invalid(_)));
/// ```
pub fn parse_amount(input: &str, bounds: IntegerBounds) -> ParseResult<u64> {
    if is_quit(input) {
        return ParseResult::Quit;
    }
    match parse_integer(input, bounds) {
        Ok(v) => ParseResult::Value(v),
        Err(msg) => ParseResult::Invalid(msg),
    }
}

/// Parse a choice among `options` (case-insensitive). Returns the option index.
pub fn parse_option(input: &str, options: &[&str]) -> ParseResult<usize> {
    if is_quit(input) {
        return ParseResult::Quit;
    }
    match parse_choice(input, options) {
        Some(i) => ParseResult::Value(i),
        None => ParseResult::Invalid(format!(
            "Invalid input. Enter one of: {}",
            options.join(", ")
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_is_recognised_everywhere() {
        assert!(is_quit("q"));
        assert!(is_quit(" QUIT "));
        assert!(!is_quit("quiet"));
        assert_eq!(parse_option("quit", &["hit", "stay"]), ParseResult::Quit);
    }

    #[test]
    fn amounts_outside_bounds_are_invalid() {
        let bounds = IntegerBounds::between(1, 40);
        assert!(matches!(parse_amount("41", bounds), ParseResult::Invalid(_)));
        assert!(matches!(parse_amount("-5", bounds), ParseResult::Invalid(_)));
        assert!(matches!(parse_amount("4.5", bounds), ParseResult::Invalid(_)));
        assert_eq!(parse_amount("40", bounds), ParseResult::Value(40));
    }

    #[test]
    fn options_match_case_insensitively() {
        assert_eq!(parse_option("Hit", &["hit", "stay"]), ParseResult::Value(0));
        assert_eq!(parse_option("STAY", &["hit", "stay"]), ParseResult::Value(1));
        match parse_option("split", &["hit", "stay"]) {
            ParseResult::Invalid(msg) => assert!(msg.contains("hit, stay")),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }
}
