//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Horizontal rule used between rounds.
pub fn rule(out: &mut dyn Write, title: &str) -> std::io::Result<()> {
    const WIDTH: usize = 48;
    writeln!(out, "{:-^WIDTH$}", format!(" {} ", title))
}

/// Parse error followed by a short command list, for unknown or malformed
/// invocations.
pub fn write_usage(err: &mut dyn Write, parse_error: &str, commands: &[&str]) -> std::io::Result<()> {
    writeln!(err, "{}", parse_error)?;
    writeln!(err, "Blackjack CLI")?;
    writeln!(err, "Usage: blackjack <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in commands {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: blackjack --help")
}
