//! Command handler modules for the blackjack CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: Input and output streams passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod cfg;
mod deal;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
