//! Process exit codes.
//!
//! A session that ends because the players closed input or typed `quit`
//! is a success; only command failures map to [`ERROR`].

use crate::error::CliError;

pub const SUCCESS: i32 = 0;

/// Invalid arguments or configuration, unwritable log, or an engine failure.
pub const ERROR: i32 = 2;

/// Exit code for a finished command.
pub fn for_result(result: &Result<(), CliError>) -> i32 {
    match result {
        Ok(()) => SUCCESS,
        Err(_) => ERROR,
    }
}
