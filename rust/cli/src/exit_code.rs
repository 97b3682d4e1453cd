//! Process exit codes returned by [`crate::run`].

use crate::error::CliError;

/// The command finished.
pub const SUCCESS: i32 = 0;

/// Bad arguments, bad configuration or a failed command.
pub const ERROR: i32 = 2;

/// Interactive input ended before the game did (same code as Ctrl+C).
pub const INTERRUPTED: i32 = 130;

pub fn for_error(error: &CliError) -> i32 {
    match error {
        CliError::Interrupted(_) => INTERRUPTED,
        _ => ERROR,
    }
}
