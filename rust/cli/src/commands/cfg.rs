//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, every value next to where it
//! came from (`default`, `file`, `env` or `cli`):
//!
//! ```json
//! {
//!   "small_blind": { "value": 1, "source": "default" },
//!   "seed": { "value": 42, "source": "env" },
//!   ...
//! }
//! ```

use crate::config::{self, Overrides};
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(overrides: &Overrides, out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources(overrides)?;
    let display = serde_json::json!({
        "small_blind": {
            "value": config.small_blind,
            "source": sources.small_blind,
        },
        "starting_money": {
            "value": config.starting_money,
            "source": sources.starting_money,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "ace_low_straights": {
            "value": config.ace_low_straights,
            "source": sources.ace_low_straights,
        },
        "max_rounds": {
            "value": config.max_rounds,
            "source": sources.max_rounds,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
