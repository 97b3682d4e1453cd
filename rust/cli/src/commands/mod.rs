//! Command handler modules for the minipoker CLI.
//!
//! Each subcommand lives in its own file and follows one pattern:
//!
//! - Public handler: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and stdin (`&mut dyn BufRead`) are
//!   passed in, never opened here
//! - Errors propagate as [`CliError`](crate::error::CliError); `run` prints them

mod cfg;
mod deal;
mod eval;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
