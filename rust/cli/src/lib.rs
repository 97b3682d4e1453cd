//! # minipoker CLI Library
//!
//! Command-line front end for the minipoker Hold'em engine: play against
//! bots at the terminal, run bot-only sessions, evaluate hands.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["minipoker", "play", "--bots", "baseline,calling"];
//! let code = minipoker_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play against bots, reading actions from stdin
//! - `sim`: Let bots play a whole session and report the outcome
//! - `eval`: Classify a 5-card hand or find the best of 6 or 7 cards
//! - `deal`: Deal a single hand face up for inspection
//! - `cfg`: Display the resolved configuration and its sources

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, MinipokerCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
    handle_sim_command,
};
use config::Overrides;

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "eval", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand
/// handler. Interactive input comes from the process's stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when input ends mid-game
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["minipoker", "deal", "--seed", "42"];
/// let code = minipoker_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// Same as [`run`], reading interactive input from `input`.
///
/// ```
/// use std::io::Cursor;
/// let args = ["minipoker", "play", "--bots", "calling", "--seed", "7"];
/// let mut input = Cursor::new("q\n");
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// let code = minipoker_cli::run_with_input(args, &mut out, &mut err, &mut input);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("You left the table"));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match MinipokerCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: minipoker <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: minipoker --help");
            return exit_code::ERROR;
        }
    };

    logging::init_logging(cli.verbose);

    match dispatch(cli.cmd, out, err, input) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = match &e {
                CliError::Interrupted(msg) => ui::display_warning(err, msg),
                other => ui::write_error(err, &other.to_string()),
            };
            exit_code::for_error(&e)
        }
    }
}

fn dispatch(
    cmd: Commands,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<(), CliError> {
    match cmd {
        Commands::Play { name, bots, table } => {
            let resolved = config::load_with_sources(&table.overrides())?;
            handle_play_command(&name, &bots, &resolved.config, out, err, input)
        }
        Commands::Sim { bots, json, table } => {
            let resolved = config::load_with_sources(&table.overrides())?;
            handle_sim_command(&bots, json, &resolved.config, out)
        }
        Commands::Eval { cards, no_ace_low } => {
            let overrides = Overrides {
                ace_low_straights: no_ace_low.then_some(false),
                ..Overrides::default()
            };
            let resolved = config::load_with_sources(&overrides)?;
            handle_eval_command(&cards, resolved.config.rules(), out)
        }
        Commands::Deal { players, seed } => handle_deal_command(players, seed, out),
        Commands::Cfg { table } => handle_cfg_command(&table.overrides(), out),
    }
}
