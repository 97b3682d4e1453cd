//! # minipoker-ai: Automated Players
//!
//! Bots that plug into the engine through [`PlayerAgent`].
//!
//! ## Core Components
//!
//! - [`CallingStation`] - Never folds a hand it can stay in for free or by calling
//! - [`baseline`] - Hand-strength driven weighted-random policy
//! - [`create_agent`] - Factory that builds a bot from its name
//!
//! ## Quick Start
//!
//! ```rust
//! use minipoker_ai::create_agent;
//! use minipoker_engine::player::PlayerAgent;
//! use minipoker_engine::session::{Session, TableConfig};
//!
//! let seats: Vec<(String, Box<dyn PlayerAgent>)> = vec![
//!     ("station".into(), create_agent("calling").unwrap()),
//!     ("baseline".into(), minipoker_ai::create_seeded_agent("baseline", 3).unwrap()),
//! ];
//! let config = TableConfig { seed: Some(1), max_rounds: Some(10), ..TableConfig::default() };
//! let outcome = Session::new(config, seats).unwrap().play().unwrap();
//! assert!(outcome.rounds_played <= 10);
//! ```
//!
//! ## Agent Names
//!
//! - `"calling"` - [`CallingStation`]
//! - `"baseline"` - [`baseline::BaselineBot`]

use minipoker_engine::action::{Action, ActionKind};
use minipoker_engine::player::{PlayerAgent, PlayerId};
use minipoker_engine::round::Round;
use thiserror::Error;

pub mod baseline;

pub use baseline::BaselineBot;

/// Names accepted by [`create_agent`].
pub const AGENT_NAMES: [&str; 2] = ["calling", "baseline"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error("Unknown agent '{0}' (expected one of: calling, baseline)")]
    UnknownAgent(String),
}

/// Checks when it can, calls when it must, and only folds when neither is
/// possible.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingStation;

impl PlayerAgent for CallingStation {
    fn interact(&mut self, round: &Round, player: PlayerId) -> Action {
        if ActionKind::Check.is_valid(player, round) {
            Action::Check
        } else if ActionKind::Call.is_valid(player, round) {
            Action::call(round, player)
        } else {
            Action::Fold
        }
    }

    fn get_amount(&mut self, min: u32, _max: u32) -> Option<u32> {
        Some(min)
    }
}

/// Builds a bot by name, seeding any randomness from the OS.
///
/// ```rust
/// use minipoker_ai::{create_agent, AgentError};
///
/// assert!(create_agent("baseline").is_ok());
/// assert!(matches!(create_agent("shark"), Err(AgentError::UnknownAgent(_))));
/// ```
pub fn create_agent(name: &str) -> Result<Box<dyn PlayerAgent>, AgentError> {
    create_seeded_agent(name, rand::random())
}

/// Builds a bot by name with a fixed seed, for reproducible tables.
pub fn create_seeded_agent(name: &str, seed: u64) -> Result<Box<dyn PlayerAgent>, AgentError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "calling" | "calling-station" => Ok(Box::new(CallingStation)),
        "baseline" => Ok(Box::new(BaselineBot::with_seed(seed))),
        _ => Err(AgentError::UnknownAgent(name.to_string())),
    }
}
