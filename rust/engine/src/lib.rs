//! # minipoker-engine: Multi-player Hold'em Core
//!
//! Deals, bets and settles rounds of Texas Hold'em for any number of seats,
//! and ranks 5-card hands. The engine does no I/O: decisions come from
//! [`player::PlayerAgent`] implementations supplied by the caller.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and parsing
//! - [`deck`] - Seeded 52-card deck with ChaCha20 shuffling
//! - [`hand`] - Hand classification and the total order over hands
//! - [`pot`] - Per-player bet ledger, call/raise sizing and pot collection
//! - [`action`] - Fold/Check/Call/Bet and their validity rules
//! - [`player`] - Player state and the agent interface
//! - [`round`] - The betting-street state machine for one hand
//! - [`session`] - Button rotation and eliminations across rounds
//! - [`record`] - In-memory summary of a played round
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use minipoker_engine::cards::parse_cards;
//! use minipoker_engine::hand::{Category, Hand, HandRules};
//!
//! let cards = parse_cards("Th Jh Qh Kh Ah").unwrap();
//! let hand = Hand::from_cards(&cards, HandRules::default()).unwrap();
//! assert_eq!(hand.category(), Category::StraightFlush);
//! ```
//!
//! ## Playing a Session
//!
//! ```rust
//! use minipoker_engine::action::{Action, ActionKind};
//! use minipoker_engine::player::{PlayerAgent, PlayerId};
//! use minipoker_engine::round::Round;
//! use minipoker_engine::session::{Session, TableConfig};
//!
//! struct AlwaysCall;
//!
//! impl PlayerAgent for AlwaysCall {
//!     fn interact(&mut self, round: &Round, player: PlayerId) -> Action {
//!         if ActionKind::Check.is_valid(player, round) {
//!             Action::Check
//!         } else {
//!             Action::call(round, player)
//!         }
//!     }
//!
//!     fn get_amount(&mut self, min: u32, _max: u32) -> Option<u32> {
//!         Some(min)
//!     }
//! }
//!
//! let config = TableConfig { seed: Some(7), max_rounds: Some(5), ..TableConfig::default() };
//! let seats: Vec<(String, Box<dyn PlayerAgent>)> = vec![
//!     ("ann".into(), Box::new(AlwaysCall)),
//!     ("bob".into(), Box::new(AlwaysCall)),
//! ];
//! let mut session = Session::new(config, seats).unwrap();
//! let outcome = session.play().unwrap();
//! assert!(outcome.rounds_played <= 5);
//! ```

pub mod action;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod player;
pub mod pot;
pub mod record;
pub mod round;
pub mod session;
