use thiserror::Error;

use crate::action::Action;
use crate::player::PlayerId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("A hand needs exactly 5 cards, got {count}")]
    InvalidHand { count: usize },
    #[error("Player {player} does not have enough money ({available}/{requested})")]
    NotEnoughMoney {
        player: PlayerId,
        requested: u32,
        available: u32,
    },
    #[error("Player {player} chose an action that is not allowed now: {action}")]
    IllegalAction { player: PlayerId, action: Action },
    #[error("At least two players with money are needed, got {count}")]
    NotEnoughPlayers { count: usize },
    #[error("Player {0} is not seated at this table")]
    UnknownPlayer(PlayerId),
    #[error("The deck ran out of cards")]
    DeckExhausted,
    #[error("Cannot parse card: {0:?}")]
    InvalidCard(String),
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
}
