use serde::Serialize;

use crate::action::Action;
use crate::cards::Card;
use crate::hand::Category;
use crate::player::PlayerId;

/// One of the four betting phases of a round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Street {
    /// Before the flop is opened
    PreFlop,
    /// After the flop (3 community cards)
    Flop,
    /// After the turn (4th community card)
    Turn,
    /// After the river (5th community card)
    River,
}

/// A single decision, tagged with who made it and when.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub street: Street,
    pub action: Action,
}

/// Chips credited to a player at settlement.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Payout {
    pub player: PlayerId,
    pub amount: u32,
    /// Winning hand category; `None` when everybody else folded.
    pub hand: Option<Category>,
}

/// Summary of one played round. Kept in memory only.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct RoundRecord {
    pub button: PlayerId,
    /// Forced bets as actually posted (clamped to what the player had).
    pub blinds: Vec<(PlayerId, u32)>,
    /// Chronological list of all player actions
    pub actions: Vec<ActionRecord>,
    pub community: Vec<Card>,
    /// Winnings in the order they were paid out, strongest hand first.
    pub payouts: Vec<Payout>,
    /// Chips nobody could win, returned to their owners.
    pub refunds: Vec<(PlayerId, u32)>,
}

impl RoundRecord {
    pub(crate) fn new(button: PlayerId) -> Self {
        Self {
            button,
            blinds: Vec::new(),
            actions: Vec::new(),
            community: Vec::new(),
            payouts: Vec::new(),
            refunds: Vec::new(),
        }
    }

    /// Total chips paid to `player` this round, refunds excluded.
    pub fn winnings_of(&self, player: PlayerId) -> u32 {
        self.payouts
            .iter()
            .filter(|p| p.player == player)
            .map(|p| p.amount)
            .sum()
    }

    pub fn winners(&self) -> Vec<PlayerId> {
        self.payouts
            .iter()
            .filter(|p| p.amount > 0)
            .map(|p| p.player)
            .collect()
    }
}
