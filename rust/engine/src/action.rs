use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::GameError;
use crate::player::{PlayerAgent, PlayerId};
use crate::round::Round;

/// The four kinds of betting decision, without amounts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Check,
    Call,
    Bet,
    Fold,
}

impl ActionKind {
    /// Prompt order.
    pub fn all() -> [ActionKind; 4] {
        [
            ActionKind::Check,
            ActionKind::Call,
            ActionKind::Bet,
            ActionKind::Fold,
        ]
    }

    /// Whether `player` may take this kind of action in `round` right now.
    pub fn is_valid(self, player: PlayerId, round: &Round) -> bool {
        let Ok(p) = round.player(player) else {
            return false;
        };
        let pot = round.pot();
        match self {
            ActionKind::Fold => !round.is_folded(player),
            ActionKind::Check => pot.player_bet(player) == pot.current_bet(),
            ActionKind::Call => p.money() > 0 && pot.amount_to_call(player) > 0,
            ActionKind::Bet => {
                let minimum = pot.minimum_to_bet(player);
                minimum > 0 && p.money() >= minimum
            }
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Check => "Check",
            ActionKind::Call => "Call",
            ActionKind::Bet => "Bet",
            ActionKind::Fold => "Fold",
        };
        f.write_str(name)
    }
}

/// A betting decision. Amounts are the chips the player adds to the pot
/// with this action, so a `Bet` includes whatever it takes to call.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Fold,
    Check,
    Call(u32),
    Bet(u32),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Fold => ActionKind::Fold,
            Action::Check => ActionKind::Check,
            Action::Call(_) => ActionKind::Call,
            Action::Bet(_) => ActionKind::Bet,
        }
    }

    /// Calls the outstanding bet, or as much of it as the player has left.
    pub fn call(round: &Round, player: PlayerId) -> Action {
        let owed = round.pot().amount_to_call(player);
        let money = round.player(player).map(|p| p.money()).unwrap_or(0);
        Action::Call(owed.min(money))
    }

    /// Builds a bet, asking `agent` for an amount until it names one in
    /// `[minimum_to_bet, money]`. `None` when the player cannot bet at all.
    pub fn bet<A>(agent: &mut A, round: &Round, player: PlayerId) -> Option<Action>
    where
        A: PlayerAgent + ?Sized,
    {
        if !ActionKind::Bet.is_valid(player, round) {
            return None;
        }
        let min = round.pot().minimum_to_bet(player);
        let max = round.player(player).ok()?.money();
        debug!(%player, min, max, "setting bet limits");
        loop {
            match agent.get_amount(min, max) {
                Some(amount) if (min..=max).contains(&amount) => return Some(Action::Bet(amount)),
                other => warn!(%player, ?other, min, max, "amount out of range, asking again"),
            }
        }
    }

    /// Turns a chosen kind into a concrete action for `player`.
    pub fn from_kind<A>(kind: ActionKind, agent: &mut A, round: &Round, player: PlayerId) -> Option<Action>
    where
        A: PlayerAgent + ?Sized,
    {
        match kind {
            ActionKind::Fold => Some(Action::Fold),
            ActionKind::Check => Some(Action::Check),
            ActionKind::Call => Some(Action::call(round, player)),
            ActionKind::Bet => Action::bet(agent, round, player),
        }
    }

    /// Re-checks the action against the round as it is now.
    pub fn is_valid(&self, player: PlayerId, round: &Round) -> bool {
        if !self.kind().is_valid(player, round) {
            return false;
        }
        match *self {
            Action::Fold | Action::Check => true,
            Action::Call(amount) => amount == Action::call(round, player).amount(),
            Action::Bet(amount) => {
                let money = round.player(player).map(|p| p.money()).unwrap_or(0);
                amount >= round.pot().minimum_to_bet(player) && amount <= money
            }
        }
    }

    /// Chips this action moves into the pot.
    pub fn amount(&self) -> u32 {
        match *self {
            Action::Call(a) | Action::Bet(a) => a,
            Action::Fold | Action::Check => 0,
        }
    }

    pub(crate) fn apply(self, player: PlayerId, round: &mut Round) -> Result<(), GameError> {
        match self {
            Action::Fold => round.fold(player),
            Action::Check => Ok(()),
            Action::Call(amount) | Action::Bet(amount) => round.commit(player, amount),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => f.write_str("fold"),
            Action::Check => f.write_str("check"),
            Action::Call(a) => write!(f, "call {}", a),
            Action::Bet(a) => write!(f, "bet {}", a),
        }
    }
}
