#![allow(dead_code)]

use std::collections::VecDeque;

use minipoker_engine::action::{Action, ActionKind};
use minipoker_engine::cards::{parse_cards, Card};
use minipoker_engine::player::{Player, PlayerAgent, PlayerId};
use minipoker_engine::round::Round;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub fn cards(text: &str) -> Vec<Card> {
    parse_cards(text).expect("test cards must parse")
}

/// Checks when it can, otherwise calls.
pub struct CallAgent;

impl PlayerAgent for CallAgent {
    fn interact(&mut self, round: &Round, player: PlayerId) -> Action {
        if ActionKind::Check.is_valid(player, round) {
            Action::Check
        } else {
            Action::call(round, player)
        }
    }

    fn get_amount(&mut self, min: u32, _max: u32) -> Option<u32> {
        Some(min)
    }
}

/// Plays the queued kinds in order, then falls back to check/call.
pub struct ScriptedAgent {
    pub script: VecDeque<ActionKind>,
    pub amounts: VecDeque<Option<u32>>,
}

impl ScriptedAgent {
    pub fn new(script: &[ActionKind]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            amounts: VecDeque::new(),
        }
    }

    pub fn with_amounts(mut self, amounts: &[Option<u32>]) -> Self {
        self.amounts = amounts.iter().copied().collect();
        self
    }
}

impl PlayerAgent for ScriptedAgent {
    fn interact(&mut self, round: &Round, player: PlayerId) -> Action {
        match self.script.pop_front() {
            Some(ActionKind::Check) => Action::Check,
            Some(kind) => Action::from_kind(kind, self, round, player).unwrap_or(Action::Fold),
            None => CallAgent.interact(round, player),
        }
    }

    fn get_amount(&mut self, min: u32, _max: u32) -> Option<u32> {
        self.amounts.pop_front().unwrap_or(Some(min))
    }
}

/// Picks uniformly among the valid kinds, folding rarely.
pub struct RandomAgent {
    rng: ChaCha8Rng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl PlayerAgent for RandomAgent {
    fn interact(&mut self, round: &Round, player: PlayerId) -> Action {
        let mut kinds = round.available_actions(player);
        if kinds.len() > 1 && self.rng.random_bool(0.8) {
            kinds.retain(|k| *k != ActionKind::Fold);
        }
        let kind = kinds[self.rng.random_range(0..kinds.len())];
        Action::from_kind(kind, self, round, player).unwrap_or(Action::Fold)
    }

    fn get_amount(&mut self, min: u32, max: u32) -> Option<u32> {
        Some(self.rng.random_range(min..=max))
    }
}

pub fn table(stacks: &[u32]) -> Vec<Player> {
    stacks
        .iter()
        .enumerate()
        .map(|(i, &money)| Player::new(PlayerId(i), format!("player{i}"), money))
        .collect()
}

pub fn boxed<A: PlayerAgent + 'static>(agents: Vec<A>) -> Vec<Box<dyn PlayerAgent>> {
    agents
        .into_iter()
        .map(|a| Box::new(a) as Box<dyn PlayerAgent>)
        .collect()
}

pub fn total_money(players: &[Player]) -> u32 {
    players.iter().map(Player::money).sum()
}
