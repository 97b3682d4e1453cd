use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::HandRules;
use crate::player::{Player, PlayerAgent, PlayerId};
use crate::record::RoundRecord;
use crate::round::Round;

/// Most players one 52-card deck can serve: 2 cards each plus 5 on the board.
pub const MAX_PLAYERS: usize = 23;

/// Table settings shared by every round of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Small blind; the big blind is twice this.
    pub small_blind: u32,
    /// Money each player sits down with.
    pub starting_money: u32,
    /// Seed for the button draw and every deck; random when `None`.
    pub seed: Option<u64>,
    pub rules: HandRules,
    /// Stop after this many rounds even without an overall winner.
    pub max_rounds: Option<u32>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 1,
            starting_money: 100,
            seed: None,
            rules: HandRules::default(),
            max_rounds: None,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.small_blind == 0 {
            return Err(GameError::InvalidConfig("small_blind must be > 0".into()));
        }
        if self.starting_money == 0 {
            return Err(GameError::InvalidConfig(
                "starting_money must be > 0".into(),
            ));
        }
        Ok(())
    }
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
    /// The last player with money; `None` if `max_rounds` stopped play first.
    pub winner: Option<PlayerId>,
    pub rounds_played: u32,
}

/// A table that keeps playing rounds until one player holds all the money.
///
/// Owns the roster, the rotating button and one agent per seat. Player ids
/// are assigned here, in seating order, and index `agents`. Agents may
/// borrow from the caller for `'a`.
pub struct Session<'a> {
    config: TableConfig,
    players: Vec<Player>,
    finished: Vec<Player>,
    agents: Vec<Box<dyn PlayerAgent + 'a>>,
    button: PlayerId,
    rng: ChaCha20Rng,
    rounds_played: u32,
    history: Option<Vec<RoundRecord>>,
}

impl<'a> Session<'a> {
    pub fn new(
        config: TableConfig,
        seats: Vec<(String, Box<dyn PlayerAgent + 'a>)>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if seats.len() < 2 {
            return Err(GameError::NotEnoughPlayers { count: seats.len() });
        }
        if seats.len() > MAX_PLAYERS {
            return Err(GameError::InvalidConfig(format!(
                "at most {} players fit at a table",
                MAX_PLAYERS
            )));
        }

        let mut rng = ChaCha20Rng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
        let (players, agents): (Vec<Player>, Vec<Box<dyn PlayerAgent + 'a>>) = seats
            .into_iter()
            .enumerate()
            .map(|(i, (name, agent))| {
                (Player::new(PlayerId(i), name, config.starting_money), agent)
            })
            .unzip();
        let button = PlayerId(rng.random_range(0..players.len()));

        Ok(Self {
            config,
            players,
            finished: Vec::new(),
            agents,
            button,
            rng,
            rounds_played: 0,
            history: Some(Vec::new()),
        })
    }

    /// Stops keeping finished round records; `rounds()` stays empty.
    pub fn without_history(mut self) -> Self {
        self.history = None;
        self
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    /// Players still in the game, in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    /// Eliminated players, in the order they went broke.
    pub fn finished_players(&self) -> &[Player] {
        &self.finished
    }
    pub fn button(&self) -> PlayerId {
        self.button
    }
    /// Records of the rounds played so far, if history is kept.
    pub fn rounds(&self) -> &[RoundRecord] {
        self.history.as_deref().unwrap_or_default()
    }
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// The overall winner, once only one player is left.
    pub fn winner(&self) -> Option<&Player> {
        match self.players.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Plays rounds until one player is left (or `max_rounds` is reached).
    pub fn play(&mut self) -> Result<SessionOutcome, GameError> {
        info!(players = self.players.len(), "starting game");
        while self.winner().is_none() {
            if let Some(max) = self.config.max_rounds {
                if self.rounds_played() >= max {
                    info!(max, "round limit reached");
                    break;
                }
            }
            self.play_round()?;
        }
        let winner = self.winner().map(Player::id);
        if let Some(w) = winner {
            info!(winner = %w, rounds = self.rounds_played(), "game over");
        }
        Ok(SessionOutcome {
            winner,
            rounds_played: self.rounds_played(),
        })
    }

    /// Plays a single round, then moves the button and drops busted players.
    pub fn play_round(&mut self) -> Result<RoundRecord, GameError> {
        info!(round = self.rounds_played + 1, "playing round");
        for player in &self.players {
            info!(%player, "seated");
        }

        let deck = Deck::new_with_seed(self.rng.random());
        let mut round = Round::new(
            self.players.clone(),
            self.button,
            self.config.small_blind,
            deck,
            self.config.rules,
        )?;
        let record = round.play(&mut self.agents)?;
        self.players = round.into_players();
        for player in self.players.iter_mut() {
            player.clear_pocket();
        }
        self.rounds_played += 1;
        if let Some(history) = self.history.as_mut() {
            history.push(record.clone());
        }

        // move the button before anyone is removed
        self.advance_button();
        self.remove_busted();
        Ok(record)
    }

    fn after(&self, player: PlayerId) -> PlayerId {
        let index = self
            .players
            .iter()
            .position(|p| p.id() == player)
            .unwrap_or(0);
        self.players[(index + 1) % self.players.len()].id()
    }

    fn advance_button(&mut self) {
        let mut candidate = self.after(self.button);
        for _ in 0..self.players.len() {
            let funded = self
                .players
                .iter()
                .any(|p| p.id() == candidate && p.money() > 0);
            if funded {
                break;
            }
            candidate = self.after(candidate);
        }
        self.button = candidate;
    }

    fn remove_busted(&mut self) {
        let (busted, remaining): (Vec<Player>, Vec<Player>) =
            self.players.drain(..).partition(|p| p.money() == 0);
        for player in busted {
            info!(%player, "player finished the game");
            self.finished.push(player);
        }
        self.players = remaining;
    }
}
