use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::action::ActionKind;
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{Hand, HandRules};
use crate::player::{Player, PlayerAgent, PlayerId};
use crate::pot::Pot;
use crate::record::{ActionRecord, Payout, RoundRecord, Street};

/// Where a round is in its life. Each call to [`Round::step`] performs the
/// work of the current state and moves to the next one.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum RoundState {
    Dealt,
    PreFlopBetting,
    FlopOpen,
    PreTurnBetting,
    TurnOpen,
    PreRiverBetting,
    RiverOpen,
    FinalBetting,
    Showdown,
    Settled,
}

/// A contender at showdown and the best hand they hold.
pub type Contender = (PlayerId, Option<Hand>);

/// One hand of poker, from dealing the pockets to paying the pot.
///
/// The seating order is fixed for the round's lifetime. Agents are looked
/// up by `PlayerId` index in the slice passed to [`Round::step`].
#[derive(Debug)]
pub struct Round {
    players: Vec<Player>,
    folded: BTreeSet<PlayerId>,
    button: PlayerId,
    small_blind: u32,
    betting_player: Option<PlayerId>,
    pot: Pot,
    deck: Deck,
    community: Vec<Card>,
    rules: HandRules,
    state: RoundState,
    record: RoundRecord,
}

impl Round {
    /// Seats `players` and deals every one of them a pocket.
    pub fn new(
        players: Vec<Player>,
        button: PlayerId,
        small_blind: u32,
        deck: Deck,
        rules: HandRules,
    ) -> Result<Self, GameError> {
        if players.len() < 2 {
            return Err(GameError::NotEnoughPlayers {
                count: players.len(),
            });
        }
        if !players.iter().any(|p| p.id() == button) {
            return Err(GameError::UnknownPlayer(button));
        }

        let mut round = Self {
            players,
            folded: BTreeSet::new(),
            button,
            small_blind,
            betting_player: None,
            pot: Pot::new(small_blind * 2),
            deck,
            community: Vec::with_capacity(5),
            rules,
            state: RoundState::Dealt,
            record: RoundRecord::new(button),
        };

        info!(players = round.players.len(), %button, "dealing cards");
        for player in round.players.iter_mut() {
            let first = round.deck.draw().ok_or(GameError::DeckExhausted)?;
            let second = round.deck.draw().ok_or(GameError::DeckExhausted)?;
            player.set_pocket(first, second);
            player.set_first_bet(false);
        }
        Ok(round)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.players
            .iter()
            .find(|p| p.id() == id)
            .ok_or(GameError::UnknownPlayer(id))
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, GameError> {
        self.players
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(GameError::UnknownPlayer(id))
    }

    pub fn pot(&self) -> &Pot {
        &self.pot
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }
    pub fn button(&self) -> PlayerId {
        self.button
    }
    pub fn small_blind(&self) -> u32 {
        self.small_blind
    }
    pub fn betting_player(&self) -> Option<PlayerId> {
        self.betting_player
    }
    pub fn state(&self) -> RoundState {
        self.state
    }
    pub fn rules(&self) -> HandRules {
        self.rules
    }
    pub fn record(&self) -> &RoundRecord {
        &self.record
    }

    /// Hands the players back, money updated.
    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    pub fn is_folded(&self, player: PlayerId) -> bool {
        self.folded.contains(&player)
    }

    /// Players still in the hand, in seat order.
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .map(Player::id)
            .filter(|id| !self.is_folded(*id))
            .collect()
    }

    /// The seat to the left of `player`.
    pub fn after(&self, player: PlayerId) -> Result<PlayerId, GameError> {
        let index = self.seat(player)?;
        Ok(self.players[(index + 1) % self.players.len()].id())
    }

    pub fn small_blind_player(&self) -> Result<PlayerId, GameError> {
        self.after(self.button)
    }

    pub fn big_blind_player(&self) -> Result<PlayerId, GameError> {
        self.after(self.small_blind_player()?)
    }

    /// The last player standing, once everybody else has folded.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.active_players().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Whether `player` still has to act on the current street.
    ///
    /// True while the hand is contested and the player, still in with money
    /// behind, has either not acted yet this street or faces a bet.
    pub fn is_betting(&self, player: PlayerId) -> bool {
        let Ok(p) = self.player(player) else {
            return false;
        };
        let owes_action = p.first_bet() || self.pot.amount_to_call(player) > 0;
        self.active_players().len() > 1 && !self.is_folded(player) && p.money() > 0 && owes_action
    }

    /// Walks the seats after the current betting player and returns the
    /// first one that must act, or `None` once the walk gets back around.
    pub fn next_betting_player(&self) -> Option<PlayerId> {
        let start = self.betting_player?;
        let mut candidate = self.after(start).ok()?;
        while candidate != start {
            if self.is_betting(candidate) {
                debug!(player = %candidate, "found betting player");
                return Some(candidate);
            }
            debug!(player = %candidate, "skipping player");
            candidate = self.after(candidate).ok()?;
        }
        None
    }

    /// The kinds of action `player` may choose from right now.
    pub fn available_actions(&self, player: PlayerId) -> Vec<ActionKind> {
        ActionKind::all()
            .into_iter()
            .filter(|kind| kind.is_valid(player, self))
            .collect()
    }

    /// Runs the round to settlement and returns its record.
    pub fn play(&mut self, agents: &mut [Box<dyn PlayerAgent + '_>]) -> Result<RoundRecord, GameError> {
        info!(button = %self.button, "playing another round of poker");
        while self.state != RoundState::Settled {
            self.step(agents)?;
        }
        Ok(self.record.clone())
    }

    /// Performs the current state's work and advances to the next state.
    pub fn step(&mut self, agents: &mut [Box<dyn PlayerAgent + '_>]) -> Result<RoundState, GameError> {
        let next = match self.state {
            RoundState::Dealt => {
                self.take_blinds()?;
                RoundState::PreFlopBetting
            }
            RoundState::PreFlopBetting => {
                let start = self.after(self.big_blind_player()?)?;
                self.betting_street(Street::PreFlop, start, agents)?;
                RoundState::FlopOpen
            }
            RoundState::FlopOpen => {
                self.open_cards(3)?;
                RoundState::PreTurnBetting
            }
            RoundState::PreTurnBetting => {
                let start = self.after(self.button)?;
                self.betting_street(Street::Flop, start, agents)?;
                RoundState::TurnOpen
            }
            RoundState::TurnOpen => {
                self.open_cards(1)?;
                RoundState::PreRiverBetting
            }
            RoundState::PreRiverBetting => {
                let start = self.after(self.button)?;
                self.betting_street(Street::Turn, start, agents)?;
                RoundState::RiverOpen
            }
            RoundState::RiverOpen => {
                self.open_cards(1)?;
                RoundState::FinalBetting
            }
            RoundState::FinalBetting => {
                let start = self.after(self.button)?;
                self.betting_street(Street::River, start, agents)?;
                RoundState::Showdown
            }
            RoundState::Showdown => {
                self.finish_round()?;
                RoundState::Settled
            }
            RoundState::Settled => RoundState::Settled,
        };
        self.state = next;
        Ok(next)
    }

    /// Posts both blinds, each clamped to what the player has.
    pub fn take_blinds(&mut self) -> Result<(), GameError> {
        let small = self.small_blind_player()?;
        let big = self.big_blind_player()?;
        let posted_small = self.force_bet(small, self.small_blind)?;
        let posted_big = self.force_bet(big, self.small_blind * 2)?;
        self.record.blinds = vec![(small, posted_small), (big, posted_big)];
        Ok(())
    }

    /// Strongest-first groups of non-folded players; players inside a group
    /// hold equal hands and are listed in seat order after the button.
    pub fn get_round_winners(&self) -> Vec<Vec<Contender>> {
        let contenders = self.active_from_button();
        if contenders.len() == 1 {
            return vec![vec![(contenders[0], None)]];
        }

        let mut scored: Vec<Contender> = contenders
            .into_iter()
            .map(|id| {
                let hand = self
                    .player(id)
                    .ok()
                    .and_then(|p| p.best_hand(&self.community, self.rules));
                if let Some(hand) = &hand {
                    debug!(player = %id, %hand, "showdown hand");
                }
                (id, hand)
            })
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let mut groups: Vec<Vec<Contender>> = Vec::new();
        for contender in scored {
            match groups.last_mut() {
                Some(group) if group[0].1 == contender.1 => group.push(contender),
                _ => groups.push(vec![contender]),
            }
        }
        groups
    }

    /// Pays every winner group in order, then refunds what nobody claimed.
    pub fn finish_round(&mut self) -> Result<Vec<Payout>, GameError> {
        let mut payouts = Vec::new();
        for group in self.get_round_winners() {
            let ids: Vec<PlayerId> = group.iter().map(|(id, _)| *id).collect();
            let won = self.pot.split_pot(&ids);
            for ((player, amount), (_, hand)) in won.into_iter().zip(group) {
                self.player_mut(player)?.add_money(amount);
                info!(
                    %player,
                    amount,
                    hand = hand.as_ref().map(|h| h.to_string()),
                    "giving winnings"
                );
                payouts.push(Payout {
                    player,
                    amount,
                    hand: hand.map(|h| h.category()),
                });
            }
        }

        let refunds = self.pot.refund_remaining();
        for &(player, amount) in &refunds {
            debug!(%player, amount, "refunding uncontested chips");
            self.player_mut(player)?.add_money(amount);
        }

        self.record.payouts = payouts.clone();
        self.record.refunds = refunds;
        Ok(payouts)
    }

    pub(crate) fn fold(&mut self, player: PlayerId) -> Result<(), GameError> {
        self.seat(player)?;
        self.folded.insert(player);
        Ok(())
    }

    /// Moves `amount` of the player's money into the pot.
    pub(crate) fn commit(&mut self, player: PlayerId, amount: u32) -> Result<(), GameError> {
        self.player_mut(player)?.take_money(amount)?;
        self.pot.bet(player, amount);
        Ok(())
    }

    /// Bets up to `amount`, never more than the player has; returns what was taken.
    fn force_bet(&mut self, player: PlayerId, amount: u32) -> Result<u32, GameError> {
        let amount = amount.min(self.player(player)?.money());
        info!(%player, amount, "forcing bet");
        self.commit(player, amount)?;
        Ok(amount)
    }

    fn betting_street(
        &mut self,
        street: Street,
        start: PlayerId,
        agents: &mut [Box<dyn PlayerAgent + '_>],
    ) -> Result<(), GameError> {
        if self.winner().is_some() {
            debug!(?street, "hand already decided, skipping betting");
            return Ok(());
        }
        info!(?street, "betting");
        self.place_bets(street, start, agents)
    }

    fn place_bets(
        &mut self,
        street: Street,
        start: PlayerId,
        agents: &mut [Box<dyn PlayerAgent + '_>],
    ) -> Result<(), GameError> {
        for index in 0..self.players.len() {
            let id = self.players[index].id();
            if !self.is_folded(id) {
                self.players[index].set_first_bet(true);
            }
        }

        self.betting_player = Some(start);
        if !self.is_betting(start) {
            debug!(player = %start, "skipping player");
            self.betting_player = self.next_betting_player();
        }

        while let Some(player) = self.betting_player {
            self.player_mut(player)?.set_first_bet(false);
            let agent = agents
                .get_mut(player.0)
                .ok_or(GameError::UnknownPlayer(player))?;
            info!(%player, "player is choosing an action");
            let action = agent.interact(self, player);
            if !action.is_valid(player, self) {
                return Err(GameError::IllegalAction { player, action });
            }
            info!(%player, %action, "player chose action");
            action.apply(player, self)?;
            self.record.actions.push(ActionRecord {
                player,
                street,
                action,
            });
            self.betting_player = self.next_betting_player();
        }
        debug!(?street, "done betting");
        Ok(())
    }

    fn open_cards(&mut self, count: usize) -> Result<(), GameError> {
        if self.winner().is_some() {
            return Ok(());
        }
        for _ in 0..count {
            let card = self.deck.draw().ok_or(GameError::DeckExhausted)?;
            self.community.push(card);
        }
        info!(community = ?self.community, "opened cards");
        self.record.community = self.community.clone();
        Ok(())
    }

    fn seat(&self, player: PlayerId) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.id() == player)
            .ok_or(GameError::UnknownPlayer(player))
    }

    /// Non-folded players starting with the seat after the button.
    fn active_from_button(&self) -> Vec<PlayerId> {
        let n = self.players.len();
        let start = self.seat(self.button).map(|i| i + 1).unwrap_or(0);
        (0..n)
            .map(|offset| self.players[(start + offset) % n].id())
            .filter(|id| !self.is_folded(*id))
            .collect()
    }
}
