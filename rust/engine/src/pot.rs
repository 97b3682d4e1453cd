use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::player::PlayerId;

/// Per-player ledger of what has been wagered this round.
///
/// Entries only grow while betting is open; settlement drains them.
#[derive(Debug, Clone, Default)]
pub struct Pot {
    bets: BTreeMap<PlayerId, u32>,
    last_raise: u32,
}

impl Pot {
    /// `big_blind` seeds the minimum raise before anyone has raised.
    pub fn new(big_blind: u32) -> Self {
        Self {
            bets: BTreeMap::new(),
            last_raise: big_blind,
        }
    }

    /// Highest cumulative bet of any player.
    pub fn current_bet(&self) -> u32 {
        self.bets.values().copied().max().unwrap_or(0)
    }

    pub fn last_raise(&self) -> u32 {
        self.last_raise
    }

    pub fn player_bet(&self, player: PlayerId) -> u32 {
        self.bets.get(&player).copied().unwrap_or(0)
    }

    pub fn amount_to_call(&self, player: PlayerId) -> u32 {
        self.current_bet().saturating_sub(self.player_bet(player))
    }

    /// Smallest legal bet: the call plus at least the previous raise.
    pub fn minimum_to_bet(&self, player: PlayerId) -> u32 {
        debug!(
            current_bet = self.current_bet(),
            last_raise = self.last_raise,
            player_bet = self.player_bet(player),
            "minimum to bet"
        );
        (self.amount_to_call(player) + self.last_raise).max(1)
    }

    pub fn total(&self) -> u32 {
        self.bets.values().sum()
    }

    pub fn bets(&self) -> impl Iterator<Item = (PlayerId, u32)> + '_ {
        self.bets.iter().map(|(&p, &b)| (p, b))
    }

    /// Records `amount` more from `player`. Money checks belong to the caller.
    pub fn bet(&mut self, player: PlayerId, amount: u32) {
        info!(%player, amount, "bet");
        let before = self.current_bet();
        *self.bets.entry(player).or_insert(0) += amount;
        let raise = self.current_bet() - before;
        if raise >= self.last_raise {
            self.last_raise = raise;
        }
    }

    /// Takes from every player at most what `winner` has staked.
    pub fn take_pot_for_player(&mut self, winner: PlayerId) -> u32 {
        let stake = self.player_bet(winner);
        self.collect_up_to(stake)
    }

    /// Splits the chips contested by equally strong hands.
    ///
    /// `group` is in seat order; odd chips go to its earliest members. Each
    /// layer is capped by the smallest stake still open in the group, so a
    /// short-stacked winner never shares in chips above their own stake.
    pub fn split_pot(&mut self, group: &[PlayerId]) -> Vec<(PlayerId, u32)> {
        let mut won: Vec<(PlayerId, u32)> = group.iter().map(|&p| (p, 0)).collect();
        let mut by_stake = group.to_vec();
        by_stake.sort_by_key(|&p| self.player_bet(p));

        for (i, &capper) in by_stake.iter().enumerate() {
            let stake = self.player_bet(capper);
            if stake == 0 {
                continue;
            }
            let layer = self.collect_up_to(stake);
            let sharers = &by_stake[i..];
            let share = layer / sharers.len() as u32;
            let mut odd = layer % sharers.len() as u32;
            for (player, amount) in won.iter_mut() {
                if sharers.contains(player) {
                    *amount += share;
                    if odd > 0 {
                        *amount += 1;
                        odd -= 1;
                    }
                }
            }
        }
        won
    }

    /// Empties the ledger, returning whatever no winner could claim.
    pub fn refund_remaining(&mut self) -> Vec<(PlayerId, u32)> {
        let refunds = self
            .bets
            .iter()
            .filter(|&(_, &b)| b > 0)
            .map(|(&p, &b)| (p, b))
            .collect();
        self.bets.clear();
        refunds
    }

    fn collect_up_to(&mut self, stake: u32) -> u32 {
        let mut winnings = 0;
        for bet in self.bets.values_mut() {
            let taken = (*bet).min(stake);
            winnings += taken;
            *bet -= taken;
        }
        debug!(stake, winnings, "collected from pot");
        winnings
    }
}
