use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::{best_hand, possible_hands, Hand, HandRules};
use crate::round::Round;

/// Seat identity assigned by the session; doubles as the index of the
/// player's agent.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct PlayerId(pub usize);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The decision-making side of a player: a keyboard, a bot, a remote client.
///
/// `interact` is called only while `player` is the round's betting player
/// and must return an action that is valid at that moment.
pub trait PlayerAgent {
    fn interact(&mut self, round: &Round, player: PlayerId) -> Action;

    /// Asks for a wager in `[min, max]`. `None` (or anything out of range)
    /// makes the caller ask again.
    fn get_amount(&mut self, min: u32, max: u32) -> Option<u32>;
}

/// A seated player's table state: money persists between rounds, the
/// pocket and the street flag are reset every round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    money: u32,
    pocket: Option<[Card; 2]>,
    /// Still owes an action on the current street.
    first_bet: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, money: u32) -> Self {
        Self {
            id,
            name: name.into(),
            money,
            pocket: None,
            first_bet: false,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn money(&self) -> u32 {
        self.money
    }
    pub fn pocket(&self) -> Option<[Card; 2]> {
        self.pocket
    }
    pub fn first_bet(&self) -> bool {
        self.first_bet
    }

    pub(crate) fn set_first_bet(&mut self, value: bool) {
        self.first_bet = value;
    }

    pub fn set_pocket(&mut self, first: Card, second: Card) {
        self.pocket = Some([first, second]);
    }

    pub fn clear_pocket(&mut self) {
        self.pocket = None;
    }

    pub fn add_money(&mut self, amount: u32) {
        self.money = self.money.saturating_add(amount);
    }

    /// Removes `amount` from the player's money, refusing to go negative.
    pub fn take_money(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.money {
            return Err(GameError::NotEnoughMoney {
                player: self.id,
                requested: amount,
                available: self.money,
            });
        }
        self.money -= amount;
        Ok(())
    }

    pub fn possible_hands(&self, community: &[Card], rules: HandRules) -> Vec<Hand> {
        possible_hands(self.pocket_slice(), community, rules)
    }

    pub fn best_hand(&self, community: &[Card], rules: HandRules) -> Option<Hand> {
        best_hand(self.pocket_slice(), community, rules)
    }

    fn pocket_slice(&self) -> &[Card] {
        self.pocket.as_ref().map(|p| p.as_slice()).unwrap_or(&[])
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[name: {}, money: {}]", self.name, self.money)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::hand::Category;

    #[test]
    fn take_money_refuses_overdraft() {
        let mut p = Player::new(PlayerId(0), "ann", 50);
        p.take_money(20).unwrap();
        assert_eq!(p.money(), 30);
        let err = p.take_money(31).unwrap_err();
        assert_eq!(
            err,
            GameError::NotEnoughMoney {
                player: PlayerId(0),
                requested: 31,
                available: 30
            }
        );
        assert_eq!(p.money(), 30);
    }

    #[test]
    fn best_hand_uses_pocket_and_board() {
        let mut p = Player::new(PlayerId(1), "bob", 10);
        let pocket = parse_cards("Ah Ad").unwrap();
        p.set_pocket(pocket[0], pocket[1]);
        let board = parse_cards("Ac 7s 7d 2c 9h").unwrap();
        assert_eq!(p.possible_hands(&board, HandRules::default()).len(), 21);
        let best = p.best_hand(&board, HandRules::default()).unwrap();
        assert_eq!(best.category(), Category::FullHouse);
    }

    #[test]
    fn no_hand_without_pocket() {
        let p = Player::new(PlayerId(2), "cy", 10);
        let board = parse_cards("Ac 7s 7d 2c").unwrap();
        assert!(p.best_hand(&board, HandRules::default()).is_none());
    }
}
