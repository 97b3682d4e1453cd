//! Baseline bot for simulations and for a human to play against.
//!
//! Scores the hole cards (preflop) or the best made hand (postflop) on a
//! 0-10 scale, turns that score into weights over Call/Fold/Bet/Check and
//! draws one of the actions the round currently allows.

use minipoker_engine::action::{Action, ActionKind};
use minipoker_engine::cards::Card;
use minipoker_engine::hand::{best_hand, Category, Hand, HandRules};
use minipoker_engine::player::{PlayerAgent, PlayerId};
use minipoker_engine::round::Round;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

/// Relative weights of the four action kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distribution {
    pub call: u32,
    pub fold: u32,
    pub bet: u32,
    pub check: u32,
}

impl Distribution {
    pub const fn new(call: u32, fold: u32, bet: u32, check: u32) -> Self {
        Self {
            call,
            fold,
            bet,
            check,
        }
    }

    /// Weights for a 0-10 hand strength. Weak hands mostly fold or check,
    /// strong ones call and bet more.
    pub fn for_strength(strength: u8) -> Self {
        match strength {
            0..=2 => Self::new(5, 70, 5, 20),
            3..=4 => Self::new(30, 20, 10, 40),
            5..=6 => Self::new(35, 10, 20, 35),
            7..=8 => Self::new(35, 10, 25, 40),
            _ => Self::new(45, 5, 30, 10),
        }
    }

    pub fn weight(&self, kind: ActionKind) -> u32 {
        match kind {
            ActionKind::Call => self.call,
            ActionKind::Fold => self.fold,
            ActionKind::Bet => self.bet,
            ActionKind::Check => self.check,
        }
    }

    /// Draws one of `allowed`, proportionally to its weight.
    pub fn pick<R: Rng + ?Sized>(&self, allowed: &[ActionKind], rng: &mut R) -> Option<ActionKind> {
        let total: u32 = allowed.iter().map(|&k| self.weight(k)).sum();
        if total == 0 {
            return None;
        }
        let mut ticket = rng.random_range(0..total);
        for &kind in allowed {
            let weight = self.weight(kind);
            if ticket < weight {
                return Some(kind);
            }
            ticket -= weight;
        }
        None
    }
}

/// Weighted-random player driven by a coarse hand-strength score.
///
/// Folds with its weak-hand odds even when checking is free. Bet sizes are
/// uniform over the legal range.
#[derive(Debug, Clone)]
pub struct BaselineBot {
    rng: ChaCha20Rng,
}

impl BaselineBot {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Strength of `player`'s holding in `round` on a 0-10 scale.
    pub fn strength(round: &Round, player: PlayerId) -> u8 {
        let Some(pocket) = round.player(player).ok().and_then(|p| p.pocket()) else {
            return 0;
        };
        let board = round.community_cards();
        if board.is_empty() {
            return preflop_strength(pocket);
        }
        postflop_strength(pocket, board, round.rules()).unwrap_or_else(|| preflop_strength(pocket))
    }
}

impl Default for BaselineBot {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerAgent for BaselineBot {
    fn interact(&mut self, round: &Round, player: PlayerId) -> Action {
        let allowed = round.available_actions(player);
        let strength = Self::strength(round, player);
        let kind = Distribution::for_strength(strength)
            .pick(&allowed, &mut self.rng)
            .unwrap_or(ActionKind::Fold);
        debug!(%player, strength, %kind, "baseline decision");
        Action::from_kind(kind, self, round, player).unwrap_or(Action::Fold)
    }

    fn get_amount(&mut self, min: u32, max: u32) -> Option<u32> {
        (min <= max).then(|| self.rng.random_range(min..=max))
    }
}

fn by_suit(suited: bool, if_suited: u8, offsuit: u8) -> u8 {
    if suited { if_suited } else { offsuit }
}

/// Scores two hole cards from 0 (trash) to 10 (AA, KK, AKs).
pub fn preflop_strength(pocket: [Card; 2]) -> u8 {
    let (a, b) = (pocket[0].rank.value(), pocket[1].rank.value());
    let (high, low) = if a >= b { (a, b) } else { (b, a) };
    let suited = pocket[0].suit == pocket[1].suit;

    if high == low {
        return match high {
            13..=14 => 10,
            11..=12 => 9,
            10 => 8,
            9 => 7,
            8 => 6,
            7 => 5,
            _ => 4,
        };
    }

    match (high, low) {
        (14, 13) => by_suit(suited, 10, 8),
        (14, 12) => by_suit(suited, 8, 7),
        (14, 11) => by_suit(suited, 7, 6),
        (14, 10) => by_suit(suited, 6, 5),
        (14, _) => by_suit(suited, 5, 4),
        (13, 12) => by_suit(suited, 7, 6),
        (13, 11) => by_suit(suited, 6, 5),
        (13, 10) => by_suit(suited, 5, 4),
        (12, 11) => by_suit(suited, 6, 5),
        (12, 10) => by_suit(suited, 5, 4),
        _ if suited && high - low <= 2 => {
            if high >= 9 {
                5
            } else {
                4
            }
        }
        _ if high >= 11 && low >= 9 => 4,
        _ => 2,
    }
}

/// Scores the best hand made with the board, `None` before the flop.
///
/// A hand that is no better than the five board cards on their own is
/// scored as weak: everybody still in holds it too.
pub fn postflop_strength(pocket: [Card; 2], board: &[Card], rules: HandRules) -> Option<u8> {
    if board.len() < 3 {
        return None;
    }
    let best = best_hand(&pocket, board, rules)?;
    if board.len() == 5 {
        if let Ok(board_only) = Hand::from_cards(board, rules) {
            if best <= board_only {
                return Some(1);
            }
        }
    }

    let base: u8 = match best.category() {
        Category::HighCard => 1,
        Category::Pair => 3,
        Category::TwoPair => 5,
        Category::ThreeOfAKind => 6,
        Category::Straight => 7,
        Category::Flush => 8,
        Category::FullHouse => 9,
        Category::FourOfAKind | Category::StraightFlush => 10,
    };
    let high_boost = u8::from(best.cards()[0].rank.value() >= 12);
    Some((base + high_boost).min(10))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minipoker_engine::cards::parse_cards;
    use minipoker_engine::deck::Deck;
    use minipoker_engine::player::Player;
    use minipoker_engine::session::{Session, TableConfig};
    use rand_chacha::ChaCha8Rng;

    fn pocket(text: &str) -> [Card; 2] {
        let cards = parse_cards(text).unwrap();
        [cards[0], cards[1]]
    }

    #[test]
    fn premium_pairs_score_ten() {
        assert_eq!(preflop_strength(pocket("Ah As")), 10);
        assert_eq!(preflop_strength(pocket("Kh Ks")), 10);
        assert_eq!(preflop_strength(pocket("2h 2s")), 4);
    }

    #[test]
    fn ace_king_depends_on_suit() {
        assert_eq!(preflop_strength(pocket("Ah Kh")), 10);
        assert_eq!(preflop_strength(pocket("Ah Ks")), 8);
        assert_eq!(preflop_strength(pocket("Kh Ah")), 10);
    }

    #[test]
    fn weak_and_connected_hands() {
        assert!(preflop_strength(pocket("7h 2s")) <= 3);
        let connectors = preflop_strength(pocket("9h 8h"));
        assert!((4..=6).contains(&connectors));
    }

    #[test]
    fn postflop_uses_made_hand() {
        let board = parse_cards("Ad Kc Qh Js 2d").unwrap();
        let trips = postflop_strength(pocket("Ah As"), &board, HandRules::default()).unwrap();
        assert!(trips >= 6);
        assert_eq!(postflop_strength(pocket("Ah As"), &board[..2], HandRules::default()), None);
    }

    #[test]
    fn playing_the_board_scores_weak() {
        let board = parse_cards("Ts Js Qs Ks As").unwrap();
        assert_eq!(postflop_strength(pocket("2h 3d"), &board, HandRules::default()), Some(1));
    }

    #[test]
    fn pick_only_returns_allowed_kinds() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let dist = Distribution::for_strength(0);
        let allowed = [ActionKind::Check, ActionKind::Bet];
        for _ in 0..200 {
            let kind = dist.pick(&allowed, &mut rng).unwrap();
            assert!(allowed.contains(&kind));
        }
        let with_fold = [ActionKind::Check, ActionKind::Bet, ActionKind::Fold];
        let folds = (0..200)
            .filter(|_| dist.pick(&with_fold, &mut rng) == Some(ActionKind::Fold))
            .count();
        // fold carries 70 of the 95 weight left
        assert!((100..190).contains(&folds));
        let nothing = Distribution::new(0, 0, 0, 0);
        assert_eq!(nothing.pick(&allowed, &mut rng), None);
    }

    #[test]
    fn may_fold_when_check_is_free() {
        let players = vec![
            Player::new(PlayerId(0), "a", 100),
            Player::new(PlayerId(1), "b", 100),
        ];
        let mut round =
            Round::new(players, PlayerId(0), 1, Deck::new_with_seed(8), HandRules::default()).unwrap();
        let mut agents: Vec<Box<dyn PlayerAgent>> =
            vec![Box::new(crate::CallingStation), Box::new(crate::CallingStation)];
        round.step(&mut agents).unwrap();
        // the big blind (button, heads-up) may check
        assert!(ActionKind::Check.is_valid(PlayerId(0), &round));
        let mut bot = BaselineBot::with_seed(21);
        let folds = (0..200)
            .filter(|_| bot.interact(&round, PlayerId(0)) == Action::Fold)
            .count();
        assert!(folds > 0);
        assert!(folds < 200);
    }

    #[test]
    fn amounts_stay_in_range() {
        let mut bot = BaselineBot::with_seed(2);
        for _ in 0..100 {
            let amount = bot.get_amount(4, 9).unwrap();
            assert!((4..=9).contains(&amount));
        }
        assert_eq!(bot.get_amount(5, 4), None);
    }

    #[test]
    fn baseline_table_runs_to_a_winner() {
        let seats: Vec<(String, Box<dyn PlayerAgent>)> = (0..4u64)
            .map(|i| {
                (
                    format!("bot{i}"),
                    Box::new(BaselineBot::with_seed(i)) as Box<dyn PlayerAgent>,
                )
            })
            .collect();
        let config = TableConfig {
            starting_money: 50,
            seed: Some(11),
            max_rounds: Some(5_000),
            ..TableConfig::default()
        };
        let mut session = Session::new(config, seats).unwrap();
        let outcome = session.play().unwrap();
        let left: u32 = session.players().iter().map(|p| p.money()).sum();
        assert_eq!(left, 200);
        if outcome.winner.is_some() {
            assert_eq!(session.players().len(), 1);
        }
    }
}
