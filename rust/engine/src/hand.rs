use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn all() -> [Category; 9] {
        [
            Category::HighCard,
            Category::Pair,
            Category::TwoPair,
            Category::ThreeOfAKind,
            Category::Straight,
            Category::Flush,
            Category::FullHouse,
            Category::FourOfAKind,
            Category::StraightFlush,
        ]
    }

    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        };
        f.write_str(name)
    }
}

/// Rule switches that change how hands are classified.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRules {
    /// Lets A-2-3-4-5 count as a straight (with the five as its top card).
    pub ace_low_straights: bool,
}

impl Default for HandRules {
    fn default() -> Self {
        Self {
            ace_low_straights: true,
        }
    }
}

/// Five classified cards.
///
/// `key` holds the same-category tie-break ranks, most significant first:
/// - straights: the run from its top card down (a wheel is 5,4,3,2,1)
/// - flush and high card: all five ranks high to low
/// - everything else: the rank of each group ordered by group size, then
///   rank, so quads/trips/pairs come before their kickers
#[derive(Debug, Clone)]
pub struct Hand {
    cards: [Card; 5],
    category: Category,
    key: [u8; 5],
}

impl Hand {
    /// Classifies exactly five cards. Never fails; falls back to high card.
    pub fn classify(cards: [Card; 5], rules: HandRules) -> Hand {
        let mut cards = cards;
        cards.sort();
        let ascending: [u8; 5] = cards.map(|c| c.rank.value());

        let flush = is_flush(&cards);
        let straight_top = straight_top(&ascending, rules);
        let groups = rank_groups(&ascending);
        let counts: Vec<u8> = groups.iter().map(|&(count, _)| count).collect();

        let category = if flush && straight_top.is_some() {
            Category::StraightFlush
        } else if counts[0] == 4 {
            Category::FourOfAKind
        } else if counts.contains(&3) && counts.contains(&2) {
            Category::FullHouse
        } else if flush {
            Category::Flush
        } else if straight_top.is_some() {
            Category::Straight
        } else if counts[0] == 3 {
            Category::ThreeOfAKind
        } else if counts.len() >= 2 && counts[0] == 2 && counts[1] == 2 {
            Category::TwoPair
        } else if counts[0] == 2 {
            Category::Pair
        } else {
            Category::HighCard
        };

        let key = match (category, straight_top) {
            (Category::StraightFlush | Category::Straight, Some(top)) => {
                [top, top - 1, top - 2, top - 3, top - 4]
            }
            (Category::Flush | Category::HighCard, _) => {
                let mut k = ascending;
                k.reverse();
                k
            }
            _ => {
                let mut k = [0u8; 5];
                for (slot, &(_, rank)) in k.iter_mut().zip(groups.iter()) {
                    *slot = rank;
                }
                k
            }
        };

        cards.reverse();
        Hand {
            cards,
            category,
            key,
        }
    }

    /// Classifies a slice that must hold exactly five cards.
    pub fn from_cards(cards: &[Card], rules: HandRules) -> Result<Hand, GameError> {
        let five: [Card; 5] = cards
            .try_into()
            .map_err(|_| GameError::InvalidHand { count: cards.len() })?;
        Ok(Hand::classify(five, rules))
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The cards, highest rank first.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// Total order over hands: category first, then the category's
    /// tie-break key.
    pub fn compare(&self, other: &Hand) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.category, self.cards.iter().join(" "))
    }
}

/// Every 5-card hand that can be built from the pocket and community cards.
pub fn possible_hands(pocket: &[Card], community: &[Card], rules: HandRules) -> Vec<Hand> {
    pocket
        .iter()
        .chain(community.iter())
        .copied()
        .combinations(5)
        .filter_map(|combo| Hand::from_cards(&combo, rules).ok())
        .collect()
}

/// The strongest hand available, or `None` when fewer than five cards are known.
pub fn best_hand(pocket: &[Card], community: &[Card], rules: HandRules) -> Option<Hand> {
    possible_hands(pocket, community, rules).into_iter().max()
}

fn is_flush(cards: &[Card; 5]) -> bool {
    cards.iter().all(|c| c.suit == cards[0].suit)
}

/// Top card of the straight formed by `ascending`, which must already be
/// sorted low to high.
fn straight_top(ascending: &[u8; 5], rules: HandRules) -> Option<u8> {
    let base = ascending[0];
    if ascending.iter().zip(base..base + 5).all(|(&v, want)| v == want) {
        return Some(base + 4);
    }
    let wheel = [2, 3, 4, 5, Rank::Ace.value()];
    if rules.ace_low_straights && *ascending == wheel {
        return Some(Rank::Five.value());
    }
    None
}

/// (count, rank) pairs ordered by count, then rank, both descending.
fn rank_groups(ascending: &[u8; 5]) -> Vec<(u8, u8)> {
    let mut groups: Vec<(u8, u8)> = ascending
        .iter()
        .dedup_with_count()
        .map(|(count, &rank)| (count as u8, rank))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn hand(text: &str) -> Hand {
        Hand::from_cards(&parse_cards(text).unwrap(), HandRules::default()).unwrap()
    }

    #[test]
    fn groups_are_ordered_by_size_then_rank() {
        assert_eq!(rank_groups(&[2, 2, 9, 9, 9]), vec![(3, 9), (2, 2)]);
        assert_eq!(rank_groups(&[3, 3, 5, 9, 9]), vec![(2, 9), (2, 3), (1, 5)]);
    }

    #[test]
    fn straight_requires_sorted_run() {
        let rules = HandRules::default();
        assert_eq!(straight_top(&[5, 6, 7, 8, 9], rules), Some(9));
        assert_eq!(straight_top(&[5, 6, 7, 8, 10], rules), None);
        assert_eq!(straight_top(&[2, 3, 4, 5, 14], rules), Some(5));
        let strict = HandRules {
            ace_low_straights: false,
        };
        assert_eq!(straight_top(&[2, 3, 4, 5, 14], strict), None);
    }

    #[test]
    fn cards_are_kept_high_to_low() {
        let h = hand("2c Kd 7h 9s 4c");
        let ranks: Vec<u8> = h.cards().iter().map(|c| c.rank.value()).collect();
        assert_eq!(ranks, vec![13, 9, 7, 4, 2]);
    }

    #[test]
    fn wheel_loses_to_six_high_straight() {
        assert!(hand("As 2d 3c 4h 5s") < hand("2d 3c 4h 5s 6d"));
    }

    #[test]
    fn display_names_category_and_cards() {
        assert_eq!(hand("As Ad Kc Kh 2s").to_string(), "Two Pair [A♠ A♦ K♥ K♣ 2♠]");
    }
}
