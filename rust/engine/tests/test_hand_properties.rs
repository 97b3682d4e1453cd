use std::cmp::Ordering;

use minipoker_engine::cards::{full_deck, Card};
use minipoker_engine::hand::{best_hand, Category, Hand, HandRules};
use proptest::prelude::*;
use proptest::sample::subsequence;

fn five_cards() -> impl Strategy<Value = [Card; 5]> {
    subsequence(full_deck(), 5)
        .prop_shuffle()
        .prop_map(|v| [v[0], v[1], v[2], v[3], v[4]])
}

fn two_hands() -> impl Strategy<Value = ([Card; 5], [Card; 5])> {
    subsequence(full_deck(), 10)
        .prop_shuffle()
        .prop_map(|v| {
            (
                [v[0], v[1], v[2], v[3], v[4]],
                [v[5], v[6], v[7], v[8], v[9]],
            )
        })
}

fn rules() -> impl Strategy<Value = HandRules> {
    any::<bool>().prop_map(|ace_low_straights| HandRules { ace_low_straights })
}

proptest! {
    #[test]
    fn classification_ignores_card_order(cards in five_cards(), rules in rules()) {
        let hand = Hand::classify(cards, rules);
        let mut reversed = cards;
        reversed.reverse();
        let again = Hand::classify(reversed, rules);
        prop_assert_eq!(hand.category(), again.category());
        prop_assert_eq!(hand.compare(&again), Ordering::Equal);
        prop_assert!(Category::all().contains(&hand.category()));
    }

    #[test]
    fn classification_is_stable(cards in five_cards()) {
        let first = Hand::classify(cards, HandRules::default());
        let second = Hand::classify(*first.cards(), HandRules::default());
        prop_assert_eq!(first.category(), second.category());
        prop_assert_eq!(first.cards(), second.cards());
    }

    #[test]
    fn higher_category_always_wins((a, b) in two_hands(), rules in rules()) {
        let ha = Hand::classify(a, rules);
        let hb = Hand::classify(b, rules);
        if ha.category() != hb.category() {
            prop_assert_eq!(ha.cmp(&hb), ha.category().cmp(&hb.category()));
        }
    }

    #[test]
    fn comparison_is_antisymmetric((a, b) in two_hands()) {
        let ha = Hand::classify(a, HandRules::default());
        let hb = Hand::classify(b, HandRules::default());
        prop_assert_eq!(ha.compare(&hb), hb.compare(&ha).reverse());
        prop_assert_eq!(ha.compare(&ha), Ordering::Equal);
    }

    #[test]
    fn best_of_seven_beats_every_subset(seven in subsequence(full_deck(), 7)) {
        let rules = HandRules::default();
        let best = best_hand(&seven[..2], &seven[2..], rules).unwrap();
        let board_only = Hand::from_cards(&seven[2..], rules).unwrap();
        prop_assert!(best >= board_only);
    }
}
