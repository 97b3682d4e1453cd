use minipoker_engine::cards::Card;
use minipoker_engine::errors::GameError;
use minipoker_engine::hand::{best_hand, possible_hands, Category, Hand, HandRules};

mod helpers;
use helpers::cards;

fn classify(text: &str) -> Hand {
    Hand::from_cards(&cards(text), HandRules::default()).unwrap()
}

fn category(text: &str) -> Category {
    classify(text).category()
}

#[test]
fn detects_every_category() {
    assert_eq!(category("Th Jh Qh Kh Ah"), Category::StraightFlush);
    assert_eq!(category("9c 9d 9h 9s 2c"), Category::FourOfAKind);
    assert_eq!(category("9c 9d 9h 2s 2c"), Category::FullHouse);
    assert_eq!(category("2d 7d Jd Qd 9d"), Category::Flush);
    assert_eq!(category("5c 6h 7c 8h 9d"), Category::Straight);
    assert_eq!(category("Qc Qh Qd 2s 3c"), Category::ThreeOfAKind);
    assert_eq!(category("Qc Qh 3d 3s 9c"), Category::TwoPair);
    assert_eq!(category("Ac Ah 3d 4s 9c"), Category::Pair);
    assert_eq!(category("Ac Kh 9d 4s 2c"), Category::HighCard);
}

#[test]
fn ace_low_straight_flush_and_near_miss() {
    assert_eq!(category("As 2s 3s 4s 5s"), Category::StraightFlush);
    assert_ne!(category("As 2s 3s 5s 6s"), Category::StraightFlush);
    assert_eq!(category("As 2s 3s 5s 6s"), Category::Flush);
}

#[test]
fn ace_low_straights_can_be_disabled() {
    let strict = HandRules {
        ace_low_straights: false,
    };
    let wheel = Hand::from_cards(&cards("As 2d 3c 4h 5s"), strict).unwrap();
    assert_eq!(wheel.category(), Category::HighCard);
    let wheel_flush = Hand::from_cards(&cards("As 2s 3s 4s 5s"), strict).unwrap();
    assert_eq!(wheel_flush.category(), Category::Flush);
    let broadway = Hand::from_cards(&cards("Ts Jd Qc Kh As"), strict).unwrap();
    assert_eq!(broadway.category(), Category::Straight);
}

#[test]
fn full_house_is_not_three_of_a_kind() {
    assert_eq!(category("Kc Kd Kh 4s 4c"), Category::FullHouse);
    assert_eq!(category("Kc Kd Kh 4s 5c"), Category::ThreeOfAKind);
}

#[test]
fn wrong_card_count_is_an_error() {
    let err = Hand::from_cards(&cards("As Ks Qs Js"), HandRules::default()).unwrap_err();
    assert_eq!(err, GameError::InvalidHand { count: 4 });
    let err = Hand::from_cards(&cards("As Ks Qs Js Ts 9s"), HandRules::default()).unwrap_err();
    assert_eq!(err, GameError::InvalidHand { count: 6 });
}

#[test]
fn categories_order_across_boundaries() {
    let ladder = [
        "Ac Kh 9d 4s 2c",
        "2c 2h 3d 4s 6c",
        "2c 2h 3d 3s 4c",
        "2c 2h 2d 3s 4c",
        "As 2d 3c 4h 5s",
        "2d 3d 4d 5d 7d",
        "2c 2h 2d 3s 3c",
        "2c 2h 2d 2s 3c",
        "As 2s 3s 4s 5s",
    ];
    let hands: Vec<Hand> = ladder.iter().map(|t| classify(t)).collect();
    for (i, lower) in hands.iter().enumerate() {
        assert_eq!(lower.category().rank() as usize, i);
        for higher in &hands[i + 1..] {
            assert!(higher > lower, "{} should beat {}", higher, lower);
        }
    }
}

#[test]
fn high_card_compares_high_to_low() {
    assert!(classify("Ac Kh 9d 4s 3c") > classify("Ad Kc 9h 4d 2c"));
    assert!(classify("Ac Qh Jd 4s 3c") < classify("Ad Kc 2h 3d 4c"));
}

#[test]
fn pair_uses_kickers_after_pair_rank() {
    assert!(classify("9c 9h Ad 4s 3c") > classify("8c 8h Ad Ks Qc"));
    assert!(classify("9c 9h Ad 5s 3c") > classify("9d 9s Ah 4d 3d"));
}

#[test]
fn two_pair_compares_high_low_then_kicker() {
    assert!(classify("Kc Kh 2d 2s 3c") > classify("Qc Qh Jd Js Ac"));
    assert!(classify("Kc Kh 5d 5s 3c") > classify("Kd Ks 4c 4h Ac"));
    assert!(classify("Kc Kh 5d 5s 9c") > classify("Kd Ks 5c 5h 8c"));
    assert_eq!(classify("Kc Kh 5d 5s 9c"), classify("Kd Ks 5c 5h 9h"));
}

#[test]
fn repeated_groups_compare_group_rank_first() {
    assert!(classify("3c 3h 3d 3s 2c") > classify("2c 2h 2d 2s Ac"));
    assert!(classify("3c 3h 3d 2s 2c") > classify("2c 2h 2d As Ac"));
    assert!(classify("Tc Th Td 2s 3c") > classify("9c 9h 9d As Kc"));
    // same trips, the kicker decides
    assert!(classify("Tc Th Td As 3c") > classify("Tc Th Td Ks Qc"));
}

#[test]
fn straights_compare_by_top_card() {
    assert!(classify("6c 7h 8d 9s Tc") > classify("5c 6h 7d 8s 9c"));
    assert_eq!(classify("6c 7h 8d 9s Tc"), classify("6d 7d 8c 9h Ts"));
    assert!(classify("Tc Jh Qd Ks Ac") > classify("9c Th Jd Qs Kc"));
}

#[test]
fn flush_compares_all_cards() {
    assert!(classify("2d 7d Jd Qd 9d") > classify("2h 7h Jh Qh 8h"));
}

#[test]
fn seven_cards_give_21_hands_and_the_best_one_wins() {
    let pocket = cards("Ah Kh");
    let board = cards("Qh Jh Th 2c 2d");
    assert_eq!(possible_hands(&pocket, &board, HandRules::default()).len(), 21);
    let best = best_hand(&pocket, &board, HandRules::default()).unwrap();
    assert_eq!(best.category(), Category::StraightFlush);
    assert_eq!(best.cards()[0], "Ah".parse::<Card>().unwrap());
}

#[test]
fn best_hand_needs_five_cards() {
    assert!(best_hand(&cards("Ah Kh"), &cards("2c 3c"), HandRules::default()).is_none());
    let six = possible_hands(&cards("Ah Kh"), &cards("2c 3c 4d 5s"), HandRules::default());
    assert_eq!(six.len(), 6);
}
