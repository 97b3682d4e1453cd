use minipoker_engine::deck::Deck;
use minipoker_engine::errors::GameError;
use minipoker_engine::hand::HandRules;
use minipoker_engine::player::{PlayerAgent, PlayerId};
use minipoker_engine::round::Round;
use minipoker_engine::session::{Session, TableConfig, MAX_PLAYERS};

mod helpers;
use helpers::{table, CallAgent};

fn call_seats(n: usize) -> Vec<(String, Box<dyn PlayerAgent>)> {
    (0..n)
        .map(|i| (format!("p{i}"), Box::new(CallAgent) as Box<dyn PlayerAgent>))
        .collect()
}

#[test]
fn session_needs_two_players() {
    let err = Session::new(TableConfig::default(), call_seats(1)).err();
    assert_eq!(err, Some(GameError::NotEnoughPlayers { count: 1 }));
}

#[test]
fn session_rejects_more_players_than_the_deck_serves() {
    let err = Session::new(TableConfig::default(), call_seats(MAX_PLAYERS + 1)).err();
    assert!(matches!(err, Some(GameError::InvalidConfig(_))));
    assert!(Session::new(TableConfig::default(), call_seats(MAX_PLAYERS)).is_ok());
}

#[test]
fn zero_blind_or_money_is_invalid() {
    let zero_blind = TableConfig {
        small_blind: 0,
        ..TableConfig::default()
    };
    assert!(matches!(
        Session::new(zero_blind, call_seats(2)).err(),
        Some(GameError::InvalidConfig(_))
    ));
    let broke = TableConfig {
        starting_money: 0,
        ..TableConfig::default()
    };
    assert!(matches!(broke.validate(), Err(GameError::InvalidConfig(_))));
}

#[test]
fn round_needs_two_players_and_a_seated_button() {
    let err = Round::new(table(&[100]), PlayerId(0), 1, Deck::new_with_seed(1), HandRules::default()).unwrap_err();
    assert_eq!(err, GameError::NotEnoughPlayers { count: 1 });

    let err = Round::new(table(&[100, 100]), PlayerId(5), 1, Deck::new_with_seed(1), HandRules::default()).unwrap_err();
    assert_eq!(err, GameError::UnknownPlayer(PlayerId(5)));
}

#[test]
fn full_table_is_dealt_from_one_deck() {
    let stacks = vec![10; MAX_PLAYERS];
    let round = Round::new(table(&stacks), PlayerId(0), 1, Deck::new_with_seed(4), HandRules::default()).unwrap();
    assert!(round.players().iter().all(|p| p.pocket().is_some()));
}
