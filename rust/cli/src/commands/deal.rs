//! Deal command: one hand dealt face up.
//!
//! Deals two cards to each seat and a full board from a seeded deck, then
//! shows every seat's best hand and who would take the pot at showdown.

use crate::error::CliError;
use crate::formatters::{format_board, format_cards};
use minipoker_engine::deck::Deck;
use minipoker_engine::errors::GameError;
use minipoker_engine::hand::{Hand, HandRules, best_hand};
use minipoker_engine::session::MAX_PLAYERS;
use std::io::Write;

pub fn handle_deal_command(
    players: usize,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if !(2..=MAX_PLAYERS).contains(&players) {
        return Err(CliError::InvalidInput(format!(
            "players must be between 2 and {}",
            MAX_PLAYERS
        )));
    }
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    let rules = HandRules::default();

    let mut pockets = Vec::with_capacity(players);
    for _ in 0..players {
        let pocket = deck.draw_n(2);
        if pocket.len() < 2 {
            return Err(GameError::DeckExhausted.into());
        }
        pockets.push(pocket);
    }
    let board = deck.draw_n(5);

    writeln!(out, "Seed: {}", seed)?;
    let mut hands: Vec<Option<Hand>> = Vec::with_capacity(players);
    for (i, pocket) in pockets.iter().enumerate() {
        let hand = best_hand(pocket, &board, rules);
        let shown = hand.as_ref().map(|h| h.to_string()).unwrap_or_default();
        writeln!(out, "Player {}: {}  {}", i + 1, format_cards(pocket), shown)?;
        hands.push(hand);
    }
    writeln!(out, "Board: {}", format_board(&board))?;

    let best = hands.iter().max().cloned().flatten();
    let winners: Vec<String> = hands
        .iter()
        .enumerate()
        .filter(|(_, h)| **h == best)
        .map(|(i, _)| format!("Player {}", i + 1))
        .collect();
    writeln!(out, "Winner: {}", winners.join(", "))?;
    Ok(())
}
