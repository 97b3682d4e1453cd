//! Eval command: classify a 5-card hand or pick the best of 6 or 7 cards.

use std::collections::HashSet;
use std::io::Write;

use crate::error::CliError;
use crate::formatters::format_cards;
use minipoker_engine::cards::{Card, parse_cards};
use minipoker_engine::hand::{Hand, HandRules, best_hand};

/// `cards` may hold several cards per argument ("As Ks" or "As,Ks").
pub fn handle_eval_command(
    cards: &[String],
    rules: HandRules,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cards: Vec<Card> = parse_cards(&cards.join(" "))?;
    if !(5..=7).contains(&cards.len()) {
        return Err(CliError::InvalidInput(format!(
            "eval needs 5 to 7 cards, got {}",
            cards.len()
        )));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(CliError::InvalidInput(format!("card {} appears twice", dup)));
    }

    let hand = if cards.len() == 5 {
        Hand::from_cards(&cards, rules)?
    } else {
        best_hand(&cards[..2], &cards[2..], rules)
            .ok_or_else(|| CliError::InvalidInput("not enough cards".into()))?
    };

    writeln!(out, "Cards: {}", format_cards(&cards))?;
    writeln!(out, "Hand: {}", hand)?;
    writeln!(out, "Category: {} ({})", hand.category(), hand.category().rank())?;
    Ok(())
}
