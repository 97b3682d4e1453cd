//! Card, board, and round formatters for terminal display.
//!
//! Cards print with Unicode suit symbols (♥ ♦ ♣ ♠). Windows consoles that
//! are not known to render them fall back to letters (h d c s).
//!
//! ## Example
//!
//! ```rust
//! use minipoker_engine::cards::{Card, Rank, Suit};
//! use minipoker_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use minipoker_engine::cards::{Card, Suit};
use minipoker_engine::player::{Player, PlayerId};
use minipoker_engine::record::{ActionRecord, RoundRecord, Street};

/// Whether the terminal can show suit symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Elsewhere assumes yes.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

fn suit_letter(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "h",
        Suit::Diamonds => "d",
        Suit::Clubs => "c",
        Suit::Spades => "s",
    }
}

pub fn format_card(card: &Card) -> String {
    let text = card.to_string();
    if supports_unicode() {
        text
    } else {
        text.replace(card.suit.symbol(), suit_letter(card.suit))
    }
}

/// Space separated cards, `-` when there are none.
pub fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

pub fn format_board(cards: &[Card]) -> String {
    format!("[{}]", format_cards(cards))
}

pub fn street_name(street: Street) -> &'static str {
    match street {
        Street::PreFlop => "preflop",
        Street::Flop => "flop",
        Street::Turn => "turn",
        Street::River => "river",
    }
}

/// Seat name for `id`, or its `#n` form if nobody by that id is listed.
pub fn name_of(players: &[Player], id: PlayerId) -> String {
    players
        .iter()
        .find(|p| p.id() == id)
        .map(|p| p.name().to_string())
        .unwrap_or_else(|| id.to_string())
}

pub fn format_action(players: &[Player], record: &ActionRecord) -> String {
    format!(
        "{:>7}: {} {}",
        street_name(record.street),
        name_of(players, record.player),
        record.action
    )
}

/// Multi-line summary of a settled round.
pub fn format_round(players: &[Player], record: &RoundRecord) -> Vec<String> {
    let mut lines = Vec::new();
    let blinds: Vec<String> = record
        .blinds
        .iter()
        .map(|&(id, amount)| format!("{} {}", name_of(players, id), amount))
        .collect();
    lines.push(format!(
        "Button: {}  Blinds: {}",
        name_of(players, record.button),
        blinds.join(", ")
    ));
    for action in &record.actions {
        lines.push(format_action(players, action));
    }
    lines.push(format!("Board: {}", format_board(&record.community)));
    for payout in record.payouts.iter().filter(|p| p.amount > 0) {
        let with = payout
            .hand
            .map(|c| format!(" with {}", c))
            .unwrap_or_default();
        lines.push(format!(
            "{} wins {}{}",
            name_of(players, payout.player),
            payout.amount,
            with
        ));
    }
    for &(id, amount) in &record.refunds {
        lines.push(format!("{} gets back {}", name_of(players, id), amount));
    }
    lines
}

/// `name: money` for every seat.
pub fn format_stacks(players: &[Player]) -> String {
    players
        .iter()
        .map(|p| format!("{}: {}", p.name(), p.money()))
        .collect::<Vec<_>>()
        .join(", ")
}
