//! Parsing of what a human types at the action prompt.

use minipoker_engine::action::ActionKind;

/// Outcome of parsing one line typed at the action prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// An action kind, with the amount typed after `bet` if any
    Choice(ActionKind, Option<u32>),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parses a line into an action choice.
///
/// Accepted (case-insensitive): `check`/`k`, `call`/`c`, `bet [N]`/`b [N]`,
/// `raise [N]`, `fold`/`f`, `q`/`quit`.
///
/// ```rust
/// use minipoker_cli::validation::{parse_player_action, ParseResult};
/// use minipoker_engine::action::ActionKind;
///
/// assert_eq!(parse_player_action("fold"), ParseResult::Choice(ActionKind::Fold, None));
/// assert_eq!(parse_player_action("bet 20"), ParseResult::Choice(ActionKind::Bet, Some(20)));
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&word) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };
    if word == "q" || word == "quit" {
        return ParseResult::Quit;
    }

    let kind = match word {
        "check" | "k" => ActionKind::Check,
        "call" | "c" => ActionKind::Call,
        "bet" | "b" | "raise" | "r" => ActionKind::Bet,
        "fold" | "f" => ActionKind::Fold,
        _ => {
            return ParseResult::Invalid(format!(
                "Unrecognized action '{}'. Valid actions: check, call, bet <amount>, fold, q",
                word
            ));
        }
    };

    match (kind, parts.get(1)) {
        (ActionKind::Bet, Some(amount)) => match parse_amount(amount) {
            Ok(amount) => ParseResult::Choice(kind, Some(amount)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        (ActionKind::Bet, None) => ParseResult::Choice(kind, None),
        (_, Some(extra)) => ParseResult::Invalid(format!("'{}' takes no amount (got '{}')", word, extra)),
        (_, None) => ParseResult::Choice(kind, None),
    }
}

/// Parses a positive whole number of chips.
pub fn parse_amount(text: &str) -> Result<u32, String> {
    match text.trim().parse::<u32>() {
        Ok(0) => Err("Amount must be positive".to_string()),
        Ok(amount) => Ok(amount),
        Err(_) => Err(format!("Invalid amount '{}'", text.trim())),
    }
}
