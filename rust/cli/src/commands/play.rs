//! # Play Command
//!
//! Interactive Hold'em against bots. The human sits in seat 0 and types
//! actions on stdin; every other seat is a bot from `minipoker-ai`.
//!
//! ## Features
//!
//! - Input validation with clear error messages, re-prompting until valid
//! - Graceful quit handling (user can exit with 'q' or 'quit')
//! - Shows other seats' actions, the board and the pot before each prompt
//! - End of input is reported as an interruption (exit code 130)

use std::cell::RefCell;
use std::io::{BufRead, Write};

use crate::commands::sim::seat_bots;
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_action, format_board, format_cards, format_round, format_stacks};
use crate::io_utils::read_trimmed_line;
use crate::ui;
use crate::validation::{ParseResult, parse_amount, parse_player_action};
use minipoker_engine::action::{Action, ActionKind};
use minipoker_engine::player::{Player, PlayerAgent, PlayerId};
use minipoker_engine::round::Round;
use minipoker_engine::session::Session;

const HUMAN: PlayerId = PlayerId(0);

/// The terminal shared by the play loop and the human's agent.
///
/// Any failed read or write marks the console closed; the agent then folds
/// without asking and the play loop stops after the round.
struct Console<'io> {
    input: &'io mut dyn BufRead,
    out: &'io mut dyn Write,
    err: &'io mut dyn Write,
    /// Actions of the current round already shown.
    seen: usize,
    quit: bool,
    closed: bool,
}

impl<'io> Console<'io> {
    fn new(input: &'io mut dyn BufRead, out: &'io mut dyn Write, err: &'io mut dyn Write) -> Self {
        Self {
            input,
            out,
            err,
            seen: 0,
            quit: false,
            closed: false,
        }
    }

    fn show(&mut self, line: &str) {
        if writeln!(self.out, "{}", line).is_err() {
            self.closed = true;
        }
    }

    fn warn(&mut self, msg: &str) {
        if ui::write_error(&mut *self.err, msg).is_err() {
            self.closed = true;
        }
    }

    fn ask(&mut self, prompt: &str) -> Option<String> {
        if write!(self.out, "{}", prompt).and_then(|_| self.out.flush()).is_err() {
            self.closed = true;
            return None;
        }
        let line = read_trimmed_line(&mut *self.input);
        if line.is_none() {
            self.closed = true;
        }
        line
    }

    /// Prints what happened since the last prompt and where `player` stands.
    fn describe(&mut self, round: &Round, player: PlayerId, available: &[ActionKind]) {
        let actions = &round.record().actions;
        let fresh: Vec<String> = actions
            .iter()
            .skip(self.seen)
            .filter(|a| a.player != player)
            .map(|a| format_action(round.players(), a))
            .collect();
        self.seen = actions.len();
        for line in fresh {
            self.show(&line);
        }

        let Ok(me) = round.player(player) else {
            return;
        };
        let pocket = me.pocket().map(|c| format_cards(&c)).unwrap_or_default();
        let pot = round.pot();
        self.show(&format!(
            "Your cards: {}  Board: {}",
            pocket,
            format_board(round.community_cards())
        ));
        self.show(&format!(
            "Pot: {}  To call: {}  Money: {}",
            pot.total(),
            pot.amount_to_call(player),
            me.money()
        ));
        let options: Vec<String> = available
            .iter()
            .map(|kind| match kind {
                ActionKind::Call => format!("call {}", Action::call(round, player).amount()),
                ActionKind::Bet => format!("bet {}-{}", pot.minimum_to_bet(player), me.money()),
                other => other.to_string().to_lowercase(),
            })
            .collect();
        self.show(&format!("Actions: {}", options.join(", ")));
    }
}

/// Agent for the seat at the keyboard.
struct HumanAgent<'a, 'io> {
    console: &'a RefCell<Console<'io>>,
    /// Amount typed together with `bet`, used before prompting for one.
    pending_amount: Option<u32>,
}

impl PlayerAgent for HumanAgent<'_, '_> {
    fn interact(&mut self, round: &Round, player: PlayerId) -> Action {
        let cell = self.console;
        let kind = {
            let mut console = cell.borrow_mut();
            if console.quit || console.closed {
                return Action::Fold;
            }
            let available = round.available_actions(player);
            console.describe(round, player, &available);
            loop {
                let Some(line) = console.ask("> ") else {
                    return Action::Fold;
                };
                match parse_player_action(&line) {
                    ParseResult::Quit => {
                        console.quit = true;
                        return Action::Fold;
                    }
                    ParseResult::Invalid(msg) => console.warn(&msg),
                    ParseResult::Choice(kind, _) if !available.contains(&kind) => {
                        console.warn(&format!("{} is not possible right now", kind));
                    }
                    ParseResult::Choice(kind, amount) => {
                        self.pending_amount = amount;
                        break kind;
                    }
                }
            }
        };
        Action::from_kind(kind, self, round, player).unwrap_or(Action::Fold)
    }

    fn get_amount(&mut self, min: u32, max: u32) -> Option<u32> {
        let mut console = self.console.borrow_mut();
        let range_msg = format!("Amount must be between {} and {}", min, max);
        if let Some(amount) = self.pending_amount.take() {
            if (min..=max).contains(&amount) {
                return Some(amount);
            }
            console.warn(&range_msg);
        }
        loop {
            let Some(line) = console.ask(&format!("Amount [{}-{}]: ", min, max)) else {
                return Some(min);
            };
            match parse_amount(&line) {
                Ok(amount) if (min..=max).contains(&amount) => return Some(amount),
                Ok(_) => console.warn(&range_msg),
                Err(msg) => console.warn(&msg),
            }
        }
    }
}

/// Handle the play command: interactive poker against bots
///
/// # Arguments
///
/// * `name` - The human's seat name
/// * `bots` - Bot names for the remaining seats (at least one)
/// * `config` - Resolved table configuration
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for player actions
///
/// # Returns
///
/// * `Ok(())` when the session ends or the user quits
/// * `Err(CliError::Interrupted)` if input ends mid-game
pub fn handle_play_command(
    name: &str,
    bots: &[String],
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if bots.is_empty() {
        return Err(CliError::InvalidInput("play needs at least one bot".into()));
    }
    let mut table = config.table();
    let seed = table.seed.unwrap_or_else(rand::random);
    table.seed = Some(seed);
    let max_rounds = table.max_rounds;

    writeln!(out, "play: seats={} seed={}", bots.len() + 1, seed)?;
    writeln!(out, "Blinds: {}/{}", table.small_blind, table.small_blind.saturating_mul(2))?;

    let console = RefCell::new(Console::new(stdin, out, err));
    let human: Box<dyn PlayerAgent + '_> = Box::new(HumanAgent {
        console: &console,
        pending_amount: None,
    });
    let mut seats = vec![(name.to_string(), human)];
    for (bot_name, agent) in seat_bots(bots, Some(seed), 1)? {
        seats.push((bot_name, agent));
    }
    let mut session = Session::new(table, seats)?;

    loop {
        if session.winner().is_some() || !seated(session.players()) {
            break;
        }
        if max_rounds.is_some_and(|max| session.rounds_played() >= max) {
            break;
        }
        {
            let mut c = console.borrow_mut();
            if c.quit || c.closed {
                break;
            }
            c.seen = 0;
            c.show(&format!("\nRound {}", session.rounds_played() + 1));
        }

        let record = session.play_round()?;

        let everyone: Vec<Player> = session
            .players()
            .iter()
            .chain(session.finished_players())
            .cloned()
            .collect();
        let mut c = console.borrow_mut();
        for line in format_round(&everyone, &record) {
            c.show(&line);
        }
        c.show(&format!("Stacks: {}", format_stacks(session.players())));
    }

    let rounds = session.rounds_played();
    let money = session
        .players()
        .iter()
        .find(|p| p.id() == HUMAN)
        .map(Player::money);
    let winner = session.winner().map(|p| p.name().to_string());
    drop(session);

    let mut c = console.into_inner();
    if c.closed {
        return Err(CliError::Interrupted(format!(
            "input ended after {} rounds",
            rounds
        )));
    }
    match (money, winner) {
        (None, _) => writeln!(c.out, "You are out of money after {} rounds.", rounds)?,
        (Some(_), Some(w)) => writeln!(c.out, "{} wins the table after {} rounds.", w, rounds)?,
        (Some(m), None) if c.quit => writeln!(c.out, "You left the table with {}.", m)?,
        (Some(m), None) => writeln!(c.out, "Stopped after {} rounds with {}.", rounds, m)?,
    }
    Ok(())
}

fn seated(players: &[Player]) -> bool {
    players.iter().any(|p| p.id() == HUMAN)
}
