//! Command-line surface: the clap derive tree shared by every subcommand.

use clap::{Args, Parser, Subcommand};

use crate::config::Overrides;

#[derive(Debug, Parser)]
#[command(name = "minipoker", version, about = "Multi-player Hold'em at the terminal")]
pub struct MinipokerCli {
    /// Log engine decisions at debug level (RUST_LOG still wins)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sit down against bots; actions are read from stdin
    Play {
        /// Your name at the table
        #[arg(long, default_value = "you")]
        name: String,
        /// Bots to seat after you, comma separated (calling, baseline)
        #[arg(long, value_delimiter = ',', default_value = "baseline")]
        bots: Vec<String>,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Run a bots-only session and report the outcome
    Sim {
        /// Bots to seat, comma separated (calling, baseline)
        #[arg(long, value_delimiter = ',', default_value = "baseline,baseline,calling")]
        bots: Vec<String>,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Classify 5 cards, or find the best hand in 6 or 7
    Eval {
        /// Cards such as As Kd 10h 7c 2s
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        /// Do not count A-2-3-4-5 as a straight
        #[arg(long)]
        no_ace_low: bool,
    },
    /// Deal one hand face up and show who would win at showdown
    Deal {
        #[arg(long, default_value_t = 2)]
        players: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the resolved configuration and where each value came from
    Cfg {
        #[command(flatten)]
        table: TableArgs,
    },
}

/// Table flags; each one overrides the file and environment.
#[derive(Debug, Clone, Default, Args)]
pub struct TableArgs {
    /// Seed for the button draw and every deck
    #[arg(long)]
    pub seed: Option<u64>,
    /// Small blind (the big blind is twice this)
    #[arg(long)]
    pub small_blind: Option<u32>,
    /// Money each player starts with
    #[arg(long)]
    pub starting_money: Option<u32>,
    /// Stop after this many rounds
    #[arg(long)]
    pub max_rounds: Option<u32>,
    /// Do not count A-2-3-4-5 as a straight
    #[arg(long)]
    pub no_ace_low: bool,
}

impl TableArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            seed: self.seed,
            small_blind: self.small_blind,
            starting_money: self.starting_money,
            ace_low_straights: self.no_ace_low.then_some(false),
            max_rounds: self.max_rounds,
        }
    }
}
