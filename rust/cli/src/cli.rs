//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use sequence_engine::game::Difficulty;

#[derive(Parser, Debug)]
#[command(name = "sequence", version, about = "Sequence board game in the terminal")]
pub struct SequenceCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a game against the computer or a second human
    Play {
        #[arg(long, value_enum)]
        vs: Vs,
        /// easy, medium or hard
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run AI-vs-AI games and summarize the results
    Sim {
        #[arg(long)]
        games: u32,
        /// Base seed; game i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        /// Difficulty of the side moving first
        #[arg(long)]
        first: Option<Difficulty>,
        #[arg(long)]
        second: Option<Difficulty>,
        /// Write one JSONL game record per game
        #[arg(long)]
        output: Option<String>,
    },
    /// Print a generated board layout
    Board {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Opponent type for the `play` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Vs {
    /// Both seats read moves from stdin
    Human,
    /// Seat 2 is played by the computer
    Ai,
}

impl Vs {
    /// Returns the string representation of the opponent type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sequence_cli::Vs;
    /// assert_eq!(Vs::Ai.as_str(), "ai");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Human => "human",
            Vs::Ai => "ai",
        }
    }
}
