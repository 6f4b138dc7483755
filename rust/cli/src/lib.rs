//! # Sequence CLI Library
//!
//! Command-line front end for the Sequence board game engine: interactive
//! play, AI-vs-AI simulation, board inspection and configuration display.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["sequence", "play", "--vs", "ai", "--difficulty", "hard"];
//! let code = sequence_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play a game against the computer or a second human
//! - `sim`: Run AI-vs-AI games and optionally record them as JSONL
//! - `board`: Print the board layout for a seed
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, SequenceCli};
use commands::{
    handle_board_command, handle_cfg_command, handle_play_command, handle_sim_command,
};

pub use cli::Vs;
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "board", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Returns
///
/// Exit code: [`exit_code::SUCCESS`] or [`exit_code::ERROR`]
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["sequence", "board", "--seed", "42"];
/// let code = sequence_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match SequenceCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Play {
            vs,
            difficulty,
            seed,
        } => {
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(vs, difficulty, seed, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            games,
            seed,
            first,
            second,
            output,
        } => handle_sim_command(games, seed, first, second, output, out, err),
        Commands::Board { seed } => handle_board_command(seed, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "Sequence CLI");
    let _ = writeln!(err, "Usage: sequence <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: sequence --help");
    exit_code::ERROR
}

#[cfg(test)]
mod tests {
    use super::*;
    use sequence_engine::game::Difficulty;

    #[test]
    fn test_every_subcommand_parses() {
        let commands = vec![
            vec!["sequence", "cfg"],
            vec!["sequence", "play", "--vs", "ai"],
            vec!["sequence", "play", "--vs", "human", "--seed", "3"],
            vec!["sequence", "sim", "--games", "1"],
            vec!["sequence", "board"],
        ];
        for cmd_args in commands {
            let result = SequenceCli::try_parse_from(&cmd_args);
            assert!(result.is_ok(), "Failed to parse: {:?}", cmd_args);
        }
    }

    #[test]
    fn test_difficulty_flag_uses_engine_parser() {
        let cli = SequenceCli::try_parse_from([
            "sequence",
            "sim",
            "--games",
            "2",
            "--first",
            "Hard",
            "--second",
            "easy",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Sim { first, second, .. } => {
                assert_eq!(first, Some(Difficulty::Hard));
                assert_eq!(second, Some(Difficulty::Easy));
            }
            other => panic!("Expected Commands::Sim, got {:?}", other),
        }
        assert!(
            SequenceCli::try_parse_from(["sequence", "play", "--vs", "ai", "--difficulty", "x"])
                .is_err()
        );
    }

    #[test]
    fn test_unknown_command_lists_commands() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["sequence", "deal"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let stderr = String::from_utf8(err).unwrap();
        for c in COMMANDS {
            assert!(stderr.contains(c));
        }
    }
}
