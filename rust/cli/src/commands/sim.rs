//! Simulation command handler for AI-vs-AI games.
//!
//! # Examples
//!
//! ```no_run
//! use sequence_cli::commands::sim::handle_sim_command;
//! use sequence_engine::game::Difficulty;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//!
//! // 100 games of Hard against Easy, records saved as JSONL
//! handle_sim_command(
//!     100,
//!     Some(42),
//!     Some(Difficulty::Hard),
//!     Some(Difficulty::Easy),
//!     Some("data/games.jsonl".to_string()),
//!     &mut out,
//!     &mut err,
//! )
//! .unwrap();
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use sequence_ai::{create_ai, play_turn};
use sequence_engine::engine::Engine;
use sequence_engine::game::{Difficulty, GameConfig, Outcome};
use sequence_engine::logger::GameLogger;
use std::io::Write;
use tracing::{info, warn};

/// Turns after which a game is abandoned. Real games end far sooner.
pub const MAX_TURNS: u32 = 2_000;

/// Running totals across simulated games.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SimSummary {
    pub games: u32,
    pub wins: [u32; 2],
    pub draws: u32,
    pub abandoned: u32,
    pub turns: u64,
}

impl SimSummary {
    fn add(&mut self, outcome: Option<Outcome>, turns: u32) {
        self.games += 1;
        self.turns += u64::from(turns);
        match outcome {
            Some(Outcome::Winner(p)) => self.wins[p] += 1,
            Some(Outcome::Draw) => self.draws += 1,
            None => self.abandoned += 1,
        }
    }

    pub fn average_turns(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.turns as f64 / f64::from(self.games)
        }
    }
}

/// Handle the sim command: play `games` AI-vs-AI games.
///
/// Game `i` uses seed `seed + i`, so a run is reproducible from its base
/// seed. `first` plays seat 1, `second` seat 2; both default to the
/// configured difficulty.
pub fn handle_sim_command(
    games: u32,
    seed: Option<u64>,
    first: Option<Difficulty>,
    second: Option<Difficulty>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let cfg = config::load_with_sources()?.config;
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let first = first.unwrap_or(cfg.difficulty);
    let second = second.unwrap_or(cfg.difficulty);

    let mut logger = match output.as_deref() {
        Some(path) => Some(GameLogger::create(path)?),
        None => None,
    };

    writeln!(
        out,
        "sim: games={} seed={} first={} second={}",
        games, base_seed, first, second
    )?;

    let mut summary = SimSummary::default();
    for i in 0..games {
        let game_seed = base_seed.wrapping_add(u64::from(i));
        let (outcome, engine) = run_game(game_seed, first, second)?;
        summary.add(outcome, engine.state().turn());
        info!(game = i + 1, seed = game_seed, ?outcome, "game finished");

        if let Some(l) = logger.as_mut() {
            let id = l.next_id();
            l.write(&engine.record(&id))?;
        }
    }

    writeln!(out, "Simulated: {} games", summary.games)?;
    writeln!(out, "{} (first) wins: {}", first, summary.wins[0])?;
    writeln!(out, "{} (second) wins: {}", second, summary.wins[1])?;
    writeln!(out, "Draws: {}", summary.draws)?;
    if summary.abandoned > 0 {
        ui::display_warning(err, &format!("{} games hit the turn limit", summary.abandoned))?;
    }
    writeln!(out, "Average turns: {:.1}", summary.average_turns())?;
    Ok(())
}

fn run_game(
    seed: u64,
    first: Difficulty,
    second: Difficulty,
) -> Result<(Option<Outcome>, Engine), CliError> {
    let mut engine = Engine::new(GameConfig {
        player_names: [format!("{} AI", first), format!("{} AI", second)],
        vs_ai: true,
        ai_difficulty: second,
        seed: Some(seed),
    });
    let mut ais = [
        create_ai(first, seed.rotate_left(17)),
        create_ai(second, seed.rotate_left(31) ^ 1),
    ];
    while !engine.state().is_game_over() {
        if engine.state().turn() >= MAX_TURNS {
            warn!(seed, "turn limit reached, abandoning game");
            break;
        }
        let seat = engine.current_player();
        play_turn(ais[seat].as_mut(), &mut engine)?;
    }
    Ok((engine.state().outcome(), engine))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_outcomes() {
        let mut s = SimSummary::default();
        s.add(Some(Outcome::Winner(1)), 40);
        s.add(Some(Outcome::Draw), 60);
        s.add(None, 2);
        assert_eq!(s.wins, [0, 1]);
        assert_eq!(s.draws, 1);
        assert_eq!(s.abandoned, 1);
        assert!((s.average_turns() - 34.0).abs() < 1e-9);
    }
}
