//! `board` command: print the layout a seed produces.

use crate::error::CliError;
use crate::formatters::format_board;
use sequence_engine::engine::Engine;
use sequence_engine::game::GameConfig;
use std::io::Write;

/// Print the board for `seed` (random when `None`).
///
/// The layout is the one `play --seed` starts with.
pub fn handle_board_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let engine = Engine::new(GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    });
    writeln!(out, "Seed: {}", seed)?;
    write!(out, "{}", format_board(engine.state().board()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_prints_same_board() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_board_command(Some(42), &mut a).unwrap();
        handle_board_command(Some(42), &mut b).unwrap();
        assert_eq!(a, b);
        let text = String::from_utf8(a).unwrap();
        assert!(text.starts_with("Seed: 42\n"));
        assert_eq!(text.lines().count(), 12);
    }
}
