//! # Play Command
//!
//! Interactive Sequence game in the terminal.
//!
//! - **Human vs AI**: seat 1 enters moves via stdin, seat 2 is the computer
//! - **Human vs Human**: both seats read moves from the same stdin
//!
//! Commands typed at the prompt are parsed by
//! [`crate::validation::parse_command`]. `q` or EOF ends the session.

use crate::cli::Vs;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_card, format_hand, format_outcome, format_turn};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_command};
use sequence_ai::{create_ai, play_turn};
use sequence_engine::engine::Engine;
use sequence_engine::errors::RuleError;
use sequence_engine::game::{Difficulty, GameConfig, TurnOutcome};
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

/// Handle the play command.
///
/// `difficulty` and `seed` override the configured values.
///
/// # Examples
///
/// ```no_run
/// use sequence_cli::commands::handle_play_command;
/// use sequence_cli::Vs;
/// use std::io::{stdin, stdout, stderr};
///
/// let mut input = stdin().lock();
/// handle_play_command(Vs::Ai, None, Some(7), &mut stdout(), &mut stderr(), &mut input).unwrap();
/// ```
pub fn handle_play_command(
    vs: Vs,
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load_with_sources()?.config;
    let vs_ai = vs == Vs::Ai;
    let difficulty = difficulty.unwrap_or(cfg.difficulty);
    let names = [cfg.player_one.clone(), cfg.player_two.clone()];

    let mut engine = Engine::new(GameConfig {
        player_names: names.clone(),
        vs_ai,
        ai_difficulty: difficulty,
        seed: seed.or(cfg.seed),
    });
    writeln!(
        out,
        "play: vs={} difficulty={} seed={}",
        vs.as_str(),
        difficulty,
        engine.seed()
    )?;
    let mut ai = create_ai(difficulty, engine.seed().wrapping_add(1));
    write!(out, "{}", format_board(engine.state().board()))?;

    let mut quit_requested = false;
    while !engine.state().is_game_over() {
        if engine.is_ai_turn() {
            if cfg.ai_delay_ms > 0 {
                thread::sleep(Duration::from_millis(cfg.ai_delay_ms));
            }
            let outcome = play_turn(ai.as_mut(), &mut engine)?;
            writeln!(out, "{}", format_turn(&outcome, &names))?;
            continue;
        }

        let player = engine.current_player();
        let hand = engine.state().hand(player).to_vec();
        let scores = engine.state().scores();
        writeln!(
            out,
            "{} to move (sequences {}-{}, deck {})",
            names[player],
            scores[0],
            scores[1],
            engine.state().deck_remaining()
        )?;
        writeln!(out, "Hand: {}", format_hand(&hand))?;
        write!(
            out,
            "Enter command (play <card> <row> <col>/discard <card>/pass/board/q): "
        )?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            quit_requested = true;
            break;
        };
        match parse_command(&line) {
            ParseResult::Play { index, row, col } => {
                let Some(&card) = hand.get(index) else {
                    ui::write_error(err, &format!("No card number {}", index + 1))?;
                    continue;
                };
                let played = engine
                    .select_card(card)
                    .and_then(|_| engine.propose_move(row, col));
                report(out, err, played, &names)?;
            }
            ParseResult::Discard { index } => {
                let Some(&card) = hand.get(index) else {
                    ui::write_error(err, &format!("No card number {}", index + 1))?;
                    continue;
                };
                match engine.discard_dead_card(card) {
                    Ok(Some(drawn)) => writeln!(
                        out,
                        "Discarded {}, drew {}",
                        format_card(&card),
                        format_card(&drawn)
                    )?,
                    Ok(None) => writeln!(out, "Discarded {}, deck is empty", format_card(&card))?,
                    Err(e) => ui::write_error(err, &e.to_string())?,
                }
            }
            ParseResult::Pass => {
                let passed = engine.pass_turn();
                report(out, err, passed, &names)?;
            }
            ParseResult::Board => write!(out, "{}", format_board(engine.state().board()))?,
            ParseResult::Quit => {
                quit_requested = true;
                break;
            }
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    if let Some(outcome) = engine.state().outcome() {
        write!(out, "{}", format_board(engine.state().board()))?;
        writeln!(out, "{}", format_outcome(&outcome, &names))?;
    } else if quit_requested {
        writeln!(out, "Game abandoned.")?;
    }
    writeln!(out, "Turns played: {}", engine.state().turn())?;
    Ok(())
}

/// Print a turn report, or the rule violation so the player can try again.
fn report(
    out: &mut dyn Write,
    err: &mut dyn Write,
    result: Result<TurnOutcome, RuleError>,
    names: &[String; 2],
) -> Result<(), CliError> {
    match result {
        Ok(outcome) => writeln!(out, "{}", format_turn(&outcome, names))?,
        Err(e) => ui::write_error(err, &e.to_string())?,
    }
    Ok(())
}
