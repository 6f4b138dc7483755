//! Input parsing for the interactive `play` command.
//!
//! Card numbers are 1-based as printed next to the hand; rows and columns are
//! the 0-9 board coordinates.

use sequence_engine::board::BOARD_SIZE;

/// Outcome of parsing one line typed by a player.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// Play hand card `index` (0-based) on `(row, col)`
    Play { index: usize, row: usize, col: usize },
    /// Exchange hand card `index` (0-based) that has no legal target
    Discard { index: usize },
    Pass,
    /// Redraw the board
    Board,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a player command.
///
/// Accepts (case-insensitive):
/// - `play <card> <row> <col>` or `p <card> <row> <col>`
/// - `discard <card>` or `d <card>`
/// - `pass`, `board`, `q` / `quit`
///
/// # Example
///
/// ```rust
/// # use sequence_cli::validation::{parse_command, ParseResult};
/// assert_eq!(
///     parse_command("play 2 4 7"),
///     ParseResult::Play { index: 1, row: 4, col: 7 }
/// );
/// assert_eq!(parse_command("D 1"), ParseResult::Discard { index: 0 });
/// assert_eq!(parse_command("q"), ParseResult::Quit);
///
/// match parse_command("play 0 1 1") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Card number")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some((&cmd, args)) = parts.split_first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match (cmd, args) {
        ("q" | "quit", []) => ParseResult::Quit,
        ("pass", []) => ParseResult::Pass,
        ("board" | "b", []) => ParseResult::Board,
        ("play" | "p", [card, row, col]) => {
            let index = match parse_card_number(card) {
                Ok(i) => i,
                Err(msg) => return ParseResult::Invalid(msg),
            };
            match (parse_coordinate(row), parse_coordinate(col)) {
                (Ok(row), Ok(col)) => ParseResult::Play { index, row, col },
                (Err(msg), _) | (_, Err(msg)) => ParseResult::Invalid(msg),
            }
        }
        ("play" | "p", _) => ParseResult::Invalid("Usage: play <card> <row> <col>".to_string()),
        ("discard" | "d", [card]) => match parse_card_number(card) {
            Ok(index) => ParseResult::Discard { index },
            Err(msg) => ParseResult::Invalid(msg),
        },
        ("discard" | "d", _) => ParseResult::Invalid("Usage: discard <card>".to_string()),
        _ => ParseResult::Invalid(format!("Unrecognized command: {}", input)),
    }
}

fn parse_card_number(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("Card number must be 1 or greater: {}", s)),
    }
}

fn parse_coordinate(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n < BOARD_SIZE => Ok(n),
        _ => Err(format!(
            "Row and column must be between 0 and {}: {}",
            BOARD_SIZE - 1,
            s
        )),
    }
}
