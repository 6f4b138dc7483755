//! Card, board and turn formatters for terminal display.
//!
//! Suits use Unicode symbols (♠ ♥ ♦ ♣) where the terminal supports them and
//! fall back to the letters s h d c otherwise.
//!
//! ## Example
//!
//! ```rust
//! use sequence_engine::cards::{Card, Rank, Suit};
//! use sequence_cli::formatters::format_card;
//!
//! let ten = Card::standard(Rank::Ten, Suit::Spades);
//! assert!(format_card(&ten) == "10♠" || format_card(&ten) == "10s");
//! assert_eq!(format_card(&Card::TwoEyedJack), "2-Eyed Jack");
//! ```

use sequence_engine::board::{positions, Board, Occupant, BOARD_SIZE};
use sequence_engine::cards::{Card, Label, Suit};
use sequence_engine::game::{Outcome, TurnAction, TurnOutcome};

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Spades => "s",
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
        }
        .to_string()
    }
}

pub fn format_label(label: &Label) -> String {
    format!("{}{}", label.rank.symbol(), format_suit(label.suit))
}

pub fn format_card(card: &Card) -> String {
    match card {
        Card::Standard(l) => format_label(l),
        other => other.name(),
    }
}

/// Numbered hand listing, e.g. `[1] 7♠  [2] 2-Eyed Jack`.
pub fn format_hand(hand: &[Card]) -> String {
    hand.iter()
        .enumerate()
        .map(|(i, c)| format!("[{}] {}", i + 1, format_card(c)))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Board grid with row and column numbers.
///
/// Empty cells show their label, corners `**`, chips `X`/`O` and chips
/// locked in a sequence `[X]`/`[O]`.
pub fn format_board(board: &Board) -> String {
    let mut s = String::from("   ");
    for col in 0..BOARD_SIZE {
        s.push_str(&format!("{:^5}", col));
    }
    s.push('\n');
    for pos in positions() {
        if pos.col == 0 {
            s.push_str(&format!("{:>2} ", pos.row));
        }
        let text = match board.occupant(pos) {
            _ if pos.is_corner() => "**".to_string(),
            Occupant::Empty => board
                .cell(pos)
                .ok()
                .and_then(|c| c.label)
                .map(|l| format_label(&l))
                .unwrap_or_default(),
            Occupant::Chip(p) => chip(p).to_string(),
            Occupant::Sequence(p) => format!("[{}]", chip(p)),
        };
        s.push_str(&format!("{:^5}", text));
        if pos.col == BOARD_SIZE - 1 {
            s.push('\n');
        }
    }
    s
}

fn chip(player: usize) -> char {
    if player == 0 { 'X' } else { 'O' }
}

pub fn format_action(action: &TurnAction) -> String {
    match action {
        TurnAction::Placed { card, pos } => format!("played {} at {}", format_card(card), pos),
        TurnAction::Removed { card, pos } => {
            format!("used {} to remove the chip at {}", format_card(card), pos)
        }
        TurnAction::Discarded { card } => format!("discarded dead card {}", format_card(card)),
        TurnAction::Passed => "passed".to_string(),
    }
}

/// One-line summary of a finished turn.
pub fn format_turn(outcome: &TurnOutcome, names: &[String; 2]) -> String {
    let mut line = format!(
        "{} {}",
        names[outcome.player],
        format_action(&outcome.action)
    );
    if outcome.sequence.is_some() {
        line.push_str(&format!(
            " and completed a sequence ({}-{})",
            outcome.scores[0], outcome.scores[1]
        ));
    }
    line
}

pub fn format_outcome(outcome: &Outcome, names: &[String; 2]) -> String {
    match outcome {
        Outcome::Winner(p) => format!("{} wins!", names[*p]),
        Outcome::Draw => "Draw: the deck is empty and no valid moves remain.".to_string(),
    }
}
