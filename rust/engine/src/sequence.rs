//! Five-in-a-row detection.
//!
//! Runs are collected along four axes through a freshly placed chip. A run
//! extends over the player's own chips, over any chip already locked in a
//! sequence, and over the wild corners. Runs of five or more are cut into
//! windows of exactly five; a window becomes a new sequence only when it
//! reuses at most one locked cell.
//!
//! Only the first qualifying window is awarded per placement, scanning axes
//! in [`Axis::ALL`] order and windows by ascending start.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::{Board, Occupant, Pos};

/// Cells in a sequence.
pub const SEQUENCE_LEN: usize = 5;

/// Sequences needed to win.
pub const SEQUENCES_TO_WIN: u8 = 2;

/// Locked cells a new window may share with earlier sequences.
pub const MAX_SHARED_CELLS: usize = 1;

/// Run length at which a hypothetical chip counts as setting up a sequence.
pub const POTENTIAL_RUN: usize = 4;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// A completed sequence: exactly five cells along one axis.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    pub owner: usize,
    pub axis: Axis,
    pub positions: [Pos; SEQUENCE_LEN],
}

fn extends_run(board: &Board, pos: Pos, player: usize) -> bool {
    if pos.is_corner() {
        return true;
    }
    match board.occupant(pos) {
        Occupant::Chip(p) => p == player,
        Occupant::Sequence(_) => true,
        Occupant::Empty => false,
    }
}

/// The maximal run through `origin` along `axis`, sorted by coordinate.
///
/// `origin` itself is always part of the run, whatever occupies it, so the
/// same walk serves both real and hypothetical placements.
pub fn run_through(board: &Board, origin: Pos, player: usize, axis: Axis) -> Vec<Pos> {
    let (dr, dc) = axis.delta();
    let mut run = vec![origin];
    for sign in [1, -1] {
        let mut cur = origin;
        while let Some(next) = cur.step(dr * sign, dc * sign) {
            if !extends_run(board, next, player) {
                break;
            }
            run.push(next);
            cur = next;
        }
    }
    run.sort();
    run
}

/// First window through `origin` that qualifies as a new sequence.
pub fn find_sequence(board: &Board, origin: Pos, player: usize) -> Option<Sequence> {
    for axis in Axis::ALL {
        let run = run_through(board, origin, player, axis);
        if run.len() < SEQUENCE_LEN {
            continue;
        }
        for window in run.windows(SEQUENCE_LEN) {
            let shared = window
                .iter()
                .filter(|p| matches!(board.occupant(**p), Occupant::Sequence(_)))
                .count();
            if shared > MAX_SHARED_CELLS {
                continue;
            }
            let Ok(positions) = <[Pos; SEQUENCE_LEN]>::try_from(window) else {
                continue;
            };
            return Some(Sequence {
                owner: player,
                axis,
                positions,
            });
        }
    }
    None
}

/// Detect and lock at most one new sequence through the chip at `origin`.
pub fn complete_sequence(board: &mut Board, origin: Pos, player: usize) -> Option<Sequence> {
    let seq = find_sequence(board, origin, player)?;
    board.mark_sequence(&seq.positions, player);
    info!(player, axis = ?seq.axis, start = %seq.positions[0], "sequence completed");
    Some(seq)
}

/// Whether a chip of `player` at `pos` would sit in a run of at least
/// [`POTENTIAL_RUN`] cells. Used for lookahead; one short of a real sequence.
pub fn has_potential_sequence(board: &Board, pos: Pos, player: usize) -> bool {
    Axis::ALL
        .iter()
        .any(|axis| run_through(board, pos, player, *axis).len() >= POTENTIAL_RUN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::board_labels;

    fn board() -> Board {
        Board::from_labels(board_labels()).unwrap()
    }

    #[test]
    fn run_stops_at_opponent_chip() {
        let mut b = board();
        for c in 2..5 {
            b.place(Pos::new(4, c), 0).unwrap();
        }
        b.place(Pos::new(4, 5), 1).unwrap();
        let run = run_through(&b, Pos::new(4, 3), 0, Axis::Horizontal);
        assert_eq!(run, vec![Pos::new(4, 2), Pos::new(4, 3), Pos::new(4, 4)]);
    }

    #[test]
    fn anti_diagonal_run_is_sorted_by_row() {
        let mut b = board();
        b.place(Pos::new(3, 5), 0).unwrap();
        b.place(Pos::new(5, 3), 0).unwrap();
        let run = run_through(&b, Pos::new(4, 4), 0, Axis::AntiDiagonal);
        assert_eq!(run, vec![Pos::new(3, 5), Pos::new(4, 4), Pos::new(5, 3)]);
    }

    #[test]
    fn four_in_a_row_is_not_a_sequence() {
        let mut b = board();
        for c in 3..7 {
            b.place(Pos::new(2, c), 1).unwrap();
        }
        assert_eq!(find_sequence(&b, Pos::new(2, 6), 1), None);
    }

    #[test]
    fn potential_needs_four_cells() {
        let mut b = board();
        b.place(Pos::new(6, 1), 0).unwrap();
        b.place(Pos::new(6, 2), 0).unwrap();
        assert!(!has_potential_sequence(&b, Pos::new(6, 3), 0));
        b.place(Pos::new(6, 4), 0).unwrap();
        assert!(has_potential_sequence(&b, Pos::new(6, 3), 0));
        assert!(!has_potential_sequence(&b, Pos::new(6, 3), 1));
    }

    #[test]
    fn corner_counts_for_both_players() {
        let mut b = board();
        for c in 1..4 {
            b.place(Pos::new(0, c), 1).unwrap();
        }
        // corner + three chips + the hypothetical fourth
        assert!(has_potential_sequence(&b, Pos::new(0, 4), 1));
    }
}
