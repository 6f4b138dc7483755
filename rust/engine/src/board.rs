use std::collections::HashMap;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{board_labels, Label};
use crate::errors::RuleError;

/// Board edge length.
pub const BOARD_SIZE: usize = 10;

/// Non-corner cells; each label is printed on exactly two of them.
pub const LABELED_CELLS: usize = BOARD_SIZE * BOARD_SIZE - 4;

/// The four wild corners.
pub const CORNERS: [Pos; 4] = [
    Pos { row: 0, col: 0 },
    Pos { row: 0, col: BOARD_SIZE - 1 },
    Pos { row: BOARD_SIZE - 1, col: 0 },
    Pos { row: BOARD_SIZE - 1, col: BOARD_SIZE - 1 },
];

/// A board coordinate. Ordering is row-major.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    pub fn is_corner(self) -> bool {
        CORNERS.contains(&self)
    }

    /// Neighbour one step along `(dr, dc)`, if it is still on the board.
    pub fn step(self, dr: isize, dc: isize) -> Option<Pos> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let p = Pos { row, col };
        p.is_on_board().then_some(p)
    }

    fn check(self) -> Result<Pos, RuleError> {
        if self.is_on_board() {
            Ok(self)
        } else {
            Err(RuleError::OutOfBounds {
                row: self.row,
                col: self.col,
            })
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What currently sits on a cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    Empty,
    /// A removable chip of the given player.
    Chip(usize),
    /// A chip locked into a completed sequence; never removable.
    Sequence(usize),
}

/// One board cell: a fixed printed label (`None` on the wild corners) and
/// its current occupant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BoardCell {
    pub label: Option<Label>,
    pub occupant: Occupant,
}

impl BoardCell {
    pub fn is_wild(&self) -> bool {
        self.label.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[BoardCell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Shuffle the double-deck labels onto the non-corner cells.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut labels = board_labels();
        labels.shuffle(rng);
        Self::layout(labels)
    }

    /// Lay out the given labels row-major over the non-corner cells.
    ///
    /// The list must hold 96 labels with every label present exactly twice.
    pub fn from_labels(labels: Vec<Label>) -> Result<Self, RuleError> {
        if labels.len() != LABELED_CELLS {
            return Err(RuleError::InvalidLayout(format!(
                "expected {} labels, got {}",
                LABELED_CELLS,
                labels.len()
            )));
        }
        let mut counts: HashMap<Label, usize> = HashMap::new();
        for l in &labels {
            *counts.entry(*l).or_default() += 1;
        }
        if let Some((l, n)) = counts.iter().find(|(_, n)| **n != 2) {
            return Err(RuleError::InvalidLayout(format!(
                "label {} appears {} times",
                l, n
            )));
        }
        Ok(Self::layout(labels))
    }

    fn layout(labels: Vec<Label>) -> Self {
        let empty = BoardCell {
            label: None,
            occupant: Occupant::Empty,
        };
        let mut cells = [[empty; BOARD_SIZE]; BOARD_SIZE];
        let mut labels = labels.into_iter();
        for pos in positions() {
            if !pos.is_corner() {
                cells[pos.row][pos.col].label = labels.next();
            }
        }
        Self { cells }
    }

    pub fn cell(&self, pos: Pos) -> Result<&BoardCell, RuleError> {
        let p = pos.check()?;
        Ok(&self.cells[p.row][p.col])
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<&BoardCell, RuleError> {
        self.cell(Pos::new(row, col))
    }

    /// Occupant of an on-board position. Callers pass positions that came
    /// from [`positions`] or [`Pos::step`].
    pub fn occupant(&self, pos: Pos) -> Occupant {
        self.cells[pos.row][pos.col].occupant
    }

    /// Whether a chip could be put here: on board, not a corner, Empty.
    pub fn is_open(&self, pos: Pos) -> bool {
        pos.is_on_board() && !pos.is_corner() && self.occupant(pos) == Occupant::Empty
    }

    pub fn place(&mut self, pos: Pos, player: usize) -> Result<(), RuleError> {
        let p = pos.check()?;
        if !self.is_open(p) {
            return Err(RuleError::CellOccupied {
                row: p.row,
                col: p.col,
            });
        }
        self.cells[p.row][p.col].occupant = Occupant::Chip(player);
        Ok(())
    }

    /// Take a chip off the board. Corners and sequence chips are protected.
    pub fn remove(&mut self, pos: Pos) -> Result<(), RuleError> {
        let p = pos.check()?;
        match self.occupant(p) {
            Occupant::Chip(_) if !p.is_corner() => {
                self.cells[p.row][p.col].occupant = Occupant::Empty;
                Ok(())
            }
            _ => Err(RuleError::InvalidRemoval {
                row: p.row,
                col: p.col,
            }),
        }
    }

    /// Lock the positions of a completed sequence. Corners stay wild.
    pub fn mark_sequence(&mut self, positions: &[Pos], owner: usize) {
        for p in positions {
            if p.is_on_board() && !p.is_corner() {
                self.cells[p.row][p.col].occupant = Occupant::Sequence(owner);
            }
        }
    }

    /// Open cells printed with `label`, row-major.
    pub fn open_cells_with(&self, label: Label) -> impl Iterator<Item = Pos> + '_ {
        positions().filter(move |p| self.is_open(*p) && self.cells[p.row][p.col].label == Some(label))
    }

    pub fn open_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        positions().filter(move |p| self.is_open(*p))
    }

    /// Removable chips belonging to `owner`, row-major.
    pub fn chips_of(&self, owner: usize) -> impl Iterator<Item = Pos> + '_ {
        positions()
            .filter(move |p| !p.is_corner() && self.occupant(*p) == Occupant::Chip(owner))
    }
}

/// Every board position in row-major order.
pub fn positions() -> impl Iterator<Item = Pos> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Pos { row, col }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn board() -> Board {
        Board::from_labels(board_labels()).unwrap()
    }

    #[test]
    fn corners_are_wild_and_everything_else_labeled() {
        let b = board();
        for p in positions() {
            let cell = b.cell(p).unwrap();
            assert_eq!(cell.is_wild(), p.is_corner(), "at {}", p);
        }
    }

    #[test]
    fn generated_layout_uses_each_label_twice() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let b = Board::generate(&mut rng);
        let mut counts: HashMap<Label, usize> = HashMap::new();
        for p in positions() {
            if let Some(l) = b.cell(p).unwrap().label {
                *counts.entry(l).or_default() += 1;
            }
        }
        assert_eq!(counts.len(), 48);
        assert!(counts.values().all(|n| *n == 2));
    }

    #[test]
    fn from_labels_rejects_bad_counts() {
        let mut labels = board_labels();
        labels.pop();
        assert!(matches!(
            Board::from_labels(labels),
            Err(RuleError::InvalidLayout(_))
        ));
        let mut labels = board_labels();
        labels[1] = labels[0];
        assert!(matches!(
            Board::from_labels(labels),
            Err(RuleError::InvalidLayout(_))
        ));
    }

    #[test]
    fn place_rejects_corners_taken_cells_and_off_board() {
        let mut b = board();
        assert_eq!(
            b.place(Pos::new(0, 0), 0),
            Err(RuleError::CellOccupied { row: 0, col: 0 })
        );
        b.place(Pos::new(3, 3), 0).unwrap();
        assert_eq!(
            b.place(Pos::new(3, 3), 1),
            Err(RuleError::CellOccupied { row: 3, col: 3 })
        );
        assert_eq!(
            b.place(Pos::new(10, 2), 0),
            Err(RuleError::OutOfBounds { row: 10, col: 2 })
        );
    }

    #[test]
    fn remove_only_plain_chips() {
        let mut b = board();
        b.place(Pos::new(4, 4), 1).unwrap();
        b.remove(Pos::new(4, 4)).unwrap();
        assert_eq!(b.occupant(Pos::new(4, 4)), Occupant::Empty);
        assert!(b.remove(Pos::new(4, 4)).is_err());
        assert!(b.remove(Pos::new(9, 9)).is_err());

        b.place(Pos::new(5, 5), 1).unwrap();
        b.mark_sequence(&[Pos::new(5, 5)], 1);
        assert_eq!(
            b.remove(Pos::new(5, 5)),
            Err(RuleError::InvalidRemoval { row: 5, col: 5 })
        );
    }

    #[test]
    fn mark_sequence_leaves_corners_alone() {
        let mut b = board();
        let line: Vec<Pos> = (0..5).map(|c| Pos::new(0, c)).collect();
        b.mark_sequence(&line, 0);
        assert_eq!(b.occupant(Pos::new(0, 0)), Occupant::Empty);
        assert_eq!(b.occupant(Pos::new(0, 4)), Occupant::Sequence(0));
    }

    #[test]
    fn step_stays_on_board() {
        assert_eq!(Pos::new(0, 0).step(-1, 0), None);
        assert_eq!(Pos::new(9, 5).step(1, 0), None);
        assert_eq!(Pos::new(2, 2).step(1, -1), Some(Pos::new(3, 1)));
    }
}
