use crate::board::{Board, Occupant, Pos};
use crate::cards::Card;
use crate::errors::RuleError;

/// A play that passed validation against the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedMove {
    Place { card: Card, pos: Pos },
    Remove { card: Card, pos: Pos },
}

pub fn opponent(player: usize) -> usize {
    1 - player
}

/// Validates playing `card` at `pos` for `player`.
///
/// Standard cards need an open cell printed with the same label, a Two-Eyed
/// Jack takes any open cell and a One-Eyed Jack needs an opponent chip that
/// is not part of a completed sequence. Corners are never open.
///
/// # Errors
///
/// - [`RuleError::OutOfBounds`] - `pos` is off the board
/// - [`RuleError::CellOccupied`] - placing on a taken, locked or corner cell
/// - [`RuleError::CardCellMismatch`] - the label differs from the card
/// - [`RuleError::InvalidRemoval`] - One-Eyed Jack aimed at anything but an
///   opponent chip
///
/// # Examples
///
/// ```
/// use sequence_engine::board::{Board, Pos};
/// use sequence_engine::cards::{board_labels, Card};
/// use sequence_engine::errors::RuleError;
/// use sequence_engine::rules::{validate_move, ValidatedMove};
///
/// let board = Board::from_labels(board_labels()).unwrap();
/// let pos = Pos::new(0, 1);
/// let label = board.cell(pos).unwrap().label.unwrap();
///
/// let ok = validate_move(&board, 0, Card::Standard(label), pos);
/// assert!(matches!(ok, Ok(ValidatedMove::Place { .. })));
///
/// let corner = validate_move(&board, 0, Card::TwoEyedJack, Pos::new(0, 0));
/// assert!(matches!(corner, Err(RuleError::CellOccupied { .. })));
/// ```
pub fn validate_move(
    board: &Board,
    player: usize,
    card: Card,
    pos: Pos,
) -> Result<ValidatedMove, RuleError> {
    let cell = board.cell(pos)?;
    let (row, col) = (pos.row, pos.col);
    match card {
        Card::OneEyedJack => {
            if !pos.is_corner() && cell.occupant == Occupant::Chip(opponent(player)) {
                Ok(ValidatedMove::Remove { card, pos })
            } else {
                Err(RuleError::InvalidRemoval { row, col })
            }
        }
        _ if !board.is_open(pos) => Err(RuleError::CellOccupied { row, col }),
        Card::TwoEyedJack => Ok(ValidatedMove::Place { card, pos }),
        Card::Standard(label) => {
            if cell.label == Some(label) {
                Ok(ValidatedMove::Place { card, pos })
            } else {
                Err(RuleError::CardCellMismatch)
            }
        }
    }
}

/// Opponent chips `player` could take off with a One-Eyed Jack, row-major.
pub fn removable_chips(board: &Board, player: usize) -> Vec<Pos> {
    board.chips_of(opponent(player)).collect()
}

/// Every legal target for `card`, row-major.
pub fn legal_targets(board: &Board, player: usize, card: Card) -> Vec<Pos> {
    match card {
        Card::Standard(label) => board.open_cells_with(label).collect(),
        Card::TwoEyedJack => board.open_cells().collect(),
        Card::OneEyedJack => removable_chips(board, player),
    }
}

/// Whether `card` has at least one legal target.
pub fn is_playable(board: &Board, player: usize, card: Card) -> bool {
    match card {
        Card::Standard(label) => board.open_cells_with(label).next().is_some(),
        Card::TwoEyedJack => board.open_cells().next().is_some(),
        Card::OneEyedJack => board.chips_of(opponent(player)).next().is_some(),
    }
}

/// Whether any card in `hand` has a legal target.
pub fn has_valid_moves(board: &Board, player: usize, hand: &[Card]) -> bool {
    hand.iter().any(|c| is_playable(board, player, *c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{board_labels, Rank, Suit};

    fn board() -> Board {
        Board::from_labels(board_labels()).unwrap()
    }

    #[test]
    fn standard_card_needs_matching_label() {
        let b = board();
        let pos = Pos::new(5, 5);
        let label = b.cell(pos).unwrap().label.unwrap();
        assert!(validate_move(&b, 0, Card::Standard(label), pos).is_ok());
        let other = b.cell(Pos::new(5, 6)).unwrap().label.unwrap();
        if other != label {
            assert_eq!(
                validate_move(&b, 0, Card::Standard(other), pos),
                Err(RuleError::CardCellMismatch)
            );
        }
    }

    #[test]
    fn one_eyed_jack_targets_only_opponent_chips() {
        let mut b = board();
        b.place(Pos::new(2, 2), 1).unwrap();
        b.place(Pos::new(2, 3), 0).unwrap();
        assert!(matches!(
            validate_move(&b, 0, Card::OneEyedJack, Pos::new(2, 2)),
            Ok(ValidatedMove::Remove { .. })
        ));
        assert_eq!(
            validate_move(&b, 0, Card::OneEyedJack, Pos::new(2, 3)),
            Err(RuleError::InvalidRemoval { row: 2, col: 3 })
        );
        assert_eq!(removable_chips(&b, 0), vec![Pos::new(2, 2)]);
    }

    #[test]
    fn off_board_is_reported_first() {
        let b = board();
        assert_eq!(
            validate_move(&b, 0, Card::TwoEyedJack, Pos::new(0, 12)),
            Err(RuleError::OutOfBounds { row: 0, col: 12 })
        );
    }

    #[test]
    fn standard_card_dead_when_both_cells_taken() {
        let mut b = board();
        let card = Card::standard(Rank::Ace, Suit::Clubs);
        let targets = legal_targets(&b, 0, card);
        assert_eq!(targets.len(), 2);
        for p in &targets {
            b.place(*p, 1).unwrap();
        }
        assert!(!is_playable(&b, 0, card));
        assert!(!has_valid_moves(&b, 0, &[card]));
        // the opponent chips make a One-Eyed Jack live
        assert!(has_valid_moves(&b, 0, &[card, Card::OneEyedJack]));
    }
}
