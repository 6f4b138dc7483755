use crate::cards::Card;
use crate::errors::RuleError;

/// Seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Cards dealt to each player in a two-player game.
pub const HAND_SIZE: usize = 7;

/// One seat: its hand and the number of sequences it has completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Seat index (0 or 1); also the chip colour on the board
    id: usize,
    /// Cards in hand; order is irrelevant to the rules
    hand: Vec<Card>,
    /// Completed sequences
    sequences: u8,
}

impl Player {
    pub fn new(id: usize, hand: Vec<Card>) -> Self {
        Self {
            id,
            hand,
            sequences: 0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn sequences(&self) -> u8 {
        self.sequences
    }

    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    pub fn give_card(&mut self, c: Card) {
        self.hand.push(c);
    }

    /// Remove one copy of `card` from the hand.
    pub fn take_card(&mut self, card: Card) -> Result<(), RuleError> {
        let idx = self
            .hand
            .iter()
            .position(|c| *c == card)
            .ok_or(RuleError::CardNotInHand)?;
        self.hand.remove(idx);
        Ok(())
    }

    pub(crate) fn add_sequence(&mut self) -> u8 {
        self.sequences = self.sequences.saturating_add(1);
        self.sequences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn take_card_removes_a_single_copy() {
        let c = Card::standard(Rank::Five, Suit::Hearts);
        let mut p = Player::new(0, vec![c, Card::TwoEyedJack, c]);
        p.take_card(c).unwrap();
        assert_eq!(p.hand(), &[Card::TwoEyedJack, c]);
        assert_eq!(p.take_card(Card::OneEyedJack), Err(RuleError::CardNotInHand));
    }
}
