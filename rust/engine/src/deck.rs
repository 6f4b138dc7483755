use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{double_deck, Card};
use crate::errors::RuleError;

/// Draw pile built from two standard decks.
///
/// Cards are drawn from the end of the pile. The pile only shrinks through
/// [`Deck::draw`] or is replaced wholesale by [`Deck::regenerate`].
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    /// A full, shuffled double deck. The same seed yields the same order.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        deck.regenerate();
        deck
    }

    /// A pile in exactly the given order; the last card is drawn first.
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn draw(&mut self) -> Result<Card, RuleError> {
        self.cards.pop().ok_or(RuleError::EmptyDeck)
    }

    /// Rebuild and reshuffle a full double deck in place.
    pub fn regenerate(&mut self) {
        self.cards = double_deck();
        self.cards.shuffle(&mut self.rng);
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards still in the pile, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn draw_takes_from_the_end() {
        let a = Card::standard(Rank::Ace, Suit::Spades);
        let b = Card::standard(Rank::Two, Suit::Clubs);
        let mut deck = Deck::from_cards(vec![a, b], 0);
        assert_eq!(deck.draw(), Ok(b));
        assert_eq!(deck.draw(), Ok(a));
        assert_eq!(deck.draw(), Err(RuleError::EmptyDeck));
    }

    #[test]
    fn regenerate_restores_full_deck() {
        let mut deck = Deck::from_cards(Vec::new(), 3);
        assert!(deck.is_empty());
        deck.regenerate();
        assert_eq!(deck.remaining(), 104);
    }
}
