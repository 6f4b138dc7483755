use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four suits of a standard deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades (♠)
    Spades,
    /// Hearts (♥)
    Hearts,
    /// Diamonds (♦)
    Diamonds,
    /// Clubs (♣)
    Clubs,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    /// Jacks of these suits become One-Eyed Jacks, the others Two-Eyed Jacks.
    pub fn has_one_eyed_jack(self) -> bool {
        matches!(self, Suit::Spades | Suit::Hearts)
    }
}

/// Card rank. Jacks are kept in the deck but never printed on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// A printed board label: a non-Jack rank and a suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Label {
    pub rank: Rank,
    pub suit: Suit,
}

impl Label {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        debug_assert!(rank != Rank::Jack, "jacks never appear on the board");
        Self { rank, suit }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// A card a player can hold.
///
/// Standard cards claim a board cell carrying the same label. The two Jack
/// variants are the special cards: a Two-Eyed Jack claims any open cell, a
/// One-Eyed Jack removes an opponent chip.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Card {
    Standard(Label),
    TwoEyedJack,
    OneEyedJack,
}

impl Card {
    pub fn standard(rank: Rank, suit: Suit) -> Self {
        Card::Standard(Label::new(rank, suit))
    }

    pub fn label(&self) -> Option<Label> {
        match self {
            Card::Standard(l) => Some(*l),
            _ => None,
        }
    }

    pub fn is_jack(&self) -> bool {
        !matches!(self, Card::Standard(_))
    }

    /// Display name; also the key Medium AI sorts its hand by.
    pub fn name(&self) -> String {
        match self {
            Card::Standard(l) => l.to_string(),
            Card::TwoEyedJack => "2-Eyed Jack".to_string(),
            Card::OneEyedJack => "1-Eyed Jack".to_string(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// Number of 52-card decks the game is played with.
pub const DECKS: usize = 2;

/// Both decks in suit/rank order, Jacks already turned into their variants.
pub fn double_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52 * DECKS);
    for _ in 0..DECKS {
        for &s in &all_suits() {
            for &r in &all_ranks() {
                let card = match r {
                    Rank::Jack if s.has_one_eyed_jack() => Card::OneEyedJack,
                    Rank::Jack => Card::TwoEyedJack,
                    _ => Card::standard(r, s),
                };
                v.push(card);
            }
        }
    }
    v
}

/// The 96 labels printed on the board (each of the 48 labels twice).
pub fn board_labels() -> Vec<Label> {
    double_deck().iter().filter_map(Card::label).collect()
}
