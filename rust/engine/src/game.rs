use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos};
use crate::cards::Card;
use crate::deck::Deck;
use crate::logger::MoveRecord;
use crate::player::{Player, PLAYER_COUNT};
use crate::rules;
use crate::sequence::Sequence;

/// Computer opponent strength, chosen once when a game is set up.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{}' (expected easy, medium or hard)",
                other
            )),
        }
    }
}

/// Settings fixed for the lifetime of an [`crate::engine::Engine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub player_names: [String; PLAYER_COUNT],
    /// Seat 1 is driven by the computer
    pub vs_ai: bool,
    pub ai_difficulty: Difficulty,
    /// RNG seed for board layout and deck order; random when `None`
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
            vs_ai: false,
            ai_difficulty: Difficulty::Medium,
            seed: None,
        }
    }
}

/// Final result of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(usize),
    Draw,
}

/// The card the current player has picked, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    /// A placing card waiting for a target cell
    Card(Card),
    /// A One-Eyed Jack waiting for one of the listed opponent chips
    Removal {
        card: Card,
        removable: BTreeSet<Pos>,
    },
}

impl Selection {
    pub fn card(&self) -> Option<Card> {
        match self {
            Selection::None => None,
            Selection::Card(c) => Some(*c),
            Selection::Removal { card, .. } => Some(*card),
        }
    }
}

/// Where the turn state machine currently stands.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    AwaitingSelection,
    AwaitingCell,
    Removal,
    GameOver,
}

/// What a player did with their action.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnAction {
    Placed { card: Card, pos: Pos },
    Removed { card: Card, pos: Pos },
    /// Dead card exchanged; does not end the turn
    Discarded { card: Card },
    Passed,
}

/// Report returned for every action that ends a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub player: usize,
    pub action: TurnAction,
    /// Sequence completed by this placement; never more than one
    pub sequence: Option<Sequence>,
    pub scores: [u8; PLAYER_COUNT],
    pub next_player: usize,
    pub outcome: Option<Outcome>,
}

impl TurnOutcome {
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Complete state of one game. Only the rule engine mutates it; everyone
/// else gets a shared reference.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) deck: Deck,
    pub(crate) players: [Player; PLAYER_COUNT],
    pub(crate) current: usize,
    pub(crate) selection: Selection,
    pub(crate) sequences: Vec<Sequence>,
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) turn: u32,
    pub(crate) outcome: Option<Outcome>,
}

impl GameState {
    /// Assemble a state from explicit parts, e.g. to set up a scenario.
    pub fn from_parts(
        board: Board,
        deck: Deck,
        hands: [Vec<Card>; PLAYER_COUNT],
        current: usize,
    ) -> Self {
        let [h0, h1] = hands;
        Self {
            board,
            deck,
            players: [Player::new(0, h0), Player::new(1, h1)],
            current: current % PLAYER_COUNT,
            selection: Selection::None,
            sequences: Vec::new(),
            history: Vec::new(),
            turn: 0,
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    pub fn hand(&self, player: usize) -> &[Card] {
        self.players[player].hand()
    }

    pub fn current_player(&self) -> usize {
        self.current
    }

    pub fn scores(&self) -> [u8; PLAYER_COUNT] {
        [self.players[0].sequences(), self.players[1].sequences()]
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Completed turns so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn phase(&self) -> Phase {
        if self.outcome.is_some() {
            return Phase::GameOver;
        }
        match self.selection {
            Selection::None => Phase::AwaitingSelection,
            Selection::Card(_) => Phase::AwaitingCell,
            Selection::Removal { .. } => Phase::Removal,
        }
    }

    pub fn has_valid_moves(&self, player: usize) -> bool {
        rules::has_valid_moves(&self.board, player, self.hand(player))
    }

    pub fn legal_targets(&self, player: usize, card: Card) -> Vec<Pos> {
        rules::legal_targets(&self.board, player, card)
    }

    pub fn removable_positions(&self, player: usize) -> Vec<Pos> {
        rules::removable_chips(&self.board, player)
    }

    /// A card with no legal target anywhere on the board.
    pub fn is_dead_card(&self, player: usize, card: Card) -> bool {
        !rules::is_playable(&self.board, player, card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" easy ".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert!("expert".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn selection_exposes_its_card() {
        assert_eq!(Selection::None.card(), None);
        let removal = Selection::Removal {
            card: Card::OneEyedJack,
            removable: BTreeSet::new(),
        };
        assert_eq!(removal.card(), Some(Card::OneEyedJack));
    }
}
