//! Hard tier: builds toward its own runs first, then breaks the opponent's.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sequence_engine::board::Pos;
use sequence_engine::cards::Card;
use sequence_engine::game::{Difficulty, GameState};
use sequence_engine::sequence::has_potential_sequence;
use tracing::debug;

use crate::{AIAction, AIOpponent, search};

#[derive(Debug, Clone)]
pub struct HardAI {
    rng: ChaCha20Rng,
}

impl HardAI {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// First card, then first row-major cell, where a chip would sit in a
    /// run of at least four.
    fn offense(state: &GameState, player: usize) -> Option<(Card, Pos)> {
        state
            .hand(player)
            .iter()
            .filter(|c| **c != Card::OneEyedJack)
            .find_map(|card| {
                state
                    .legal_targets(player, *card)
                    .into_iter()
                    .find(|pos| has_potential_sequence(state.board(), *pos, player))
                    .map(|pos| (*card, pos))
            })
    }

    fn defense(&mut self, state: &GameState, player: usize) -> Option<(Card, Pos)> {
        if !state.hand(player).contains(&Card::OneEyedJack) {
            return None;
        }
        search::random_removal(state, player, &mut self.rng).map(|pos| (Card::OneEyedJack, pos))
    }
}

impl AIOpponent for HardAI {
    fn choose_action(&mut self, state: &GameState) -> AIAction {
        let player = state.current_player();
        if let Some((card, pos)) = Self::offense(state, player) {
            debug!(player, %card, %pos, "extending a run");
            return AIAction::Place { card, pos };
        }
        if let Some((card, pos)) = self.defense(state, player) {
            debug!(player, %pos, "breaking an opponent chip");
            return AIAction::Remove { card, pos };
        }
        search::fallback(state, player, state.hand(player), &mut self.rng)
    }

    fn name(&self) -> &str {
        "HardAI"
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Hard
    }
}
