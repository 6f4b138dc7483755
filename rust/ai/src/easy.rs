use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use sequence_engine::game::{Difficulty, GameState};

use crate::{AIAction, AIOpponent, search};

/// Plays a random card from its hand on that card's first legal cell.
#[derive(Debug, Clone)]
pub struct EasyAI {
    rng: ChaCha20Rng,
}

impl EasyAI {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl AIOpponent for EasyAI {
    fn choose_action(&mut self, state: &GameState) -> AIAction {
        let player = state.current_player();
        let mut hand = state.hand(player).to_vec();
        hand.shuffle(&mut self.rng);
        search::fallback(state, player, &hand, &mut self.rng)
    }

    fn name(&self) -> &str {
        "EasyAI"
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Easy
    }
}
