use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sequence_engine::game::{Difficulty, GameState};

use crate::{AIAction, AIOpponent, search};

/// Plays its hand in card-name order.
///
/// Names sort as plain strings, so "10♠" comes before "2♠" and both Jack
/// names sort ahead of the picture cards.
#[derive(Debug, Clone)]
pub struct MediumAI {
    /// Only used to pick which opponent chip a One-Eyed Jack takes
    rng: ChaCha20Rng,
}

impl MediumAI {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl AIOpponent for MediumAI {
    fn choose_action(&mut self, state: &GameState) -> AIAction {
        let player = state.current_player();
        let mut hand = state.hand(player).to_vec();
        hand.sort_by_key(|c| c.name());
        search::fallback(state, player, &hand, &mut self.rng)
    }

    fn name(&self) -> &str {
        "MediumAI"
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Medium
    }
}
