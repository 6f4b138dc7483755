//! Move scan shared by every difficulty.

use rand::Rng;
use rand::seq::IndexedRandom;
use sequence_engine::board::Pos;
use sequence_engine::cards::Card;
use sequence_engine::game::GameState;

use crate::AIAction;

/// A uniformly random opponent chip `player` may remove, if any.
pub fn random_removal<R: Rng + ?Sized>(state: &GameState, player: usize, rng: &mut R) -> Option<Pos> {
    state.removable_positions(player).choose(rng).copied()
}

/// Walk `hand` in the given order and act on the first card.
///
/// A placing card goes to its first legal cell in row-major order and a
/// One-Eyed Jack removes a random opponent chip. The first card with no
/// target at all is discarded instead. An empty hand passes.
pub fn fallback<R: Rng + ?Sized>(
    state: &GameState,
    player: usize,
    hand: &[Card],
    rng: &mut R,
) -> AIAction {
    let Some(&card) = hand.first() else {
        return AIAction::Pass;
    };
    match card {
        Card::OneEyedJack => match random_removal(state, player, rng) {
            Some(pos) => AIAction::Remove { card, pos },
            None => AIAction::Discard { card },
        },
        _ => match state.legal_targets(player, card).first() {
            Some(&pos) => AIAction::Place { card, pos },
            None => AIAction::Discard { card },
        },
    }
}
