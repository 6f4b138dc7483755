//! # sequence-ai: Computer Opponents for Sequence
//!
//! Provides the three computer opponent tiers behind a common interface.
//! Strategies only read the [`GameState`]; every decision goes back through
//! the engine's public entry points, see [`play_turn`].
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait defining the interface for AI decision-making
//! - [`easy`], [`medium`], [`hard`] - One strategy per difficulty tier
//! - [`search`] - The move scan shared by all tiers
//! - [`create_ai`] - Factory function for creating AI opponents
//!
//! ## Quick Start
//!
//! ```rust
//! use sequence_ai::{create_ai, play_turn};
//! use sequence_engine::engine::Engine;
//! use sequence_engine::game::{Difficulty, GameConfig};
//!
//! let mut engine = Engine::new(GameConfig {
//!     vs_ai: true,
//!     seed: Some(42),
//!     ..GameConfig::default()
//! });
//! let mut ai = create_ai(Difficulty::Hard, 42);
//!
//! // seat 0 is the human; let the AI take that turn too
//! let outcome = play_turn(ai.as_mut(), &mut engine).expect("legal turn");
//! assert_eq!(outcome.player, 0);
//! ```

use sequence_engine::board::Pos;
use sequence_engine::cards::Card;
use sequence_engine::engine::Engine;
use sequence_engine::errors::RuleError;
use sequence_engine::game::{Difficulty, GameState, TurnAction, TurnOutcome};
use tracing::debug;

pub mod easy;
pub mod hard;
pub mod medium;
pub mod search;

/// What an AI wants to do with the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AIAction {
    Place { card: Card, pos: Pos },
    Remove { card: Card, pos: Pos },
    /// Cycle a card with no legal target; the turn continues
    Discard { card: Card },
    /// Nothing left to play
    Pass,
}

/// Interface for AI opponents.
///
/// Implementors decide for the side to move in `state`. They own their RNG,
/// so choosing takes `&mut self`.
///
/// # Example Implementation
///
/// ```rust
/// use sequence_ai::{AIAction, AIOpponent};
/// use sequence_engine::game::{Difficulty, GameState};
///
/// struct Passive;
///
/// impl AIOpponent for Passive {
///     fn choose_action(&mut self, _state: &GameState) -> AIAction {
///         AIAction::Pass
///     }
///
///     fn name(&self) -> &str {
///         "Passive"
///     }
///
///     fn difficulty(&self) -> Difficulty {
///         Difficulty::Easy
///     }
/// }
/// ```
pub trait AIOpponent: Send {
    /// Pick the next action for the current player.
    ///
    /// A [`AIAction::Discard`] does not end the turn; the caller applies it
    /// and asks again with the updated hand.
    fn choose_action(&mut self, state: &GameState) -> AIAction;

    fn name(&self) -> &str;

    fn difficulty(&self) -> Difficulty;
}

/// Build the strategy for a difficulty tier.
///
/// # Example
///
/// ```rust
/// use sequence_ai::create_ai;
/// use sequence_engine::game::Difficulty;
///
/// let ai = create_ai(Difficulty::Medium, 7);
/// assert_eq!(ai.name(), "MediumAI");
/// assert_eq!(ai.difficulty(), Difficulty::Medium);
/// ```
pub fn create_ai(difficulty: Difficulty, seed: u64) -> Box<dyn AIOpponent> {
    match difficulty {
        Difficulty::Easy => Box::new(easy::EasyAI::new(seed)),
        Difficulty::Medium => Box::new(medium::MediumAI::new(seed)),
        Difficulty::Hard => Box::new(hard::HardAI::new(seed)),
    }
}

/// Let `ai` play the current player's turn through the engine.
///
/// Dead-card discards are applied and the AI is asked again until it places,
/// removes or passes. If a discard leaves the game drawn, the report for that
/// discard is returned.
pub fn play_turn(ai: &mut dyn AIOpponent, engine: &mut Engine) -> Result<TurnOutcome, RuleError> {
    if engine.state().is_game_over() {
        return Err(RuleError::GameOver);
    }
    let player = engine.current_player();
    loop {
        let action = ai.choose_action(engine.state());
        debug!(ai = ai.name(), player, ?action, "ai action");
        match action {
            AIAction::Place { card, pos } | AIAction::Remove { card, pos } => {
                engine.select_card(card)?;
                return engine.propose_move(pos.row, pos.col);
            }
            AIAction::Discard { card } => {
                engine.discard_dead_card(card)?;
                let state = engine.state();
                if let Some(outcome) = state.outcome() {
                    return Ok(TurnOutcome {
                        player,
                        action: TurnAction::Discarded { card },
                        sequence: None,
                        scores: state.scores(),
                        next_player: state.current_player(),
                        outcome: Some(outcome),
                    });
                }
            }
            AIAction::Pass => return engine.pass_turn(),
        }
    }
}
