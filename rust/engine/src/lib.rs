//! # sequence-engine: Sequence Board Game Core
//!
//! Rules, board and deck for the two-player Sequence board game. All state
//! lives in a single [`game::GameState`] owned by [`engine::Engine`]; callers
//! read it through shared references and change it only through engine
//! operations, which validate before they mutate.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Label, Jacks) and the double deck
//! - [`deck`] - Seeded draw pile with ChaCha20 shuffling
//! - [`board`] - The 10x10 layout, chips and corner cells
//! - [`sequence`] - Five-in-a-row detection on the four axes
//! - [`rules`] - Move validation and legal target queries
//! - [`player`] - Hands and sequence counts
//! - [`game`] - Game state, configuration and turn reports
//! - [`engine`] - Turn state machine
//! - [`logger`] - Game history records as JSONL
//! - [`errors`] - Error types for rule violations
//!
//! ## Quick Start
//!
//! ```rust
//! use sequence_engine::engine::Engine;
//! use sequence_engine::game::GameConfig;
//!
//! let engine = Engine::new(GameConfig {
//!     seed: Some(42),
//!     ..GameConfig::default()
//! });
//! let state = engine.state();
//! assert_eq!(state.current_player(), 0);
//! assert!(!state.is_game_over());
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Board layout and deck order derive from one seed:
//!
//! ```rust
//! use sequence_engine::deck::Deck;
//!
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! assert_eq!(deck1.cards(), deck2.cards());
//! ```

pub mod board;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod rules;
pub mod sequence;
