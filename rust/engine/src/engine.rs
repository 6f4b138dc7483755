use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};

use crate::board::{Board, Pos};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::RuleError;
use crate::game::{
    Difficulty, GameConfig, GameState, Outcome, Selection, TurnAction, TurnOutcome,
};
use crate::logger::{GameRecord, MoveRecord};
use crate::player::{HAND_SIZE, PLAYER_COUNT};
use crate::rules::{self, opponent, ValidatedMove};
use crate::sequence::{complete_sequence, Sequence, SEQUENCES_TO_WIN};

/// Rule engine for one two-player game.
///
/// Owns the [`GameState`] and is the only place it is mutated. Every entry
/// point validates first and commits afterwards, so a returned error means
/// nothing changed.
///
/// # Examples
///
/// ```
/// use sequence_engine::engine::Engine;
/// use sequence_engine::game::{GameConfig, Phase};
///
/// let mut engine = Engine::new(GameConfig {
///     seed: Some(12345),
///     ..GameConfig::default()
/// });
/// assert_eq!(engine.state().hand(0).len(), 7);
/// assert_eq!(engine.state().deck_remaining(), 104 - 14);
///
/// // pick a card and play it on its first legal cell
/// let card = engine.state().hand(0)[0];
/// engine.select_card(card).unwrap();
/// if let Some(pos) = engine.state().legal_targets(0, card).first().copied() {
///     let outcome = engine.propose_move(pos.row, pos.col).unwrap();
///     assert_eq!(outcome.next_player, 1);
///     assert_eq!(engine.state().phase(), Phase::AwaitingSelection);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    config: GameConfig,
    /// Seed the layout and deck were derived from
    seed: u64,
    /// Drives board layouts across restarts
    rng: ChaCha20Rng,
    state: GameState,
}

/// Start a game with a random seed.
pub fn new_game(player_names: [String; PLAYER_COUNT], vs_ai: bool, ai_difficulty: Difficulty) -> Engine {
    Engine::new(GameConfig {
        player_names,
        vs_ai,
        ai_difficulty,
        seed: None,
    })
}

/// Deal a hand to every seat, regenerating the deck if it cannot cover the deal.
pub fn deal_hands(deck: &mut Deck) -> [Vec<Card>; PLAYER_COUNT] {
    let needed = HAND_SIZE * PLAYER_COUNT;
    if deck.remaining() < needed {
        warn!(remaining = deck.remaining(), needed, "deck too small, regenerating");
        deck.regenerate();
    }
    let mut hands: [Vec<Card>; PLAYER_COUNT] = Default::default();
    for hand in hands.iter_mut() {
        for _ in 0..HAND_SIZE {
            hand.push(draw_or_regenerate(deck));
        }
    }
    hands
}

fn draw_or_regenerate(deck: &mut Deck) -> Card {
    loop {
        match deck.draw() {
            Ok(c) => return c,
            Err(_) => {
                warn!("deck ran out during the deal, regenerating");
                deck.regenerate();
            }
        }
    }
}

impl Engine {
    pub fn new(config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let board = Board::generate(&mut rng);
        let mut deck = Deck::new_with_seed(rng.next_u64());
        let hands = deal_hands(&mut deck);
        info!(
            seed,
            vs_ai = config.vs_ai,
            difficulty = %config.ai_difficulty,
            "new game"
        );
        Self {
            config,
            seed,
            rng,
            state: GameState::from_parts(board, deck, hands, 0),
        }
    }

    /// Continue from an explicit state. The draw rule is applied right away,
    /// so a state that is already stuck comes back as finished.
    pub fn with_state(config: GameConfig, state: GameState) -> Self {
        let seed = config.seed.unwrap_or_default();
        let mut engine = Self {
            config,
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
            state,
        };
        engine.settle();
        engine
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current_player(&self) -> usize {
        self.state.current
    }

    /// Whether the side to move is the computer seat.
    pub fn is_ai_turn(&self) -> bool {
        self.config.vs_ai && self.state.current == 1 && !self.state.is_game_over()
    }

    pub fn has_valid_moves(&self, player: usize) -> bool {
        self.state.has_valid_moves(player)
    }

    /// Pick a card from the current player's hand.
    ///
    /// A One-Eyed Jack switches to removal mode with the opponent chips that
    /// can be taken; that set may be empty, in which case the player has to
    /// pick another card.
    pub fn select_card(&mut self, card: Card) -> Result<(), RuleError> {
        self.ensure_running()?;
        let player = self.state.current;
        if !self.state.players[player].holds(card) {
            return Err(RuleError::CardNotInHand);
        }
        self.state.selection = if card == Card::OneEyedJack {
            Selection::Removal {
                card,
                removable: rules::removable_chips(&self.state.board, player)
                    .into_iter()
                    .collect(),
            }
        } else {
            Selection::Card(card)
        };
        debug!(player, %card, "card selected");
        Ok(())
    }

    /// Play the selected card at `(row, col)`.
    pub fn propose_move(&mut self, row: usize, col: usize) -> Result<TurnOutcome, RuleError> {
        self.ensure_running()?;
        let player = self.state.current;
        let pos = Pos::new(row, col);
        let mv = match &self.state.selection {
            Selection::None => return Err(RuleError::NoCardSelected),
            Selection::Card(card) => rules::validate_move(&self.state.board, player, *card, pos)?,
            Selection::Removal { card, removable } => {
                self.state.board.cell(pos)?;
                if !removable.contains(&pos) {
                    return Err(RuleError::InvalidRemoval { row, col });
                }
                rules::validate_move(&self.state.board, player, *card, pos)?
            }
        };
        let card = match mv {
            ValidatedMove::Place { card, .. } | ValidatedMove::Remove { card, .. } => card,
        };
        if !self.state.players[player].holds(card) {
            return Err(RuleError::CardNotInHand);
        }

        match mv {
            ValidatedMove::Place { card, pos } => {
                self.state.board.place(pos, player)?;
                let sequence = self.score_sequence(pos, player);
                Ok(self.finish_turn(player, card, TurnAction::Placed { card, pos }, sequence))
            }
            ValidatedMove::Remove { card, pos } => {
                self.state.board.remove(pos)?;
                debug!(player, %pos, "chip removed");
                Ok(self.finish_turn(player, card, TurnAction::Removed { card, pos }, None))
            }
        }
    }

    /// Exchange a card that has no legal target for a fresh one.
    ///
    /// The turn does not end. Returns the replacement, or `None` when the
    /// deck is exhausted.
    pub fn discard_dead_card(&mut self, card: Card) -> Result<Option<Card>, RuleError> {
        self.ensure_running()?;
        let player = self.state.current;
        if !self.state.players[player].holds(card) {
            return Err(RuleError::CardNotInHand);
        }
        if !self.state.is_dead_card(player, card) {
            return Err(RuleError::CardStillPlayable);
        }
        self.state.players[player].take_card(card)?;
        let drawn = self.state.deck.draw().ok();
        if let Some(c) = drawn {
            self.state.players[player].give_card(c);
        }
        self.state.selection = Selection::None;
        self.state.history.push(MoveRecord {
            turn: self.state.turn + 1,
            player,
            action: TurnAction::Discarded { card },
            sequence: false,
        });
        debug!(player, %card, replaced = drawn.is_some(), "dead card discarded");
        self.settle();
        Ok(drawn)
    }

    /// Give up the turn. Only allowed when the player has nothing to play.
    pub fn pass_turn(&mut self) -> Result<TurnOutcome, RuleError> {
        self.ensure_running()?;
        let player = self.state.current;
        if self.state.has_valid_moves(player) {
            return Err(RuleError::MovesAvailable { player });
        }
        self.state.selection = Selection::None;
        self.state.turn += 1;
        self.state.history.push(MoveRecord {
            turn: self.state.turn,
            player,
            action: TurnAction::Passed,
            sequence: false,
        });
        self.state.current = opponent(player);
        debug!(player, "turn passed");
        self.settle();
        Ok(self.outcome_for(player, TurnAction::Passed, None))
    }

    /// Throw the current game away and deal a new one with the same settings.
    pub fn restart(&mut self) -> &GameState {
        let board = Board::generate(&mut self.rng);
        let mut deck = self.state.deck.clone();
        deck.regenerate();
        let hands = deal_hands(&mut deck);
        self.state = GameState::from_parts(board, deck, hands, 0);
        info!("game restarted");
        &self.state
    }

    /// Snapshot of the game for the history log.
    pub fn record(&self, game_id: &str) -> GameRecord {
        GameRecord {
            game_id: game_id.to_string(),
            seed: self.seed,
            players: self.config.player_names.clone(),
            moves: self.state.history.clone(),
            scores: self.state.scores(),
            outcome: self.state.outcome,
            ts: None,
        }
    }

    fn ensure_running(&self) -> Result<(), RuleError> {
        if self.state.is_game_over() {
            Err(RuleError::GameOver)
        } else {
            Ok(())
        }
    }

    fn score_sequence(&mut self, pos: Pos, player: usize) -> Option<Sequence> {
        let seq = complete_sequence(&mut self.state.board, pos, player)?;
        let score = self.state.players[player].add_sequence();
        self.state.sequences.push(seq.clone());
        if score >= SEQUENCES_TO_WIN {
            self.state.outcome = Some(Outcome::Winner(player));
            info!(
                player,
                name = %self.config.player_names[player],
                "player wins the game"
            );
        }
        Some(seq)
    }

    fn finish_turn(
        &mut self,
        player: usize,
        card: Card,
        action: TurnAction,
        sequence: Option<Sequence>,
    ) -> TurnOutcome {
        // presence was checked before anything was mutated
        let _ = self.state.players[player].take_card(card);
        self.state.selection = Selection::None;
        if let Ok(c) = self.state.deck.draw() {
            self.state.players[player].give_card(c);
        }
        self.state.turn += 1;
        self.state.history.push(MoveRecord {
            turn: self.state.turn,
            player,
            action,
            sequence: sequence.is_some(),
        });
        if !self.state.is_game_over() {
            self.state.current = opponent(player);
        }
        self.settle();
        self.outcome_for(player, action, sequence)
    }

    fn outcome_for(
        &self,
        player: usize,
        action: TurnAction,
        sequence: Option<Sequence>,
    ) -> TurnOutcome {
        TurnOutcome {
            player,
            action,
            sequence,
            scores: self.state.scores(),
            next_player: self.state.current,
            outcome: self.state.outcome,
        }
    }

    /// An exhausted deck plus a side to move with nothing to play is a draw.
    fn settle(&mut self) {
        if self.state.outcome.is_some() || !self.state.deck.is_empty() {
            return;
        }
        let player = self.state.current;
        if !self.state.has_valid_moves(player) {
            self.state.outcome = Some(Outcome::Draw);
            self.state.selection = Selection::None;
            info!(player, "deck exhausted and no valid move, match drawn");
        }
    }
}
