use sequence_engine::board::{Board, Occupant, Pos};
use sequence_engine::cards::{board_labels, Card};
use sequence_engine::deck::Deck;
use sequence_engine::engine::Engine;
use sequence_engine::game::{GameConfig, GameState, TurnAction};
use sequence_engine::sequence::{find_sequence, Axis};

fn board() -> Board {
    Board::from_labels(board_labels()).unwrap()
}

fn engine_with(board: Board, hand0: Vec<Card>) -> Engine {
    let deck = Deck::new_with_seed(77);
    let hand1 = vec![Card::TwoEyedJack; 7];
    let state = GameState::from_parts(board, deck, [hand0, hand1], 0);
    Engine::with_state(GameConfig::default(), state)
}

fn place_all(board: &mut Board, cells: &[(usize, usize)], player: usize) {
    for (r, c) in cells {
        board.place(Pos::new(*r, *c), player).unwrap();
    }
}

#[test]
fn two_eyed_jack_next_to_corner_scores_and_locks_four_cells() {
    let mut b = board();
    place_all(&mut b, &[(0, 1), (0, 2), (0, 3)], 0);
    let mut engine = engine_with(b, vec![Card::TwoEyedJack]);

    engine.select_card(Card::TwoEyedJack).unwrap();
    let out = engine.propose_move(0, 4).unwrap();

    let seq = out.sequence.expect("sequence");
    assert_eq!(seq.owner, 0);
    assert_eq!(seq.axis, Axis::Horizontal);
    assert_eq!(seq.positions[0], Pos::new(0, 0));
    assert_eq!(out.scores, [1, 0]);
    assert_eq!(out.next_player, 1);

    let board = engine.state().board();
    assert_eq!(board.occupant(Pos::new(0, 0)), Occupant::Empty);
    for c in 1..5 {
        assert_eq!(board.occupant(Pos::new(0, c)), Occupant::Sequence(0));
    }
    assert!(engine.state().history()[0].sequence);
}

#[test]
fn only_one_sequence_per_placement() {
    let mut b = board();
    place_all(&mut b, &[(5, 1), (5, 2), (5, 3), (5, 4)], 0);
    place_all(&mut b, &[(1, 5), (2, 5), (3, 5), (4, 5)], 0);
    let mut engine = engine_with(b, vec![Card::TwoEyedJack]);

    engine.select_card(Card::TwoEyedJack).unwrap();
    let out = engine.propose_move(5, 5).unwrap();

    assert_eq!(out.sequence.map(|s| s.axis), Some(Axis::Horizontal));
    assert_eq!(engine.state().scores(), [1, 0]);
    assert_eq!(engine.state().sequences().len(), 1);
    let board = engine.state().board();
    for r in 1..5 {
        assert_eq!(board.occupant(Pos::new(r, 5)), Occupant::Chip(0));
    }
}

#[test]
fn window_reusing_two_locked_cells_is_rejected() {
    let mut b = board();
    let locked: Vec<Pos> = (1..6).map(|c| Pos::new(7, c)).collect();
    b.mark_sequence(&locked, 0);
    place_all(&mut b, &[(7, 6), (7, 7)], 0);

    // (7,4)..(7,8) would reuse two locked cells
    let mut probe = b.clone();
    probe.place(Pos::new(7, 8), 0).unwrap();
    assert_eq!(find_sequence(&probe, Pos::new(7, 8), 0), None);

    let mut engine = engine_with(b, vec![Card::TwoEyedJack, Card::TwoEyedJack]);
    engine.select_card(Card::TwoEyedJack).unwrap();
    let out = engine.propose_move(7, 8).unwrap();
    assert!(out.sequence.is_none());
    assert_eq!(out.scores, [0, 0]);
}

#[test]
fn window_reusing_one_locked_cell_counts() {
    let mut b = board();
    let locked: Vec<Pos> = (1..6).map(|c| Pos::new(7, c)).collect();
    b.mark_sequence(&locked, 0);
    place_all(&mut b, &[(7, 6), (7, 7), (7, 8)], 0);
    let mut engine = engine_with(b, vec![Card::TwoEyedJack]);

    engine.select_card(Card::TwoEyedJack).unwrap();
    let out = engine.propose_move(7, 9).unwrap();
    let seq = out.sequence.expect("sequence");
    assert_eq!(seq.positions[0], Pos::new(7, 5));
    assert_eq!(seq.positions[4], Pos::new(7, 9));
    assert_eq!(out.scores, [1, 0]);
}

#[test]
fn opponent_sequence_chips_extend_runs() {
    let mut b = board();
    b.mark_sequence(&[Pos::new(3, 3)], 1);
    place_all(&mut b, &[(3, 1), (3, 2), (3, 4)], 0);
    let mut engine = engine_with(b, vec![Card::TwoEyedJack]);

    engine.select_card(Card::TwoEyedJack).unwrap();
    let out = engine.propose_move(3, 5).unwrap();
    assert!(out.sequence.is_some());
    assert!(matches!(out.action, TurnAction::Placed { .. }));
}

#[test]
fn opponent_chip_breaks_the_run() {
    let mut b = board();
    place_all(&mut b, &[(6, 1), (6, 2)], 0);
    place_all(&mut b, &[(6, 3)], 1);
    place_all(&mut b, &[(6, 4), (6, 5)], 0);
    let mut engine = engine_with(b, vec![Card::TwoEyedJack]);

    engine.select_card(Card::TwoEyedJack).unwrap();
    let out = engine.propose_move(6, 6).unwrap();
    assert!(out.sequence.is_none());
}

#[test]
fn diagonal_sequences_are_found() {
    let mut b = board();
    place_all(&mut b, &[(2, 2), (3, 3), (4, 4), (5, 5)], 1);
    let found = {
        let mut probe = b.clone();
        probe.place(Pos::new(6, 6), 1).unwrap();
        find_sequence(&probe, Pos::new(6, 6), 1)
    };
    let seq = found.expect("diagonal");
    assert_eq!(seq.axis, Axis::Diagonal);

    place_all(&mut b, &[(2, 7), (3, 6), (5, 4), (6, 3)], 0);
    b.place(Pos::new(4, 5), 0).unwrap();
    let seq = find_sequence(&b, Pos::new(4, 5), 0).expect("anti-diagonal");
    assert_eq!(seq.axis, Axis::AntiDiagonal);
    assert_eq!(seq.positions[0], Pos::new(2, 7));
}
