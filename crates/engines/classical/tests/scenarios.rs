//! End-to-end decisions on hand-built positions.

use std::time::Duration;

use classical_engine::{ClassicalEngine, EngineProfile, WIN};
use onitama_core::{
    all_legal_moves, Card, Engine, GameState, Move, Player, SearchLimits, Square, WinReason,
};

fn sq(x: i8, y: i8) -> Square {
    Square::new(x, y).unwrap()
}

#[test]
fn depth_one_takes_the_master() {
    // Blue's student can take the red master with Boar; nothing else wins.
    let state = GameState::from_diagram(
        "
        s...s
        .....
        ..m..
        ..S..
        S.M.S
        ",
        [[Card::Boar, Card::Eel], [Card::Crab, Card::Frog]],
        Card::Ox,
        Player::Blue,
    )
    .unwrap();

    let mut engine = ClassicalEngine::with_level(1);
    let result = engine.choose_move(&state, Player::Blue, SearchLimits::depth(1));
    assert_eq!(
        result.best_move,
        Move::Place {
            from: sq(2, 3),
            to: sq(2, 2),
            card: Card::Boar,
        }
    );
    assert_eq!(result.score, WIN);
}

#[test]
fn master_walks_onto_the_arch() {
    let state = GameState::from_diagram(
        "
        s...s
        ..M..
        .....
        ...m.
        S...S
        ",
        [[Card::Ox, Card::Tiger], [Card::Crab, Card::Eel]],
        Card::Rabbit,
        Player::Blue,
    )
    .unwrap();

    let mut engine = ClassicalEngine::with_level(4);
    let result = engine.search(&state, SearchLimits::depth(4));
    let next = state.apply(result.best_move).unwrap();
    let outcome = next.outcome().unwrap();
    assert_eq!(outcome.winner, Player::Blue);
    assert_eq!(outcome.reason, WinReason::Stream);
    assert_eq!(next.board.master_sq(Player::Blue), Some(Square::ARCH_NORTH));
}

#[test]
fn red_takes_the_master_with_flipped_offsets() {
    // Boar's forward step points south for Red.
    let state = GameState::from_diagram(
        "
        s.m.s
        ..s..
        ..M..
        .....
        S...S
        ",
        [[Card::Crab, Card::Frog], [Card::Boar, Card::Eel]],
        Card::Dragon,
        Player::Red,
    )
    .unwrap();

    let mut engine = ClassicalEngine::with_level(5);
    let result = engine.search(&state, SearchLimits::depth(3));
    assert_eq!(
        result.best_move,
        Move::Place {
            from: sq(2, 1),
            to: sq(2, 2),
            card: Card::Boar,
        }
    );
}

#[test]
fn search_is_deterministic() {
    let state = GameState::with_cards(
        [[Card::Tiger, Card::Crab], [Card::Monkey, Card::Crane]],
        Card::Ox,
    )
    .unwrap();
    let profile = EngineProfile::level(6);

    let mut a = ClassicalEngine::with_profile(profile);
    let mut b = ClassicalEngine::with_profile(profile);
    let first = a.search(&state, SearchLimits::depth(4));
    let second = b.search(&state, SearchLimits::depth(4));
    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.score, second.score);

    // Reusing the warm table gives the same answer.
    let again = a.search(&state, SearchLimits::depth(4));
    assert_eq!(again.best_move, first.best_move);
}

#[test]
fn zero_budget_falls_back_to_first_legal_move() {
    let state = GameState::with_cards(
        [[Card::Tiger, Card::Crab], [Card::Monkey, Card::Crane]],
        Card::Ox,
    )
    .unwrap();
    let first = all_legal_moves(&state, state.side_to_move)[0];

    let mut engine = ClassicalEngine::with_level(8);
    let result = engine.search(&state, SearchLimits::depth_and_time(8, Duration::ZERO));
    assert_eq!(result.best_move, first);
    assert_eq!(result.depth, 0);
    assert!(result.stopped);

    let result = engine.search(&state, SearchLimits::depth(0));
    assert_eq!(result.best_move, first);
    assert!(!result.stopped);
}

#[test]
fn time_budget_bounds_a_deep_search() {
    let state = GameState::with_cards(
        [[Card::Tiger, Card::Crab], [Card::Monkey, Card::Crane]],
        Card::Ox,
    )
    .unwrap();
    let mut engine = ClassicalEngine::with_level(8);
    let started = std::time::Instant::now();
    let result = engine.search(
        &state,
        SearchLimits::depth_and_time(u8::MAX, Duration::from_millis(150)),
    );
    assert!(result.stopped);
    assert!(result.depth >= 1);
    assert!(started.elapsed() < Duration::from_secs(2));
    assert!(all_legal_moves(&state, state.side_to_move).contains(&result.best_move));
}

#[test]
fn blocked_side_passes() {
    let state = GameState::from_diagram(
        "
        SMSSS
        .....
        .....
        .....
        ....m
        ",
        [[Card::Crab, Card::Boar], [Card::Tiger, Card::Ox]],
        Card::Eel,
        Player::Blue,
    )
    .unwrap();
    let mut engine = ClassicalEngine::with_level(3);
    let result = engine.search(&state, SearchLimits::depth(3));
    assert!(result.best_move.is_pass());
}
