use super::*;
use crate::config::EvalConfig;
use onitama_core::{Card, Square};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn cfg(quiescence_depth: u8, aspiration_window: Option<i32>) -> SearchConfig {
    SearchConfig {
        quiescence_depth,
        aspiration_window,
        eval: EvalConfig::full(),
    }
}

fn unlimited() -> TimeControl {
    let mut tc = TimeControl::new(None);
    tc.start();
    tc
}

/// Plain minimax without pruning or memo, scored for the side to move.
fn minimax(state: &GameState, depth: u8, pov: Player, cfg: &SearchConfig) -> i32 {
    let color = if state.side_to_move == pov { 1 } else { -1 };
    if depth == 0 || state.is_terminal() {
        return color * evaluate(state, pov, &cfg.eval);
    }
    all_legal_moves(state, state.side_to_move)
        .into_iter()
        .map(|mv| -minimax(&state.apply(mv).unwrap(), depth - 1, pov, cfg))
        .max()
        .unwrap()
}

/// Positions a few random plies into seeded games.
fn sample_positions() -> Vec<GameState> {
    (0..6u64)
        .filter_map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut state = GameState::deal(&mut rng);
            for _ in 0..(seed % 4) * 2 {
                let moves = all_legal_moves(&state, state.side_to_move);
                state = state.apply(*moves.choose(&mut rng).unwrap()).unwrap();
            }
            (!state.is_terminal()).then_some(state)
        })
        .collect()
}

fn threat_position() -> GameState {
    GameState::from_diagram(
        "
        .....
        .....
        ..m..
        ..S..
        ..M..
        ",
        [[Card::Boar, Card::Eel], [Card::Crab, Card::Frog]],
        Card::Ox,
        Player::Blue,
    )
    .unwrap()
}

#[test]
fn test_negamax_agrees_with_minimax() {
    let cfg = cfg(0, None);
    let tc = unlimited();
    for state in sample_positions() {
        let pov = state.side_to_move;
        let mut tt = TranspositionTable::new();
        let mut searcher = Searcher::new(pov, &cfg, &mut tt, &tc);
        let (score, best) = searcher.negamax(&state, 3, -INF, INF, 1).unwrap();
        assert_eq!(score, minimax(&state, 3, pov, &cfg));
        assert!(all_legal_moves(&state, pov).contains(&best.unwrap()));
    }
}

#[test]
fn test_negamax_from_the_other_point_of_view() {
    // Searching for the side not on move flips the color but not the score.
    let cfg = cfg(0, None);
    let tc = unlimited();
    for state in sample_positions() {
        let pov = state.side_to_move.other();
        let mut tt = TranspositionTable::new();
        let mut searcher = Searcher::new(pov, &cfg, &mut tt, &tc);
        let (score, _) = searcher.negamax(&state, 2, -INF, INF, -1).unwrap();
        assert_eq!(score, minimax(&state, 2, state.side_to_move, &cfg));
    }
}

#[test]
fn test_iterative_deepening_with_aspiration_keeps_exact_score() {
    let tc = unlimited();
    for state in sample_positions() {
        let pov = state.side_to_move;
        let expected = minimax(&state, 3, pov, &cfg(0, None));
        for window in [None, Some(10), Some(120)] {
            let mut tt = TranspositionTable::new();
            let out = pick_best_move(&state, pov, 3, &cfg(0, window), &mut tt, &tc);
            assert_eq!(out.score, expected, "window {window:?}");
            assert!(!out.stopped);
        }
    }
}

#[test]
fn test_quiescence_never_below_stand_pat() {
    let cfg = cfg(3, None);
    let tc = unlimited();
    for state in sample_positions() {
        let mut tt = TranspositionTable::new();
        let mut searcher = Searcher::new(state.side_to_move, &cfg, &mut tt, &tc);
        let stand_pat = searcher.static_eval(&state, 1);
        let q = searcher.quiesce(&state, -INF, INF, 1, 3).unwrap();
        assert!(q >= stand_pat);
    }
}

#[test]
fn test_quiescence_takes_hanging_master() {
    let state = threat_position();
    let cfg = cfg(2, None);
    let tc = unlimited();
    let mut tt = TranspositionTable::new();
    let mut searcher = Searcher::new(Player::Blue, &cfg, &mut tt, &tc);
    assert_eq!(searcher.quiesce(&state, -INF, INF, 1, 2), Ok(WIN));
}

#[test]
fn test_aborted_search_stores_nothing() {
    let state = threat_position();
    let cfg = cfg(0, None);
    let tc = unlimited();
    tc.stop();
    let mut tt = TranspositionTable::new();
    let mut searcher = Searcher::new(Player::Blue, &cfg, &mut tt, &tc);
    assert_eq!(searcher.negamax(&state, 3, -INF, INF, 1), Err(Aborted));
    assert!(tt.is_empty());
}

#[test]
fn test_forced_win_stops_deepening() {
    let state = threat_position();
    let mut tt = TranspositionTable::new();
    let out = pick_best_move(&state, Player::Blue, 6, &cfg(2, Some(90)), &mut tt, &unlimited());
    assert_eq!(out.depth, 1);
    assert_eq!(out.score, WIN);
    assert_eq!(
        out.best_move,
        Move::Place {
            from: Square::new(2, 3).unwrap(),
            to: Square::new(2, 2).unwrap(),
            card: Card::Boar,
        }
    );
}

#[test]
fn test_no_completed_depth_falls_back_to_first_move() {
    let state = sample_positions()[0];
    let first = all_legal_moves(&state, state.side_to_move)[0];

    let mut tt = TranspositionTable::new();
    let out = pick_best_move(&state, state.side_to_move, 0, &cfg(0, None), &mut tt, &unlimited());
    assert_eq!(out.best_move, first);
    assert_eq!(out.depth, 0);
    assert!(!out.stopped);

    let tc = unlimited();
    tc.stop();
    let out = pick_best_move(&state, state.side_to_move, 5, &cfg(0, None), &mut tt, &tc);
    assert_eq!(out.best_move, first);
    assert!(out.stopped);
}
