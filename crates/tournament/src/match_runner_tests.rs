use super::*;
use classical_engine::ClassicalEngine;
use onitama_core::SearchResult;
use random_engine::RandomEngine;

/// Always passes with its first card, which is illegal whenever a placement exists.
struct AlwaysPass;

impl Engine for AlwaysPass {
    fn search(&mut self, state: &GameState, _limits: SearchLimits) -> SearchResult {
        SearchResult {
            best_move: onitama_core::Move::Pass {
                card: state.hand(state.side_to_move)[0],
            },
            score: 0,
            depth: 0,
            nodes: 0,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "AlwaysPass"
    }
}

#[test]
fn test_self_play() {
    let mut engine1 = ClassicalEngine::new();
    let mut engine2 = ClassicalEngine::new();

    let config = MatchConfig {
        num_games: 2,
        depth: Some(2),
        max_plies: 50,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let report = runner.run_match(&mut engine1, &mut engine2);

    // Self-play should complete without panic
    assert_eq!(report.result.total_games(), 2);
    assert_eq!(report.games.len(), 2);
}

#[test]
fn test_pairs_share_a_deal_with_seats_swapped() {
    let mut engine1 = RandomEngine::seeded(1);
    let mut engine2 = RandomEngine::seeded(2);
    let config = MatchConfig {
        num_games: 4,
        max_plies: 30,
        seed: 100,
        ..Default::default()
    };
    let report = MatchRunner::new(config).run_match(&mut engine1, &mut engine2);

    let seeds: Vec<u64> = report.games.iter().map(|g| g.deal_seed).collect();
    assert_eq!(seeds, vec![100, 100, 101, 101]);
}

#[test]
fn test_max_plies_is_a_draw() {
    let mut engine1 = RandomEngine::seeded(5);
    let mut engine2 = RandomEngine::seeded(6);
    let runner = MatchRunner::new(MatchConfig {
        max_plies: 2,
        ..Default::default()
    });

    // No master can be taken or reach an arch within two plies of the start.
    let record = runner.play_game(&mut engine1, &mut engine2, 9);
    assert_eq!(record.termination, Termination::MaxPlies);
    assert_eq!(record.winner, None);
    assert_eq!(record.plies, 2);
    assert_eq!(record.moves.len(), 2);
}

#[test]
fn test_illegal_move_forfeits() {
    let mut random = RandomEngine::seeded(3);
    let mut cheat = AlwaysPass;
    let runner = MatchRunner::new(MatchConfig {
        num_games: 2,
        ..Default::default()
    });
    let report = runner.run_match(&mut random, &mut cheat);

    assert_eq!(report.result.wins, 2);
    for game in &report.games {
        assert_eq!(game.termination, Termination::Forfeit);
    }
}

#[test]
fn test_classical_beats_random() {
    let mut classical = ClassicalEngine::with_level(3);
    let mut random = RandomEngine::seeded(42);
    let config = MatchConfig {
        num_games: 4,
        depth: Some(3),
        max_plies: 200,
        seed: 7,
        ..Default::default()
    };
    let report = MatchRunner::new(config).run_match(&mut classical, &mut random);
    assert_eq!(report.result.losses, 0);
    assert!(report.result.wins > 0);
}

#[test]
fn test_config_limits_override_engine_defaults() {
    let engine = ClassicalEngine::with_level(6);
    let defaults = MatchConfig::default().search_limits(&engine);
    assert_eq!(defaults.depth, 6);
    assert_eq!(defaults.move_time, Some(Duration::from_millis(900)));

    let fixed = MatchConfig {
        depth: Some(2),
        ..Default::default()
    }
    .search_limits(&engine);
    assert_eq!(fixed.depth, 2);
    assert_eq!(fixed.move_time, None);
}
