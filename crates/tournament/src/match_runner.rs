//! Match runner for playing games between engines

use onitama_core::{all_legal_moves, move_to_text, Engine, GameState, Player, SearchLimits};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tracing::{info, warn};

use crate::record::{GameRecord, GameResult, MatchResult, Termination};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Depth cap for every move. `None` keeps each engine's own default.
    pub depth: Option<u8>,
    /// Maximum time per move. `None` keeps each engine's own default.
    pub time_per_move: Option<Duration>,
    /// Plies after which an undecided game is scored as a draw
    pub max_plies: u32,
    /// Play each deal twice with the seats swapped
    pub alternate_seats: bool,
    /// Seed of the first deal; pair `n` uses `seed + n`
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: None,
            time_per_move: None,
            max_plies: 200,
            alternate_seats: true,
            seed: 0,
        }
    }
}

impl MatchConfig {
    /// Search limits for one move of `engine`. Explicit depth or time in the
    /// config override the engine's defaults.
    pub fn search_limits(&self, engine: &dyn Engine) -> SearchLimits {
        match (self.depth, self.time_per_move) {
            (Some(depth), Some(time)) => SearchLimits::depth_and_time(depth, time),
            (Some(depth), None) => SearchLimits::depth(depth),
            (None, Some(time)) => SearchLimits::time(time),
            (None, None) => engine.default_limits(),
        }
    }

    /// Deal seed of game `game_num`.
    pub fn deal_seed(&self, game_num: u32) -> u64 {
        let pair = if self.alternate_seats {
            game_num / 2
        } else {
            game_num
        };
        self.seed.wrapping_add(pair as u64)
    }
}

/// All games of one match.
#[derive(Debug, Clone)]
pub struct MatchReport {
    /// Tally from engine 1's side
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchReport {
        let mut result = MatchResult::new();
        let mut games = Vec::with_capacity(self.config.num_games as usize);

        for game_num in 0..self.config.num_games {
            let engine1_blue = !self.config.alternate_seats || game_num % 2 == 0;
            let seed = self.config.deal_seed(game_num);

            let (record, game_result) = if engine1_blue {
                let record = self.play_game(engine1, engine2, seed);
                let res = record.result_for(Player::Blue);
                (record, res)
            } else {
                let record = self.play_game(engine2, engine1, seed);
                let res = record.result_for(Player::Red);
                (record, res)
            };
            result.add(game_result);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                seed,
                seat = if engine1_blue { "blue" } else { "red" },
                result = game_result.notation(),
                termination = ?record.termination,
                plies = record.plies,
                score = format!("{}-{}-{}", result.wins, result.losses, result.draws),
                "game finished"
            );
            games.push(record);
        }

        MatchReport { result, games }
    }

    /// Play a single game from the deal of `deal_seed`.
    pub fn play_game(
        &self,
        blue: &mut dyn Engine,
        red: &mut dyn Engine,
        deal_seed: u64,
    ) -> GameRecord {
        let mut state = GameState::deal(&mut StdRng::seed_from_u64(deal_seed));
        blue.new_game();
        red.new_game();

        let mut record = GameRecord {
            deal_seed,
            blue: blue.name().to_string(),
            red: red.name().to_string(),
            winner: None,
            termination: Termination::MaxPlies,
            plies: 0,
            moves: Vec::new(),
        };

        loop {
            if let Some(outcome) = state.outcome() {
                record.winner = Some(outcome.winner);
                record.termination = Termination::Rules(outcome.reason);
                break;
            }
            if state.ply >= self.config.max_plies {
                break;
            }

            let mover = state.side_to_move;
            let engine: &mut dyn Engine = match mover {
                Player::Blue => &mut *blue,
                Player::Red => &mut *red,
            };
            // Fresh limits for each move (resets the clock)
            let limits = self.config.search_limits(engine);
            let mv = engine.search(&state, limits).best_move;

            if !all_legal_moves(&state, mover).contains(&mv) {
                warn!(engine = engine.name(), %mv, ply = state.ply, "illegal move, forfeiting");
                record.winner = Some(mover.other());
                record.termination = Termination::Forfeit;
                break;
            }
            match state.apply(mv) {
                Ok(next) => state = next,
                Err(err) => {
                    warn!(engine = engine.name(), %mv, %err, "move rejected, forfeiting");
                    record.winner = Some(mover.other());
                    record.termination = Termination::Forfeit;
                    break;
                }
            }
            record.moves.push(move_to_text(mv));
        }

        record.plies = state.ply;
        record
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth: Some(depth),
        ..Default::default()
    };
    MatchRunner::new(config).run_match(engine1, engine2).result
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
