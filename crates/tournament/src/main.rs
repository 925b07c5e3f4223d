//! Tournament CLI
//!
//! Run matches between engines and analyse seeded deals.

use anyhow::{bail, Context, Result};
use classical_engine::{ClassicalEngine, EngineProfile};
use onitama_core::{all_legal_moves, perft, Engine, GameState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tournament::{create_engine, MatchConfig, MatchRunner, TournamentConfig, TournamentResults};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Onitama Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--depth D] [--time-ms T]");
    println!("                   [--max-plies P] [--seed S] [--profile file.toml] [--out file.json]");
    println!("  tournament analyse [--seed S] [--level L] [--profile file.toml]");
    println!();
    println!("Engines:");
    println!("  classical     - Alpha-beta search at the default level (5)");
    println!("  classical:L   - Alpha-beta search at level L (1-8), not with --profile");
    println!("  random        - Uniformly random legal moves");
    println!();
    println!("Examples:");
    println!("  tournament match classical:6 random --games 20");
    println!("  tournament match classical:3 classical:7 --games 10 --time-ms 200 --out results.json");
    println!("  tournament analyse --seed 7 --level 8");
}

/// Value following a `--flag`.
fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{flag} needs a value"))
}

fn parse_flag<T>(args: &[String], i: usize, flag: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = flag_value(args, i, flag)?;
    raw.parse()
        .with_context(|| format!("invalid value '{raw}' for {flag}"))
}

fn load_profile(path: Option<&Path>) -> Result<Option<EngineProfile>> {
    path.map(|p| {
        EngineProfile::load(p).with_context(|| format!("loading profile {}", p.display()))
    })
    .transpose()
}

fn run_match(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two engine specifications");
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    let mut config = MatchConfig::default();
    let mut profile_path: Option<PathBuf> = None;
    let mut out: Option<PathBuf> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => config.num_games = parse_flag(args, i, "--games")?,
            "--depth" | "-d" => config.depth = Some(parse_flag(args, i, "--depth")?),
            "--time-ms" | "-t" => {
                config.time_per_move = Some(Duration::from_millis(parse_flag(args, i, "--time-ms")?))
            }
            "--max-plies" => config.max_plies = parse_flag(args, i, "--max-plies")?,
            "--seed" => config.seed = parse_flag(args, i, "--seed")?,
            "--profile" => profile_path = Some(PathBuf::from(flag_value(args, i, "--profile")?)),
            "--out" | "-o" => out = Some(PathBuf::from(flag_value(args, i, "--out")?)),
            other => bail!("unknown option '{other}'"),
        }
        i += 2;
    }

    let profile = load_profile(profile_path.as_deref())?;
    let mut engine1 = create_engine(engine1_spec, profile.as_ref(), config.seed)?;
    let mut engine2 = create_engine(engine2_spec, profile.as_ref(), config.seed.wrapping_add(1))?;

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!(
        "Games: {}, Depth: {}, Time: {}, Seed: {}",
        config.num_games,
        config.depth.map_or("engine default".into(), |d| d.to_string()),
        config
            .time_per_move
            .map_or("engine default".into(), |t| format!("{} ms", t.as_millis())),
        config.seed
    );
    println!();

    let runner = MatchRunner::new(config);
    let report = runner.run_match(engine1.as_mut(), engine2.as_mut());
    let result = report.result;

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut results = TournamentResults::new(
        &format!("{engine1_spec} vs {engine2_spec}"),
        vec![engine1_spec.to_string(), engine2_spec.to_string()],
        TournamentConfig::from(runner.config()),
    );
    results.add_match(engine1_spec, engine2_spec, result);
    results.print_report();

    if let Some(path) = out {
        results
            .save(&path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        println!("Results written to {}", path.display());
    }
    Ok(())
}

fn run_analyse(args: &[String]) -> Result<()> {
    let mut seed: u64 = 0;
    let mut level: Option<u8> = None;
    let mut profile_path: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => seed = parse_flag(args, i, "--seed")?,
            "--level" | "-l" => level = Some(parse_flag(args, i, "--level")?),
            "--profile" => profile_path = Some(PathBuf::from(flag_value(args, i, "--profile")?)),
            other => bail!("unknown option '{other}'"),
        }
        i += 2;
    }

    let profile = match (load_profile(profile_path.as_deref())?, level) {
        (Some(_), Some(_)) => bail!("--level and --profile cannot be combined"),
        (Some(profile), None) => profile,
        (None, Some(level)) => EngineProfile::level(level),
        (None, None) => EngineProfile::default(),
    };

    let state = GameState::deal(&mut StdRng::seed_from_u64(seed));
    println!("{state}");
    println!();

    let moves = all_legal_moves(&state, state.side_to_move);
    println!("Legal moves: {}", moves.len());
    println!("Perft(3): {}", perft(&state, 3));

    let mut engine = ClassicalEngine::with_profile(profile);
    let limits = engine.default_limits();
    let result = engine.search(&state, limits);

    println!();
    println!("Best move: {}", result.best_move);
    println!("Score:     {}", result.score);
    println!("Depth:     {}{}", result.depth, if result.stopped { " (time)" } else { "" });
    println!("Nodes:     {}", result.nodes);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "analyse" | "analyze" => run_analyse(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command '{other}'")
        }
    }
}
