//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p onitama_core -- [depth] [seed]
//!
//! Without a seed, a fixed set of deals is walked.

use onitama_core::{GameState, perft};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::time::Instant;

const SEEDS: &[u64] = &[1, 7, 42, 1234, 99_991];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);

    let seeds: Vec<u64> = match args.get(2).and_then(|s| s.parse().ok()) {
        Some(seed) => vec![seed],
        None => SEEDS.to_vec(),
    };

    let mut total_nodes = 0u64;
    let start = Instant::now();
    for seed in seeds {
        let state = GameState::deal(&mut StdRng::seed_from_u64(seed));
        let t = Instant::now();
        let nodes = perft(&state, depth);
        let secs = t.elapsed().as_secs_f64();
        println!(
            "seed {:>6}  depth {}  nodes {:>12}  {:>8.3}s  {:>10.0} nps",
            seed,
            depth,
            nodes,
            secs,
            nodes as f64 / secs.max(1e-9)
        );
        total_nodes += nodes;
    }
    let secs = start.elapsed().as_secs_f64();
    println!(
        "total: {} nodes in {:.3}s ({:.0} nps)",
        total_nodes,
        secs,
        total_nodes as f64 / secs.max(1e-9)
    );
}
