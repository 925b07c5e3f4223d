//! Tournament Runner for Onitama engines
//!
//! This crate provides infrastructure for:
//! - Building engines from specs like `classical:6`
//! - Running matches between different engines from reproducible deals
//! - Recording how each game ended
//! - Saving aggregated results as JSON and printing reports
//!
//! # Usage
//!
//! ```bash
//! # Classical level 6 against the random baseline
//! cargo run -p tournament -- match classical:6 random --games 20
//!
//! # Inspect what the engine thinks of a seeded deal
//! cargo run -p tournament -- analyse --seed 7 --level 8
//! ```

mod engines;
mod match_runner;
mod record;
mod results;

pub use engines::*;
pub use match_runner::*;
pub use record::*;
pub use results::*;
