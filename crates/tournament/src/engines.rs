//! Engine construction from command-line specs such as `classical:6`

use classical_engine::{ClassicalEngine, EngineProfile};
use onitama_core::Engine;
use random_engine::RandomEngine;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineSpecError {
    #[error("unknown engine '{0}'")]
    Unknown(String),
    #[error("invalid level in engine spec '{0}'")]
    InvalidLevel(String),
    #[error("engine spec '{0}' fixes a level, which conflicts with --profile")]
    LevelWithProfile(String),
}

/// Builds the engine named by `spec`.
///
/// `classical` plays the profile if one is given, else the default level.
/// `classical:L` plays level `L` and cannot be combined with a profile.
/// `random` is seeded with `seed`.
pub fn create_engine(
    spec: &str,
    profile: Option<&EngineProfile>,
    seed: u64,
) -> Result<Box<dyn Engine>, EngineSpecError> {
    let (kind, arg) = match spec.split_once(':') {
        Some((kind, arg)) => (kind, Some(arg)),
        None => (spec, None),
    };

    match kind.to_lowercase().as_str() {
        "classical" | "classic" => {
            let engine = match (arg, profile) {
                (Some(_), Some(_)) => {
                    return Err(EngineSpecError::LevelWithProfile(spec.to_string()));
                }
                (Some(level), None) => {
                    let level: u8 = level
                        .parse()
                        .map_err(|_| EngineSpecError::InvalidLevel(spec.to_string()))?;
                    ClassicalEngine::with_level(level)
                }
                (None, Some(profile)) => ClassicalEngine::with_profile(*profile),
                (None, None) => ClassicalEngine::new(),
            };
            Ok(Box::new(engine))
        }
        "random" => Ok(Box::new(RandomEngine::seeded(seed))),
        _ => Err(EngineSpecError::Unknown(spec.to_string())),
    }
}

#[cfg(test)]
#[path = "engines_tests.rs"]
mod engines_tests;
