//! Engine profiles: evaluation weights, feature toggles, search knobs and the
//! eight built-in difficulty levels.
//!
//! Profiles are plain serde structs so they can be kept in TOML files:
//!
//! ```toml
//! max_depth = 6
//! move_time_ms = 900
//!
//! [search]
//! quiescence_depth = 2
//! aspiration_window = 120
//!
//! [search.eval]
//! use_mobility = true
//! use_master_safety = true
//!
//! [search.eval.weights]
//! safety = 1500
//! ```

use std::path::Path;
use std::time::Duration;

use onitama_core::SearchLimits;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid profile: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Coefficients of the evaluation terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub student: i32,
    pub master: i32,
    pub arch: i32,
    pub mobility: i32,
    pub center: i32,
    pub center_master: i32,
    pub center_student: i32,
    pub advance: i32,
    pub safety: i32,
    pub tempo: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            student: 120,
            master: 20_000,
            arch: 150,
            mobility: 70,
            center: 8,
            center_master: 14,
            center_student: 6,
            advance: 6,
            safety: 1200,
            tempo: 18,
        }
    }
}

/// Which optional evaluation terms are switched on. Material and arch
/// distance are always scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub use_mobility: bool,
    pub use_center: bool,
    pub use_advancement: bool,
    pub use_master_safety: bool,
    pub use_tempo: bool,
    pub weights: EvalWeights,
}

impl EvalConfig {
    /// Every optional term enabled with default weights.
    pub fn full() -> Self {
        Self {
            use_mobility: true,
            use_center: true,
            use_advancement: true,
            use_master_safety: true,
            use_tempo: true,
            weights: EvalWeights::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Capture-only plies searched past the horizon. 0 disables quiescence.
    pub quiescence_depth: u8,
    /// Half-width of the aspiration window used from depth 2 on.
    pub aspiration_window: Option<i32>,
    pub eval: EvalConfig,
}

/// Complete description of how a classical engine plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineProfile {
    pub max_depth: u8,
    pub move_time_ms: u64,
    pub search: SearchConfig,
}

impl Default for EngineProfile {
    fn default() -> Self {
        Self::level(5)
    }
}

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 8;

impl EngineProfile {
    /// Built-in difficulty level. Values outside `1..=8` are clamped.
    pub fn level(level: u8) -> Self {
        let level = level.clamp(MIN_LEVEL, MAX_LEVEL);
        let (max_depth, move_time_ms) = match level {
            1 => (1, 60),
            2 => (2, 120),
            3 => (3, 200),
            4 => (4, 350),
            5 => (5, 550),
            6 => (6, 900),
            7 => (7, 2500),
            _ => (8, 10_000),
        };
        let quiescence_depth = match level {
            1..=3 => 0,
            4 => 1,
            5 | 6 => 2,
            _ => 3,
        };
        let aspiration_window = match level {
            6 => Some(120),
            7 | 8 => Some(90),
            _ => None,
        };
        let eval = EvalConfig {
            use_mobility: level >= 2,
            use_center: level >= 3,
            use_advancement: level >= 4,
            use_tempo: level >= 5,
            use_master_safety: level >= 6,
            weights: EvalWeights::default(),
        };

        Self {
            max_depth,
            move_time_ms,
            search: SearchConfig {
                quiescence_depth,
                aspiration_window,
                eval,
            },
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ProfileError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn move_time(&self) -> Duration {
        Duration::from_millis(self.move_time_ms)
    }

    /// Fresh search limits matching this profile's depth and time budget.
    pub fn limits(&self) -> SearchLimits {
        SearchLimits::depth_and_time(self.max_depth, self.move_time())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
