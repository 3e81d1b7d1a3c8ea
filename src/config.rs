use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::boundary::{BoundaryPolicy, DEFAULT_GROWTH_MARGIN};
use crate::error::EngineError;
use crate::grid::checked_dims;
use crate::rules::GameRules;
use crate::step::StepConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("invalid rules: {0}")]
    Rules(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Initial number of rows.
    pub rows: i64,
    /// Initial number of columns.
    pub cols: i64,
    /// Active boundary topology.
    pub policy: BoundaryPolicy,
    /// Rows/columns added per edge when an unbounded grid grows.
    pub growth_margin: usize,
    /// Birth/survival thresholds.
    pub rules: GameRules,
    /// Epoch length for the driver loop, in milliseconds.
    pub epoch_ms: u64,
    /// Stop the driver after this many generations even if still changing.
    pub max_generations: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: 64,
            cols: 64,
            policy: BoundaryPolicy::Finite,
            growth_margin: DEFAULT_GROWTH_MARGIN,
            rules: GameRules::default(),
            epoch_ms: 100,
            max_generations: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded config from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        checked_dims(self.rows, self.cols)?;
        self.rules.validate().map_err(ConfigError::Rules)?;
        Ok(())
    }

    pub fn step_config(&self) -> StepConfig {
        StepConfig {
            rules: self.rules,
            growth_margin: self.growth_margin,
        }
    }
}
