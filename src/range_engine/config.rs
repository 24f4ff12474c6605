use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RangeError, Result};

fn default_max_selection() -> usize {
    12
}

fn default_correct_epsilon() -> f64 {
    0.001
}

/// Session tunables.
///
/// # Example JSON
///
/// ```json
/// {
///   "max_selection": 12,
///   "correct_epsilon": 0.001,
///   "allow_full_table_pool": false,
///   "rng_seed": 42
/// }
/// ```
///
/// Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Most hands the chart may hold at once.
    #[serde(default = "default_max_selection")]
    pub max_selection: usize,

    /// A frequency must exceed this to count as a correct quiz answer.
    /// Stored data carries rounding noise, so `> 0` is too loose.
    #[serde(default = "default_correct_epsilon")]
    pub correct_epsilon: f64,

    /// Start practice from the whole table when no chart has been generated.
    #[serde(default)]
    pub allow_full_table_pool: bool,

    /// Fixed seed for question sampling. `None` draws from entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_selection: default_max_selection(),
            correct_epsilon: default_correct_epsilon(),
            allow_full_table_pool: false,
            rng_seed: None,
        }
    }
}

impl SessionConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config: SessionConfig = serde_json::from_str(&fs::read_to_string(path)?)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_selection == 0 {
            return Err(RangeError::InvalidConfig("max_selection must be at least 1".into()));
        }
        if !(0.0..1.0).contains(&self.correct_epsilon) {
            return Err(RangeError::InvalidConfig(format!(
                "correct_epsilon must be in [0, 1), got {}",
                self.correct_epsilon
            )));
        }
        Ok(())
    }
}
