pub mod output;
pub mod split;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use output::OutputConfig;
pub use split::{validate_test_fraction, SplitConfig, DEFAULT_TEST_FRACTION};

/// Main configuration for the data preparation step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub split: SplitConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load a JSON config file. Missing sections and fields keep their defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        Ok(config)
    }

    pub fn with_test_fraction(mut self, test_fraction: f64) -> Self {
        self.split.test_fraction = test_fraction;
        self
    }

    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.split.random_state = Some(seed);
        self
    }

    pub fn with_wrapping(mut self, wrap: bool) -> Self {
        self.output.wrap_as_string_literal = wrap;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_test_fraction(self.split.test_fraction)
    }
}
