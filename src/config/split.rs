use crate::error::{PrepareError, Result};
use serde::{Deserialize, Serialize};

/// Default proportion of rows assigned to the test partition
pub const DEFAULT_TEST_FRACTION: f64 = 0.2;

/// Train/test split configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Fraction of rows that go to the test set, exclusive range (0, 1)
    pub test_fraction: f64,

    /// Seed for the row shuffle. `None` draws from OS entropy, so repeated
    /// runs produce different partitions.
    pub random_state: Option<u64>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            test_fraction: DEFAULT_TEST_FRACTION,
            random_state: None,
        }
    }
}

/// Test fractions must lie in the open range (0, 1)
pub fn validate_test_fraction(test_fraction: f64) -> Result<()> {
    if !test_fraction.is_finite() || test_fraction <= 0.0 || test_fraction >= 1.0 {
        return Err(PrepareError::InvalidArgument(format!(
            "test_fraction must be in the open range (0, 1), got {}",
            test_fraction
        )));
    }
    Ok(())
}
