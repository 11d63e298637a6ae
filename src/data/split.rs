//! Random train/test row partition

use crate::config::split::validate_test_fraction;
use crate::data::dataset::RawDataset;
use crate::error::{PrepareError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A dataset partitioned along the row axis
#[derive(Debug, Clone)]
pub struct SplitResult {
    pub train: RawDataset,
    pub test: RawDataset,
    /// Original row positions of `train`, in output order
    pub train_indices: Vec<usize>,
    /// Original row positions of `test`, in output order
    pub test_indices: Vec<usize>,
}

/// Returns `(n_train, n_test)` for `n_samples` rows.
///
/// The cut sits at `round(n_samples * (1 - test_fraction))`; rows before it
/// go to train, the rest to test. Both sides must end up non-empty.
pub fn split_sizes(n_samples: usize, test_fraction: f64) -> Result<(usize, usize)> {
    validate_test_fraction(test_fraction)?;

    let n_train = (n_samples as f64 * (1.0 - test_fraction)).round() as usize;
    let n_test = n_samples.saturating_sub(n_train);

    if n_train == 0 || n_test == 0 {
        return Err(PrepareError::InvalidArgument(format!(
            "with n_samples={} and test_fraction={}, one of the partitions would be empty",
            n_samples, test_fraction
        )));
    }

    Ok((n_train, n_test))
}

/// Shuffle row indices and cut them into a train prefix and a test suffix.
///
/// No stratification: labels play no part in the assignment.
pub fn train_test_split(
    dataset: &RawDataset,
    test_fraction: f64,
    random_state: Option<u64>,
) -> Result<SplitResult> {
    let (n_train, _) = split_sizes(dataset.len(), test_fraction)?;

    let mut rng = match random_state {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut indices: Vec<usize> = (0..dataset.len()).collect();
    indices.shuffle(&mut rng);
    let test_indices = indices.split_off(n_train);
    let train_indices = indices;

    Ok(SplitResult {
        train: dataset.select(&train_indices),
        test: dataset.select(&test_indices),
        train_indices,
        test_indices,
    })
}
