//! In-memory tabular dataset and the source abstraction the preparer loads from

use crate::error::{PrepareError, Result};
use serde::{Deserialize, Serialize};

/// Row-aligned feature matrix and label vector.
///
/// Every row has the same width and `features.len() == labels.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDataset {
    features: Vec<Vec<f64>>,
    labels: Vec<i64>,
}

impl RawDataset {
    pub fn new(features: Vec<Vec<f64>>, labels: Vec<i64>) -> Result<Self> {
        if features.is_empty() {
            return Err(PrepareError::InvalidDataset("dataset has no rows".to_string()));
        }
        if features.len() != labels.len() {
            return Err(PrepareError::InvalidDataset(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }

        let width = features[0].len();
        if width == 0 {
            return Err(PrepareError::InvalidDataset("rows have no features".to_string()));
        }
        if let Some((row, values)) = features.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(PrepareError::InvalidDataset(format!(
                "row {} has {} features, expected {}",
                row,
                values.len(),
                width
            )));
        }

        Ok(Self { features, labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Row width; 0 only for a partition that selected no rows
    pub fn n_features(&self) -> usize {
        self.features.first().map(Vec::len).unwrap_or(0)
    }

    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    pub fn labels(&self) -> &[i64] {
        &self.labels
    }

    /// Copy the given rows, in the given order, into a new dataset.
    ///
    /// Indices must be in bounds; the caller builds them from `0..len()`.
    pub fn select(&self, indices: &[usize]) -> RawDataset {
        RawDataset {
            features: indices.iter().map(|&i| self.features[i].clone()).collect(),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
        }
    }

    pub fn into_parts(self) -> (Vec<Vec<f64>>, Vec<i64>) {
        (self.features, self.labels)
    }
}

/// Anything the preparer can load a dataset from
pub trait DatasetSource {
    fn name(&self) -> &str;

    fn load(&self) -> Result<RawDataset>;

    /// Column names, when the source knows them
    fn feature_names(&self) -> Option<&[String]> {
        None
    }
}

impl DatasetSource for RawDataset {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn load(&self) -> Result<RawDataset> {
        Ok(self.clone())
    }
}
