//! Summary statistics for a train/test split

use crate::data::split::SplitResult;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    pub train_rows: usize,
    pub test_rows: usize,
    pub n_features: usize,
    pub train_label_counts: BTreeMap<i64, usize>,
    pub test_label_counts: BTreeMap<i64, usize>,
}

impl SplitSummary {
    pub fn from_split(split: &SplitResult) -> Self {
        Self {
            train_rows: split.train.len(),
            test_rows: split.test.len(),
            n_features: split.train.n_features(),
            train_label_counts: label_counts(split.train.labels()),
            test_label_counts: label_counts(split.test.labels()),
        }
    }

    pub fn total_rows(&self) -> usize {
        self.train_rows + self.test_rows
    }

    /// Realized share of rows in the test partition
    pub fn test_fraction(&self) -> f64 {
        self.test_rows as f64 / self.total_rows() as f64
    }

    /// Labels seen in train that never made it into test
    pub fn classes_missing_from_test(&self) -> Vec<i64> {
        self.train_label_counts
            .keys()
            .filter(|label| !self.test_label_counts.contains_key(label))
            .copied()
            .collect()
    }
}

pub fn label_counts(labels: &[i64]) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for &label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    counts
}
