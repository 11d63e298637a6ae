//! Dataset preparation: load, split, encode and write

use crate::config::{Config, DEFAULT_TEST_FRACTION};
use crate::data::builtin::BreastCancer;
use crate::data::dataset::DatasetSource;
use crate::data::document::OutputDocument;
use crate::data::split::train_test_split;
use crate::error::Result;
use crate::metrics::SplitSummary;
use crate::utils::fs::{ensure_parent_dir, validate_output_path, write_file};
use std::path::Path;
use tracing::{debug, info, warn};

/// Runs the data preparation step against a dataset source
pub struct DatasetPreparer<S: DatasetSource = BreastCancer> {
    source: S,
    config: Config,
}

impl DatasetPreparer<BreastCancer> {
    /// Preparer over the built-in dataset
    pub fn new(config: Config) -> Self {
        Self::with_source(BreastCancer, config)
    }
}

impl<S: DatasetSource> DatasetPreparer<S> {
    pub fn with_source(source: S, config: Config) -> Self {
        Self { source, config }
    }

    /// Load the dataset, split it and write the document to `output_path`.
    ///
    /// Arguments are checked before anything touches the filesystem, so an
    /// invalid call leaves no file or directory behind.
    pub fn prepare(&self, output_path: &Path) -> Result<SplitSummary> {
        self.config.validate()?;
        validate_output_path(output_path)?;

        let dataset = self.source.load()?;
        debug!(
            source = self.source.name(),
            rows = dataset.len(),
            features = dataset.n_features(),
            "loaded dataset"
        );
        if let Some(names) = self.source.feature_names() {
            debug!(feature_names = ?names, "dataset columns");
        }

        let split = train_test_split(
            &dataset,
            self.config.split.test_fraction,
            self.config.split.random_state,
        )?;
        let summary = SplitSummary::from_split(&split);
        debug!(
            train_rows = summary.train_rows,
            test_rows = summary.test_rows,
            seeded = self.config.split.random_state.is_some(),
            "split dataset"
        );

        let missing = summary.classes_missing_from_test();
        if !missing.is_empty() {
            warn!(?missing, "some classes have no rows in the test partition");
        }

        let contents = OutputDocument::from(split).encode(&self.config.output)?;

        ensure_parent_dir(output_path)?;
        write_file(output_path, &contents)?;

        info!(
            path = %output_path.display(),
            bytes = contents.len(),
            train_rows = summary.train_rows,
            test_rows = summary.test_rows,
            "wrote train/test split"
        );

        Ok(summary)
    }
}

/// Split the built-in dataset and write it to `output_path`.
///
/// `test_fraction` defaults to 0.2; a missing `random_state` gives a
/// different partition on every call.
pub fn prepare(
    output_path: &Path,
    test_fraction: Option<f64>,
    random_state: Option<u64>,
) -> Result<SplitSummary> {
    let mut config =
        Config::default().with_test_fraction(test_fraction.unwrap_or(DEFAULT_TEST_FRACTION));
    config.split.random_state = random_state;
    DatasetPreparer::new(config).prepare(output_path)
}
