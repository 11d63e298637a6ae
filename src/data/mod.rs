pub mod builtin;
pub mod dataset;
pub mod document;
pub mod prepare;
pub mod split;

pub use builtin::BreastCancer;
pub use dataset::{DatasetSource, RawDataset};
pub use document::OutputDocument;
pub use prepare::{prepare, DatasetPreparer};
pub use split::{split_sizes, train_test_split, SplitResult};
