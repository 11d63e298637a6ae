//! Data ingestion step for an ML pipeline
//!
//! Loads a bundled breast-cancer diagnostic table, partitions its rows into
//! train and test sets, and writes the four parts as a JSON document to a
//! caller-chosen path.
//!
//! ## Main Components
//!
//! - `data`: dataset types, the built-in table, splitting and the preparer
//! - `config`: split and output configuration
//! - `metrics`: per-split row and label counts
//! - `error`: error taxonomy surfaced to callers

pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use data::{prepare, DatasetPreparer, OutputDocument, RawDataset};
pub use error::{PrepareError, Result};
pub use metrics::SplitSummary;
