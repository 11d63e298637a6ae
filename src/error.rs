//! Error taxonomy for dataset preparation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepareError {
    /// Bad caller input: test fraction out of range, empty output path, empty partition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A dataset source produced rows that violate the table invariants.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("failed to create directory {}: {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize output document: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PrepareError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PrepareError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, PrepareError>;
