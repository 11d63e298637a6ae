//! JSON document written by the pipeline step

use crate::config::OutputConfig;
use crate::data::split::SplitResult;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The four partitions as plain nested JSON arrays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub x_train: Vec<Vec<f64>>,
    pub y_train: Vec<i64>,
    pub x_test: Vec<Vec<f64>>,
    pub y_test: Vec<i64>,
}

impl From<SplitResult> for OutputDocument {
    fn from(split: SplitResult) -> Self {
        let (x_train, y_train) = split.train.into_parts();
        let (x_test, y_test) = split.test.into_parts();
        Self {
            x_train,
            y_train,
            x_test,
            y_test,
        }
    }
}

impl OutputDocument {
    /// Serialize to JSON text.
    ///
    /// With `wrap_as_string_literal` the JSON text is itself encoded as a JSON
    /// string, so the file holds a single escaped string literal.
    pub fn encode(&self, output: &OutputConfig) -> Result<String> {
        let inner = if output.pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };

        if output.wrap_as_string_literal {
            Ok(serde_json::to_string(&inner)?)
        } else {
            Ok(inner)
        }
    }

    /// Parse either on-disk shape: a JSON object, or a string literal holding one.
    pub fn decode(text: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(text)? {
            Value::String(inner) => Ok(serde_json::from_str(&inner)?),
            other => Ok(serde_json::from_value(other)?),
        }
    }
}
