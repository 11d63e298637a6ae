use serde::{Deserialize, Serialize};

/// Output encoding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Encode the JSON document a second time as a JSON string literal.
    /// Downstream pipeline steps read this shape, so it stays on by default.
    pub wrap_as_string_literal: bool,

    /// Indent the inner JSON document
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            wrap_as_string_literal: true,
            pretty: false,
        }
    }
}
