//! Error types for label parsing and serialization.

use thiserror::Error;

/// Errors that can occur while reading or writing a label.
#[derive(Error, Debug)]
pub enum LabelError {
    /// Label text is not valid JSON
    #[error("Malformed label: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Label is valid JSON but not a record of named entries
    #[error("Label is not a JSON object")]
    NotAnObject,

    /// A tool entry does not hold shapes
    #[error("Invalid shapes under '{key}': {source}")]
    InvalidShape {
        /// Label key of the offending entry
        key: String,
        /// Underlying schema error
        source: serde_json::Error,
    },

    /// An annotation references a tool that is not configured
    #[error("Tool not found: {id}")]
    ToolNotFound {
        /// The missing tool ID
        id: String,
    },

    /// A tool and an answered classification field share a label key
    #[error("Label key '{name}' is used by both a tool and a classification field")]
    NameCollision {
        /// The shared key
        name: String,
    },
}

impl LabelError {
    /// Create a tool not found error.
    pub fn tool_not_found(id: impl Into<String>) -> Self {
        Self::ToolNotFound { id: id.into() }
    }

    /// Create a name collision error.
    pub fn name_collision(name: impl Into<String>) -> Self {
        Self::NameCollision { name: name.into() }
    }
}
