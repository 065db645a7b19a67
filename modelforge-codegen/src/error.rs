//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema document loading error.
    #[error("schema parse error: {0}")]
    Parse(#[from] modelforge_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] modelforge_schema::SchemaError),

    /// Unresolvable reference, with the definition and property carrying it.
    #[error("in definition '{definition}', property '{property}': {source}")]
    Resolution {
        /// Definition name.
        definition: String,
        /// Property name.
        property: String,
        /// Underlying resolution failure.
        source: modelforge_schema::ResolutionError,
    },

    /// IO error while writing generated artifacts.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Wraps a resolution failure with its definition and property context.
    pub fn resolution(
        definition: impl Into<String>,
        property: impl Into<String>,
        source: modelforge_schema::ResolutionError,
    ) -> Self {
        Self::Resolution {
            definition: definition.into(),
            property: property.into(),
            source,
        }
    }
}
