//! Error types for schema loading, resolution and validation.

use thiserror::Error;

/// Error type for schema document loading.
#[derive(Debug, Error)]
pub enum ParseError {
    /// IO error while reading the schema file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON syntax or shape error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid document structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },
}

/// A `$ref` pointer that does not resolve within the document.
///
/// Resolution failure is a hard generation-time error; the generator never
/// skips an unresolvable reference silently.
#[derive(Debug, Error)]
#[error("reference '{pointer}' does not resolve: segment '{segment}' not found")]
pub struct ResolutionError {
    /// The full pointer that failed.
    pub pointer: String,
    /// The segment that was absent.
    pub segment: String,
}

impl ResolutionError {
    /// Creates a resolution error for the given pointer and missing segment.
    pub fn new(pointer: impl Into<String>, segment: impl Into<String>) -> Self {
        Self {
            pointer: pointer.into(),
            segment: segment.into(),
        }
    }
}

/// Error type for whole-document validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Document loading error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Unresolvable reference, with the definition and property that carry it.
    #[error("in definition '{definition}', property '{property}': {source}")]
    Resolution {
        /// Definition name.
        definition: String,
        /// Property name.
        property: String,
        /// Underlying resolution failure.
        source: ResolutionError,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_error_display() {
        let err = ResolutionError::new("#/definitions/Missing", "Missing");
        assert_eq!(
            err.to_string(),
            "reference '#/definitions/Missing' does not resolve: segment 'Missing' not found"
        );
    }

    #[test]
    fn test_schema_error_carries_context() {
        let err = SchemaError::Resolution {
            definition: "Order".to_string(),
            property: "pricing".to_string(),
            source: ResolutionError::new("#/definitions/Pricing", "Pricing"),
        };
        let text = err.to_string();
        assert!(text.contains("Order"));
        assert!(text.contains("pricing"));
    }
}
