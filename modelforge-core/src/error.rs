//! Error types reported by generated accessors.

use thiserror::Error;

/// Runtime error type for generated model accessors.
///
/// These errors are raised by the validation statements that the generator
/// bakes into setters; they are unrelated to generation-time failures, which
/// live in the schema and codegen crates.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Integer value outside the declared `minimum`/`maximum` bounds.
    #[error("integer value {value} outside bounds [{}, {}]", fmt_bound(.min), fmt_bound(.max))]
    IntegerOutOfBounds {
        /// Rejected value.
        value: i64,
        /// Declared minimum, if any.
        min: Option<i64>,
        /// Declared maximum, if any.
        max: Option<i64>,
    },

    /// Floating point value outside the declared `minimum`/`maximum` bounds.
    #[error("float value {value} outside bounds [{}, {}]", fmt_bound(.min), fmt_bound(.max))]
    FloatOutOfBounds {
        /// Rejected value.
        value: f64,
        /// Declared minimum, if any.
        min: Option<f64>,
        /// Declared maximum, if any.
        max: Option<f64>,
    },

    /// Array length outside the declared `minItems`/`maxItems` bounds.
    #[error("array length {len} outside bounds [{}, {}]", fmt_bound(.min), fmt_bound(.max))]
    ArrayLengthOutOfBounds {
        /// Actual element count.
        len: usize,
        /// Declared minimum length, if any.
        min: Option<usize>,
        /// Declared maximum length, if any.
        max: Option<usize>,
    },

    /// Pure-array element of the wrong model type.
    #[error("element at index {index} is a '{actual}', expected '{expected}'")]
    TypeMismatch {
        /// Index of the offending element.
        index: usize,
        /// Expected model name.
        expected: String,
        /// Actual model name found.
        actual: String,
    },

    /// Value not present in the declared enum list.
    #[error("value '{value}' not allowed, expected one of: {}", .allowed.join(", "))]
    EnumViolation {
        /// Rejected value.
        value: String,
        /// Allowed literal values.
        allowed: Vec<String>,
    },

    /// Value could not be parsed as a date-time.
    #[error("cannot parse '{value}' as a date-time")]
    DateParse {
        /// Raw value that failed to parse.
        value: String,
    },
}

/// Result type alias for generated accessor operations.
pub type Result<T> = std::result::Result<T, ModelError>;

fn fmt_bound<T: std::fmt::Display>(bound: &Option<T>) -> String {
    bound
        .as_ref()
        .map_or_else(|| "unbounded".to_string(), ToString::to_string)
}
