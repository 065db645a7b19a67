//! Enum constant extraction.

use serde_json::Value;

use crate::names::{escape_str, sanitize_constant, to_upper_snake_case};

/// One named constant derived from an enum literal, scoped to the owning
/// generated type.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumConstant {
    /// Constant name, `PREFIX_SANITIZED_VALUE`.
    pub name: String,
    /// The literal value.
    pub value: Value,
}

impl EnumConstant {
    /// Returns the Rust type of the rendered constant.
    #[must_use]
    pub fn rust_type(&self) -> &'static str {
        match &self.value {
            Value::Bool(_) => "bool",
            Value::Number(n) if n.is_i64() => "i64",
            Value::Number(_) => "f64",
            _ => "&str",
        }
    }

    /// Returns the Rust literal of the constant value.
    #[must_use]
    pub fn rust_value(&self) -> String {
        match &self.value {
            Value::Bool(b) => b.to_string(),
            Value::Number(n) if n.is_i64() => n.to_string(),
            Value::Number(n) => {
                let raw = n.to_string();
                if raw.contains('.') || raw.contains('e') || raw.contains('E') {
                    raw
                } else {
                    format!("{raw}.0")
                }
            }
            Value::String(s) => format!("\"{}\"", escape_str(s)),
            other => format!("\"{}\"", escape_str(&other.to_string())),
        }
    }
}

/// Extracts the constants for an enumerated property.
///
/// Literals are processed in schema order; duplicates are kept and each one
/// is still emitted. Constant names are not deduplicated either, so a
/// duplicate literal yields a duplicate name.
#[must_use]
pub fn extract_constants(property: &str, values: &[Value]) -> Vec<EnumConstant> {
    let prefix = to_upper_snake_case(property);

    values
        .iter()
        .map(|value| {
            let raw = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            EnumConstant {
                name: format!("{}_{}", prefix, sanitize_constant(&raw).to_ascii_uppercase()),
                value: value.clone(),
            }
        })
        .collect()
}
