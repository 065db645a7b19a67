//! Structural export trait implemented by every generated model.

use serde_json::{Map, Value};

/// Trait composed into every generated model type.
///
/// `model_name` identifies the definition the instance was generated from and
/// backs the pure-array element checks; `to_map` is the structural export
/// method, returning property-name to current-value using the accessors of
/// the type rather than direct field reads.
pub trait Model: std::fmt::Debug {
    /// Name of the schema definition this model was generated from.
    fn model_name(&self) -> &'static str;

    /// Exports the instance as a property-name to value mapping.
    fn to_map(&self) -> Map<String, Value>;

    /// Exports the instance as a JSON object value.
    fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }
}

/// Converts a pure array of models back into plain structural form.
///
/// This reverses the boxed container wrapping used for array-of-reference
/// fields before the array is included in an export mapping.
#[must_use]
pub fn export_models(items: &[Box<dyn Model>]) -> Value {
    Value::Array(items.iter().map(|item| item.to_value()).collect())
}
