//! Constraint-to-validation-rule compilation.
//!
//! Each property compiles to an ordered list of tagged rule values; the
//! emitter renders them into target syntax. Keeping the rules structured
//! separates "what checks apply" from "how they render".

use modelforge_schema::{InferredType, PropertySchema, ResolutionError, SchemaDocument, SchemaType};
use serde_json::Value;

/// One validation statement a generated setter must perform before
/// assignment.
///
/// Rules are evaluated in the order this module produces them: array
/// pure-type, array bounds, numeric bounds, date parsing, enum membership.
/// The enum check runs last so it validates the value after any
/// transformation.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationRule {
    /// Every element of the array must be an instance of the named model.
    PureArray {
        /// Expected element model name.
        model: String,
    },
    /// Array length must stay within the declared `minItems`/`maxItems`.
    ArrayBounds {
        /// Declared minimum length.
        min: Option<u64>,
        /// Declared maximum length.
        max: Option<u64>,
    },
    /// Integer value must stay within the declared `minimum`/`maximum`.
    IntegerBounds {
        /// Declared minimum.
        min: Option<i64>,
        /// Declared maximum.
        max: Option<i64>,
    },
    /// Float value must stay within the declared `minimum`/`maximum`.
    FloatBounds {
        /// Declared minimum.
        min: Option<f64>,
        /// Declared maximum.
        max: Option<f64>,
    },
    /// Parse the raw value into the canonical date-time representation,
    /// replacing it before assignment.
    DateParse,
    /// Value must be a member of the literal enum list.
    Enum {
        /// Allowed literal values, in schema order.
        values: Vec<Value>,
    },
}

/// Compiles the validation rules implied by a property schema.
///
/// A property may compile to no rules at all; its setter is then a pure
/// pass-through assignment.
///
/// # Errors
/// Returns `ResolutionError` if the property references a definition that
/// does not resolve.
pub fn compile_rules(
    doc: &SchemaDocument,
    prop: &PropertySchema,
) -> Result<Vec<ValidationRule>, ResolutionError> {
    let ty = doc.infer_type(prop, true)?;
    let mut rules = Vec::new();

    if prop.is_reference() && ty.is_array() {
        if let InferredType::Named(model) = doc.infer_type(prop, false)? {
            rules.push(ValidationRule::PureArray { model });
        }
    }

    if ty.is_array()
        && prop.items.is_some()
        && (prop.min_items.is_some() || prop.max_items.is_some())
    {
        rules.push(ValidationRule::ArrayBounds {
            min: prop.min_items,
            max: prop.max_items,
        });
    }

    match ty {
        InferredType::Primitive(SchemaType::Integer)
            if prop.minimum.is_some() || prop.maximum.is_some() =>
        {
            rules.push(ValidationRule::IntegerBounds {
                min: prop.minimum.map(|m| m as i64),
                max: prop.maximum.map(|m| m as i64),
            });
        }
        InferredType::Primitive(SchemaType::Number)
            if prop.minimum.is_some() || prop.maximum.is_some() =>
        {
            rules.push(ValidationRule::FloatBounds {
                min: prop.minimum,
                max: prop.maximum,
            });
        }
        InferredType::DateTime => rules.push(ValidationRule::DateParse),
        _ => {}
    }

    if prop.has_enum() {
        rules.push(ValidationRule::Enum {
            values: prop.enum_values.clone(),
        });
    }

    Ok(rules)
}
