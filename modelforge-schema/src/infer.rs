//! Two-mode type inference over property schemas.

use crate::document::{PropertySchema, SchemaDocument};
use crate::error::ResolutionError;
use crate::types::SchemaType;

/// The effective emitted type of a property schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferredType {
    /// `format: date-time` - canonical date/time type.
    DateTime,
    /// A mapped schema primitive.
    Primitive(SchemaType),
    /// A named model type - a resolved reference, or a declared type name
    /// outside the primitive set passed through unchanged.
    Named(String),
    /// No type information; legal and simply undocumented.
    Untyped,
}

impl InferredType {
    /// Returns the primitive type, if this is one.
    #[must_use]
    pub fn as_primitive(&self) -> Option<SchemaType> {
        match self {
            Self::Primitive(t) => Some(*t),
            _ => None,
        }
    }

    /// Returns true if this is the array primitive.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Primitive(SchemaType::Array))
    }
}

impl SchemaDocument {
    /// Infers the effective type of a property schema.
    ///
    /// Resolution runs in three tiers: `date-time` format wins outright; in
    /// `strict` mode a declared primitive `type` is mapped next; otherwise a
    /// reference resolves to its definition name. Schemas matching none of
    /// the tiers are `Untyped`.
    ///
    /// The two modes answer different questions about the same schema: the
    /// strict answer is the storage type of the field itself, the non-strict
    /// answer is the element type of an array-of-reference property (used
    /// when documenting the array).
    ///
    /// # Errors
    /// Returns `ResolutionError` if the schema is a reference whose pointer
    /// does not resolve.
    pub fn infer_type(
        &self,
        prop: &PropertySchema,
        strict: bool,
    ) -> Result<InferredType, ResolutionError> {
        if prop.is_date_time() {
            return Ok(InferredType::DateTime);
        }

        if strict {
            if let Some(declared) = prop.schema_type.as_deref() {
                return Ok(match SchemaType::parse(declared) {
                    Some(t) => InferredType::Primitive(t),
                    // Unknown names pass through as model names, exactly like
                    // the type mapper.
                    None => InferredType::Named(declared.to_string()),
                });
            }
        }

        if prop.is_reference() {
            let (name, _) = self.resolve_property(prop)?;
            return Ok(InferredType::Named(name.to_string()));
        }

        Ok(InferredType::Untyped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> SchemaDocument {
        SchemaDocument::from_str(
            r##"{
                "definitions": {
                    "Pricing": { "properties": { "amount": { "type": "number" } } },
                    "Order": {
                        "properties": {
                            "qty": { "type": "integer" },
                            "placedAt": { "type": "string", "format": "date-time" },
                            "pricing": { "$ref": "#/definitions/Pricing" },
                            "pricings": {
                                "type": "array",
                                "items": { "$ref": "#/definitions/Pricing" }
                            },
                            "opaque": {}
                        }
                    }
                }
            }"##,
        )
        .expect("Failed to parse")
    }

    fn prop<'a>(doc: &'a SchemaDocument, name: &str) -> &'a PropertySchema {
        &doc.get_definition("Order").unwrap().properties[name]
    }

    #[test]
    fn test_date_time_wins_over_declared_type() {
        let doc = doc();
        let inferred = doc.infer_type(prop(&doc, "placedAt"), true).unwrap();
        assert_eq!(inferred, InferredType::DateTime);
    }

    #[test]
    fn test_strict_prefers_primitive() {
        let doc = doc();
        let inferred = doc.infer_type(prop(&doc, "qty"), true).unwrap();
        assert_eq!(inferred, InferredType::Primitive(SchemaType::Integer));

        // Array-of-reference: strict sees the array, non-strict sees the
        // element type.
        let strict = doc.infer_type(prop(&doc, "pricings"), true).unwrap();
        assert_eq!(strict, InferredType::Primitive(SchemaType::Array));

        let lax = doc.infer_type(prop(&doc, "pricings"), false).unwrap();
        assert_eq!(lax, InferredType::Named("Pricing".to_string()));
    }

    #[test]
    fn test_reference_resolves_to_name() {
        let doc = doc();
        let inferred = doc.infer_type(prop(&doc, "pricing"), true).unwrap();
        assert_eq!(inferred, InferredType::Named("Pricing".to_string()));
    }

    #[test]
    fn test_untyped() {
        let doc = doc();
        let inferred = doc.infer_type(prop(&doc, "opaque"), true).unwrap();
        assert_eq!(inferred, InferredType::Untyped);
    }

    #[test]
    fn test_unresolvable_reference_is_hard_error() {
        let doc = doc();
        let dangling = PropertySchema {
            reference: Some("#/definitions/Missing".to_string()),
            ..PropertySchema::default()
        };
        assert!(doc.infer_type(&dangling, true).is_err());
    }

    #[test]
    fn test_unknown_declared_type_passes_through() {
        let doc = doc();
        let odd = PropertySchema {
            schema_type: Some("Pricing".to_string()),
            ..PropertySchema::default()
        };
        let inferred = doc.infer_type(&odd, true).unwrap();
        assert_eq!(inferred, InferredType::Named("Pricing".to_string()));
    }
}
