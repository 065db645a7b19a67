//! Whole-document validation.
//!
//! Checks the properties a generation run relies on before any code is
//! emitted, so a bad document fails fast with a diagnostic instead of midway
//! through emission.

use crate::document::SchemaDocument;
use crate::error::SchemaError;

/// Validates a loaded schema document.
///
/// Every `$ref` in the document must resolve, and every `required` entry
/// must name a declared property.
///
/// # Errors
/// Returns `SchemaError` naming the definition and property of the first
/// failure.
pub fn validate_document(doc: &SchemaDocument) -> Result<(), SchemaError> {
    for (def_name, def) in &doc.definitions {
        for (prop_name, prop) in &def.properties {
            if prop.is_reference() {
                if let Err(source) = doc.resolve_property(prop) {
                    return Err(SchemaError::Resolution {
                        definition: def_name.clone(),
                        property: prop_name.clone(),
                        source,
                    });
                }
            }
        }

        for required in &def.required {
            if !def.properties.contains_key(required) {
                return Err(SchemaError::Validation {
                    message: format!(
                        "definition '{def_name}' requires unknown property '{required}'"
                    ),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_document() {
        let doc = SchemaDocument::from_str(
            r##"{
                "definitions": {
                    "Pricing": { "properties": { "amount": { "type": "number" } } },
                    "Order": {
                        "required": ["pricing"],
                        "properties": {
                            "pricing": { "$ref": "#/definitions/Pricing" }
                        }
                    }
                }
            }"##,
        )
        .expect("Failed to parse");
        assert!(validate_document(&doc).is_ok());
    }

    #[test]
    fn test_cyclic_references_are_valid() {
        let doc = SchemaDocument::from_str(
            r##"{
                "definitions": {
                    "Category": {
                        "properties": {
                            "children": {
                                "type": "array",
                                "items": { "$ref": "#/definitions/Category" }
                            }
                        }
                    }
                }
            }"##,
        )
        .expect("Failed to parse");
        assert!(validate_document(&doc).is_ok());
    }

    #[test]
    fn test_dangling_reference_names_definition_and_property() {
        let doc = SchemaDocument::from_str(
            r##"{
                "definitions": {
                    "Order": {
                        "properties": {
                            "pricing": { "$ref": "#/definitions/Missing" }
                        }
                    }
                }
            }"##,
        )
        .expect("Failed to parse");
        let err = validate_document(&doc).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("Order"));
        assert!(text.contains("pricing"));
        assert!(text.contains("Missing"));
    }

    #[test]
    fn test_unknown_required_name() {
        let doc = SchemaDocument::from_str(
            r##"{
                "definitions": {
                    "Order": {
                        "required": ["ghost"],
                        "properties": {}
                    }
                }
            }"##,
        )
        .expect("Failed to parse");
        assert!(matches!(
            validate_document(&doc).unwrap_err(),
            SchemaError::Validation { .. }
        ));
    }
}
