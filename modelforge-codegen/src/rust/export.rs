//! Structural-export method generation.

use modelforge_schema::{InferredType, SchemaType};

use crate::field::FieldSpec;
use crate::names::escape_str;

/// Generator for the `Model` implementation of one generated type.
pub struct ExportGenerator;

impl ExportGenerator {
    /// Generates the `Model` impl: the model name and the structural export
    /// method.
    ///
    /// The export method reads every property through its accessor, never
    /// through the field directly, and converts array-of-reference fields
    /// back into plain structural form.
    #[must_use]
    pub fn generate(type_name: &str, fields: &[FieldSpec]) -> String {
        let mut output = String::new();

        output.push_str(&format!("impl Model for {type_name} {{\n"));
        output.push_str("    fn model_name(&self) -> &'static str {\n");
        output.push_str(&format!("        \"{}\"\n", escape_str(type_name)));
        output.push_str("    }\n\n");

        output.push_str("    fn to_map(&self) -> Map<String, Value> {\n");
        if fields.is_empty() {
            output.push_str("        Map::new()\n");
        } else {
            output.push_str("        let mut map = Map::new();\n");
            for field in fields {
                output.push_str(&format!(
                    "        map.insert(\"{}\".to_string(), {});\n",
                    escape_str(&field.name),
                    export_expr(field)
                ));
            }
            output.push_str("        map\n");
        }
        output.push_str("    }\n");
        output.push_str("}\n");

        output
    }
}

/// The expression exporting one field as a JSON value.
fn export_expr(field: &FieldSpec) -> String {
    let getter = format!("self.{}()", field.rust_name);
    match &field.ty {
        InferredType::DateTime => {
            if field.nullable {
                format!("{getter}.map(|v| Value::from(v.to_rfc3339())).unwrap_or(Value::Null)")
            } else {
                format!("Value::from({getter}.to_rfc3339())")
            }
        }
        InferredType::Primitive(SchemaType::Array) => {
            if field.is_pure_array() {
                format!("export_models({getter})")
            } else {
                format!("Value::Array({getter}.to_vec())")
            }
        }
        InferredType::Primitive(_) => {
            if field.nullable {
                format!("{getter}.map(Value::from).unwrap_or(Value::Null)")
            } else {
                format!("Value::from({getter})")
            }
        }
        InferredType::Named(_) => {
            if field.nullable {
                format!("{getter}.map(|v| Value::Object(v.to_map())).unwrap_or(Value::Null)")
            } else {
                format!("Value::Object({getter}.to_map())")
            }
        }
        InferredType::Untyped => {
            if field.nullable {
                format!("{getter}.cloned().unwrap_or(Value::Null)")
            } else {
                format!("{getter}.clone()")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelforge_schema::SchemaDocument;

    fn fields() -> Vec<FieldSpec> {
        let doc = SchemaDocument::from_str(
            r##"{
                "definitions": {
                    "Pricing": { "properties": {} },
                    "Order": {
                        "required": ["qty"],
                        "properties": {
                            "qty": { "type": "integer" },
                            "reference": { "type": "string" },
                            "pricings": {
                                "type": "array",
                                "items": { "$ref": "#/definitions/Pricing" }
                            }
                        }
                    }
                }
            }"##,
        )
        .expect("Failed to parse");
        let def = doc.get_definition("Order").unwrap();
        def.properties
            .iter()
            .map(|(name, prop)| FieldSpec::build(&doc, def, name, prop).unwrap())
            .collect()
    }

    #[test]
    fn test_export_uses_accessors() {
        let output = ExportGenerator::generate("Order", &fields());

        assert!(output.contains("impl Model for Order {"));
        assert!(output.contains("\"Order\""));
        assert!(output.contains(
            "map.insert(\"qty\".to_string(), Value::from(self.qty()));"
        ));
        assert!(output.contains(
            "map.insert(\"reference\".to_string(), self.reference().map(Value::from).unwrap_or(Value::Null));"
        ));
        assert!(!output.contains("self.qty;"));
    }

    #[test]
    fn test_pure_array_unwraps_to_structural_form() {
        let output = ExportGenerator::generate("Order", &fields());
        assert!(output.contains(
            "map.insert(\"pricings\".to_string(), export_models(self.pricings()));"
        ));
    }

    #[test]
    fn test_one_export_entry_per_property() {
        let output = ExportGenerator::generate("Order", &fields());
        assert_eq!(output.matches("map.insert(").count(), 3);
    }

    #[test]
    fn test_empty_definition_exports_empty_map() {
        let output = ExportGenerator::generate("Pricing", &[]);
        assert!(output.contains("Map::new()"));
        assert!(!output.contains("map.insert"));
    }
}
