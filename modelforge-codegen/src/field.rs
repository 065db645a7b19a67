//! Per-property field specifications.
//!
//! A `FieldSpec` is built once per property during a generation run,
//! consumed by the emitter, and discarded after emission.

use modelforge_schema::{
    Definition, InferredType, PropertySchema, ResolutionError, SchemaDocument, SchemaType,
};
use serde_json::Value;

use crate::names::{escape_str, wrap_text};

/// Width used when word-wrapping description docs.
pub const DOC_WRAP_WIDTH: usize = 120;

/// Resolved specification of one generated field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Schema property name; also the structural-export key.
    pub name: String,
    /// snake_case field and accessor name.
    pub rust_name: String,
    /// Strict inferred type - the storage type of the field.
    pub ty: InferredType,
    /// Resolved element model name for array-of-reference properties.
    pub element: Option<String>,
    /// Whether the owning definition lists the property as required.
    pub required: bool,
    /// Whether the field is emitted as an `Option`.
    pub nullable: bool,
    /// Whether the field starts out with a value.
    pub initialized: bool,
    /// Declared default literal, when one is materialized.
    pub default: Option<Value>,
    /// Documentation lines (wrapped description plus type annotation).
    pub doc: Vec<String>,
}

impl FieldSpec {
    /// Builds the field specification for one property.
    ///
    /// # Errors
    /// Returns `ResolutionError` if the property references a definition
    /// that does not resolve.
    pub fn build(
        doc: &SchemaDocument,
        def: &Definition,
        name: &str,
        prop: &PropertySchema,
    ) -> Result<Self, ResolutionError> {
        let ty = doc.infer_type(prop, true)?;

        let element = if prop.is_reference() && ty.is_array() {
            match doc.infer_type(prop, false)? {
                InferredType::Named(n) => Some(n),
                _ => None,
            }
        } else {
            None
        };

        let required = def.is_required(name);

        let (nullable, initialized, default) = if ty.is_array() {
            (false, true, None)
        } else if !required {
            // Date-time defaults are not materialized; the field simply
            // stays nullable (see DESIGN.md).
            let default = if ty == InferredType::DateTime {
                None
            } else {
                prop.default.clone()
            };
            (default.is_none(), true, default)
        } else {
            (false, false, None)
        };

        let mut doc_lines = Vec::new();
        if let Some(desc) = &prop.description {
            doc_lines.extend(wrap_text(desc, DOC_WRAP_WIDTH));
        }
        if prop.is_reference() && prop.schema_type.is_some() {
            // Array-of-reference: document the element type, which only the
            // non-strict inference mode can see.
            let lax = doc.infer_type(prop, false)?;
            doc_lines.push(format!("Each element is a `{}` model.", type_display(&lax)));
        } else if prop.schema_type.is_some() {
            doc_lines.push(format!("Value type: `{}`.", type_display(&ty)));
        }

        Ok(Self {
            name: name.to_string(),
            rust_name: crate::names::to_snake_case(name),
            ty,
            element,
            required,
            nullable,
            initialized,
            default,
            doc: doc_lines,
        })
    }

    /// True if the field is an array whose elements are model instances.
    #[must_use]
    pub fn is_pure_array(&self) -> bool {
        self.ty.is_array() && self.element.is_some()
    }

    /// The unwrapped Rust type of the field.
    #[must_use]
    pub fn base_type(&self) -> String {
        match &self.ty {
            InferredType::DateTime => "DateTime<Utc>".to_string(),
            InferredType::Primitive(SchemaType::Array) => {
                if self.element.is_some() {
                    "Vec<Box<dyn Model>>".to_string()
                } else {
                    "Vec<Value>".to_string()
                }
            }
            InferredType::Primitive(t) => t.rust_type().to_string(),
            // Scalar references are boxed so cyclic definitions stay
            // representable.
            InferredType::Named(n) => format!("Box<{n}>"),
            InferredType::Untyped => "Value".to_string(),
        }
    }

    /// The declared Rust type of the field, `Option`-wrapped when nullable.
    #[must_use]
    pub fn storage_type(&self) -> String {
        if self.nullable {
            format!("Option<{}>", self.base_type())
        } else {
            self.base_type()
        }
    }

    /// The parameter type accepted by the setter.
    #[must_use]
    pub fn setter_param_type(&self) -> String {
        match &self.ty {
            InferredType::DateTime => "&str".to_string(),
            InferredType::Primitive(SchemaType::Array) => {
                if self.element.is_some() {
                    "Vec<Box<dyn Model>>".to_string()
                } else {
                    "Vec<Value>".to_string()
                }
            }
            InferredType::Primitive(t) => t.rust_type().to_string(),
            InferredType::Named(n) => n.clone(),
            InferredType::Untyped => "Value".to_string(),
        }
    }

    /// The return type of the getter.
    #[must_use]
    pub fn getter_return_type(&self) -> String {
        let bare = match &self.ty {
            InferredType::DateTime => "DateTime<Utc>".to_string(),
            InferredType::Primitive(SchemaType::Array) => {
                return if self.element.is_some() {
                    "&[Box<dyn Model>]".to_string()
                } else {
                    "&[Value]".to_string()
                };
            }
            InferredType::Primitive(SchemaType::String) => "&str".to_string(),
            InferredType::Primitive(t) => t.rust_type().to_string(),
            InferredType::Named(n) => format!("&{n}"),
            InferredType::Untyped => "&Value".to_string(),
        };
        if self.nullable {
            format!("Option<{bare}>")
        } else {
            bare
        }
    }

    /// The expression a getter returns.
    #[must_use]
    pub fn getter_body(&self) -> String {
        let field = &self.rust_name;
        match &self.ty {
            InferredType::DateTime
            | InferredType::Primitive(
                SchemaType::Boolean | SchemaType::Integer | SchemaType::Number,
            ) => format!("self.{field}"),
            InferredType::Primitive(SchemaType::Array) => format!("&self.{field}"),
            InferredType::Primitive(SchemaType::String) | InferredType::Named(_) => {
                if self.nullable {
                    format!("self.{field}.as_deref()")
                } else {
                    format!("&self.{field}")
                }
            }
            InferredType::Untyped => {
                if self.nullable {
                    format!("self.{field}.as_ref()")
                } else {
                    format!("&self.{field}")
                }
            }
        }
    }

    /// The assignment statement a setter performs, given the parameter name.
    #[must_use]
    pub fn setter_assignment(&self) -> String {
        let field = &self.rust_name;
        let value = match &self.ty {
            InferredType::Named(_) => format!("Box::new({field})"),
            _ => field.clone(),
        };
        if self.nullable {
            format!("self.{field} = Some({value});")
        } else {
            format!("self.{field} = {value};")
        }
    }

    /// The initialization expression used by the generated constructor.
    #[must_use]
    pub fn init_expr(&self) -> String {
        if self.ty.is_array() {
            return "Vec::new()".to_string();
        }
        if self.nullable {
            return "None".to_string();
        }
        if let Some(lit) = self.default.as_ref().and_then(|d| self.render_default(d)) {
            return lit;
        }
        match &self.ty {
            InferredType::DateTime => "DateTime::<Utc>::UNIX_EPOCH".to_string(),
            InferredType::Primitive(SchemaType::Boolean) => "false".to_string(),
            InferredType::Primitive(SchemaType::Integer) => "0".to_string(),
            InferredType::Primitive(SchemaType::Number) => "0.0".to_string(),
            InferredType::Primitive(SchemaType::String) => "String::new()".to_string(),
            InferredType::Primitive(SchemaType::Array) => "Vec::new()".to_string(),
            InferredType::Named(n) => format!("Box::new({n}::new())"),
            InferredType::Untyped => "Value::Null".to_string(),
        }
    }

    fn render_default(&self, default: &Value) -> Option<String> {
        match (&self.ty, default) {
            (InferredType::Primitive(SchemaType::String), Value::String(s)) => {
                Some(format!("\"{}\".to_string()", escape_str(s)))
            }
            (InferredType::Primitive(SchemaType::Integer), Value::Number(n)) if n.is_i64() => {
                Some(n.to_string())
            }
            (InferredType::Primitive(SchemaType::Number), Value::Number(n)) => {
                let raw = n.to_string();
                if raw.contains('.') || raw.contains('e') || raw.contains('E') {
                    Some(raw)
                } else {
                    Some(format!("{raw}.0"))
                }
            }
            (InferredType::Primitive(SchemaType::Boolean), Value::Bool(b)) => Some(b.to_string()),
            (InferredType::Untyped, v) => Some(format!("serde_json::json!({v})")),
            _ => None,
        }
    }
}

fn type_display(ty: &InferredType) -> String {
    match ty {
        InferredType::DateTime => "DateTime<Utc>".to_string(),
        InferredType::Primitive(t) => t.rust_type().to_string(),
        InferredType::Named(n) => n.clone(),
        InferredType::Untyped => "Value".to_string(),
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
                        "required": ["ean", "qty"],
                        "properties": {
                            "ean": { "type": "string", "description": "The EAN number." },
                            "qty": { "type": "integer" },
                            "reference": { "type": "string" },
                            "onHold": { "type": "boolean", "default": false },
                            "placedAt": { "type": "string", "format": "date-time" },
                            "pricing": { "$ref": "#/definitions/Pricing" },
                            "pricings": {
                                "type": "array",
                                "items": { "$ref": "#/definitions/Pricing" }
                            },
                            "tags": { "type": "array", "items": { "type": "string" } }
                        }
                    }
                }
            }"##,
        )
        .expect("Failed to parse")
    }

    fn spec(name: &str) -> FieldSpec {
        let doc = doc();
        let def = doc.get_definition("Order").unwrap();
        FieldSpec::build(&doc, def, name, &def.properties[name]).unwrap()
    }

    #[test]
    fn test_field_spec_per_property() {
        let doc = doc();
        let def = doc.get_definition("Order").unwrap();
        let specs: Vec<_> = def
            .properties
            .iter()
            .map(|(name, prop)| FieldSpec::build(&doc, def, name, prop).unwrap())
            .collect();
        assert_eq!(specs.len(), def.properties.len());
    }

    #[test]
    fn test_required_scalar_is_non_nullable_without_default() {
        let ean = spec("ean");
        assert!(ean.required);
        assert!(!ean.nullable);
        assert!(!ean.initialized);
        assert!(ean.default.is_none());
        assert_eq!(ean.storage_type(), "String");
        assert_eq!(ean.init_expr(), "String::new()");
    }

    #[test]
    fn test_optional_scalar_is_nullable() {
        let reference = spec("reference");
        assert!(reference.nullable);
        assert!(reference.initialized);
        assert_eq!(reference.storage_type(), "Option<String>");
        assert_eq!(reference.init_expr(), "None");
        assert_eq!(reference.getter_return_type(), "Option<&str>");
    }

    #[test]
    fn test_optional_with_default_is_not_nullable() {
        let on_hold = spec("onHold");
        assert!(!on_hold.nullable);
        assert!(on_hold.initialized);
        assert_eq!(on_hold.storage_type(), "bool");
        assert_eq!(on_hold.init_expr(), "false");
    }

    #[test]
    fn test_array_fields_initialize_empty() {
        let pricings = spec("pricings");
        assert!(!pricings.nullable);
        assert!(pricings.initialized);
        assert!(pricings.is_pure_array());
        assert_eq!(pricings.element.as_deref(), Some("Pricing"));
        assert_eq!(pricings.storage_type(), "Vec<Box<dyn Model>>");
        assert_eq!(pricings.init_expr(), "Vec::new()");

        let tags = spec("tags");
        assert!(!tags.is_pure_array());
        assert_eq!(tags.storage_type(), "Vec<Value>");
    }

    #[test]
    fn test_scalar_reference_is_boxed() {
        let pricing = spec("pricing");
        assert_eq!(pricing.storage_type(), "Option<Box<Pricing>>");
        assert_eq!(pricing.getter_return_type(), "Option<&Pricing>");
        assert_eq!(pricing.setter_param_type(), "Pricing");
        assert_eq!(pricing.setter_assignment(), "self.pricing = Some(Box::new(pricing));");
    }

    #[test]
    fn test_date_time_field() {
        let placed = spec("placedAt");
        assert_eq!(placed.rust_name, "placed_at");
        assert_eq!(placed.storage_type(), "Option<DateTime<Utc>>");
        assert_eq!(placed.setter_param_type(), "&str");
    }

    #[test]
    fn test_docs_wrap_description_and_annotate_type() {
        let ean = spec("ean");
        assert_eq!(
            ean.doc,
            vec!["The EAN number.".to_string(), "Value type: `String`.".to_string()]
        );

        let pricings = spec("pricings");
        assert_eq!(
            pricings.doc,
            vec!["Each element is a `Pricing` model.".to_string()]
        );
    }
}
