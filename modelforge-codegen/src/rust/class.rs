//! Per-definition type emission.
//!
//! Assembles fields, accessors, enum constants and the structural-export
//! method into one complete, self-contained generated source file.

use modelforge_schema::{Definition, InferredType, SchemaDocument};

use crate::capabilities::Capabilities;
use crate::constants::extract_constants;
use crate::error::CodegenError;
use crate::field::{DOC_WRAP_WIDTH, FieldSpec};
use crate::names::{to_pascal_case, wrap_text};
use crate::rules::{ValidationRule, compile_rules};
use crate::rust::accessors::AccessorGenerator;
use crate::rust::export::ExportGenerator;

/// Generator for one complete type definition per schema definition.
pub struct ClassGenerator<'a> {
    doc: &'a SchemaDocument,
    caps: &'a Capabilities,
}

struct EmittedField {
    spec: FieldSpec,
    rules: Vec<ValidationRule>,
}

impl<'a> ClassGenerator<'a> {
    /// Creates a new class generator.
    #[must_use]
    pub fn new(doc: &'a SchemaDocument, caps: &'a Capabilities) -> Self {
        Self { doc, caps }
    }

    /// Generates the complete source artifact for one definition.
    ///
    /// Emission is deterministic: identical schema input produces
    /// byte-identical output across runs.
    ///
    /// # Errors
    /// Returns `CodegenError` naming the definition and property if a
    /// reference fails to resolve.
    pub fn generate(&self, name: &str, def: &Definition) -> Result<String, CodegenError> {
        let type_name = to_pascal_case(name);
        let fields = self.build_fields(name, def)?;

        let mut output = String::new();
        output.push_str("// Generated by modelforge. Do not edit.\n\n");
        output.push_str(&self.render_imports(&fields));
        output.push_str(&self.render_doc_block(&type_name, def, &fields));
        output.push_str(&self.render_struct(&type_name, &fields));
        output.push_str(&self.render_impl(&type_name, def, &fields));
        output.push_str(&format!("impl Default for {type_name} {{\n"));
        output.push_str("    fn default() -> Self {\n");
        output.push_str("        Self::new()\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        let specs: Vec<FieldSpec> = fields.iter().map(|f| f.spec.clone()).collect();
        output.push_str(&ExportGenerator::generate(&type_name, &specs));

        Ok(output)
    }

    fn build_fields(&self, name: &str, def: &Definition) -> Result<Vec<EmittedField>, CodegenError> {
        def.properties
            .iter()
            .map(|(prop_name, prop)| {
                let spec = FieldSpec::build(self.doc, def, prop_name, prop)
                    .map_err(|e| CodegenError::resolution(name, prop_name, e))?;
                let rules = compile_rules(self.doc, prop)
                    .map_err(|e| CodegenError::resolution(name, prop_name, e))?;
                Ok(EmittedField { spec, rules })
            })
            .collect()
    }

    fn render_imports(&self, fields: &[EmittedField]) -> String {
        let uses_chrono = fields
            .iter()
            .any(|f| f.spec.ty == InferredType::DateTime);
        let fallible = fields.iter().any(|f| !f.rules.is_empty());
        let pure = fields.iter().any(|f| f.spec.is_pure_array());
        let named = fields
            .iter()
            .any(|f| matches!(f.spec.ty, InferredType::Named(_)));

        let mut output = String::new();
        if uses_chrono {
            output.push_str("use chrono::{DateTime, Utc};\n");
        }
        output.push_str("use serde_json::{Map, Value};\n");
        output.push('\n');

        let mut items = vec!["Model"];
        if fallible {
            items.push("ModelError");
        }
        if pure {
            items.push("export_models");
        }
        let root = &self.caps.runtime_crate;
        if items.len() == 1 {
            output.push_str(&format!("use {root}::Model;\n"));
        } else {
            output.push_str(&format!("use {root}::{{{}}};\n", items.join(", ")));
        }
        if named {
            output.push_str("use super::*;\n");
        }
        output.push('\n');
        output
    }

    fn render_doc_block(
        &self,
        type_name: &str,
        def: &Definition,
        fields: &[EmittedField],
    ) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "/// Generated model for the `{type_name}` definition.\n"
        ));

        if let Some(desc) = &def.description {
            output.push_str("///\n");
            for line in wrap_text(desc, DOC_WRAP_WIDTH) {
                output.push_str(&format!("/// {line}\n"));
            }
        }

        if !fields.is_empty() {
            output.push_str("///\n");
            output.push_str("/// Accessor surface:\n");
            for field in fields {
                let getter = format!(
                    "{}() -> {}",
                    field.spec.rust_name,
                    field.spec.getter_return_type()
                );
                let setter_ret = if field.rules.is_empty() {
                    "&mut Self".to_string()
                } else {
                    "Result<&mut Self, ModelError>".to_string()
                };
                let setter = format!(
                    "set_{}({}) -> {}",
                    field.spec.rust_name,
                    field.spec.setter_param_type(),
                    setter_ret
                );
                output.push_str(&format!("/// - `{getter}` / `{setter}`\n"));
            }
        }

        output
    }

    fn render_struct(&self, type_name: &str, fields: &[EmittedField]) -> String {
        let mut output = String::new();
        output.push_str("#[derive(Debug)]\n");
        output.push_str(&format!("pub struct {type_name} {{\n"));
        for field in fields {
            for line in &field.spec.doc {
                output.push_str(&format!("    /// {line}\n"));
            }
            if !field.spec.initialized {
                output.push_str(
                    "    /// Required; must be set before the instance is considered complete.\n",
                );
            }
            output.push_str(&format!(
                "    {}: {},\n",
                field.spec.rust_name,
                field.spec.storage_type()
            ));
        }
        output.push_str("}\n\n");
        output
    }

    fn render_impl(&self, type_name: &str, def: &Definition, fields: &[EmittedField]) -> String {
        let accessors = AccessorGenerator::new(self.caps);
        let mut output = String::new();
        output.push_str(&format!("impl {type_name} {{\n"));

        // Enum constants, scoped to the owning type.
        for (prop_name, prop) in &def.properties {
            if !prop.has_enum() {
                continue;
            }
            for constant in extract_constants(prop_name, &prop.enum_values) {
                output.push_str(&format!("    /// Allowed `{prop_name}` value.\n"));
                output.push_str(&format!(
                    "    pub const {}: {} = {};\n",
                    constant.name,
                    constant.rust_type(),
                    constant.rust_value()
                ));
            }
            output.push('\n');
        }

        output.push_str("    /// Creates an instance with every field at its declared or nil default.\n");
        output.push_str("    #[must_use]\n");
        output.push_str("    pub fn new() -> Self {\n");
        if fields.is_empty() {
            output.push_str("        Self {}\n");
        } else {
            output.push_str("        Self {\n");
            for field in fields {
                output.push_str(&format!(
                    "            {}: {},\n",
                    field.spec.rust_name,
                    field.spec.init_expr()
                ));
            }
            output.push_str("        }\n");
        }
        output.push_str("    }\n\n");

        for field in fields {
            output.push_str(&accessors.generate_getter(&field.spec));
            output.push_str(&accessors.generate_setter(&field.spec, &field.rules));
        }

        output.push_str("}\n\n");
        output
    }
}
