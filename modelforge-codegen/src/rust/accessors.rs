//! Getter and setter code generation.

use modelforge_schema::{InferredType, SchemaType};
use serde_json::Value;

use crate::capabilities::Capabilities;
use crate::field::FieldSpec;
use crate::names::escape_str;
use crate::rules::ValidationRule;

/// Generator for the accessor methods of one generated type.
pub struct AccessorGenerator<'a> {
    caps: &'a Capabilities,
}

impl<'a> AccessorGenerator<'a> {
    /// Creates a new accessor generator.
    #[must_use]
    pub fn new(caps: &'a Capabilities) -> Self {
        Self { caps }
    }

    /// Generates the getter method for a field.
    #[must_use]
    pub fn generate_getter(&self, spec: &FieldSpec) -> String {
        let mut output = String::new();
        output.push_str(&format!("    /// Returns `{}`.\n", spec.name));
        output.push_str("    #[must_use]\n");
        output.push_str(&format!(
            "    pub fn {}(&self) -> {} {{\n",
            spec.rust_name,
            spec.getter_return_type()
        ));
        output.push_str(&format!("        {}\n", spec.getter_body()));
        output.push_str("    }\n\n");
        output
    }

    /// Generates the setter method for a field.
    ///
    /// A field with validation rules gets an imperative body running the
    /// checks in order before assignment; a field without rules gets a pure
    /// pass-through assignment.
    #[must_use]
    pub fn generate_setter(&self, spec: &FieldSpec, rules: &[ValidationRule]) -> String {
        let mut output = String::new();
        let name = &spec.rust_name;
        let param = spec.setter_param_type();

        if rules.is_empty() {
            output.push_str(&format!("    /// Sets `{}`.\n", spec.name));
            output.push_str(&format!(
                "    pub fn set_{name}(&mut self, {name}: {param}) -> &mut Self {{\n"
            ));
            output.push_str(&format!("        {}\n", spec.setter_assignment()));
            output.push_str("        self\n");
            output.push_str("    }\n\n");
            return output;
        }

        output.push_str(&format!(
            "    /// Sets `{}`, validating the declared constraints.\n",
            spec.name
        ));
        output.push_str("    ///\n");
        output.push_str("    /// # Errors\n");
        output.push_str("    /// Returns `ModelError` if a constraint is violated.\n");
        output.push_str(&format!(
            "    pub fn set_{name}(&mut self, {name}: {param}) -> Result<&mut Self, ModelError> {{\n"
        ));

        let parsed_date = rules.contains(&ValidationRule::DateParse);
        for rule in rules {
            output.push_str(&self.render_rule(rule, spec, parsed_date));
        }

        output.push_str(&format!("        {}\n", spec.setter_assignment()));
        output.push_str("        Ok(self)\n");
        output.push_str("    }\n\n");
        output
    }

    /// Renders one validation rule as a statement of the setter body.
    fn render_rule(&self, rule: &ValidationRule, spec: &FieldSpec, parsed_date: bool) -> String {
        let name = &spec.rust_name;
        match rule {
            ValidationRule::PureArray { model } => format!(
                "        {}(&{name}, \"{}\")?;\n",
                self.caps.pure_array(),
                escape_str(model)
            ),
            ValidationRule::ArrayBounds { min, max } => format!(
                "        {}({name}.len(), {}, {})?;\n",
                self.caps.array_bounds(),
                render_opt_int(min.map(|v| v.to_string())),
                render_opt_int(max.map(|v| v.to_string()))
            ),
            ValidationRule::IntegerBounds { min, max } => format!(
                "        {}({name}, {}, {})?;\n",
                self.caps.integer_bounds(),
                render_opt_int(min.map(|v| v.to_string())),
                render_opt_int(max.map(|v| v.to_string()))
            ),
            ValidationRule::FloatBounds { min, max } => format!(
                "        {}({name}, {}, {})?;\n",
                self.caps.float_bounds(),
                render_opt_int(min.map(float_literal)),
                render_opt_int(max.map(float_literal))
            ),
            ValidationRule::DateParse => format!(
                "        let {name} = {}({name})?;\n",
                self.caps.parse_date()
            ),
            ValidationRule::Enum { values } => {
                let literals: Vec<String> = values
                    .iter()
                    .map(|v| match v {
                        Value::String(s) => format!("\"{}\"", escape_str(s)),
                        other => format!("\"{}\"", escape_str(&other.to_string())),
                    })
                    .collect();
                format!(
                    "        {}({}, &[{}])?;\n",
                    self.caps.enum_bounds(),
                    enum_value_expr(spec, parsed_date),
                    literals.join(", ")
                )
            }
        }
    }
}

/// The expression handed to the enum membership check.
///
/// When a date-parse rule precedes the enum check, the parsed form is
/// validated; non-string values are compared through their text rendering.
fn enum_value_expr(spec: &FieldSpec, parsed_date: bool) -> String {
    let name = &spec.rust_name;
    if parsed_date {
        return format!("&{name}.to_rfc3339()");
    }
    match &spec.ty {
        InferredType::Primitive(SchemaType::String) => format!("&{name}"),
        _ => format!("&{name}.to_string()"),
    }
}

fn render_opt_int(value: Option<String>) -> String {
    value.map_or_else(|| "None".to_string(), |v| format!("Some({v})"))
}

fn float_literal(f: f64) -> String {
    let raw = f.to_string();
    if raw.contains('.') || raw.contains('e') || raw.contains('E') {
        raw
    } else {
        format!("{raw}.0")
    }
}
