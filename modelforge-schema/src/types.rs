//! Primitive type mapping across the schema/Rust boundary.

/// Schema primitive types understood by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    /// `boolean`.
    Boolean,
    /// `string`.
    String,
    /// `number` (floating point).
    Number,
    /// `integer`.
    Integer,
    /// `array`.
    Array,
}

impl SchemaType {
    /// Parses a schema primitive type from its declared name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "boolean" => Some(Self::Boolean),
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "integer" => Some(Self::Integer),
            "array" => Some(Self::Array),
            _ => None,
        }
    }

    /// Returns the schema-side name of this type.
    #[must_use]
    pub const fn schema_name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Array => "array",
        }
    }

    /// Returns the Rust type name this primitive maps to.
    ///
    /// `array` maps to `Vec`; the element type is decided per-property by the
    /// emitter, since it depends on the `items` schema.
    #[must_use]
    pub const fn rust_type(&self) -> &'static str {
        match self {
            Self::Boolean => "bool",
            Self::String => "String",
            Self::Number => "f64",
            Self::Integer => "i64",
            Self::Array => "Vec",
        }
    }
}

/// Maps a schema type name to its Rust counterpart.
///
/// Unknown names are returned unchanged: resolved reference names are routed
/// through this function as well, so pass-through is valid input, not an
/// error.
#[must_use]
pub fn map_type(name: &str) -> String {
    SchemaType::parse(name).map_or_else(|| name.to_string(), |t| t.rust_type().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!(SchemaType::parse("boolean"), Some(SchemaType::Boolean));
        assert_eq!(SchemaType::parse("string"), Some(SchemaType::String));
        assert_eq!(SchemaType::parse("number"), Some(SchemaType::Number));
        assert_eq!(SchemaType::parse("integer"), Some(SchemaType::Integer));
        assert_eq!(SchemaType::parse("array"), Some(SchemaType::Array));
        assert_eq!(SchemaType::parse("object"), None);
    }

    #[test]
    fn test_rust_type_mapping() {
        assert_eq!(SchemaType::Boolean.rust_type(), "bool");
        assert_eq!(SchemaType::String.rust_type(), "String");
        assert_eq!(SchemaType::Number.rust_type(), "f64");
        assert_eq!(SchemaType::Integer.rust_type(), "i64");
    }

    #[test]
    fn test_map_type_pass_through() {
        assert_eq!(map_type("integer"), "i64");
        assert_eq!(map_type("Pricing"), "Pricing");
        assert_eq!(map_type(""), "");
    }

    #[test]
    fn test_schema_name_round_trip() {
        for t in [
            SchemaType::Boolean,
            SchemaType::String,
            SchemaType::Number,
            SchemaType::Integer,
            SchemaType::Array,
        ] {
            assert_eq!(SchemaType::parse(t.schema_name()), Some(t));
        }
    }
}
