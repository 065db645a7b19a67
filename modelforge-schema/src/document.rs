//! Typed model of the supported JSON-Schema subset.
//!
//! The document is loaded once per generation run and treated as read-only
//! afterwards. Optional schema fields are modeled as explicit `Option`s so
//! presence tests are ordinary `Option` checks rather than key sniffing on an
//! untyped map.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ParseError, ResolutionError};

/// The full decoded specification: a `definitions` map of named,
/// emittable definitions.
///
/// Definitions are kept in a `BTreeMap` so iteration order, and therefore
/// emission order, is deterministic across runs.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaDocument {
    /// Definition name to definition body.
    pub definitions: BTreeMap<String, Definition>,
}

/// One emittable type in the document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Definition {
    /// Property name to property schema.
    pub properties: BTreeMap<String, PropertySchema>,
    /// Names of required properties.
    pub required: Vec<String>,
    /// Free-text description.
    pub description: Option<String>,
}

impl Definition {
    /// Returns true if the named property is required.
    #[must_use]
    pub fn is_required(&self, property: &str) -> bool {
        self.required.iter().any(|r| r == property)
    }
}

/// Schema of a single property.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PropertySchema {
    /// Declared primitive type, if any.
    #[serde(rename = "type")]
    pub schema_type: Option<String>,
    /// Declared format; only `date-time` is meaningful.
    pub format: Option<String>,
    /// Direct reference to another definition.
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    /// Element schema for array properties.
    pub items: Option<ItemsSchema>,
    /// Literal enum values, in schema order.
    #[serde(rename = "enum")]
    pub enum_values: Vec<Value>,
    /// Numeric lower bound.
    pub minimum: Option<f64>,
    /// Numeric upper bound.
    pub maximum: Option<f64>,
    /// Array length lower bound.
    #[serde(rename = "minItems")]
    pub min_items: Option<u64>,
    /// Array length upper bound.
    #[serde(rename = "maxItems")]
    pub max_items: Option<u64>,
    /// Declared default literal.
    pub default: Option<Value>,
    /// Free-text description.
    pub description: Option<String>,
}

impl PropertySchema {
    /// Returns true if the schema carries a direct `$ref` or an `items.$ref`
    /// (array-of-reference).
    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.reference.is_some() || self.items.as_ref().is_some_and(|i| i.reference.is_some())
    }

    /// Returns the reference pointer, preferring the direct form over the
    /// items form.
    #[must_use]
    pub fn get_reference(&self) -> Option<&str> {
        self.reference
            .as_deref()
            .or_else(|| self.items.as_ref().and_then(|i| i.reference.as_deref()))
    }

    /// Returns true if the property declares `date-time` format.
    #[must_use]
    pub fn is_date_time(&self) -> bool {
        self.format.as_deref() == Some("date-time")
    }

    /// Returns true if the property declares an enum list.
    #[must_use]
    pub fn has_enum(&self) -> bool {
        !self.enum_values.is_empty()
    }
}

/// Element schema of an array property.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemsSchema {
    /// Reference to the element definition.
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    /// Declared primitive element type, if any.
    #[serde(rename = "type")]
    pub schema_type: Option<String>,
}

impl SchemaDocument {
    /// Loads a schema document from a JSON string.
    ///
    /// # Errors
    /// Returns `ParseError` if the JSON is malformed or missing the
    /// `definitions` map.
    pub fn from_str(json: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a schema document from a file path.
    ///
    /// # Errors
    /// Returns `ParseError` if reading or decoding fails.
    pub fn load(path: &Path) -> Result<Self, ParseError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_str(&json)
    }

    /// Looks up a definition by name.
    #[must_use]
    pub fn get_definition(&self, name: &str) -> Option<&Definition> {
        self.definitions.get(name)
    }

    /// Resolves a reference pointer against the document.
    ///
    /// The pointer is split on `/`; a leading `#` segment is discarded, then
    /// each remaining segment is followed as a key from the document root.
    /// The final segment names the referenced definition and becomes its
    /// emitted type name.
    ///
    /// # Errors
    /// Returns `ResolutionError` naming the first absent segment.
    pub fn resolve<'a>(&'a self, pointer: &str) -> Result<(&'a str, &'a Definition), ResolutionError> {
        let mut segments = pointer.split('/').peekable();
        if segments.peek() == Some(&"#") {
            segments.next();
        }

        match segments.next() {
            Some("definitions") => {}
            Some(other) => return Err(ResolutionError::new(pointer, other)),
            None => return Err(ResolutionError::new(pointer, pointer)),
        }

        let name = segments
            .next()
            .ok_or_else(|| ResolutionError::new(pointer, "definitions"))?;
        if let Some(extra) = segments.next() {
            return Err(ResolutionError::new(pointer, extra));
        }

        self.definitions
            .get_key_value(name)
            .map(|(key, def)| (key.as_str(), def))
            .ok_or_else(|| ResolutionError::new(pointer, name))
    }

    /// Resolves the reference carried by a property schema.
    ///
    /// # Errors
    /// Returns `ResolutionError` if the property carries no reference or the
    /// pointer does not resolve.
    pub fn resolve_property<'a>(
        &'a self,
        prop: &PropertySchema,
    ) -> Result<(&'a str, &'a Definition), ResolutionError> {
        let pointer = prop
            .get_reference()
            .ok_or_else(|| ResolutionError::new("", ""))?;
        self.resolve(pointer)
    }
}
