//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use modelforge::prelude::*;
//! ```

// Runtime types
pub use modelforge_core::checks;
pub use modelforge_core::{Model, ModelError, export_models};

// Schema types
pub use modelforge_schema::{
    Definition, InferredType, ParseError, PropertySchema, ResolutionError, SchemaDocument,
    SchemaError, SchemaType, map_type, validate_document,
};

// Codegen types
pub use modelforge_codegen::{
    Capabilities, CodegenError, EnumConstant, FieldSpec, GenerateReport, Generator,
    ValidationRule, compile_rules, extract_constants, generate,
};
