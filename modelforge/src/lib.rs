//! # Modelforge
//!
//! Schema-driven Rust model generator.
//!
//! Modelforge reads a JSON-Schema-like document (a `definitions` map of
//! typed properties, references, enums and numeric/array constraints) and
//! emits, for every definition, a Rust model type with typed fields,
//! accessor methods, validation logic and enum constants.
//!
//! ## Features
//!
//! - **Typed schema model** - optional schema fields are explicit `Option`s
//! - **Reference resolution** - `$ref` pointers, including cyclic and
//!   array-of-reference forms
//! - **Constraint compilation** - bounds, enum and array constraints become
//!   structured validation rules rendered into generated setters
//! - **Composed runtime** - generated types are final and share one
//!   capability crate instead of an inheritance hierarchy
//! - **Deterministic emission** - identical schema input produces
//!   byte-identical output
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::path::Path;
//!
//! let report = modelforge::generate(
//!     Path::new("schema.json"),
//!     Path::new("src/models"),
//! )?;
//! println!("generated {} models", report.definitions.len());
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - runtime capability set consumed by generated code
//! - [`schema`] - document model, reference resolution, type inference
//! - [`codegen`] - rule compilation and Rust code emission

pub mod prelude;

/// Runtime capability set for generated models.
pub mod core {
    pub use modelforge_core::*;
}

/// Schema document model and analysis.
pub mod schema {
    pub use modelforge_schema::*;
}

/// Code generation from schema documents.
pub mod codegen {
    pub use modelforge_codegen::*;
}

// Re-export commonly used items at the crate root
pub use modelforge_codegen::{CodegenError, GenerateReport, Generator, generate};
pub use modelforge_core::{Model, ModelError};
pub use modelforge_schema::{SchemaDocument, validate_document};
