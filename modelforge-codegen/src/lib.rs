//! # Modelforge Codegen
//!
//! Rust model code generation from JSON schema definitions.
//!
//! This crate provides:
//! - Field specification building per schema property
//! - Constraint-to-validation-rule compilation (structured rule values,
//!   rendered into target syntax by the emitter)
//! - Enum constant extraction
//! - A deterministic per-definition class emitter
//! - The `generate(schema_path, out_dir)` entry point

pub mod capabilities;
pub mod constants;
pub mod error;
pub mod field;
pub mod generator;
pub mod names;
pub mod rules;
pub mod rust;

pub use capabilities::Capabilities;
pub use constants::{EnumConstant, extract_constants};
pub use error::CodegenError;
pub use field::FieldSpec;
pub use generator::{GenerateReport, Generator, generate};
pub use rules::{ValidationRule, compile_rules};
