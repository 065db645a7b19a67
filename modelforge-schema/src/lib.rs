//! # Modelforge Schema
//!
//! Schema document model and analysis for the modelforge generator.
//!
//! This crate provides:
//! - A typed document model for the supported JSON-Schema subset
//! - JSON loading from files and strings
//! - Reference (`$ref`) resolution over the definition tree
//! - Primitive type mapping and two-mode type inference
//! - Whole-document validation

pub mod document;
pub mod error;
pub mod infer;
pub mod types;
pub mod validation;

pub use document::{Definition, ItemsSchema, PropertySchema, SchemaDocument};
pub use error::{ParseError, ResolutionError, SchemaError};
pub use infer::InferredType;
pub use types::{SchemaType, map_type};
pub use validation::validate_document;
