//! # Modelforge Core
//!
//! Runtime capability set shared by all modelforge-generated models.
//!
//! This crate provides:
//! - Validation primitives invoked by generated setters (numeric bounds,
//!   array bounds, enum membership, pure-array element checks)
//! - Date parsing and normalization for `date-time` formatted fields
//! - The [`Model`] trait for structural export of generated instances
//! - Error types reported by generated accessors
//!
//! Generated models compose these capabilities; they never inherit from one
//! another or from any shared base type.

pub mod checks;
pub mod error;
pub mod model;

pub use error::{ModelError, Result};
pub use model::{Model, export_models};
