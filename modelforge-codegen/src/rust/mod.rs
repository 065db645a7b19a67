//! Rust code generation modules.

pub mod accessors;
pub mod class;
pub mod export;

pub use accessors::AccessorGenerator;
pub use class::ClassGenerator;
pub use export::ExportGenerator;
