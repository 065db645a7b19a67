//! The injected base-capability set targeted by generated code.

/// Paths to the runtime capability set that generated models compose.
///
/// The emitter renders every validation primitive as a fully-qualified call
/// through these paths, so generated code can be retargeted at a different
/// runtime module without touching the emitter itself.
#[derive(Debug, Clone)]
pub struct Capabilities {
    /// Crate root providing the `Model` trait, `ModelError` and export
    /// helpers.
    pub runtime_crate: String,
    /// Module providing the validation primitives.
    pub checks_module: String,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            runtime_crate: "modelforge_core".to_string(),
            checks_module: "modelforge_core::checks".to_string(),
        }
    }
}

impl Capabilities {
    /// Path of the integer bounds check.
    #[must_use]
    pub fn integer_bounds(&self) -> String {
        format!("{}::check_integer_bounds", self.checks_module)
    }

    /// Path of the float bounds check.
    #[must_use]
    pub fn float_bounds(&self) -> String {
        format!("{}::check_float_bounds", self.checks_module)
    }

    /// Path of the array length bounds check.
    #[must_use]
    pub fn array_bounds(&self) -> String {
        format!("{}::check_array_bounds", self.checks_module)
    }

    /// Path of the enum membership check.
    #[must_use]
    pub fn enum_bounds(&self) -> String {
        format!("{}::check_enum_bounds", self.checks_module)
    }

    /// Path of the pure-array element type check.
    #[must_use]
    pub fn pure_array(&self) -> String {
        format!("{}::check_pure_array", self.checks_module)
    }

    /// Path of the date parsing primitive.
    #[must_use]
    pub fn parse_date(&self) -> String {
        format!("{}::parse_date", self.checks_module)
    }
}
