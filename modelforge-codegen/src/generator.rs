//! Generation run orchestration.
//!
//! Drives the per-definition class emitter over a whole document and writes
//! the generated artifacts. All definitions are emitted in memory first;
//! nothing is written if any definition fails, so a failed run never leaves
//! partial or corrupt output behind.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use modelforge_schema::SchemaDocument;

use crate::capabilities::Capabilities;
use crate::error::CodegenError;
use crate::names::{to_pascal_case, to_snake_case};
use crate::rust::ClassGenerator;

/// Generator for a whole schema document.
pub struct Generator<'a> {
    doc: &'a SchemaDocument,
    caps: Capabilities,
}

/// Outcome of a successful generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Names of the generated definitions, in emission order.
    pub definitions: Vec<String>,
    /// Paths of the written artifacts, including the module index.
    pub files: Vec<PathBuf>,
}

impl<'a> Generator<'a> {
    /// Creates a generator targeting the default capability set.
    #[must_use]
    pub fn new(doc: &'a SchemaDocument) -> Self {
        Self {
            doc,
            caps: Capabilities::default(),
        }
    }

    /// Creates a generator targeting a custom capability set.
    #[must_use]
    pub fn with_capabilities(doc: &'a SchemaDocument, caps: Capabilities) -> Self {
        Self { doc, caps }
    }

    /// Generates the source artifact for every definition, keyed by
    /// definition name.
    ///
    /// # Errors
    /// Returns `CodegenError` naming the failing definition and property.
    /// No definition is silently skipped.
    pub fn generate_all(&self) -> Result<BTreeMap<String, String>, CodegenError> {
        let class_gen = ClassGenerator::new(self.doc, &self.caps);
        let mut artifacts = BTreeMap::new();

        for (name, def) in &self.doc.definitions {
            tracing::debug!(definition = %name, "generating model");
            let source = class_gen.generate(name, def)?;
            artifacts.insert(name.clone(), source);
        }

        Ok(artifacts)
    }

    /// Generates the module index re-exporting every generated model.
    #[must_use]
    pub fn generate_module_index(&self) -> String {
        let mut output = String::new();
        output.push_str("// Generated by modelforge. Do not edit.\n\n");

        for name in self.doc.definitions.keys() {
            output.push_str(&format!("pub mod {};\n", to_snake_case(name)));
        }
        output.push('\n');
        for name in self.doc.definitions.keys() {
            output.push_str(&format!(
                "pub use {}::{};\n",
                to_snake_case(name),
                to_pascal_case(name)
            ));
        }

        output
    }

    /// Generates every definition and writes one artifact per definition
    /// plus the module index into `out_dir`.
    ///
    /// # Errors
    /// Returns `CodegenError` if generation or writing fails. Artifacts are
    /// only written once every definition has emitted successfully.
    pub fn write_to(&self, out_dir: &Path) -> Result<GenerateReport, CodegenError> {
        let artifacts = self.generate_all()?;

        std::fs::create_dir_all(out_dir)?;

        let mut report = GenerateReport {
            definitions: artifacts.keys().cloned().collect(),
            files: Vec::new(),
        };

        for (name, source) in &artifacts {
            let path = out_dir.join(format!("{}.rs", to_snake_case(name)));
            std::fs::write(&path, source)?;
            report.files.push(path);
        }

        let index_path = out_dir.join("mod.rs");
        std::fs::write(&index_path, self.generate_module_index())?;
        report.files.push(index_path);

        tracing::info!(
            definitions = report.definitions.len(),
            out_dir = %out_dir.display(),
            "generated model artifacts"
        );
        Ok(report)
    }
}

/// Generates model artifacts from a schema file into a destination
/// directory.
///
/// This is the single entry point of the generator: it loads the document,
/// emits one artifact per definition plus a module index, and reports the
/// failing definition and property on error.
///
/// # Errors
/// Returns `CodegenError` if loading, generation or writing fails.
pub fn generate(schema_path: &Path, out_dir: &Path) -> Result<GenerateReport, CodegenError> {
    tracing::info!(schema = %schema_path.display(), "loading schema document");
    let doc = SchemaDocument::load(schema_path)?;
    Generator::new(&doc).write_to(out_dir)
}
