//! Command-line interface for the modelforge generator.
//!
//! ```bash
//! modelforge-gen generate --schema schema.json --output src/models
//! modelforge-gen validate --schema schema.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

/// Command-line interface for modelforge.
#[derive(Parser)]
#[command(name = "modelforge-gen")]
#[command(about = "Generate Rust model types from a JSON schema document", long_about = None)]
struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Generate one model type per schema definition
    Generate {
        /// Path to the JSON schema document
        #[arg(short, long)]
        schema: PathBuf,

        /// Output directory for the generated models
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Validate a schema document without generating code
    Validate {
        /// Path to the JSON schema document
        #[arg(short, long)]
        schema: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate { schema, output } => {
            let report = modelforge_codegen::generate(&schema, &output)
                .with_context(|| format!("failed to generate models from {}", schema.display()))?;
            println!(
                "generated {} model(s) in {}",
                report.definitions.len(),
                output.display()
            );
            Ok(())
        }
        Commands::Validate { schema } => {
            let doc = modelforge_schema::SchemaDocument::load(&schema)
                .with_context(|| format!("failed to load {}", schema.display()))?;
            modelforge_schema::validate_document(&doc)?;
            println!(
                "{} is valid ({} definitions)",
                schema.display(),
                doc.definitions.len()
            );
            Ok(())
        }
    }
}
