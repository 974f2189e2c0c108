//! Locale Data Generator CLI
//!
//! Builds the locale data document from ICU4X data and the CLDR supplement,
//! validates it against the schema, and writes pretty, minified and gzip
//! artifacts. Runs with no arguments; every setting has a default.

use std::path::PathBuf;

use clap::Parser;
use locale_exemplars::{create_json_dump, ExemplarsConfig, IcuProvider, MultiFormatWriter, SchemaValidator};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "exemplars-generate")]
#[command(about = "Generate validated locale exemplar data")]
struct Cli {
    /// Config file (defaults to exemplars.toml if present)
    #[arg(short, long)]
    config: Option<String>,

    /// Override the output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the schema file
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Write the effective configuration to this file and exit
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ExemplarsConfig::load_from(cli.config.as_deref())?;
    if let Some(output) = cli.output {
        config.output.dir = output;
    }
    if let Some(schema) = cli.schema {
        config.schema.path = schema;
    }

    if let Some(path) = cli.write_config {
        config.save(&path)?;
        println!("✅ Created config file: {}", path.display());
        return Ok(());
    }

    let provider = IcuProvider::load(&config.provider.supplement)?;
    let validator = SchemaValidator::load(&config.schema.path)?;
    let writer = MultiFormatWriter::new(&config.output.dir, &config.output.api_version);

    let artifacts = create_json_dump(&provider, &provider, &validator, &writer)?;

    info!(dir = %artifacts.dir.display(), "Done");
    println!("✅ Locale data written to {}", artifacts.dir.display());
    Ok(())
}
