//! Locale Data Report CLI
//!
//! Reads a generated `data.json` and prints currency symbols or the
//! exemplar summary of a single locale.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use locale_exemplars::report::{currency_symbols, render_currency_table, LocaleReport};
use locale_exemplars::LocaleDataDocument;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "exemplars-report")]
#[command(about = "Report on generated locale exemplar data")]
struct Cli {
    /// Path to data.json
    #[arg(short, long, default_value = "docs/v1/data.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every locale's currency symbol with its code points
    Currency {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the exemplar sets of one locale
    Locale {
        /// Locale ID, e.g. fr_CA or fr-CA
        locale_id: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let document = LocaleDataDocument::read_json(&cli.data)
        .with_context(|| format!("reading {}", cli.data.display()))?;

    match cli.command {
        Commands::Currency { json } => {
            let entries = currency_symbols(&document);
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print!("{}", render_currency_table(&entries));
            }
        }
        Commands::Locale { locale_id } => match LocaleReport::from_document(&document, &locale_id) {
            Some(report) => print!("{}", report),
            None => bail!("No data available for locale ID: {}", locale_id),
        },
    }
    Ok(())
}
