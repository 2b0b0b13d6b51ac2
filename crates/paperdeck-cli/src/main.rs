//! PaperDeck CLI — entry point.
//!
//! # Commands
//!
//! - `paperdeck slides <INPUT>` — generate an HTML slide deck from paper text
//! - `paperdeck notes <INPUT>` — generate Markdown (or HTML) reading notes
//! - `paperdeck status` — show configuration and provider status
//! - `paperdeck onboard` — create the default settings file
//! - `paperdeck config get|set` — read or write a single setting

mod config_cmd;
mod generate;
mod helpers;
mod onboard;
mod source;
mod status;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use paperdeck_core::config::{JsonFileStore, SettingsStore};
use paperdeck_core::types::DocumentMetadata;

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// 📑 PaperDeck — turn academic papers into slides and reading notes
#[derive(Parser)]
#[command(name = "paperdeck", version, about, long_about = None)]
struct Cli {
    /// Settings file to use instead of ~/.paperdeck/config.json
    #[arg(long, global = true)]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an HTML slide deck from a paper's extracted text
    Slides {
        /// Plain-text file holding the paper text
        input: PathBuf,

        /// Output file (defaults to a name derived from the title, next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Paper title used for the page title and file name
        #[arg(short, long)]
        title: Option<String>,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Generate structured reading notes from a paper's extracted text
    Notes {
        /// Plain-text file holding the paper text
        input: PathBuf,

        /// Output file (defaults to a name derived from the title, next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        metadata: MetadataArgs,

        /// Markdown note template (overrides the `noteTemplate` setting)
        #[arg(long)]
        template: Option<PathBuf>,

        /// Write a standalone HTML page instead of Markdown
        #[arg(long, default_value_t = false)]
        html: bool,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Show configuration and provider status
    Status,

    /// Create the settings file with defaults
    Onboard,

    /// Read or write a single setting
    Config {
        #[command(subcommand)]
        action: config_cmd::ConfigCommands,
    },
}

/// Bibliographic metadata substituted into note templates.
#[derive(clap::Args, Default)]
struct MetadataArgs {
    /// Paper title
    #[arg(short, long)]
    title: Option<String>,

    /// Author list, e.g. "Smith, Doe"
    #[arg(long)]
    authors: Option<String>,

    /// Journal or venue
    #[arg(long)]
    journal: Option<String>,

    /// Publication year
    #[arg(long)]
    year: Option<String>,
}

impl From<MetadataArgs> for DocumentMetadata {
    fn from(args: MetadataArgs) -> Self {
        Self {
            title: args.title.unwrap_or_default(),
            authors: args.authors.unwrap_or_default(),
            journal: args.journal.unwrap_or_default(),
            year: args.year.unwrap_or_default(),
        }
    }
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = match cli.config_file {
        Some(path) => JsonFileStore::new(helpers::expand_tilde(&path.to_string_lossy())),
        None => JsonFileStore::at_default_path(),
    };

    match cli.command {
        Commands::Slides {
            input,
            output,
            title,
            logs,
        } => {
            init_logging(logs);
            let doc = source::TextFileSource::new(
                &input,
                DocumentMetadata {
                    title: title.unwrap_or_default(),
                    ..Default::default()
                },
            );
            let job = generate::Job::new(Arc::new(store) as Arc<dyn SettingsStore>, output)?;
            let path = job.slides(&doc).await?;
            helpers::print_saved(&path);
            Ok(())
        }
        Commands::Notes {
            input,
            output,
            metadata,
            template,
            html,
            logs,
        } => {
            init_logging(logs);
            let template = match template {
                Some(path) => Some(generate::read_template(&helpers::expand_tilde(
                    &path.to_string_lossy(),
                ))?),
                None => None,
            };
            let doc = source::TextFileSource::new(&input, metadata.into());
            let job = generate::Job::new(Arc::new(store) as Arc<dyn SettingsStore>, output)?;
            let path = job.notes(&doc, template, html).await?;
            helpers::print_saved(&path);
            Ok(())
        }
        Commands::Status => status::run(&store),
        Commands::Onboard => onboard::run(&store),
        Commands::Config { action } => config_cmd::dispatch(action, &store),
    }
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("paperdeck=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
