//! Tablematch command line.
//!
//! Loads a show corpus and emits the routes to build and the data behind
//! each page.

mod build;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use show_records::RecordStore;
use tablematch_core::{
    parse_wrestler_token, BuildConfig, PageResolver, PathEnumerator, ShowRoute,
};
use tracing::info;

use crate::error::CliError;

/// Tablematch command line arguments.
#[derive(Parser, Debug)]
#[command(name = "tablematch", version)]
#[command(about = "Derive show and wrestler page data from a show corpus")]
struct Cli {
    /// Config file (defaults to ./tablematch.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Corpus file or directory, overriding the config
    #[arg(long, global = true, value_name = "PATH")]
    corpus: Option<PathBuf>,

    /// Log level, overriding the config
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Verbose logging (debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every page route, shows first
    Routes,

    /// Print the page data of one show
    Show {
        /// Show token, e.g. `[421337]` or `[1,2]`
        token: String,
    },

    /// Print the page data of one wrestler
    Wrestler {
        /// Wrestler id
        id: String,
    },

    /// Write page data for every route
    Build {
        /// Output directory, overriding the config
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Report records skipped during ingest
    Check,
}

/// Exit code for a route that resolves to nothing.
const EXIT_NOT_FOUND: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let mut config = BuildConfig::discover(cli.config.as_deref())?;
    if let Some(corpus) = cli.corpus {
        config.corpus = corpus;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    init_tracing(&config, cli.verbose)?;
    info!(corpus = %config.corpus.display(), "loading corpus");
    let store = RecordStore::load(&config.corpus)?;

    match cli.command {
        Command::Routes => {
            for route in PathEnumerator::new(&store).all_routes() {
                println!("{route}");
            }
        }
        Command::Show { token } => {
            let route = ShowRoute::parse(&token)?;
            match PageResolver::new(&store).show_detail(&route) {
                Some(detail) => println!("{}", serde_json::to_string_pretty(&detail)?),
                None => {
                    eprintln!("show {token} not found");
                    return Ok(ExitCode::from(EXIT_NOT_FOUND));
                }
            }
        }
        Command::Wrestler { id } => {
            let id = parse_wrestler_token(&id)?;
            let page = PageResolver::new(&store).wrestler_page(id);
            if !page.is_found() {
                eprintln!("wrestler {id} not found");
                return Ok(ExitCode::from(EXIT_NOT_FOUND));
            }
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Command::Build { out } => {
            let out_dir = out.unwrap_or(config.out_dir);
            let summary = build::write_pages(&store, &out_dir)?;
            println!(
                "wrote {} show pages and {} wrestler pages to {}",
                summary.shows,
                summary.wrestlers,
                out_dir.display()
            );
        }
        Command::Check => {
            for diagnostic in store.diagnostics() {
                println!("{diagnostic}");
            }
            println!(
                "{} shows loaded, {} excluded, {} skipped",
                store.len(),
                store.excluded_count(),
                store.diagnostics().len()
            );
            if !store.diagnostics().is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(config: &BuildConfig, verbose: bool) -> Result<(), CliError> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::from_str(&config.log_level)
            .map_err(|_| CliError::LogLevel(config.log_level.clone()))?
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
