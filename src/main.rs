//! Company Finder main entry point
//!
//! This is the command-line interface for crawling company domains and
//! looking up the stored results.

use anyhow::Context;
use clap::{Parser, Subcommand};
use company_finder::config::{load_config_with_hash, Config};
use company_finder::enrich::enrich;
use company_finder::input::{load_company_names, load_seeds};
use company_finder::lookup::{lookup, LookupQuery};
use company_finder::output::{load_statistics, print_statistics};
use company_finder::storage::{open_store, SqliteStore, Store};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Company Finder: company identity signals from crawled domains
///
/// Crawls a list of company domains for phone numbers, social profiles and
/// contact pages, and looks companies up by name, website, phone number or
/// facebook profile.
#[derive(Parser, Debug)]
#[command(name = "company-finder")]
#[command(version)]
#[command(about = "Crawl company domains and look companies up", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl every seed domain and store one document per domain
    Crawl,

    /// Serve the lookup HTTP API
    Serve,

    /// Look up a single company and print the best match as JSON
    Lookup {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        website: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        facebook: Option<String>,
    },

    /// Layer company names from a CSV onto crawled documents
    Enrich {
        /// CSV with domain and company name columns
        #[arg(value_name = "CSV")]
        csv: PathBuf,
    },

    /// Show statistics from the store and exit
    Stats,

    /// Delete every stored document
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    let store = Arc::new(
        open_store(Path::new(&config.store.database_path))
            .with_context(|| format!("failed to open {}", config.store.database_path))?,
    );

    match cli.command {
        Command::Crawl => handle_crawl(&config, store).await,
        Command::Serve => {
            company_finder::api::serve(&config.api, store).await?;
            Ok(())
        }
        Command::Lookup {
            name,
            website,
            phone,
            facebook,
        } => {
            let query = LookupQuery {
                company_name: name,
                website,
                phone_number: phone,
                facebook_profile: facebook,
            };
            handle_lookup(store.as_ref(), &query)
        }
        Command::Enrich { csv } => handle_enrich(store.as_ref(), &csv),
        Command::Stats => {
            println!("Database: {}\n", config.store.database_path);
            print_statistics(&load_statistics(store.as_ref())?);
            Ok(())
        }
        Command::Clear => {
            let removed = store.clear()?;
            println!("Deleted {} documents", removed);
            Ok(())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("company_finder=info,warn"),
            1 => EnvFilter::new("company_finder=debug,info"),
            2 => EnvFilter::new("company_finder=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the crawl command: seeds, workers, dispatch, drain
async fn handle_crawl(config: &Config, store: Arc<SqliteStore>) -> anyhow::Result<()> {
    let seeds_path = Path::new(&config.seeds.csv_path);
    let targets = load_seeds(seeds_path, &config.seeds.domain_column)?;
    tracing::info!(
        "Crawling {} targets with {} workers",
        targets.len(),
        config.workers.count
    );

    let report = company_finder::worker::crawl(config, store, targets).await?;
    println!(
        "Processed {} targets ({} could not be stored)",
        report.processed, report.write_failures
    );
    Ok(())
}

/// Handles the lookup command: prints the best match or the reason there is none
fn handle_lookup(store: &dyn Store, query: &LookupQuery) -> anyhow::Result<()> {
    let found = lookup(store, query)?;
    println!("{}", serde_json::to_string_pretty(&found)?);
    Ok(())
}

/// Handles the enrich command
fn handle_enrich(store: &dyn Store, csv: &Path) -> anyhow::Result<()> {
    let rows = load_company_names(csv)?;
    let report = enrich(store, &rows)?;

    println!("Updated {} documents", report.updated);
    if !report.missing.is_empty() {
        println!("No document for {} domains:", report.missing.len());
        for domain in &report.missing {
            println!("  - {}", domain);
        }
    }
    Ok(())
}
