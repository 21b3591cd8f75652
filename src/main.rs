//! News-Frontier main entry point
//!
//! This is the command-line interface for the News-Frontier article harvester.

use anyhow::Context;
use clap::Parser;
use news_frontier::config::{load_config, validate, Config};
use news_frontier::harvest;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// News-Frontier: a breadth-first news article harvester
///
/// Crawls a news site breadth-first from the seed URLs, then fetches every
/// crawled page of the site, stores its raw HTML and exports the date, title
/// and body of each article to a CSV table.
#[derive(Parser, Debug)]
#[command(name = "news-frontier")]
#[command(version)]
#[command(about = "A breadth-first news article harvester", long_about = None)]
struct Cli {
    /// Seed URLs (defaults to the configured site root)
    #[arg(value_name = "SEED_URL")]
    seeds: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum number of pages to crawl
    #[arg(long, value_name = "N")]
    max_visits: Option<usize>,

    /// Where to write the CSV export
    #[arg(long, value_name = "FILE")]
    table_path: Option<String>,

    /// Directory for raw article HTML
    #[arg(long, value_name = "DIR")]
    html_dir: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    tracing::info!(
        "Seeds: {:?}, budget: {} visits, site: {}",
        config.site.seeds,
        config.crawler.max_visits,
        config.site.domain
    );

    let urls = harvest(&config).await.context("Harvest failed")?;

    println!("{}", urls.len());

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("news_frontier=info,warn"),
            1 => EnvFilter::new("news_frontier=debug,info"),
            2 => EnvFilter::new("news_frontier=trace,debug"),
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

/// Loads the config file (or defaults) and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    if !cli.seeds.is_empty() {
        config.site.seeds = cli.seeds.clone();
    }
    if let Some(max_visits) = cli.max_visits {
        config.crawler.max_visits = max_visits;
    }
    if let Some(table_path) = &cli.table_path {
        config.output.table_path = table_path.clone();
    }
    if let Some(html_dir) = &cli.html_dir {
        config.output.html_dir = html_dir.clone();
    }

    validate(&config).context("Invalid configuration")?;

    Ok(config)
}
