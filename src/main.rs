//! Command-line front end for product status classification.
//!
//! # Usage
//!
//! ```bash
//! # Classify one or more statuses
//! product-status classify "in stock" "On Order"
//!
//! # Emit JSON lines instead of a table
//! product-status classify --json deleted
//!
//! # Check the cache connection
//! product-status cache ping
//! ```

use product_status::config::{self, Config};
use product_status::domain::entities::AvailabilityRecord;
use product_status::domain::status::StatusClassifier;
use product_status::infrastructure::cache;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

/// Classify product statuses and check cache connectivity.
#[derive(Parser)]
#[command(name = "product-status")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify status strings into availability flags
    Classify {
        /// Status strings (e.g. "in stock", "on order", "unavailable", "deleted")
        #[arg(required = true)]
        statuses: Vec<String>,

        /// Print one JSON object per status
        #[arg(long)]
        json: bool,

        /// Match statuses exactly instead of ignoring case
        #[arg(long)]
        case_sensitive: bool,
    },

    /// Cache service operations
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Connect to the cache and check that it answers
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    init_tracing(&config)?;

    match cli.command {
        Commands::Classify {
            statuses,
            json,
            case_sensitive,
        } => {
            let classifier = StatusClassifier::new(case_sensitive || config.case_sensitive);
            handle_classify(&classifier, &statuses, json)?;
        }
        Commands::Cache {
            action: CacheAction::Ping,
        } => handle_cache_ping(&config).await?,
    }

    Ok(())
}

/// Installs the global subscriber in the configured format.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

/// Classifies every status, printing a row per input.
///
/// Unrecognized statuses are reported inline; the command fails at the end
/// if any were seen.
fn handle_classify(classifier: &StatusClassifier, statuses: &[String], json: bool) -> Result<()> {
    let mut failures = 0usize;

    if !json {
        println!(
            "  {:<16} {:<9} {:<14} {:<8} {:<7}",
            "STATUS".bright_white().bold(),
            "IN_STOCK".bright_white().bold(),
            "ON_BACK_ORDER".bright_white().bold(),
            "BUYABLE".bright_white().bold(),
            "ACTIVE".bright_white().bold(),
        );
        println!("  {}", "─".repeat(58).bright_black());
    }

    for status in statuses {
        match classifier.classify(status) {
            Ok(record) if json => {
                let line = serde_json::json!({ "status": status, "record": record });
                println!("{}", line);
            }
            Ok(record) => print_row(status, &record),
            Err(e) => {
                failures += 1;
                tracing::debug!(status = %status, "unrecognized status");
                if json {
                    let line = serde_json::json!({ "status": status, "error": e.to_string() });
                    println!("{}", line);
                } else {
                    println!("  {:<16} {}", status.yellow(), e.to_string().red());
                }
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} statuses were not recognized", failures, statuses.len());
    }

    Ok(())
}

fn print_row(status: &str, record: &AvailabilityRecord) {
    println!(
        "  {:<16} {:<9} {:<14} {:<8} {:<7}",
        status.cyan(),
        flag(record.in_stock()),
        flag(record.on_back_order()),
        flag(record.buyable()),
        flag(record.active()),
    );
}

fn flag(value: bool) -> ColoredString {
    if value { "yes".green() } else { "no".bright_black() }
}

async fn handle_cache_ping(config: &Config) -> Result<()> {
    config.print_summary();

    let client = cache::connect(config)
        .await
        .context("Failed to connect to cache")?;

    if client.health_check().await {
        println!("{} {}", "✅ Cache reachable:".green().bold(), client.describe());
        Ok(())
    } else {
        println!("{} {}", "❌ Cache not answering:".red().bold(), client.describe());
        anyhow::bail!("cache health check failed")
    }
}
