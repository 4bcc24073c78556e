//! Tribunal dispute dashboard
//!
//! Command line front end that runs one dashboard activation against the
//! dispute service and prints the resulting summary.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};
use tribunal_core::{Config, Error, Result};
use tribunal_dashboard::{
    DashboardController, DashboardSummary, DashboardViewState, HttpDisputeClient, Settlement,
};

/// Command line interface for the dispute dashboard
#[derive(Parser)]
#[command(
    name = "tribunal-dashboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Summary dashboard for tribunal disputes",
    long_about = "Fetches all disputes from the tribunal service and prints status counts, the most recent unresolved disputes and status shortcuts."
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Dispute service origin (overrides config)
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable structured JSON logging
    #[arg(long)]
    json: bool,

    /// Subcommand
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// Fetch disputes and print the dashboard summary
    Summary {
        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Inspect configuration
    Config {
        /// Show resolved configuration
        #[arg(short, long)]
        show: bool,
    },
}

/// Main entry point for the dashboard
///
/// # Errors
///
/// Returns error if configuration is invalid or the dispute fetch fails
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(&cli)?;
    tribunal_core::init_logging(&config.logging)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        api_base = %config.api.base_url,
        "Tribunal dashboard starting"
    );

    match cli.command {
        Some(Commands::Summary { format }) => run_summary(&config, &format).await,
        Some(Commands::Config { show }) => handle_config_command(&config, show),
        None => run_summary(&config, "table").await,
    }
}

/// Load configuration and apply command line overrides
///
/// # Errors
///
/// Returns error if the configuration cannot be loaded or fails validation
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_from(cli.config.as_deref())?;

    if let Some(api_base) = &cli.api_base {
        config.api.base_url.clone_from(api_base);
    }
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    if cli.json {
        config.logging.format = "json".to_string();
    }

    config.validate()?;
    Ok(config)
}

/// Run one activation and print the outcome
///
/// # Errors
///
/// Returns error if the fetch failed or the summary cannot be serialized
async fn run_summary(config: &Config, format: &str) -> Result<()> {
    let client = HttpDisputeClient::from_config(&config.api)?;
    let controller = DashboardController::new(client);

    match controller.load().await {
        Settlement::Ready(_) => {}
        Settlement::Failed(kind) => {
            let state = controller.state();
            let message = match &state {
                DashboardViewState::Failed { message, .. } => message.as_str(),
                _ => "unknown failure",
            };
            error!(%kind, "Dashboard could not be loaded");
            return Err(Error::Fetch {
                message: format!("{kind}: {message}"),
            });
        }
        Settlement::Stale => {
            return Err(Error::Other("activation superseded".to_string()));
        }
    }

    let state = controller.state();
    let Some(summary) = state.summary() else {
        return Err(Error::Other("dashboard settled without a summary".to_string()));
    };

    if format == "json" {
        print_json(summary)
    } else {
        print_table(summary);
        Ok(())
    }
}

/// Print the summary as a JSON document
///
/// # Errors
///
/// Returns error if the summary cannot be serialized
fn print_json(summary: &DashboardSummary) -> Result<()> {
    let document = serde_json::json!({
        "stats": summary.stats,
        "recent_disputes": summary.recent_disputes,
        "shortcuts": summary.shortcuts(),
    });
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

/// Print the summary as a plain text table
fn print_table(summary: &DashboardSummary) {
    println!("Disputes");
    println!("========");
    for shortcut in summary.shortcuts() {
        println!(
            "{:<14} {:>6}   {}",
            shortcut.label,
            shortcut.count,
            shortcut.intent.route()
        );
    }
    println!("{:<14} {:>6}", "Total", summary.stats.total);

    let unrecognized = summary.stats.unrecognized();
    if unrecognized > 0 {
        println!("{:<14} {:>6}", "Unrecognized", unrecognized);
    }

    println!();
    println!("Recent unresolved");
    println!("=================");
    if summary.recent_disputes.is_empty() {
        println!("(none)");
        return;
    }

    for (dispute, intent) in summary.recent_disputes.iter().zip(summary.recent_intents()) {
        println!(
            "{:<14} {:<14} {:>10}  {}",
            dispute.dispute_id,
            dispute.status.label(),
            dispute.amount_display(),
            dispute.description_or_fallback()
        );
        println!("{:<14} reason: {}  ({intent})", "", dispute.reason_or_fallback());
    }
}

/// Handle configuration commands
///
/// # Errors
///
/// Returns error if configuration cannot be serialized
fn handle_config_command(config: &Config, show: bool) -> Result<()> {
    if show {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        println!("Configuration is valid");
    }
    Ok(())
}
