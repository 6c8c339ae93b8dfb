//! CLI entry point for the ontology seeder.
//!
//! Prints the op batch on stdout, logs to stderr, exits 1 on any error.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use ontoseed_graph::{Graph, PublishClient};
use ontoseed_seed::config::load_seed_config;
use ontoseed_seed::driver;

#[derive(Parser)]
#[command(name = "ontoseed-seed")]
#[command(about = "Seed the course ontology into a knowledge-graph space")]
struct Cli {
    /// Target space ID (overrides config; falls back to DEMO_SPACE_ID).
    #[arg(short, long, env = "DEMO_SPACE_ID")]
    space_id: Option<String>,

    /// Graph API base URL.
    #[arg(long)]
    api_url: Option<String>,

    /// Build and print the ops without publishing.
    #[arg(long)]
    dry_run: bool,

    /// Emit logs as JSON.
    #[arg(long)]
    log_json: bool,

    /// Config file prefix (default: ontoseed).
    #[arg(short, long, default_value = "ontoseed")]
    config: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.log_json {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    }

    match seed(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Seeding failed");
            ExitCode::FAILURE
        }
    }
}

async fn seed(cli: Cli) -> anyhow::Result<()> {
    let mut seed_config = load_seed_config(&cli.config)?;
    if let Some(space_id) = cli.space_id {
        seed_config.space_id = Some(space_id);
    }
    if let Some(api_url) = cli.api_url {
        seed_config.api_url = api_url;
    }
    seed_config.dry_run |= cli.dry_run;

    // Fail on a missing space id before the client is built.
    let space_id = seed_config.require_space_id()?;
    tracing::info!(space_id = %space_id, api_url = %seed_config.api_url, "Seeding ontology");

    let client = PublishClient::new(seed_config.publish_config())?;
    let mut stdout = std::io::stdout();
    driver::run(&seed_config, &Graph, &client, &mut stdout).await?;

    Ok(())
}
