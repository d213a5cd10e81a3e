//! CLI for analyzing a single product link
//!
//! Runs the same pipeline as the HTTP API and prints the narrative, or the
//! parsed report as JSON with `--json`.

use anyhow::{Context, Result};
use clap::Parser;
use server_core::config::Config;
use server_core::domains::analysis::{analyze_link, summarize_link};
use server_core::kernel::ServerDeps;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "analyze")]
#[command(about = "Summarize the reviews of a product link")]
struct Cli {
    /// Product link containing a /dp/<ID> path or rd_i=<ID> parameter
    link: String,

    /// Classification threshold in [0, 1] (defaults to CLASSIFICATION_THRESHOLD)
    #[arg(long, value_parser = parse_threshold)]
    threshold: Option<f32>,

    /// Print the parsed report as JSON instead of the raw narrative
    #[arg(long)]
    json: bool,
}

fn parse_threshold(value: &str) -> std::result::Result<f32, String> {
    let threshold: f32 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(format!("threshold must be between 0 and 1, got {}", threshold))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for --json
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,server_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let deps = ServerDeps::from_config(&config).context("Failed to initialize dependencies")?;

    if cli.json {
        let report = analyze_link(&cli.link, cli.threshold, &deps).await?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let response = summarize_link(&cli.link, cli.threshold, &deps).await?;
        println!("{}", response.conclusion);
    }

    Ok(())
}
