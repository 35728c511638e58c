use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use portfolio::github::{DEFAULT_API_BASE, GithubClient};
use portfolio::html::render_page;
use portfolio::owner::OWNER;
use portfolio::portfolio::Portfolio;

/// Render the portfolio page from live GitHub data.
#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about, long_about = None)]
struct Cli {
    /// Where to write the rendered page
    #[arg(short, long, default_value = "index.html")]
    output: PathBuf,

    /// Root of the GitHub REST API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = GithubClient::new(&cli.api_base)?;
    let portfolio = Portfolio::load(&client, OWNER.username).await;

    let page = render_page(&portfolio, &OWNER, Utc::now());
    fs::write(&cli.output, page)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    info!(
        path = %cli.output.display(),
        projects = portfolio.repositories.len(),
        "page written"
    );

    Ok(())
}
