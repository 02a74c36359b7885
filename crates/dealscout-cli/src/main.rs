use std::io::Read;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dealscout_scraper::{ProductScraper, TOOL_DESCRIPTOR};
use tracing_subscriber::EnvFilter;

/// Input value that means "read the URL from stdin".
const STDIN_MARKER: &str = "-";

#[derive(Debug, Parser)]
#[command(name = "dealscout-cli")]
#[command(about = "Scrape product listings from e-commerce search pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape up to three products from a URL and print the result as JSON
    Scrape {
        /// URL to scrape, or `-` to read it from stdin
        input: String,
        /// Skip the headless-browser fallback
        #[arg(long)]
        no_browser: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the tool name and description as JSON
    ToolInfo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = dealscout_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(
        env = %config.env,
        browser_enabled = config.browser_enabled,
        "configuration loaded"
    );

    match cli.command {
        Commands::Scrape {
            input,
            no_browser,
            pretty,
        } => {
            if no_browser {
                config.browser_enabled = false;
            }
            let input = read_input(input, std::io::stdin())?;
            let scraper =
                ProductScraper::from_config(&config).context("failed to build product scraper")?;
            let output = if pretty {
                serde_json::to_string_pretty(&scraper.scrape(&input).await)?
            } else {
                scraper.scrape_to_string(&input).await
            };
            println!("{output}");
        }
        Commands::ToolInfo => {
            println!("{}", serde_json::to_string_pretty(&TOOL_DESCRIPTOR)?);
        }
    }

    Ok(())
}

/// Returns `input` unchanged, or the contents of `stdin` when `input` is `-`.
fn read_input(input: String, mut stdin: impl Read) -> anyhow::Result<String> {
    if input != STDIN_MARKER {
        return Ok(input);
    }
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .context("failed to read input from stdin")?;
    Ok(buf)
}

#[cfg(test)]
mod tests;
