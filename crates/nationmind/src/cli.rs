use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nationmind_api::BackendClient;
use nationmind_view::{HomePage, NationCard};
use tracing::info;

use crate::cards;
use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "nationmind",
    about = "Nation Mind AI: backend status page and nation cards"
)]
pub struct Cli {
    /// Backend base URL (overrides NATIONMIND_API_URL).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probe the backend once and print the landing page.
    Status,
    /// Print a single nation card.
    Card {
        #[arg(long)]
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        resources: f64,
        #[arg(long, allow_negative_numbers = true)]
        power: f64,
    },
    /// Print every card in a JSON file.
    Cards { path: PathBuf },
}

/// Run a parsed command and return what should be written to stdout.
///
/// An unreachable backend is not an error here: it is rendered on the page.
pub async fn execute(cli: Cli) -> Result<String> {
    match cli.command.unwrap_or(Commands::Status) {
        Commands::Status => {
            let config = Config::resolve(cli.api_url);
            let client = BackendClient::new(&config.api_url)
                .with_context(|| format!("invalid backend URL {:?}", config.api_url))?;
            info!(base_url = %client.base_url(), "checking backend");

            let mut page = HomePage::mount(Arc::new(client));
            let status = page.settled().await;
            info!(settled = status.is_settled(), "backend check finished");
            Ok(page.render())
        }
        Commands::Card {
            name,
            resources,
            power,
        } => Ok(NationCard::new(name, resources, power).render()),
        Commands::Cards { path } => {
            let cards = cards::load_cards(&path)?;
            Ok(cards::render_cards(&cards))
        }
    }
}
