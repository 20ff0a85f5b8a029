use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;

use modq::api::modrinth::ModrinthClient;
use modq::commands;

#[derive(Parser)]
#[command(name = "modq")]
#[command(author, version, about = "A CLI tool for searching and inspecting mods on Modrinth", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for mods on Modrinth
    Search {
        /// Search query
        #[arg(value_name = "QUERY")]
        query: String,

        /// Maximum number of results to return
        #[arg(long, default_value_t = 10)]
        limit: u32,

        /// Index of the first result to return
        #[arg(long, default_value_t = 0)]
        offset: u32,

        /// Sort order (relevance, downloads, follows, newest, updated)
        #[arg(long)]
        sort: Option<String>,

        /// Only include mods in this category (may be repeated)
        #[arg(long)]
        category: Vec<String>,

        /// Only include mods supporting this game version (may be repeated)
        #[arg(long)]
        game_version: Vec<String>,
    },
    /// Show a mod's details
    Show {
        /// Mod ID or search query
        #[arg(value_name = "MOD")]
        mod_query: Option<String>,
    },
}

async fn run(cli: Cli) -> Result<()> {
    let client = ModrinthClient::new().context("Failed to initialize Modrinth API client")?;

    match cli.command {
        Commands::Search {
            query,
            limit,
            offset,
            sort,
            category,
            game_version,
        } => {
            commands::search::run(&client, &query, limit, offset, sort, &category, &game_version)
                .await
        }
        Commands::Show { mod_query } => commands::show::run(&client, mod_query).await,
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("{}", style("[ERROR]").bold().red());
        eprintln!("{:?}", style(err).red());
        std::process::exit(1);
    }
}
