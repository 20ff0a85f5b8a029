use anyhow::{anyhow, Context, Result};
use console::style;
use dialoguer::Select;
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::modrinth::{Mod, ModrinthClient, SearchOptions};
use crate::utils::errors::ModqError;

pub async fn run(client: &ModrinthClient, mod_query: Option<String>) -> Result<()> {
    // If no mod query is provided, prompt the user for one
    let query = match mod_query {
        Some(q) => q,
        None => {
            let query: String = dialoguer::Input::new()
                .with_prompt("Enter mod title or ID to look up")
                .interact_text()
                .context("Failed to get mod query")?;
            query
        }
    };

    // A numeric query is treated as a mod ID and fetched directly; anything
    // else goes through search and an interactive selection.
    let mod_info = match query.parse::<u32>() {
        Ok(id) => {
            println!("🔍 Fetching mod with ID {}...", id);
            fetch_mod(client, id).await?
        }
        Err(_) => {
            println!("🔍 Searching for mods matching '{}'...", query);
            let options = SearchOptions {
                query: query.clone(),
                limit: 10,
                ..Default::default()
            };

            let results = client
                .search(&options)
                .await
                .context("Failed to search for mods")?
                .ok_or_else(|| anyhow!(ModqError::NoModsFound(query.clone())))?;

            if results.hits.is_empty() {
                return Err(anyhow!(ModqError::NoModsFound(query)));
            }

            let items: Vec<String> = results
                .hits
                .iter()
                .map(|hit| format!("{}: {}", hit.mod_id, hit.title))
                .collect();

            let selection = Select::new()
                .with_prompt("Select a mod to show")
                .items(&items)
                .default(0)
                .interact()
                .context("Failed to select mod")?;

            fetch_mod(client, results.hits[selection].mod_id).await?
        }
    };

    print_mod(&mod_info);

    Ok(())
}

async fn fetch_mod(client: &ModrinthClient, id: u32) -> Result<Mod> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner} {msg}")
            .context("Failed to create progress style")?,
    );
    pb.set_message(format!("Fetching mod {}", id));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = client.get_mod(id).await;
    pb.finish_and_clear();

    result
        .with_context(|| format!("Failed to fetch mod {}", id))?
        .ok_or_else(|| anyhow!(ModqError::ModNotFound(id)))
}

fn print_mod(mod_info: &Mod) {
    println!("\n{}", style(&mod_info.title).bold().underlined());
    println!("{}", mod_info.description);
    println!();
    println!("{:<14} {}", style("ID").bold(), mod_info.id);
    if let Some(slug) = &mod_info.slug {
        println!("{:<14} {}", style("Slug").bold(), slug);
    }
    println!("{:<14} {}", style("Team").bold(), mod_info.team);
    println!("{:<14} {}", style("Status").bold(), mod_info.status);
    println!("{:<14} {}", style("Downloads").bold(), mod_info.downloads);
    println!("{:<14} {}", style("Followers").bold(), mod_info.followers);
    println!(
        "{:<14} client: {}, server: {}",
        style("Sides").bold(),
        mod_info.client_side,
        mod_info.server_side
    );
    if !mod_info.categories.is_empty() {
        println!(
            "{:<14} {}",
            style("Categories").bold(),
            mod_info.categories.join(", ")
        );
    }
    if !mod_info.versions.is_empty() {
        println!(
            "{:<14} {} published",
            style("Versions").bold(),
            mod_info.versions.len()
        );
    }
    if let Some(license) = &mod_info.license {
        if let Some(name) = &license.name {
            println!("{:<14} {}", style("License").bold(), name);
        }
    }
    if let Some(source_url) = &mod_info.source_url {
        println!("{:<14} {}", style("Source").bold(), source_url);
    }
    if let Some(issues_url) = &mod_info.issues_url {
        println!("{:<14} {}", style("Issues").bold(), issues_url);
    }
    if let Some(wiki_url) = &mod_info.wiki_url {
        println!("{:<14} {}", style("Wiki").bold(), wiki_url);
    }
    if let Some(discord_url) = &mod_info.discord_url {
        println!("{:<14} {}", style("Discord").bold(), discord_url);
    }
}
