use anyhow::{anyhow, Context, Result};
use console::style;

use crate::api::modrinth::{Filter, ModrinthClient, SearchOptions, SortBy};
use crate::utils::errors::ModqError;

pub async fn run(
    client: &ModrinthClient,
    query: &str,
    limit: u32,
    offset: u32,
    sort: Option<String>,
    categories: &[String],
    game_versions: &[String],
) -> Result<()> {
    let sort_by = match sort {
        Some(ref key) => key
            .parse::<SortBy>()
            .map_err(|_| anyhow!(ModqError::InvalidSortKey(key.clone())))?,
        None => SortBy::default(),
    };

    let mut filters = Filter::none();
    for category in categories {
        filters = filters.and(Filter::category(category));
    }
    for version in game_versions {
        filters = filters.and(Filter::version(version));
    }

    let options = SearchOptions {
        query: query.to_string(),
        filters,
        sort_by,
        offset,
        limit,
    };

    println!("🔍 Searching for mods matching '{}'...", query);

    let results = client
        .search(&options)
        .await
        .context("Failed to search for mods")?
        .ok_or_else(|| anyhow!(ModqError::NoModsFound(query.to_string())))?;

    if results.hits.is_empty() {
        return Err(anyhow!(ModqError::NoModsFound(query.to_string())));
    }

    // Display mod information in a formatted table
    println!(
        "\nShowing {} of {} matching mods:",
        results.hits.len(),
        results.total_hits
    );
    println!(
        "{:<10} {:<40} {:<12} {}",
        style("ID").bold(),
        style("Title").bold(),
        style("Downloads").bold(),
        style("Description").bold()
    );

    for hit in &results.hits {
        println!(
            "{:<10} {:<40} {:<12} {}",
            hit.mod_id,
            if hit.title.len() > 38 {
                format!("{}...", &hit.title[0..35])
            } else {
                hit.title.clone()
            },
            format!("{}K", hit.downloads / 1000),
            if hit.description.len() > 50 {
                format!("{}...", &hit.description[0..47])
            } else {
                hit.description.clone()
            }
        );
    }

    println!("\nTo view a mod's details, use 'modq show <mod_id>'");

    Ok(())
}
