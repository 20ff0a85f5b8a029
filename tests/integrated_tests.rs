use anyhow::Result;
use mockito::Server;
use serde_json::json;

// Import the necessary modules from the main application
use modq::api::modrinth::ModrinthClient;
use modq::commands;

fn sample_search_body() -> serde_json::Value {
    json!({
        "hits": [
            {
                "mod_id": 42,
                "slug": "sodium",
                "author": "jellysquid3",
                "title": "Sodium",
                "description": "A rendering engine for Minecraft",
                "categories": ["optimization", "fabric"],
                "versions": ["1.16.4", "1.16.5"],
                "downloads": 1_500_000,
                "follows": 12_000,
                "page_url": "https://modrinth.com/mod/sodium",
                "icon_url": null,
                "author_url": "https://modrinth.com/user/jellysquid3",
                "date_created": "2021-01-03T10:00:00Z",
                "date_modified": "2021-06-01T10:00:00Z",
                "latest_version": "0.2.0",
                "license": "lgpl-3",
                "client_side": "required",
                "server_side": "unsupported"
            }
        ],
        "offset": 0,
        "limit": 10,
        "total_hits": 1
    })
}

fn sample_mod_body() -> serde_json::Value {
    json!({
        "id": 42,
        "slug": "sodium",
        "team": "team-sodium",
        "title": "Sodium",
        "description": "A rendering engine for Minecraft",
        "body_url": null,
        "published": "2021-01-03T10:00:00Z",
        "updated": "2021-06-01T10:00:00Z",
        "status": "approved",
        "license": {"id": "lgpl-3", "name": "LGPL v3", "url": null},
        "client_side": "required",
        "server_side": "unsupported",
        "downloads": 1_500_000,
        "followers": 12_000,
        "categories": ["optimization", "fabric"],
        "versions": [101, 102],
        "icon_url": null,
        "issues_url": null,
        "source_url": "https://github.com/jellysquid3/sodium-fabric",
        "wiki_url": null,
        "discord_url": null,
        "donation_urls": []
    })
}

/// The search command builds the documented query string and renders the
/// mocked hits without error.
#[tokio::test]
async fn test_search_command_renders_results() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/mod?q=sodium&index=downloads&offset=0&limit=10")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(sample_search_body().to_string())
        .create_async()
        .await;

    let client = ModrinthClient::with_base_url(&server.url())?;
    let result = commands::search::run(
        &client,
        "sodium",
        10,
        0,
        Some("downloads".to_string()),
        &[],
        &[],
    )
    .await;

    assert!(result.is_ok(), "Search command failed: {:?}", result);
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_search_command_applies_filters() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/mod")
        .match_query(mockito::Matcher::Regex(
            r"q=sodium&filters=categories=.*fabric.*AND.*versions=.*1\.16\.5".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(sample_search_body().to_string())
        .create_async()
        .await;

    let client = ModrinthClient::with_base_url(&server.url())?;
    let result = commands::search::run(
        &client,
        "sodium",
        10,
        0,
        None,
        &["fabric".to_string()],
        &["1.16.5".to_string()],
    )
    .await;

    assert!(result.is_ok(), "Search command failed: {:?}", result);
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_search_command_no_hits_is_error() -> Result<()> {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/mod?q=doesnotexist&index=relevance&offset=0&limit=10")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"hits": [], "offset": 0, "limit": 10, "total_hits": 0}).to_string(),
        )
        .create_async()
        .await;

    let client = ModrinthClient::with_base_url(&server.url())?;
    let result = commands::search::run(&client, "doesnotexist", 10, 0, None, &[], &[]).await;

    assert!(result.is_err());
    assert!(format!("{:?}", result.unwrap_err()).contains("No mods found"));
    Ok(())
}

#[tokio::test]
async fn test_search_command_rejects_invalid_sort_key() -> Result<()> {
    let server = Server::new_async().await;

    let client = ModrinthClient::with_base_url(&server.url())?;
    let result = commands::search::run(
        &client,
        "sodium",
        10,
        0,
        Some("popularity".to_string()),
        &[],
        &[],
    )
    .await;

    assert!(result.is_err());
    assert!(format!("{:?}", result.unwrap_err()).contains("Invalid sort key"));
    Ok(())
}

#[tokio::test]
async fn test_show_command_by_id() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/mod/42")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(sample_mod_body().to_string())
        .create_async()
        .await;

    let client = ModrinthClient::with_base_url(&server.url())?;
    let result = commands::show::run(&client, Some("42".to_string())).await;

    assert!(result.is_ok(), "Show command failed: {:?}", result);
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_show_command_unknown_id_is_error() -> Result<()> {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/mod/9999")
        .with_status(404)
        .create_async()
        .await;

    let client = ModrinthClient::with_base_url(&server.url())?;
    let result = commands::show::run(&client, Some("9999".to_string())).await;

    assert!(result.is_err());
    assert!(format!("{:?}", result.unwrap_err()).contains("No mod found with ID 9999"));
    Ok(())
}
