pub mod filter;
pub mod schema;

use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::de::DeserializeOwned;
use url::Url;

use crate::utils::errors::ModqError;

pub use filter::Filter;
pub use schema::{Mod, ModSummary, SearchOptions, SearchResponse, SortBy};

const MODRINTH_API_URL: &str = "https://api.modrinth.com/api/v1";

pub struct ModrinthClient {
    client: reqwest::Client,
    base_url: String,
}

impl ModrinthClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(MODRINTH_API_URL)
    }

    /// Creates a client against a custom base URL (useful for testing with a
    /// mock server).
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search for mods. Returns `None` when the endpoint reports no result
    /// at all (404 or a null body); an empty hit list is a normal response.
    pub async fn search(&self, options: &SearchOptions) -> Result<Option<SearchResponse>> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid API base URL: {}", self.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!(ModqError::Unknown("Cannot modify URL path".to_string())))?
            .push("mod");

        let query_string = options.to_query_string();
        if !query_string.is_empty() {
            url.set_query(Some(&query_string));
        }

        debug!("GET {}", url);

        let response = self.client.get(url).send().await.with_context(|| {
            format!(
                "Failed to send request to Modrinth API for search query '{}'",
                options.query
            )
        })?;

        Self::read_optional_json(response)
            .await
            .with_context(|| "Failed to parse search results from Modrinth API")
    }

    /// Retrieve a mod by its id. Returns `None` when no such mod exists.
    pub async fn get_mod(&self, mod_id: u32) -> Result<Option<Mod>> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid API base URL: {}", self.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!(ModqError::Unknown("Cannot modify URL path".to_string())))?
            .push("mod")
            .push(&mod_id.to_string());

        debug!("GET {}", url);

        let response = self.client.get(url).send().await.with_context(|| {
            format!("Failed to send request to Modrinth API for mod ID {}", mod_id)
        })?;

        Self::read_optional_json(response)
            .await
            .with_context(|| format!("Failed to parse mod info for ID {}", mod_id))
    }

    /// A 404 status, an empty body, and a literal `null` body all represent
    /// "no such resource" and map to `None`. Any other non-success status is
    /// an error.
    async fn read_optional_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Option<T>> {
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(anyhow!(ModqError::ApiError(format!(
                "API request failed with status: {}",
                response.status()
            ))));
        }

        let body = response
            .bytes()
            .await
            .with_context(|| "Failed to read response body")?;
        if body.is_empty() {
            return Ok(None);
        }

        let parsed = serde_json::from_slice::<Option<T>>(&body)?;
        Ok(parsed)
    }
}
