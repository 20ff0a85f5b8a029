use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::filter::Filter;

/// Ordering criterion for search results.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Relevance,
    Downloads,
    Follows,
    Newest,
    Updated,
}

impl SortBy {
    /// The lower-case form the search endpoint expects in the `index`
    /// query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::Downloads => "downloads",
            SortBy::Follows => "follows",
            SortBy::Newest => "newest",
            SortBy::Updated => "updated",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relevance" => Ok(SortBy::Relevance),
            "downloads" => Ok(SortBy::Downloads),
            "follows" => Ok(SortBy::Follows),
            "newest" => Ok(SortBy::Newest),
            "updated" => Ok(SortBy::Updated),
            _ => Err(()),
        }
    }
}

/// Parameters for GET /api/v1/mod
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub query: String,
    pub filters: Filter,
    pub sort_by: SortBy,
    /// Zero-based index of the first result to return. Zero is a meaningful
    /// value and is emitted in the query string.
    pub offset: u32,
    /// Number of results to return. The remote API caps this at 100.
    pub limit: u32,
}

impl SearchOptions {
    /// Serialize into the query-string fragment understood by the search
    /// endpoint, without a leading `?`. Pairs are emitted in the fixed order
    /// q, filters, index, offset, limit; pairs whose rendered value is empty
    /// are dropped entirely.
    pub fn to_query_string(&self) -> String {
        let pairs = [
            ("q", self.query.clone()),
            ("filters", self.filters.build_statement()),
            ("index", self.sort_by.to_string()),
            ("offset", self.offset.to_string()),
            ("limit", self.limit.to_string()),
        ];

        pairs
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Response from GET /api/v1/mod
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SearchResponse {
    pub hits: Vec<ModSummary>,
    pub offset: u32,
    pub limit: u32,
    pub total_hits: u32,
}

/// One search hit, a condensed view of a mod.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ModSummary {
    pub mod_id: u32,
    pub slug: Option<String>,
    pub author: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Game versions this mod has files for, e.g. `1.16.5`.
    #[serde(default)]
    pub versions: Vec<String>,
    pub downloads: u64,
    #[serde(default)]
    pub follows: u64,
    pub page_url: Option<String>,
    pub icon_url: Option<String>,
    pub author_url: Option<String>,
    pub date_created: Option<String>,
    pub date_modified: Option<String>,
    pub latest_version: Option<String>,
    pub license: Option<String>,
    #[serde(default)]
    pub client_side: SideSupport,
    #[serde(default)]
    pub server_side: SideSupport,
}

/// Response from GET /api/v1/mod/{id}
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Mod {
    pub id: u32,
    pub slug: Option<String>,
    pub team: String,
    pub title: String,
    pub description: String,
    pub body_url: Option<String>,
    pub published: Option<String>,
    pub updated: Option<String>,
    #[serde(default)]
    pub status: ModStatus,
    pub license: Option<License>,
    #[serde(default)]
    pub client_side: SideSupport,
    #[serde(default)]
    pub server_side: SideSupport,
    pub downloads: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Ids of the versions published for this mod.
    #[serde(default)]
    pub versions: Vec<u32>,
    pub icon_url: Option<String>,
    pub issues_url: Option<String>,
    pub source_url: Option<String>,
    pub wiki_url: Option<String>,
    pub discord_url: Option<String>,
    #[serde(default)]
    pub donation_urls: Vec<DonationUrl>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct License {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DonationUrl {
    pub id: Option<String>,
    pub platform: Option<String>,
    pub url: String,
}

/// Whether a mod is needed on a given side.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SideSupport {
    Required,
    Optional,
    Unsupported,
    #[serde(other)]
    #[default]
    Unknown,
}

impl SideSupport {
    pub fn as_str(&self) -> &'static str {
        match self {
            SideSupport::Required => "required",
            SideSupport::Optional => "optional",
            SideSupport::Unsupported => "unsupported",
            SideSupport::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SideSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Moderation status of a mod.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModStatus {
    Approved,
    Rejected,
    Draft,
    Unlisted,
    Archived,
    Processing,
    #[serde(other)]
    #[default]
    Unknown,
}

impl ModStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModStatus::Approved => "approved",
            ModStatus::Rejected => "rejected",
            ModStatus::Draft => "draft",
            ModStatus::Unlisted => "unlisted",
            ModStatus::Archived => "archived",
            ModStatus::Processing => "processing",
            ModStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ModStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
