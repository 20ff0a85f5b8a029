use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModqError {
    #[error("Failed to access Modrinth API: {0}")]
    ApiError(String),

    #[error("No mods found matching '{0}'")]
    NoModsFound(String),

    #[error("No mod found with ID {0}")]
    ModNotFound(u32),

    #[error("Invalid sort key '{0}'. Expected one of: relevance, downloads, follows, newest, updated")]
    InvalidSortKey(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
