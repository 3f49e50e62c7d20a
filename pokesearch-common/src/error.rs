use thiserror::Error;

/// Message shown to the user for any failed search.
pub const SEARCH_FAILED_MESSAGE: &str = "Erreur lors de la recherche.";

/// Failure of a single card search request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("card API returned status {0}")]
    Status(u16),
    #[error("card API request failed: {0}")]
    Transport(String),
    #[error("unexpected card API response: {0}")]
    Decode(String),
}

impl SearchError {
    /// The text shown in the error banner. Details stay in the logs.
    pub fn user_message(&self) -> String {
        SEARCH_FAILED_MESSAGE.to_string()
    }
}
