use pokesearch_common::query::cards_url;
use pokesearch_common::{ApiConfig, CardPage, FetchRequest, SearchError};
use tracing::debug;

/// Fetch one page of cards matching the request's name filter
pub async fn fetch_cards(
    config: &ApiConfig,
    request: &FetchRequest,
) -> Result<CardPage, SearchError> {
    let url = cards_url(config, request)?;
    debug!("Card API request: {}", url);

    let mut builder = reqwest::Client::new()
        .get(&url)
        .header("Accept", "application/json");
    if let Some(key) = &config.api_key {
        builder = builder.header("X-Api-Key", key);
    }

    let resp = builder
        .send()
        .await
        .map_err(|e| SearchError::Transport(format!("Network error: {e}")))?;

    if !resp.status().is_success() {
        return Err(SearchError::Status(resp.status().as_u16()));
    }

    let body = resp
        .bytes()
        .await
        .map_err(|e| SearchError::Transport(format!("Read error: {e}")))?;

    CardPage::from_json(&body)
}
