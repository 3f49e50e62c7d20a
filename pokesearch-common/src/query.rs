//! Query-string construction for `GET /cards`

use serde::Serialize;

use crate::config::ApiConfig;
use crate::search::FetchRequest;
use crate::SearchError;

#[derive(Serialize)]
struct CardsQuery<'a> {
    q: &'a str,
    #[serde(rename = "pageSize")]
    page_size: u32,
    page: u32,
}

/// Lucene-style `name:` clause for a search term.
///
/// Multi-word terms are quoted so they stay one clause. Embedded quotes are
/// dropped since the API has no escape for them.
pub fn name_filter(term: &str) -> String {
    let term: String = term.trim().chars().filter(|c| *c != '"').collect();
    if term.chars().any(char::is_whitespace) {
        format!("name:\"{term}\"")
    } else {
        format!("name:{term}")
    }
}

/// Full request URL for one page of results
pub fn cards_url(config: &ApiConfig, request: &FetchRequest) -> Result<String, SearchError> {
    let q = name_filter(&request.query);
    let query = serde_urlencoded::to_string(CardsQuery {
        q: &q,
        page_size: request.page_size,
        page: request.page,
    })
    .map_err(|e| SearchError::Transport(format!("failed to encode query: {e}")))?;
    Ok(format!("{}?{}", config.cards_endpoint(), query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{RequestTicket, PAGE_SIZE};

    fn request(query: &str, page: u32) -> FetchRequest {
        FetchRequest {
            ticket: RequestTicket(1),
            query: query.to_string(),
            page,
            page_size: PAGE_SIZE,
        }
    }

    #[test]
    fn single_word_is_unquoted() {
        assert_eq!(name_filter("Pikachu"), "name:Pikachu");
    }

    #[test]
    fn multi_word_is_quoted() {
        assert_eq!(name_filter("Mr. Mime"), "name:\"Mr. Mime\"");
    }

    #[test]
    fn embedded_quotes_are_dropped() {
        assert_eq!(name_filter("char\"izard"), "name:charizard");
    }

    #[test]
    fn builds_encoded_url() {
        let url = cards_url(&ApiConfig::default(), &request("Pikachu", 3)).unwrap();
        assert_eq!(
            url,
            "https://api.pokemontcg.io/v2/cards?q=name%3APikachu&pageSize=10&page=3"
        );
    }

    #[test]
    fn encodes_spaces_and_quotes() {
        let url = cards_url(&ApiConfig::default(), &request("Mr. Mime", 1)).unwrap();
        assert!(url.ends_with("?q=name%3A%22Mr.+Mime%22&pageSize=10&page=1"));
    }
}
