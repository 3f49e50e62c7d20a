//! Search UI state store

use dioxus::prelude::*;
use pokesearch_common::{Card, SearchController};

/// Snapshot of the search controller for the views
#[derive(Clone, Debug, PartialEq, Store)]
pub struct SearchUiState {
    /// Query of the cards on display
    pub query: String,
    /// Cards of the current page
    pub cards: Vec<Card>,
    pub total_count: u32,
    pub current_page: u32,
    pub total_pages: u32,
    /// A request is outstanding
    pub is_loading: bool,
    /// User-facing message of the last failed request
    pub error: Option<String>,
    pub can_go_prev: bool,
    pub can_go_next: bool,
    /// Card shown in the detail overlay
    pub selected: Option<Card>,
}

impl Default for SearchUiState {
    fn default() -> Self {
        Self::from_controller(&SearchController::default())
    }
}

impl SearchUiState {
    pub fn from_controller(controller: &SearchController) -> Self {
        let page = controller.state();
        Self {
            query: page.query.clone(),
            cards: page.results.clone(),
            total_count: page.total_count,
            current_page: page.current_page,
            total_pages: page.total_pages(),
            is_loading: page.is_loading(),
            error: page.error().map(str::to_string),
            can_go_prev: controller.can_go_prev(),
            can_go_next: controller.can_go_next(),
            selected: controller.selected().cloned(),
        }
    }
}
