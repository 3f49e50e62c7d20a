//! Search page view - pure rendering, no data fetching
//!
//! Accepts `ReadStore<SearchUiState>` and reads only the fields it renders.

use crate::components::card_detail::CardDetail;
use crate::components::card_tile::CardGrid;
use crate::components::helpers::{ErrorDisplay, LoadingSpinner, PageContainer};
use crate::components::modal::Modal;
use crate::components::pagination::PaginationBar;
use crate::components::search_bar::SearchBar;
use crate::stores::search::{SearchUiState, SearchUiStateStoreExt};
use dioxus::prelude::*;
use pokesearch_common::Card;

#[component]
pub fn SearchView(
    state: ReadStore<SearchUiState>,
    /// Live content of the query input
    input: String,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_prev_page: EventHandler<()>,
    on_next_page: EventHandler<()>,
    on_card_click: EventHandler<Card>,
    on_close_detail: EventHandler<()>,
) -> Element {
    let is_loading = *state.is_loading().read();
    let error = state.error().read().clone();
    let cards = state.cards().read().clone();
    let total_count = *state.total_count().read();
    let current_page = *state.current_page().read();
    let total_pages = *state.total_pages().read();
    let can_go_prev = *state.can_go_prev().read();
    let can_go_next = *state.can_go_next().read();
    let selected = state.selected().read().clone();

    rsx! {
        PageContainer {
            h1 { class: "text-2xl font-bold text-white mb-4", "Recherche de Cartes Pokémon" }
            SearchBar {
                value: input,
                is_loading,
                on_input,
                on_submit,
            }
            if let Some(message) = error {
                ErrorDisplay { message }
            }
            if is_loading {
                LoadingSpinner {}
            } else if !cards.is_empty() {
                div { class: "mb-4 text-gray-400", "Total de résultats : {total_count}" }
                CardGrid { cards, on_card_click }
                PaginationBar {
                    current_page,
                    total_pages,
                    can_go_prev,
                    can_go_next,
                    on_prev: on_prev_page,
                    on_next: on_next_page,
                }
            }
            if let Some(card) = selected {
                Modal { on_close: on_close_detail,
                    CardDetail { card, on_close: on_close_detail }
                }
            }
        }
    }
}
