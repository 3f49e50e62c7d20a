use crate::search::{run_action, run_initial_search, WebSearchService};
use crate::Route;
use dioxus::prelude::*;
use pokesearch_common::{ApiConfig, SearchAction};
use pokesearch_ui::stores::SearchUiState;
use pokesearch_ui::SearchView;

#[component]
pub fn Search(q: Option<String>) -> Element {
    let config: ApiConfig = use_context();
    let state = use_store(SearchUiState::default);
    let initial_query = q.clone();
    let service = use_signal(move || WebSearchService::new(state, config, initial_query));
    let mut input = use_signal(|| q.clone().unwrap_or_default());

    // Deep link: the service hands out the URL's query once
    use_effect(move || run_initial_search(service));

    rsx! {
        SearchView {
            state,
            input: input(),
            on_input: move |value: String| input.set(value),
            on_submit: move |_| {
                let query = input.peek().trim().to_string();
                if query.is_empty() || state.peek().is_loading {
                    return;
                }
                navigator().replace(Route::Search { q: Some(query.clone()) });
                run_action(service, SearchAction::Submit(query));
            },
            on_prev_page: move |_| run_action(service, SearchAction::PrevPage),
            on_next_page: move |_| run_action(service, SearchAction::NextPage),
            on_card_click: move |card| run_action(service, SearchAction::Select(card)),
            on_close_detail: move |_| run_action(service, SearchAction::ClearSelection),
        }
    }
}
