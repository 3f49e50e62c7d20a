use crate::api;
use dioxus::prelude::*;
use pokesearch_common::{
    ApiConfig, CardPage, FetchRequest, RequestTicket, SearchAction, SearchController, SearchError,
};
use pokesearch_ui::stores::SearchUiState;
use tracing::{info, warn};

/// Controller plus the query a deep link asked for, consumed by the first submit.
#[derive(Debug, Default)]
pub struct SearchSession {
    controller: SearchController,
    initial_query: Option<String>,
}

impl SearchSession {
    pub fn new(initial_query: Option<String>) -> Self {
        Self {
            controller: SearchController::new(),
            initial_query: initial_query.filter(|q| !q.trim().is_empty()),
        }
    }

    pub fn controller(&self) -> &SearchController {
        &self.controller
    }

    pub fn dispatch(&mut self, action: SearchAction) -> Option<FetchRequest> {
        self.controller.reduce(action)
    }

    /// Submit the deep-link query. Only the first call can issue a request.
    pub fn submit_initial(&mut self) -> Option<FetchRequest> {
        let query = self.initial_query.take()?;
        self.controller.submit_search(&query)
    }

    /// Returns `false` for a stale response.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<CardPage, SearchError>,
    ) -> bool {
        self.controller.complete(ticket, result)
    }
}

/// Web search service: owns the session and mirrors it into the UI store
pub struct WebSearchService {
    session: SearchSession,
    store: Store<SearchUiState>,
    config: ApiConfig,
}

impl WebSearchService {
    pub fn new(
        store: Store<SearchUiState>,
        config: ApiConfig,
        initial_query: Option<String>,
    ) -> Self {
        Self {
            session: SearchSession::new(initial_query),
            store,
            config,
        }
    }

    /// Reduce a user action. Returns the fetch it issued, if any.
    pub fn dispatch(&mut self, action: SearchAction) -> Option<FetchRequest> {
        let request = self.session.dispatch(action);
        self.sync_to_store();
        request
    }

    pub fn submit_initial(&mut self) -> Option<FetchRequest> {
        let request = self.session.submit_initial();
        self.sync_to_store();
        request
    }

    /// Reduce the outcome of a fetch issued by [`dispatch`](Self::dispatch).
    pub fn complete(&mut self, ticket: RequestTicket, result: Result<CardPage, SearchError>) {
        if !self.session.complete(ticket, result) {
            warn!("Dropped stale card search response {:?}", ticket);
            return;
        }
        self.sync_to_store();
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn sync_to_store(&mut self) {
        self.store.set(SearchUiState::from_controller(self.session.controller()));
    }
}

/// Dispatch `action` and, if it issued a fetch, run it in the background.
///
/// Safe to call from an effect: the service is only written and peeked, so
/// the caller never subscribes to it.
pub fn run_action(mut service: Signal<WebSearchService>, action: SearchAction) {
    let request = service.write().dispatch(action);
    if let Some(request) = request {
        start_fetch(service, request);
    }
}

/// Run the deep-link search, at most once per service.
pub fn run_initial_search(mut service: Signal<WebSearchService>) {
    let request = service.write().submit_initial();
    if let Some(request) = request {
        start_fetch(service, request);
    }
}

fn start_fetch(mut service: Signal<WebSearchService>, request: FetchRequest) {
    info!("Searching cards for {:?} (page {})", request.query, request.page);
    let config = service.peek().config().clone();

    spawn(async move {
        let result = api::fetch_cards(&config, &request).await;
        match &result {
            Ok(page) => info!(
                "Got {} of {} cards for {:?}",
                page.data.len(),
                page.total_count,
                request.query
            ),
            Err(e) => warn!(
                "Card search for {:?} page {} failed: {}",
                request.query, request.page, e
            ),
        }
        service.write().complete(request.ticket, result);
    });
}
