use tracing::debug;

use crate::card::{Card, CardPage};
use crate::SearchError;

/// Results per page. Fixed: the UI and the page arithmetic both assume it.
pub const PAGE_SIZE: u32 = 10;

/// Number of pages needed for `total_count` results.
pub fn total_pages(total_count: u32) -> u32 {
    total_count.div_ceil(PAGE_SIZE)
}

/// Identifies one issued request. Increases monotonically per controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(pub u64);

/// A fetch the caller must perform and report back via [`SearchController::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: RequestTicket,
    pub query: String,
    pub page: u32,
    pub page_size: u32,
}

/// Loading and error are mutually exclusive, so they share one tag.
///
/// A pending request's query and page only reach [`PageState`] when it succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading {
        ticket: RequestTicket,
        query: String,
        page: u32,
    },
    Failed(String),
}

/// Query, results and pagination cursor of one search session
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    /// Trimmed query of the results on display
    pub query: String,
    pub results: Vec<Card>,
    pub current_page: u32,
    pub total_count: u32,
    pub status: LoadStatus,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            current_page: 1,
            total_count: 0,
            status: LoadStatus::Idle,
        }
    }
}

impl PageState {
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_count)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// User intents and fetch outcomes the controller reduces
#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    Submit(String),
    GoToPage(u32),
    NextPage,
    PrevPage,
    Completed {
        ticket: RequestTicket,
        result: Result<CardPage, SearchError>,
    },
    Select(Card),
    ClearSelection,
}

/// Search-and-pagination state machine.
///
/// Pure: it never performs I/O. Operations that need data return a
/// [`FetchRequest`]; the caller runs it and hands the outcome to
/// [`complete`](Self::complete). At most one request is outstanding, and
/// a response whose ticket is not the latest one issued is discarded.
#[derive(Debug, Default)]
pub struct SearchController {
    page: PageState,
    selected: Option<Card>,
    last_ticket: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action. Returns the fetch to perform, if the action issued one.
    pub fn reduce(&mut self, action: SearchAction) -> Option<FetchRequest> {
        match action {
            SearchAction::Submit(query) => self.submit_search(&query),
            SearchAction::GoToPage(n) => self.go_to_page(n),
            SearchAction::NextPage => self.next_page(),
            SearchAction::PrevPage => self.prev_page(),
            SearchAction::Completed { ticket, result } => {
                self.complete(ticket, result);
                None
            }
            SearchAction::Select(card) => {
                self.select(card);
                None
            }
            SearchAction::ClearSelection => {
                self.clear_selection();
                None
            }
        }
    }

    /// Start a new search for page 1.
    ///
    /// Blank queries are ignored, as is any submission while a request is in flight.
    pub fn submit_search(&mut self, query: &str) -> Option<FetchRequest> {
        let query = query.trim();
        if query.is_empty() || self.page.is_loading() {
            return None;
        }
        Some(self.issue(query.to_string(), 1))
    }

    /// Fetch page `n` of the committed query.
    ///
    /// No-op outside `[1, total_pages]` or while a request is in flight.
    pub fn go_to_page(&mut self, n: u32) -> Option<FetchRequest> {
        if n < 1 || n > self.page.total_pages() || self.page.is_loading() {
            return None;
        }
        let query = self.page.query.clone();
        Some(self.issue(query, n))
    }

    pub fn next_page(&mut self) -> Option<FetchRequest> {
        self.go_to_page(self.page.current_page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> Option<FetchRequest> {
        self.go_to_page(self.page.current_page.saturating_sub(1))
    }

    fn issue(&mut self, query: String, page: u32) -> FetchRequest {
        self.last_ticket += 1;
        let ticket = RequestTicket(self.last_ticket);
        self.page.status = LoadStatus::Loading {
            ticket,
            query: query.clone(),
            page,
        };
        FetchRequest {
            ticket,
            query,
            page,
            page_size: PAGE_SIZE,
        }
    }

    /// Reduce the outcome of a fetch.
    ///
    /// Returns `false` when the outcome was discarded because `ticket` is
    /// not the request currently awaited. On failure the previous results,
    /// query and page stay visible next to the error.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<CardPage, SearchError>,
    ) -> bool {
        let (query, requested_page) = match &self.page.status {
            LoadStatus::Loading {
                ticket: pending,
                query,
                page,
            } if *pending == ticket => (query.clone(), *page),
            _ => {
                debug!("Discarding response for stale request {:?}", ticket);
                return false;
            }
        };

        match result {
            Ok(card_page) => {
                self.page.query = query;
                self.page.results = card_page.data;
                self.page.total_count = card_page.total_count;
                let last_page = self.page.total_pages().max(1);
                self.page.current_page = requested_page.clamp(1, last_page);
                self.page.status = LoadStatus::Idle;
            }
            Err(err) => {
                self.page.status = LoadStatus::Failed(err.user_message());
            }
        }
        true
    }

    pub fn select(&mut self, card: Card) {
        self.selected = Some(card);
    }

    /// Returns whether a selection was actually cleared.
    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }

    pub fn state(&self) -> &PageState {
        &self.page
    }

    pub fn selected(&self) -> Option<&Card> {
        self.selected.as_ref()
    }

    pub fn results(&self) -> &[Card] {
        &self.page.results
    }

    pub fn has_results(&self) -> bool {
        !self.page.results.is_empty()
    }

    pub fn total_pages(&self) -> u32 {
        self.page.total_pages()
    }

    pub fn is_loading(&self) -> bool {
        self.page.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.page.error()
    }

    pub fn can_go_prev(&self) -> bool {
        !self.is_loading() && self.total_pages() > 0 && self.page.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_loading() && self.page.current_page < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardImages;
    use crate::error::SEARCH_FAILED_MESSAGE;

    fn card(id: &str) -> Card {
        Card {
            id: id.to_string(),
            name: format!("Card {id}"),
            images: CardImages {
                small: format!("{id}.png"),
                large: format!("{id}_hires.png"),
            },
            supertype: None,
            subtypes: None,
            level: None,
            hp: None,
            types: None,
            evolves_to: None,
            attacks: None,
            weaknesses: None,
            retreat_cost: None,
            converted_retreat_cost: None,
            set: None,
            number: None,
            artist: None,
            rarity: None,
            flavor_text: None,
            national_pokedex_numbers: None,
            legalities: None,
            tcgplayer: None,
            cardmarket: None,
        }
    }

    fn page_of(total_count: u32, ids: &[&str]) -> CardPage {
        CardPage {
            data: ids.iter().map(|id| card(id)).collect(),
            total_count,
            page: None,
            page_size: Some(PAGE_SIZE),
            count: Some(ids.len() as u32),
        }
    }

    /// Controller after a successful page-1 search for "Pikachu" with 25 results.
    fn pikachu_searched() -> SearchController {
        let mut c = SearchController::new();
        let req = c.submit_search("Pikachu").unwrap();
        assert!(c.complete(req.ticket, Ok(page_of(25, &["a", "b"]))));
        c
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(25), 3);
    }

    #[test]
    fn test_blank_query_leaves_state_unchanged() {
        let mut c = pikachu_searched();
        let before = c.state().clone();
        for q in ["", "   ", "\t\n"] {
            assert_eq!(c.submit_search(q), None);
            assert_eq!(c.state(), &before);
        }
    }

    #[test]
    fn test_submit_issues_page_one_and_sets_loading() {
        let mut c = SearchController::new();
        let req = c.submit_search("  Pikachu ").unwrap();
        assert_eq!(req.query, "Pikachu");
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, PAGE_SIZE);
        assert!(c.is_loading());
        assert_eq!(c.error(), None);
    }

    #[test]
    fn test_submit_clears_previous_error() {
        let mut c = SearchController::new();
        let req = c.submit_search("Pikachu").unwrap();
        c.complete(req.ticket, Err(SearchError::Status(500)));
        assert!(c.error().is_some());

        c.submit_search("Pikachu").unwrap();
        assert!(c.is_loading());
        assert_eq!(c.error(), None);
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let mut c = SearchController::new();
        let first = c.submit_search("Pikachu").unwrap();
        assert_eq!(c.submit_search("Raichu"), None);
        assert!(c.complete(first.ticket, Ok(page_of(1, &["a"]))));
        assert_eq!(c.state().query, "Pikachu");
    }

    #[test]
    fn test_success_updates_page_state() {
        let c = pikachu_searched();
        assert_eq!(c.state().current_page, 1);
        assert_eq!(c.state().total_count, 25);
        assert_eq!(c.total_pages(), 3);
        assert_eq!(c.results().len(), 2);
        assert!(!c.is_loading());
        assert_eq!(c.error(), None);
    }

    #[test]
    fn test_first_page_of_three_enables_only_next() {
        let c = pikachu_searched();
        assert!(c.can_go_next());
        assert!(!c.can_go_prev());
    }

    #[test]
    fn test_last_page_enables_only_prev() {
        let mut c = pikachu_searched();
        let req = c.go_to_page(3).unwrap();
        assert_eq!(req.query, "Pikachu");
        assert_eq!(req.page, 3);
        c.complete(req.ticket, Ok(page_of(25, &["y", "z"])));

        assert_eq!(c.state().current_page, 3);
        assert!(!c.can_go_next());
        assert!(c.can_go_prev());
    }

    #[test]
    fn test_go_to_page_outside_range_is_noop() {
        let mut c = pikachu_searched();
        let before = c.state().clone();
        assert_eq!(c.go_to_page(0), None);
        assert_eq!(c.go_to_page(4), None);
        assert_eq!(c.state(), &before);
    }

    #[test]
    fn test_go_to_page_without_results_is_noop() {
        let mut c = SearchController::new();
        assert_eq!(c.go_to_page(1), None);
        assert_eq!(c.next_page(), None);
        assert_eq!(c.prev_page(), None);
        assert!(!c.can_go_next());
        assert!(!c.can_go_prev());
    }

    #[test]
    fn test_go_to_page_while_loading_is_noop() {
        let mut c = pikachu_searched();
        let pending = c.next_page().unwrap();
        assert_eq!(c.go_to_page(3), None);
        assert_eq!(c.prev_page(), None);
        assert!(!c.can_go_next());
        assert!(!c.can_go_prev());
        assert!(c.complete(pending.ticket, Ok(page_of(25, &["c"]))));
        assert_eq!(c.state().current_page, 2);
    }

    #[test]
    fn test_next_and_prev_step_by_one() {
        let mut c = pikachu_searched();
        let next = c.next_page().unwrap();
        assert_eq!(next.page, 2);
        c.complete(next.ticket, Ok(page_of(25, &["c"])));

        let prev = c.prev_page().unwrap();
        assert_eq!(prev.page, 1);
    }

    #[test]
    fn test_failure_sets_error_and_keeps_results() {
        let mut c = pikachu_searched();
        let req = c.next_page().unwrap();
        assert!(c.complete(req.ticket, Err(SearchError::Transport("offline".into()))));

        assert_eq!(c.error(), Some(SEARCH_FAILED_MESSAGE));
        assert!(!c.is_loading());
        assert_eq!(c.results().len(), 2);
        assert_eq!(c.state().current_page, 1);
    }

    #[test]
    fn test_decode_failure_behaves_like_transport_failure() {
        let mut c = SearchController::new();
        let req = c.submit_search("Pikachu").unwrap();
        c.complete(req.ticket, Err(SearchError::Decode("missing field".into())));
        assert_eq!(c.error(), Some(SEARCH_FAILED_MESSAGE));
        assert!(!c.is_loading());
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut c = pikachu_searched();
        let before = c.state().clone();
        assert!(!c.complete(RequestTicket(1), Ok(page_of(99, &["x"]))));
        assert_eq!(c.state(), &before);

        let req = c.next_page().unwrap();
        assert!(!c.complete(RequestTicket(req.ticket.0 + 7), Ok(page_of(99, &["x"]))));
        assert!(c.is_loading());
    }

    #[test]
    fn test_tickets_increase() {
        let mut c = SearchController::new();
        let a = c.submit_search("a").unwrap();
        c.complete(a.ticket, Ok(page_of(30, &["1"])));
        let b = c.next_page().unwrap();
        assert!(b.ticket > a.ticket);
    }

    #[test]
    fn test_page_clamped_when_results_shrink() {
        let mut c = pikachu_searched();
        let req = c.go_to_page(3).unwrap();
        c.complete(req.ticket, Ok(page_of(5, &[])));
        assert_eq!(c.total_pages(), 1);
        assert_eq!(c.state().current_page, 1);

        let req = c.submit_search("Missingno").unwrap();
        c.complete(req.ticket, Ok(page_of(0, &[])));
        assert_eq!(c.state().current_page, 1);
        assert!(!c.has_results());
        assert!(!c.can_go_next());
    }

    #[test]
    fn test_new_search_resets_to_page_one() {
        let mut c = pikachu_searched();
        let req = c.go_to_page(2).unwrap();
        c.complete(req.ticket, Ok(page_of(25, &["c"])));

        let req = c.submit_search("Raichu").unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(req.query, "Raichu");
        assert!(c.complete(req.ticket, Ok(page_of(4, &["r"]))));
        assert_eq!(c.state().current_page, 1);
        assert_eq!(c.state().query, "Raichu");
    }

    #[test]
    fn test_failed_submit_keeps_shown_query_and_page() {
        let mut c = pikachu_searched();
        let req = c.go_to_page(3).unwrap();
        c.complete(req.ticket, Ok(page_of(25, &["y", "z"])));

        let req = c.submit_search("Raichu").unwrap();
        assert_eq!(c.state().query, "Pikachu");
        assert_eq!(c.state().current_page, 3);
        assert!(c.complete(req.ticket, Err(SearchError::Status(503))));

        assert_eq!(c.error(), Some(SEARCH_FAILED_MESSAGE));
        assert_eq!(c.state().query, "Pikachu");
        assert_eq!(c.state().current_page, 3);
        assert_eq!(c.results().len(), 2);
        assert!(!c.can_go_next());

        let prev = c.prev_page().unwrap();
        assert_eq!(prev.query, "Pikachu");
        assert_eq!(prev.page, 2);
    }

    #[test]
    fn test_select_and_clear_idempotent() {
        let mut c = pikachu_searched();
        let chosen = c.results()[1].clone();
        c.select(chosen.clone());
        assert_eq!(c.selected(), Some(&chosen));

        assert!(c.clear_selection());
        assert_eq!(c.selected(), None);
        assert!(!c.clear_selection());
        assert_eq!(c.selected(), None);
    }

    #[test]
    fn test_select_replaces_previous_selection() {
        let mut c = SearchController::new();
        c.select(card("a"));
        c.select(card("b"));
        assert_eq!(c.selected().map(|c| c.id.as_str()), Some("b"));
    }

    #[test]
    fn test_reduce_routes_actions() {
        let mut c = SearchController::new();
        let req = c.reduce(SearchAction::Submit("Pikachu".into())).unwrap();
        assert_eq!(
            c.reduce(SearchAction::Completed {
                ticket: req.ticket,
                result: Ok(page_of(25, &["a"])),
            }),
            None
        );
        assert_eq!(c.reduce(SearchAction::NextPage).map(|r| r.page), Some(2));
        assert_eq!(c.reduce(SearchAction::Select(card("a"))), None);
        assert!(c.selected().is_some());
        c.reduce(SearchAction::ClearSelection);
        assert!(c.selected().is_none());
    }
}
