//! Search + pagination state machine and the cached loader behind it.
//!
//! [`Board`] is plain synchronous state driven by UI events. It never does
//! I/O: when its query key moves it hands out a [`Ticket`], and only a
//! response presented with the ticket for the *current* key is accepted.
//! Responses for keys the user has already navigated away from are dropped.
//!
//! [`JobBoard`] owns the request cache and the job source and turns a
//! ticket into a listing page.

use std::sync::Arc;

use remotive_client::ListingPage;

use crate::cache::{Cached, QueryCache};
use crate::config::BoardConfig;
use crate::error::FetchFailure;
use crate::pagination::Pagination;
use crate::query::QueryKey;
use crate::search::{SearchParams, SearchState};
use crate::source::JobSource;
use crate::view::{job_cards, JobCardView, PaginationView};

/// What the listing area shows. Loading and failure replace the whole view.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingState {
    Loading,
    Failed(FetchFailure),
    Ready(Arc<ListingPage>),
}

/// Permission to publish the result of one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    key: QueryKey,
    generation: u64,
}

impl Ticket {
    pub fn key(&self) -> &QueryKey {
        &self.key
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    search: SearchState,
    pagination: Pagination,
    listing: ListingState,
    generation: u64,
    in_flight: Option<Ticket>,
    shown: Option<QueryKey>,
}

impl Board {
    /// Fresh board, seeded from the page URL.
    pub fn new(config: &BoardConfig, params: &SearchParams) -> Self {
        Self {
            search: SearchState::new(params.q()),
            pagination: Pagination::new(config.page_size, config.window_size),
            listing: ListingState::Loading,
            generation: 0,
            in_flight: None,
            shown: None,
        }
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn listing(&self) -> &ListingState {
        &self.listing
    }

    pub fn current_page(&self) -> u32 {
        self.pagination.current_page()
    }

    pub fn query_key(&self) -> QueryKey {
        QueryKey::new(
            self.pagination.current_page(),
            self.search.active().map(str::to_string),
        )
    }

    /// URL parameters for the address bar.
    pub fn params(&self) -> SearchParams {
        self.search.params()
    }

    /// Keystroke in the search box. Never changes the query key.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.search.edit(text);
    }

    /// Commit the pending term and go back to page 1.
    pub fn submit(&mut self) {
        self.search.submit();
        self.pagination.reset();
    }

    /// Drop the search term and go back to page 1.
    pub fn clear(&mut self) {
        self.search.clear();
        self.pagination.reset();
    }

    /// Follow an address-bar change (back/forward). Returns true if the
    /// active term moved, in which case the page is back at 1.
    pub fn apply_url(&mut self, params: &SearchParams) -> bool {
        let changed = self.search.apply_url(params.q());
        if changed {
            self.pagination.reset();
        }
        changed
    }

    /// Navigate to page `n`; out-of-range pages are ignored.
    pub fn go_to_page(&mut self, n: u32) -> bool {
        self.pagination.go_to_page(n)
    }

    /// Start a fetch for the current key, unless it is already loading or
    /// on screen.
    pub fn begin_fetch(&mut self) -> Option<Ticket> {
        let key = self.query_key();
        let pending = self.in_flight.as_ref().is_some_and(|t| t.key == key);
        let showing = self.in_flight.is_none() && self.shown.as_ref() == Some(&key);
        if pending || showing {
            return None;
        }

        self.generation += 1;
        let ticket = Ticket {
            key,
            generation: self.generation,
        };
        self.in_flight = Some(ticket.clone());
        self.listing = ListingState::Loading;
        Some(ticket)
    }

    /// Show cached data for `ticket` while its refresh is still running.
    pub fn preview(&mut self, ticket: &Ticket, page: Arc<ListingPage>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.show(ticket, page);
        true
    }

    /// Publish the outcome of a fetch. Returns false (and changes nothing)
    /// if the ticket has been superseded.
    pub fn resolve(&mut self, ticket: &Ticket, result: Result<Arc<ListingPage>, FetchFailure>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                page = ticket.key.page,
                search = ?ticket.key.search,
                "Discarding response for superseded query"
            );
            return false;
        }

        self.in_flight = None;
        match result {
            Ok(page) => self.show(ticket, page),
            Err(failure) => {
                tracing::warn!(error = %failure, "Job listing failed to load");
                self.shown = None;
                self.listing = ListingState::Failed(failure);
            }
        }
        true
    }

    /// Cards for the listing on screen; empty while loading or failed.
    pub fn cards(&self) -> Vec<JobCardView> {
        match &self.listing {
            ListingState::Ready(page) => job_cards(page),
            _ => Vec::new(),
        }
    }

    pub fn pagination_view(&self) -> PaginationView {
        PaginationView::from(&self.pagination)
    }

    fn is_current(&self, ticket: &Ticket) -> bool {
        self.in_flight.as_ref() == Some(ticket) && ticket.key == self.query_key()
    }

    fn show(&mut self, ticket: &Ticket, page: Arc<ListingPage>) {
        self.pagination.set_total_count(page.total_job_count);
        self.shown = Some(ticket.key.clone());
        self.listing = ListingState::Ready(page);
    }
}

/// Listing pages through a shared request cache.
///
/// Construct once at startup and hand it down; clones share the cache.
pub struct JobBoard<S> {
    source: Arc<S>,
    cache: QueryCache<QueryKey, ListingPage, FetchFailure>,
    config: BoardConfig,
}

impl<S> Clone for JobBoard<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            cache: self.cache.clone(),
            config: self.config.clone(),
        }
    }
}

impl<S: JobSource> JobBoard<S> {
    pub fn new(source: S, config: BoardConfig) -> Self {
        let cache = QueryCache::new(config.stale_time, config.gc_time).with_retry(config.retry);
        Self::with_cache(source, config, cache)
    }

    pub fn with_cache(
        source: S,
        config: BoardConfig,
        cache: QueryCache<QueryKey, ListingPage, FetchFailure>,
    ) -> Self {
        Self {
            source: Arc::new(source),
            cache,
            config,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> &QueryCache<QueryKey, ListingPage, FetchFailure> {
        &self.cache
    }

    /// A fresh board using this board's page and window sizes.
    pub fn board(&self, params: &SearchParams) -> Board {
        Board::new(&self.config, params)
    }

    /// Cached page for `key`, fresh or stale.
    pub async fn cached(&self, key: &QueryKey) -> Option<Cached<ListingPage>> {
        self.cache.peek(key).await
    }

    /// Fresh page for `key`, from cache or from the source. Transient
    /// failures are retried by the cache before they surface.
    pub async fn load(&self, key: &QueryKey) -> Result<Arc<ListingPage>, FetchFailure> {
        let request = key.to_request(self.config.page_size);
        let source = &self.source;
        let request = &request;
        self.cache
            .fetch(key, move || async move {
                source
                    .fetch_listing(request)
                    .await
                    .map_err(FetchFailure::from)
            })
            .await
    }

    /// Bring `board` up to date in one step: show any cached page at once,
    /// then publish the fresh one. Returns false if nothing needed loading.
    pub async fn sync(&self, board: &mut Board) -> bool {
        let Some(ticket) = board.begin_fetch() else {
            return false;
        };
        if let Some(cached) = self.cached(ticket.key()).await {
            board.preview(&ticket, cached.value);
        }
        let result = self.load(ticket.key()).await;
        board.resolve(&ticket, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::listing;

    fn board() -> Board {
        Board::new(&BoardConfig::default(), &SearchParams::default())
    }

    fn ready(board: &Board) -> &ListingPage {
        match board.listing() {
            ListingState::Ready(page) => page,
            other => panic!("expected ready listing, got {other:?}"),
        }
    }

    #[test]
    fn test_edit_does_not_start_fetch() {
        let mut board = board();
        let ticket = board.begin_fetch().unwrap();
        board.resolve(&ticket, Ok(Arc::new(listing(95, &["a"]))));

        board.edit("rust");
        assert!(board.begin_fetch().is_none());
        assert_eq!(board.query_key(), QueryKey::new(1, None));
    }

    #[test]
    fn test_submit_resets_page() {
        let mut board = board();
        let ticket = board.begin_fetch().unwrap();
        board.resolve(&ticket, Ok(Arc::new(listing(95, &["a"]))));
        assert!(board.go_to_page(7));

        board.edit("rust");
        board.submit();

        let ticket = board.begin_fetch().unwrap();
        assert_eq!(ticket.key(), &QueryKey::new(1, Some("rust".into())));
    }

    #[test]
    fn test_submit_then_clear_round_trip() {
        let mut board = board();
        board.edit("golang");
        board.submit();
        board.clear();

        assert_eq!(board.search(), &SearchState::default());
        assert_eq!(board.current_page(), 1);
        assert_eq!(board.params(), SearchParams::default());
        assert_eq!(board.query_key(), QueryKey::new(1, None));
    }

    #[test]
    fn test_superseded_response_is_discarded() {
        let mut board = board();
        let all = board.begin_fetch().unwrap();

        board.edit("rust");
        board.submit();
        let rust = board.begin_fetch().unwrap();

        assert!(board.resolve(&rust, Ok(Arc::new(listing(3, &["rust dev"])))));
        assert!(!board.resolve(&all, Ok(Arc::new(listing(95, &["anything"])))));

        assert_eq!(ready(&board).jobs[0].title, "rust dev");
        assert_eq!(board.pagination().total_count(), 3);
    }

    #[test]
    fn test_returning_to_old_key_ignores_old_ticket() {
        let mut board = board();
        let first = board.begin_fetch().unwrap();

        board.edit("rust");
        board.submit();
        let _rust = board.begin_fetch().unwrap();

        board.clear();
        let again = board.begin_fetch().unwrap();
        assert_eq!(first.key(), again.key());

        assert!(!board.resolve(&first, Ok(Arc::new(listing(1, &["old"])))));
        assert!(board.resolve(&again, Ok(Arc::new(listing(2, &["new"])))));
        assert_eq!(ready(&board).jobs[0].title, "new");
    }

    #[test]
    fn test_failure_replaces_listing() {
        let mut board = board();
        let ticket = board.begin_fetch().unwrap();
        assert_eq!(board.listing(), &ListingState::Loading);

        board.resolve(&ticket, Err(FetchFailure::new("Failed to fetch jobs (HTTP 500)")));
        assert_eq!(
            board.listing(),
            &ListingState::Failed(FetchFailure::new("Failed to fetch jobs (HTTP 500)"))
        );
        assert!(board.cards().is_empty());

        // A failed key is retried on the next sync.
        assert!(board.begin_fetch().is_some());
    }

    #[test]
    fn test_apply_url_resets_page_only_on_change() {
        let mut board = board();
        let ticket = board.begin_fetch().unwrap();
        board.resolve(&ticket, Ok(Arc::new(listing(95, &["a"]))));
        board.go_to_page(4);

        assert!(!board.apply_url(&SearchParams::default()));
        assert_eq!(board.current_page(), 4);

        assert!(board.apply_url(&SearchParams::new(Some("design"))));
        assert_eq!(board.current_page(), 1);
        assert_eq!(board.search().pending(), "design");
    }

    #[test]
    fn test_navigation_outside_known_pages_is_ignored() {
        let mut board = board();
        let ticket = board.begin_fetch().unwrap();
        board.resolve(&ticket, Ok(Arc::new(listing(95, &["a"]))));

        assert!(board.go_to_page(10));
        assert!(!board.go_to_page(11));
        assert_eq!(board.current_page(), 10);
    }
}
