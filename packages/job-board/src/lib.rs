//! Remote jobs board core.
//!
//! Framework-independent state behind the job board page: the pending/active
//! search term, page-number pagination, the request cache keyed by
//! (page, search term), and render-ready view models. The Dioxus frontend in
//! `packages/web` is a thin shell over these types.
//!
//! # Example
//!
//! ```rust,ignore
//! use job_board::{BoardConfig, JobBoard, SearchParams};
//! use remotive_client::RemotiveClient;
//!
//! let jobs = JobBoard::new(RemotiveClient::new(), BoardConfig::default());
//! let mut board = jobs.board(&SearchParams::from("q=rust"));
//!
//! jobs.sync(&mut board).await;
//! for card in board.cards() {
//!     println!("{} at {}", card.title, card.company);
//! }
//! println!("{}", board.pagination_view().summary);
//! ```
//!
//! # Modules
//!
//! - [`board`] - Event-driven board state and the cached loader
//! - [`cache`] - Keyed request cache with stale-while-revalidate and retries
//! - [`pagination`] - Page count, navigation clamping, page-number window
//! - [`search`] - Pending/active search term and the `?q=` URL form
//! - [`view`] - Job card and pagination bar view models
//! - [`testing`] - Mock job source and manual clock

pub mod board;
pub mod cache;
pub mod config;
pub mod error;
pub mod pagination;
pub mod query;
pub mod search;
pub mod source;
pub mod testing;
pub mod view;

pub use board::{Board, JobBoard, ListingState, Ticket};
pub use cache::{Cached, Clock, QueryCache, RetryPolicy, Sleeper, SystemClock, SystemSleeper};
pub use config::BoardConfig;
pub use error::FetchFailure;
pub use pagination::Pagination;
pub use query::QueryKey;
pub use search::{SearchParams, SearchState};
pub use source::JobSource;
pub use view::{JobCardView, PageLink, PaginationView};
