//! Route definitions for the application

use dioxus::prelude::*;
use job_board::SearchParams;

use crate::pages::Home;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    // `?q=` carries the active search term; no `q` means no search
    #[route("/?:..query")]
    Home { query: SearchParams },
}

impl Route {
    /// Listing route for the given search parameters.
    pub fn listing(query: SearchParams) -> Self {
        Route::Home { query }
    }
}
