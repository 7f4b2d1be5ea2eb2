//! Home page: search box, job grid and pagination

use dioxus::prelude::*;
use job_board::{ListingState, SearchParams};

use crate::components::{ErrorView, JobCard, LoadingJobs, PaginationControls, SearchJobs};
use crate::routes::Route;
use crate::state::use_jobs;

/// Home page - paginated remote job listings with free-text search
#[component]
pub fn Home(query: SearchParams) -> Element {
    let jobs = use_jobs();
    let navigator = use_navigator();

    let mut board = use_signal({
        let jobs = jobs.clone();
        let query = query.clone();
        move || jobs.board(&query)
    });

    // Follow back/forward navigation
    use_effect(use_reactive!(|query| {
        board.write().apply_url(&query);
    }));

    // Fetch whenever the (page, active term) key moves
    let key = use_memo(move || board.read().query_key());
    use_effect(move || {
        let _ = key();
        let Some(ticket) = board.write().begin_fetch() else {
            return;
        };

        let jobs = jobs.clone();
        spawn(async move {
            if let Some(cached) = jobs.cached(ticket.key()).await {
                board.write().preview(&ticket, cached.value);
            }
            let result = jobs.load(ticket.key()).await;
            board.write().resolve(&ticket, result);
        });
    });

    let on_submit = move |_: ()| {
        board.write().submit();
        let params = board.read().params();
        navigator.push(Route::listing(params));
    };

    let on_clear = move |_: ()| {
        board.write().clear();
        navigator.push(Route::listing(SearchParams::default()));
    };

    let state = board.read();
    let listing = state.listing().clone();
    let cards = state.cards();
    let pagination = state.pagination_view();
    let pending = state.search().pending().to_string();
    let can_clear = state.search().can_clear();
    drop(state);

    rsx! {
        div {
            class: "container max-w-[80%] mx-auto p-4",

            Link {
                to: Route::listing(SearchParams::default()),
                h1 {
                    class: "text-3xl font-bold text-center mb-8",
                    "Remote Jobs"
                }
            }

            SearchJobs {
                pending: pending,
                can_clear: can_clear,
                on_input: move |text: String| board.write().edit(text),
                on_submit: on_submit,
                on_clear: on_clear,
            }

            {match listing {
                ListingState::Loading => rsx! {
                    LoadingJobs {}
                },
                ListingState::Failed(failure) => rsx! {
                    ErrorView { message: failure.message().to_string() }
                },
                ListingState::Ready(_) => rsx! {
                    // Jobs Grid
                    div {
                        class: "grid gap-6",
                        for card in cards {
                            JobCard { key: "{card.id}", job: card.clone() }
                        }
                    }

                    PaginationControls {
                        view: pagination,
                        on_navigate: move |page: u32| {
                            board.write().go_to_page(page);
                        },
                    }
                },
            }}
        }
    }
}
