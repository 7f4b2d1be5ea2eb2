//! Root application component

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::JobsProvider;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Remote Jobs" }

        // Utility classes
        document::Script { src: "https://cdn.tailwindcss.com" }

        // One job board (and request cache) for the lifetime of the app
        JobsProvider {
            Router::<Route> {}
        }
    }
}
