//! Listing placeholders: loading and failure

use dioxus::prelude::*;

/// Skeleton cards standing in for the job grid while a page loads
#[component]
pub fn LoadingJobs(#[props(default = 3)] placeholders: usize) -> Element {
    rsx! {
        div {
            role: "status",
            aria_live: "polite",
            class: "grid gap-6",
            p { class: "text-center text-gray-500", "Loading..." }
            for index in 0..placeholders {
                div {
                    key: "{index}",
                    class: "border p-6 rounded-lg flex items-start gap-4 animate-pulse",
                    div { class: "w-16 h-16 bg-gray-200 rounded" }
                    div {
                        class: "flex-1 space-y-3",
                        div { class: "h-5 w-1/2 bg-gray-200 rounded" }
                        div { class: "h-4 w-1/3 bg-gray-100 rounded" }
                        div { class: "h-4 w-1/4 bg-gray-100 rounded" }
                    }
                }
            }
        }
    }
}

/// Replaces the job grid when a page failed to load
#[component]
pub fn ErrorView(message: String) -> Element {
    rsx! {
        div {
            role: "alert",
            class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
            "Error: {message}"
        }
    }
}
