//! Pagination controls

use dioxus::prelude::*;
use job_board::PaginationView;

const BUTTON: &str = "px-3 py-2 mx-1 rounded transition-colors";
const ENABLED: &str = "bg-gray-200 text-gray-700 hover:bg-gray-300";
const DISABLED: &str = "bg-gray-100 text-gray-400 cursor-not-allowed";
const CURRENT: &str = "bg-blue-500 text-white";

/// Props for PaginationControls
#[derive(Props, Clone, PartialEq)]
pub struct PaginationControlsProps {
    pub view: PaginationView,
    /// Requested page number; the board ignores out-of-range pages
    pub on_navigate: EventHandler<u32>,
}

/// Summary line plus First / Previous / page numbers / Next / Last
#[component]
pub fn PaginationControls(props: PaginationControlsProps) -> Element {
    let view = &props.view;
    let on_navigate = props.on_navigate;
    let current = view.current_page;
    let total_pages = view.total_pages;

    let previous_class = step_class(view.previous_enabled);
    let next_class = step_class(view.next_enabled);

    rsx! {
        div {
            class: "mt-8 flex flex-col items-center gap-4",
            div {
                class: "text-sm text-gray-600",
                "{view.summary}"
            }

            div {
                class: "flex items-center gap-2 flex-wrap justify-center",

                if view.show_first {
                    button {
                        class: "{BUTTON} {ENABLED}",
                        onclick: move |_| on_navigate.call(1),
                        "First"
                    }
                }

                button {
                    class: "{previous_class}",
                    disabled: !view.previous_enabled,
                    onclick: move |_| on_navigate.call(current.saturating_sub(1)),
                    "Previous"
                }

                for link in view.pages.iter().copied() {
                    button {
                        key: "{link.number}",
                        class: "{page_class(link.current)}",
                        onclick: move |_| on_navigate.call(link.number),
                        "{link.number}"
                    }
                }

                button {
                    class: "{next_class}",
                    disabled: !view.next_enabled,
                    onclick: move |_| on_navigate.call(current.saturating_add(1)),
                    "Next"
                }

                if view.show_last {
                    button {
                        class: "{BUTTON} {ENABLED}",
                        onclick: move |_| on_navigate.call(total_pages),
                        "Last"
                    }
                }
            }
        }
    }
}

fn step_class(enabled: bool) -> String {
    format!("{BUTTON} {}", if enabled { ENABLED } else { DISABLED })
}

fn page_class(current: bool) -> String {
    format!("{BUTTON} {}", if current { CURRENT } else { ENABLED })
}
