//! Search form

use dioxus::prelude::*;

/// Props for SearchJobs
#[derive(Props, Clone, PartialEq)]
pub struct SearchJobsProps {
    /// Text currently in the box (not yet searched)
    pub pending: String,
    pub can_clear: bool,
    pub on_input: EventHandler<String>,
    pub on_submit: EventHandler<()>,
    pub on_clear: EventHandler<()>,
}

/// Free-text search box. Typing never fetches; only Search and Clear do.
#[component]
pub fn SearchJobs(props: SearchJobsProps) -> Element {
    let on_submit = props.on_submit;
    let on_clear = props.on_clear;
    let on_input = props.on_input;

    rsx! {
        form {
            class: "mb-8",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            div {
                class: "flex gap-2 max-w-md mx-auto",
                input {
                    r#type: "text",
                    value: "{props.pending}",
                    oninput: move |e| on_input.call(e.value()),
                    placeholder: "Search jobs...",
                    class: "flex-1 px-4 py-2 border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                }
                button {
                    r#type: "submit",
                    class: "px-6 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition-colors",
                    "Search"
                }
                if props.can_clear {
                    button {
                        r#type: "button",
                        class: "px-4 py-2 bg-gray-500 text-white rounded-lg hover:bg-gray-600 transition-colors",
                        onclick: move |_| on_clear.call(()),
                        "Clear"
                    }
                }
            }
        }
    }
}
