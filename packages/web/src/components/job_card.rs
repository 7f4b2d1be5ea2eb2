//! Job card component

use dioxus::prelude::*;
use job_board::JobCardView;

/// Props for JobCard
#[derive(Props, Clone, PartialEq)]
pub struct JobCardProps {
    pub job: JobCardView,
}

/// Job card component displaying a single posting
#[component]
pub fn JobCard(props: JobCardProps) -> Element {
    let job = &props.job;
    let initial = job
        .company
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());

    rsx! {
        div {
            class: "border p-6 rounded-lg shadow-md hover:shadow-lg transition-shadow",
            div {
                class: "flex items-start gap-4",

                // Logo, or the company initial when there is none
                if let Some(logo) = &job.logo {
                    img {
                        src: "{logo}",
                        alt: "{job.company}",
                        class: "w-16 h-16 object-contain bg-white border rounded",
                        width: "64",
                        height: "64",
                    }
                } else {
                    div {
                        class: "w-16 h-16 flex items-center justify-center bg-gray-100 border rounded text-2xl font-semibold text-gray-400",
                        "{initial}"
                    }
                }

                div {
                    class: "flex-1",
                    h2 {
                        class: "text-xl font-semibold mb-2",
                        a {
                            href: "{job.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "text-blue-600 hover:text-blue-800 transition-colors",
                            "{job.title}"
                        }
                    }
                    p { class: "text-gray-600 mb-2", "Company: {job.company}" }
                    p { class: "text-gray-600 mb-2", "Category: {job.category}" }
                    p { class: "text-gray-600 mb-2", "Location: {job.location}" }
                    p { class: "text-gray-600 mb-2", "Salary: {job.salary}" }

                    if job.job_type.is_some() || job.posted.is_some() {
                        p {
                            class: "text-sm text-gray-400 mb-2",
                            if let Some(job_type) = &job.job_type {
                                span { class: "mr-3", "{job_type}" }
                            }
                            if let Some(posted) = &job.posted {
                                span { "Posted {posted}" }
                            }
                        }
                    }

                    // Tags
                    div {
                        class: "flex flex-wrap gap-2 mt-3",
                        for (index, tag) in job.tags.iter().enumerate() {
                            span {
                                key: "{index}",
                                class: "px-3 py-1 bg-blue-100 text-blue-800 rounded-full text-sm",
                                "{tag}"
                            }
                        }
                    }
                }
            }
        }
    }
}
