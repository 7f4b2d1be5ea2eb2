//! Remote Jobs - Dioxus Web Application
//!
//! Client-side job board over the public Remotive listing API: free-text
//! search, page-number pagination and an in-memory response cache.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve
//! ```
//!
//! Desktop shell (reads `.env` for `REMOTIVE_API_URL` and friends):
//! ```bash
//! dx serve --platform desktop --no-default-features --features desktop
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod routes;
mod state;

fn main() {
    // The web logger is installed by `launch`; native builds log to stdout
    #[cfg(feature = "desktop")]
    init_tracing();

    dioxus::launch(app::App);
}

#[cfg(feature = "desktop")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "remote_jobs_web=info,job_board=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
