//! Global state management

use dioxus::prelude::*;
use job_board::{BoardConfig, JobBoard};
use remotive_client::RemotiveClient;

/// The app-wide job board: Remotive client plus request cache.
pub type Jobs = JobBoard<RemotiveClient>;

/// Board configuration for this build.
///
/// Browser builds have no process environment, so only the API URL can be
/// overridden, at compile time.
pub fn load_config() -> BoardConfig {
    #[cfg(feature = "desktop")]
    {
        match BoardConfig::from_env() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid board configuration, using defaults");
                BoardConfig::default()
            }
        }
    }

    #[cfg(not(feature = "desktop"))]
    {
        let config = BoardConfig::default();
        match option_env!("REMOTIVE_API_URL") {
            Some(url) => config.with_api_url(url),
            None => config,
        }
    }
}

/// Provides the job board to the whole app.
///
/// Built once on mount; the cache goes away with the provider.
#[component]
pub fn JobsProvider(children: Element) -> Element {
    use_context_provider(|| {
        let config = load_config();
        tracing::info!(
            api_url = %config.api_url,
            page_size = config.page_size,
            "Job board ready"
        );
        let client = RemotiveClient::new().with_base_url(config.api_url.clone());
        JobBoard::new(client, config)
    });

    children
}

/// Hook to access the job board
pub fn use_jobs() -> Jobs {
    use_context::<Jobs>()
}
