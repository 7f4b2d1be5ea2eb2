//! Pure Remotive REST API client.
//!
//! A minimal client for the public remote-jobs listing endpoint. It shapes
//! `limit`/`offset`/`search` query parameters and decodes the listing payload
//! into typed [`Job`] records. No caching and no retries happen here.
//!
//! # Example
//!
//! ```rust,ignore
//! use remotive_client::{ListingRequest, RemotiveClient};
//!
//! let client = RemotiveClient::new();
//!
//! let page = client
//!     .fetch_listing(&ListingRequest::for_page(2, 10, Some("rust")))
//!     .await?;
//! println!("{} jobs total", page.total_job_count);
//! ```

pub mod error;
pub mod types;

pub use error::{RemotiveError, Result};
pub use types::{Job, ListingPage, ListingRequest};

/// Public listing endpoint.
pub const DEFAULT_API_URL: &str = "https://remotive.com/api/remote-jobs";

#[derive(Clone)]
pub struct RemotiveClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for RemotiveClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RemotiveClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Point the client at a different listing endpoint (proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Use a preconfigured HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for a listing request.
    ///
    /// `limit` and `offset` are always present. `search` is percent-encoded
    /// (space as `%20`) and appended only when non-empty.
    pub fn listing_url(&self, request: &ListingRequest) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        let mut url = format!(
            "{}{}limit={}&offset={}",
            self.base_url, separator, request.limit, request.offset
        );
        if let Some(search) = request.search.as_deref().filter(|s| !s.is_empty()) {
            url.push_str("&search=");
            url.push_str(&urlencoding::encode(search));
        }
        url
    }

    /// Fetch one page of listings.
    pub async fn fetch_listing(&self, request: &ListingRequest) -> Result<ListingPage> {
        let url = self.listing_url(request);
        tracing::debug!(%url, "Fetching job listings");

        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Job listing request failed");
            return Err(RemotiveError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let page: ListingPage = serde_json::from_str(&body)?;
        tracing::debug!(
            total = page.total_job_count,
            count = page.jobs.len(),
            "Fetched job listings"
        );

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_url_without_search() {
        let client = RemotiveClient::new();
        let url = client.listing_url(&ListingRequest::for_page(1, 10, None));
        assert_eq!(url, "https://remotive.com/api/remote-jobs?limit=10&offset=0");
    }

    #[test]
    fn test_listing_url_encodes_search() {
        let client = RemotiveClient::new().with_base_url("http://localhost/jobs");
        let url = client.listing_url(&ListingRequest::for_page(3, 10, Some("c++ & rust")));
        assert_eq!(
            url,
            "http://localhost/jobs?limit=10&offset=20&search=c%2B%2B%20%26%20rust"
        );
    }

    #[test]
    fn test_listing_url_keeps_existing_query() {
        let client = RemotiveClient::new().with_base_url("http://localhost/jobs?category=dev");
        let url = client.listing_url(&ListingRequest::for_page(2, 5, Some("")));
        assert_eq!(url, "http://localhost/jobs?category=dev&limit=5&offset=5");
    }
}
