//! Where listing pages come from.

use async_trait::async_trait;
use remotive_client::{ListingPage, ListingRequest, RemotiveClient, RemotiveError};

/// A paginated job listing endpoint.
///
/// Futures are `!Send` on wasm, where the browser fetch API backs reqwest.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait JobSource {
    async fn fetch_listing(&self, request: &ListingRequest) -> Result<ListingPage, RemotiveError>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl JobSource for RemotiveClient {
    async fn fetch_listing(&self, request: &ListingRequest) -> Result<ListingPage, RemotiveError> {
        RemotiveClient::fetch_listing(self, request).await
    }
}
