use serde::{Deserialize, Deserializer, Serialize};

/// Parameters for one listing request.
///
/// `search` is sent only when it is present and non-empty. The query string
/// itself is built by [`RemotiveClient::listing_url`](crate::RemotiveClient::listing_url).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingRequest {
    pub limit: u32,
    pub offset: u64,
    pub search: Option<String>,
}

impl ListingRequest {
    /// Build the request for a 1-based page number.
    ///
    /// Page 0 is treated as page 1.
    pub fn for_page(page: u32, page_size: u32, search: Option<&str>) -> Self {
        let page = page.max(1);
        Self {
            limit: page_size,
            offset: u64::from(page - 1) * u64::from(page_size),
            search: search.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }
}

/// A single job posting as returned by the listing endpoint.
///
/// Required fields reject the whole response when missing; everything the
/// API may omit or null out is an `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    pub title: String,
    pub company_name: String,
    pub url: String,
    #[serde(default)]
    pub company_logo: Option<String>,
    #[serde(default)]
    pub company_logo_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub candidate_required_location: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub job_type: Option<String>,
    /// Naive ISO timestamp as sent by the API (no offset).
    #[serde(default)]
    pub publication_date: Option<String>,
}

impl Job {
    /// Logo to display, preferring `company_logo_url` over `company_logo`.
    pub fn logo(&self) -> Option<&str> {
        self.company_logo_url
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.company_logo.as_deref().filter(|s| !s.is_empty()))
    }

    /// Tags in API order; absent tags are an empty slice.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

/// One page of listing results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPage {
    #[serde(rename = "total-job-count", default, deserialize_with = "null_as_default")]
    pub total_job_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub jobs: Vec<Job>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
