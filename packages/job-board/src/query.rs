use remotive_client::ListingRequest;

/// Identity of one fetchable result set: a page under an active search term.
///
/// `search` is never `Some("")`; an empty term means no search constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub page: u32,
    pub search: Option<String>,
}

impl QueryKey {
    pub fn new(page: u32, search: Option<String>) -> Self {
        Self {
            page: page.max(1),
            search: search.filter(|s| !s.is_empty()),
        }
    }

    /// Listing request for this key at the given page size.
    pub fn to_request(&self, page_size: u32) -> ListingRequest {
        ListingRequest::for_page(self.page, page_size, self.search.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_compare_by_both_fields() {
        assert_eq!(QueryKey::new(1, None), QueryKey::new(1, Some(String::new())));
        assert_ne!(QueryKey::new(1, None), QueryKey::new(2, None));
        assert_ne!(
            QueryKey::new(1, Some("rust".into())),
            QueryKey::new(1, Some("rust ".into()))
        );
    }

    #[test]
    fn test_to_request() {
        let req = QueryKey::new(2, Some("golang".into())).to_request(10);
        assert_eq!(req.offset, 10);
        assert_eq!(req.limit, 10);
        assert_eq!(req.search.as_deref(), Some("golang"));
    }
}
