// src/services/fetcher.rs

//! Page fetching from the search endpoint.

use reqwest::blocking::Client;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{Config, SearchPage};
use crate::services::SearchRequest;
use crate::utils::http::create_client;

/// Anything that can answer a search request with one page of results.
pub trait PageSource {
    /// Fetch the page named by `request`.
    fn fetch_page(&self, request: &SearchRequest) -> Result<SearchPage>;
}

/// Fetches pages with blocking form POSTs.
pub struct HttpPageFetcher {
    client: Client,
    endpoint: Url,
}

impl HttpPageFetcher {
    /// Create a fetcher for the configured endpoint.
    pub fn new(config: &Config) -> Result<Self> {
        let client = create_client(&config.http)?;
        let endpoint = Url::parse(&config.search.endpoint)?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Create a fetcher around an existing client.
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

impl PageSource for HttpPageFetcher {
    fn fetch_page(&self, request: &SearchRequest) -> Result<SearchPage> {
        log::debug!("POST {} page={}", self.endpoint, request.page());

        let response = self
            .client
            .post(self.endpoint.clone())
            .form(request.fields())
            .send()?
            .error_for_status()?;

        // The body is fully read here, which releases the connection
        // before decoding starts.
        let body = response.bytes()?;
        decode_page(request.page(), &body)
    }
}

/// Decode a response body into a page.
///
/// Both `courses` and a numeric `pages` are required.
pub fn decode_page(page: u32, body: &[u8]) -> Result<SearchPage> {
    serde_json::from_slice(body).map_err(|e| AppError::decode(page, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COURSE: &str = r#"{
        "id": 7,
        "course_type": "3",
        "location": {"city": "Bern", "country": "Switzerland", "website_url": "https://x.org"},
        "course_start_date": "2025-01-10",
        "enrollment_open_date": "2024-10-10"
    }"#;

    #[test]
    fn test_decode_page() {
        let body = format!(r#"{{"pages": 3, "courses": [{COURSE}, {COURSE}]}}"#);
        let page = decode_page(1, body.as_bytes()).unwrap();
        assert_eq!(page.pages, 3);
        assert_eq!(page.courses.len(), 2);
        assert_eq!(page.courses[0].location.city, "Bern");
    }

    #[test]
    fn test_decode_empty_page() {
        let page = decode_page(1, br#"{"pages": 0, "courses": []}"#).unwrap();
        assert_eq!(page.pages, 0);
        assert!(page.courses.is_empty());
    }

    #[test]
    fn test_decode_sparse_course() {
        let body = br#"{"pages": 1, "courses": [{"id": 1,
            "course_start_date": "2025-01-01", "enrollment_open_date": "2024-12-01"}]}"#;
        let page = decode_page(1, body).unwrap();
        assert_eq!(page.courses.len(), 1);
        assert!(page.courses[0].course_type.is_empty());
        assert!(page.courses[0].location.city.is_empty());
    }

    #[test]
    fn test_decode_negative_pages_and_null_courses() {
        let page = decode_page(1, br#"{"pages": -3, "courses": null}"#).unwrap();
        assert_eq!(page.pages, 0);
        assert!(page.courses.is_empty());
    }

    #[test]
    fn test_decode_missing_pages() {
        let body = format!(r#"{{"courses": [{COURSE}]}}"#);
        assert!(matches!(
            decode_page(2, body.as_bytes()),
            Err(AppError::Decode { page: 2, .. })
        ));
    }

    #[test]
    fn test_decode_missing_courses() {
        assert!(matches!(
            decode_page(1, br#"{"pages": 1}"#),
            Err(AppError::Decode { .. })
        ));
    }

    #[test]
    fn test_decode_non_numeric_pages() {
        assert!(matches!(
            decode_page(1, br#"{"pages": "two", "courses": []}"#),
            Err(AppError::Decode { .. })
        ));
    }

    #[test]
    fn test_decode_not_json() {
        assert!(matches!(
            decode_page(1, b"<html>Service Unavailable</html>"),
            Err(AppError::Decode { .. })
        ));
    }
}
