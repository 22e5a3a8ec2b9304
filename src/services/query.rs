// src/services/query.rs

//! Builds the form payload of a search request.

use crate::models::SearchParams;
use crate::utils::date::format_range;

/// Fields that never vary between searches.
const LANGUAGE: &str = "en";
const SORT_COLUMN: &str = "dates";
const SORT_DIRECTION: &str = "up";
const DATE_FORMAT: &str = "YYYY-MM-DD";

/// Form-encoded body for one page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    page: u32,
    fields: Vec<(&'static str, String)>,
}

impl SearchRequest {
    /// 1-based page index.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Name/value pairs in the order they are sent.
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    /// Value of a single field.
    #[cfg(test)]
    pub(crate) fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Turns resolved parameters into per-page requests.
///
/// All page-independent fields are rendered once, so every page of a run
/// carries exactly the same window and filters.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    base: Vec<(&'static str, String)>,
}

impl QueryBuilder {
    pub fn new(params: &SearchParams) -> Self {
        let window = params.window;
        let base = vec![
            ("current_state", params.student.code().to_string()),
            ("regions[]", params.region.token().to_string()),
            ("languages[]", LANGUAGE.to_string()),
            ("course_types[]", params.length.type_code().to_string()),
            ("sort_column", SORT_COLUMN.to_string()),
            ("sort_direction", SORT_DIRECTION.to_string()),
            ("date_format", DATE_FORMAT.to_string()),
            ("daterange", format_range(window.from(), window.to())),
        ];
        Self { base }
    }

    /// Request for page `page` (1-based).
    pub fn request(&self, page: u32) -> SearchRequest {
        let mut fields = self.base.clone();
        fields.push(("page", page.to_string()));
        SearchRequest { page, fields }
    }
}
