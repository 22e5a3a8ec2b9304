// src/services/aggregate.rs

//! Drives pagination until every page of a query has been fetched.

use crate::error::Result;
use crate::models::Course;
use crate::services::{PageSource, QueryBuilder};

/// All courses of a query, in page order then in-page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub courses: Vec<Course>,

    /// Page count reported with page 1
    pub total_pages: u32,

    pub pages_fetched: u32,
}

/// Fetch page 1, then pages 2..=total sequentially.
///
/// Only page 1's page count bounds the loop. A count of 0 is treated like 1.
/// The first failing page aborts the whole collection.
pub fn collect_all_pages(source: &dyn PageSource, query: &QueryBuilder) -> Result<ResultSet> {
    let first = source.fetch_page(&query.request(1))?;
    let total_pages = first.pages;
    log::debug!(
        "Page 1/{} returned {} course(s)",
        total_pages.max(1),
        first.courses.len()
    );

    let mut result = ResultSet {
        courses: first.courses,
        total_pages,
        pages_fetched: 1,
    };

    for page in 2..=total_pages {
        let next = source.fetch_page(&query.request(page))?;
        log::debug!(
            "Page {}/{} returned {} course(s)",
            page,
            total_pages,
            next.courses.len()
        );
        result.courses.extend(next.courses);
        result.pages_fetched += 1;
    }

    Ok(result)
}
