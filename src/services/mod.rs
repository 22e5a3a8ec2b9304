//! Service layer for the course search.
//!
//! This module contains the business logic for:
//! - Request building (`QueryBuilder`)
//! - Page fetching (`PageSource`, `HttpPageFetcher`)
//! - Pagination (`collect_all_pages`)
//! - Eligibility filtering (`Eligibility`)

mod aggregate;
mod fetcher;
mod filter;
mod query;

pub use aggregate::{ResultSet, collect_all_pages};
pub use fetcher::{HttpPageFetcher, PageSource, decode_page};
pub use filter::Eligibility;
pub use query::{QueryBuilder, SearchRequest};
