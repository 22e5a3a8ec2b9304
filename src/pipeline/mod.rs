//! Pipeline entry points.
//!
//! - `run_search`: Collect all pages of a query and filter them
//! - `run`: Search, then render the result

pub mod search;

pub use search::{SearchOutcome, run, run_search};
