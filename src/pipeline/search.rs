// src/pipeline/search.rs

//! Search pipeline: paginate, filter, render.

use std::io::Write;

use crate::error::Result;
use crate::models::{Config, Course, SearchParams};
use crate::output::{OutputFormat, TableStyle, render};
use crate::services::{Eligibility, PageSource, QueryBuilder, collect_all_pages};

/// Summary of a search run.
#[derive(Debug, Default)]
pub struct SearchOutcome {
    /// Courses that passed the eligibility rule
    pub courses: Vec<Course>,
    pub total_pages: u32,
    pub pages_fetched: u32,
    /// Courses collected before filtering
    pub collected: usize,
}

/// Collect every page for `params` and apply `eligibility`.
pub fn run_search(
    source: &dyn PageSource,
    params: &SearchParams,
    eligibility: Eligibility,
) -> Result<SearchOutcome> {
    let window = params.window;
    log::info!(
        "Searching {} courses in {} from {} to {}",
        params.length,
        params.region.name(),
        window.from(),
        window.to()
    );

    let query = QueryBuilder::new(params);
    let results = collect_all_pages(source, &query)?;
    let collected = results.courses.len();
    log::info!(
        "Fetched {} page(s) with {} course(s)",
        results.pages_fetched,
        collected
    );

    let courses = eligibility.apply(results.courses)?;
    if let Eligibility::NotYetOpen(reference) = eligibility {
        log::info!(
            "{} course(s) open for enrollment after {}",
            courses.len(),
            reference
        );
    }

    Ok(SearchOutcome {
        courses,
        total_pages: results.total_pages,
        pages_fetched: results.pages_fetched,
        collected,
    })
}

/// Run a search and write the result to `out`.
///
/// Nothing is written unless the whole search succeeded.
pub fn run(
    config: &Config,
    params: &SearchParams,
    eligibility: Eligibility,
    format: OutputFormat,
    source: &dyn PageSource,
    out: &mut dyn Write,
) -> Result<SearchOutcome> {
    let outcome = run_search(source, params, eligibility)?;
    render(
        &outcome.courses,
        format,
        &TableStyle::from(&config.output),
        out,
    )?;
    Ok(outcome)
}
