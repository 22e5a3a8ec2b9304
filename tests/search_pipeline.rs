//! End-to-end search runs against a scripted page source.

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use course_scout::error::{AppError, Result};
use course_scout::models::{Config, Course, Location, SearchOptions, SearchPage, SearchParams};
use course_scout::output::OutputFormat;
use course_scout::pipeline;
use course_scout::services::{Eligibility, PageSource, SearchRequest};
use course_scout::utils::date::format_date;

/// Page source answering from a script and logging every request.
#[derive(Default)]
struct ScriptedSource {
    pages: HashMap<u32, std::result::Result<SearchPage, &'static str>>,
    requests: RefCell<Vec<SearchRequest>>,
}

impl ScriptedSource {
    fn page(mut self, index: u32, reported: u32, courses: Vec<Course>) -> Self {
        self.pages.insert(
            index,
            Ok(SearchPage {
                pages: reported,
                courses,
            }),
        );
        self
    }

    fn failing(mut self, index: u32, message: &'static str) -> Self {
        self.pages.insert(index, Err(message));
        self
    }

    fn pages_requested(&self) -> Vec<u32> {
        self.requests.borrow().iter().map(|r| r.page()).collect()
    }
}

impl PageSource for ScriptedSource {
    fn fetch_page(&self, request: &SearchRequest) -> Result<SearchPage> {
        self.requests.borrow_mut().push(request.clone());
        match self.pages.get(&request.page()) {
            Some(Ok(page)) => Ok(page.clone()),
            Some(Err(message)) => Err(AppError::decode(request.page(), message)),
            None => Err(AppError::decode(request.page(), "unexpected page")),
        }
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn course(id: i64, opens: NaiveDate) -> Course {
    Course {
        id,
        course_type: "3".into(),
        location: Location {
            city: format!("City {id}"),
            country: "Austria".into(),
            url: format!("https://centre{id}.example.org"),
        },
        starts: format_date(opens + Days::new(90)),
        opens: format_date(opens),
    }
}

fn courses(ids: std::ops::Range<i64>) -> Vec<Course> {
    ids.map(|id| course(id, today() + Days::new(30))).collect()
}

fn params() -> SearchParams {
    SearchParams::resolve(&Config::default(), SearchOptions::default(), today()).unwrap()
}

#[test]
fn single_page_keeps_only_courses_opening_later() {
    let yesterday = today() - Days::new(1);
    let tomorrow = today() + Days::new(1);
    let source = ScriptedSource::default().page(
        1,
        1,
        vec![course(1, yesterday), course(2, today()), course(3, tomorrow)],
    );
    let params = params();

    let mut out = Vec::new();
    let outcome = pipeline::run(
        &Config::default(),
        &params,
        Eligibility::NotYetOpen(params.window.reference_date()),
        OutputFormat::Table,
        &source,
        &mut out,
    )
    .unwrap();

    assert_eq!(outcome.collected, 3);
    assert_eq!(outcome.courses.len(), 1);
    assert_eq!(outcome.courses[0].id, 3);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Starts"));
    assert!(lines[1].contains("16 Jun 2024"));
    assert!(lines[1].contains("City 3"));
}

#[test]
fn three_pages_are_fetched_in_order_and_summed() {
    let source = ScriptedSource::default()
        .page(1, 3, courses(0..4))
        .page(2, 3, courses(4..7))
        .page(3, 3, courses(7..9));

    let outcome = pipeline::run_search(&source, &params(), Eligibility::All).unwrap();

    assert_eq!(source.pages_requested(), vec![1, 2, 3]);
    assert_eq!(outcome.collected, 4 + 3 + 2);
    assert_eq!(outcome.pages_fetched, 3);
    let ids: Vec<i64> = outcome.courses.iter().map(|c| c.id).collect();
    assert_eq!(ids, (0..9).collect::<Vec<_>>());
}

#[test]
fn failed_second_page_aborts_without_output() {
    let source = ScriptedSource::default()
        .page(1, 3, courses(0..4))
        .failing(2, "truncated body")
        .page(3, 3, courses(7..9));
    let params = params();

    let mut out = Vec::new();
    let result = pipeline::run(
        &Config::default(),
        &params,
        Eligibility::NotYetOpen(params.window.reference_date()),
        OutputFormat::Table,
        &source,
        &mut out,
    );

    assert!(matches!(result, Err(AppError::Decode { page: 2, .. })));
    assert!(out.is_empty());
    assert_eq!(source.pages_requested(), vec![1, 2]);
}

#[test]
fn every_page_request_carries_the_same_window() {
    let source = ScriptedSource::default()
        .page(1, 2, courses(0..1))
        .page(2, 2, courses(1..2));

    pipeline::run_search(&source, &params(), Eligibility::All).unwrap();

    let requests = source.requests.borrow();
    let daterange = |request: &SearchRequest| {
        request
            .fields()
            .iter()
            .find(|(key, _)| *key == "daterange")
            .map(|(_, value)| value.clone())
    };
    assert_eq!(requests.len(), 2);
    assert_eq!(
        daterange(&requests[0]).as_deref(),
        Some("2024-06-15 - 2025-06-15")
    );
    assert_eq!(daterange(&requests[0]), daterange(&requests[1]));
}

#[test]
fn unsupported_parameters_fail_before_any_request() {
    let source = ScriptedSource::default().page(1, 1, courses(0..1));

    for options in [
        SearchOptions {
            days: Some(14),
            ..SearchOptions::default()
        },
        SearchOptions {
            region: Some("Atlantis".into()),
            ..SearchOptions::default()
        },
    ] {
        let result = SearchParams::resolve(&Config::default(), options, today())
            .and_then(|params| pipeline::run_search(&source, &params, Eligibility::All));
        assert!(matches!(result, Err(AppError::UnsupportedParameter { .. })));
    }

    assert!(source.requests.borrow().is_empty());
}

#[test]
fn malformed_enrollment_date_aborts_filtering() {
    let mut bad = course(2, today());
    bad.opens = "15.06.2024".into();
    let source = ScriptedSource::default().page(1, 1, vec![course(1, today()), bad]);
    let params = params();

    let result = pipeline::run_search(
        &source,
        &params,
        Eligibility::NotYetOpen(params.window.reference_date()),
    );

    assert!(matches!(result, Err(AppError::DateParse { .. })));
}
