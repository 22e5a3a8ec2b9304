// src/models/course.rs

//! Course listing as returned by the search endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// Where a course takes place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub country: String,

    /// Site of the hosting centre
    #[serde(default, rename = "website_url")]
    pub url: String,
}

/// A scheduled course.
///
/// Dates are kept as the raw `YYYY-MM-DD` strings the endpoint sent; they
/// are parsed where a decision depends on them. Missing fields decode as
/// empty values, so a listing without dates fails at that parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    #[serde(default)]
    pub id: i64,

    /// Endpoint's course type code (e.g. "3" for ten days)
    #[serde(default)]
    pub course_type: String,

    #[serde(default)]
    pub location: Location,

    #[serde(default, rename = "course_start_date")]
    pub starts: String,

    /// Date from which registering becomes possible
    #[serde(default, rename = "enrollment_open_date")]
    pub opens: String,
}

/// One decoded page of search results.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SearchPage {
    /// Total page count of the whole query; negative counts read as 0
    #[serde(deserialize_with = "page_count")]
    pub pages: u32,

    /// `null` reads as an empty page
    #[serde(deserialize_with = "nullable_courses")]
    pub courses: Vec<Course>,
}

fn page_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let pages = i64::deserialize(deserializer)?;
    Ok(u32::try_from(pages.max(0)).unwrap_or(u32::MAX))
}

fn nullable_courses<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Course>, D::Error> {
    Ok(Option::<Vec<Course>>::deserialize(deserializer)?.unwrap_or_default())
}
