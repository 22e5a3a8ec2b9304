// src/models/search.rs

//! Typed search parameters.
//!
//! Everything the endpoint accepts is a closed set. User input is resolved
//! into these types once, before any request is built, so an unsupported
//! value fails fast instead of producing an empty form field.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::Config;
use crate::utils::date::{add_one_year, format_date};

/// Whether the searcher has completed a course before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum StudentCategory {
    /// Returning student
    #[default]
    Old,
    /// First-time student
    New,
}

impl StudentCategory {
    /// Value of the `current_state` form field.
    pub fn code(self) -> &'static str {
        match self {
            Self::Old => "OldStudent",
            Self::New => "NewStudent",
        }
    }
}

/// Course lengths the endpoint knows a type code for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseLength {
    OneDay,
    TwoDays,
    ThreeDays,
    TenDays,
    TwentyDays,
    ThirtyDays,
    FortyFiveDays,
    SixtyDays,
}

impl CourseLength {
    pub const ALL: [CourseLength; 8] = [
        Self::OneDay,
        Self::TwoDays,
        Self::ThreeDays,
        Self::TenDays,
        Self::TwentyDays,
        Self::ThirtyDays,
        Self::FortyFiveDays,
        Self::SixtyDays,
    ];

    /// Map a length in days to a supported course length.
    pub fn from_days(days: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|length| length.days() == days)
            .ok_or_else(|| {
                AppError::unsupported(
                    "course length",
                    format!("{days} days (supported: 1, 2, 3, 10, 20, 30, 45, 60)"),
                )
            })
    }

    pub fn days(self) -> u32 {
        match self {
            Self::OneDay => 1,
            Self::TwoDays => 2,
            Self::ThreeDays => 3,
            Self::TenDays => 10,
            Self::TwentyDays => 20,
            Self::ThirtyDays => 30,
            Self::FortyFiveDays => 45,
            Self::SixtyDays => 60,
        }
    }

    /// Value of the `course_types[]` form field.
    pub fn type_code(self) -> &'static str {
        match self {
            Self::OneDay => "5",
            Self::TwoDays => "19",
            Self::ThreeDays => "9",
            Self::TenDays => "3",
            Self::TwentyDays => "4",
            Self::ThirtyDays => "11",
            Self::FortyFiveDays => "12",
            Self::SixtyDays => "23",
        }
    }
}

impl fmt::Display for CourseLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.days())
    }
}

/// A friendly region name and the token the endpoint expects for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    /// Name accepted on the command line (e.g. "Europe")
    pub name: String,

    /// Token sent as `regions[]` (e.g. "region_117")
    pub token: String,
}

/// A region resolved against the region table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    name: String,
    token: String,
}

impl Region {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Closed set of known regions, built once from configuration.
#[derive(Debug, Clone)]
pub struct RegionTable {
    entries: Vec<RegionEntry>,
}

impl RegionTable {
    /// Build the table, rejecting empty or duplicate entries.
    pub fn new(entries: &[RegionEntry]) -> Result<Self> {
        if entries.is_empty() {
            return Err(AppError::validation("No regions defined"));
        }
        for (i, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() || entry.token.trim().is_empty() {
                return Err(AppError::validation(format!(
                    "Region #{} has an empty name or token",
                    i + 1
                )));
            }
            if entries[..i]
                .iter()
                .any(|other| other.name.eq_ignore_ascii_case(&entry.name))
            {
                return Err(AppError::validation(format!(
                    "Region '{}' is defined twice",
                    entry.name
                )));
            }
        }
        Ok(Self {
            entries: entries.to_vec(),
        })
    }

    /// Look up a region by name, ignoring ASCII case.
    pub fn resolve(&self, name: &str) -> Result<Region> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name.trim()))
            .map(|entry| Region {
                name: entry.name.clone(),
                token: entry.token.clone(),
            })
            .ok_or_else(|| {
                let known: Vec<&str> = self.entries.iter().map(|e| e.name.as_str()).collect();
                AppError::unsupported(
                    "region",
                    format!("{name} (known: {})", known.join(", ")),
                )
            })
    }
}

/// Date window searched by every page request of one run.
///
/// `from` doubles as the eligibility reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    from: NaiveDate,
    to: NaiveDate,
}

impl SearchWindow {
    /// Resolve the window. `from` defaults to `today`, `to` to one year
    /// after `from`; `to` must be strictly after `from`.
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>, today: NaiveDate) -> Result<Self> {
        let from = from.unwrap_or(today);
        let to = to.unwrap_or_else(|| add_one_year(from));
        if to <= from {
            return Err(AppError::unsupported(
                "date window",
                format!(
                    "{} - {} (end must be after start)",
                    format_date(from),
                    format_date(to)
                ),
            ));
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// Date against which enrollment is judged not yet open.
    pub fn reference_date(&self) -> NaiveDate {
        self.from
    }
}

/// Raw user choices; `None` means "use the configured default".
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub student: Option<StudentCategory>,
    pub region: Option<String>,
    pub days: Option<u32>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Fully resolved, immutable parameters of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub student: StudentCategory,
    pub region: Region,
    pub length: CourseLength,
    pub window: SearchWindow,
}

impl SearchParams {
    /// Resolve user options against the configuration.
    pub fn resolve(config: &Config, options: SearchOptions, today: NaiveDate) -> Result<Self> {
        let regions = RegionTable::new(&config.regions)?;
        let region_name = options
            .region
            .as_deref()
            .unwrap_or(&config.defaults.region);

        Ok(Self {
            student: options.student.unwrap_or(config.defaults.student),
            region: regions.resolve(region_name)?,
            length: CourseLength::from_days(options.days.unwrap_or(config.defaults.days))?,
            window: SearchWindow::new(options.from, options.to, today)?,
        })
    }
}
