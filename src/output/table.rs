// src/output/table.rs

//! Column-aligned course table.

use std::io::Write;

use crate::error::Result;
use crate::models::{Course, OutputConfig};
use crate::utils::date::parse_date;
use crate::utils::text::{display_width, pad_right};

const HEADER: [&str; 5] = ["Starts", "Opens", "City", "Country", "URL"];

/// Table layout settings.
#[derive(Debug, Clone)]
pub struct TableStyle {
    /// Spaces between columns
    pub padding: usize,

    /// chrono format for the two date columns
    pub date_format: String,
}

impl From<&OutputConfig> for TableStyle {
    fn from(config: &OutputConfig) -> Self {
        Self {
            padding: config.padding,
            date_format: config.date_format.clone(),
        }
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        Self::from(&OutputConfig::default())
    }
}

/// Write `courses` as a table with a header row.
///
/// Every row is formatted before the first byte is written.
pub fn render_table(courses: &[Course], style: &TableStyle, out: &mut dyn Write) -> Result<()> {
    let mut rows = Vec::with_capacity(courses.len() + 1);
    rows.push(HEADER.map(String::from));
    for course in courses {
        rows.push(format_row(course, &style.date_format)?);
    }

    let mut widths = [0usize; HEADER.len()];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }

    let last = HEADER.len() - 1;
    for row in &rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i == last {
                line.push_str(cell);
            } else {
                line.push_str(&pad_right(cell, widths[i] + style.padding));
            }
        }
        writeln!(out, "{}", line.trim_end())?;
    }
    out.flush()?;
    Ok(())
}

fn format_row(course: &Course, date_format: &str) -> Result<[String; 5]> {
    let starts = parse_date("course_start_date", &course.starts)?;
    let opens = parse_date("enrollment_open_date", &course.opens)?;
    Ok([
        starts.format(date_format).to_string(),
        opens.format(date_format).to_string(),
        course.location.city.clone(),
        course.location.country.clone(),
        course.location.url.clone(),
    ])
}
