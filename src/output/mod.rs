//! Rendering of the final course list.

mod table;

use std::io::Write;

use crate::error::Result;
use crate::models::Course;

pub use table::{TableStyle, render_table};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
}

/// Write `courses` as a pretty JSON array followed by a newline.
pub fn render_json(courses: &[Course], out: &mut dyn Write) -> Result<()> {
    let json = serde_json::to_string_pretty(courses)?;
    writeln!(out, "{json}")?;
    out.flush()?;
    Ok(())
}

/// Write `courses` in the chosen format.
pub fn render(
    courses: &[Course],
    format: OutputFormat,
    style: &TableStyle,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Table => render_table(courses, style, out),
        OutputFormat::Json => render_json(courses, out),
    }
}
