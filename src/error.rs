// src/error.rs

//! Unified error handling for the course search.

use std::fmt;

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// None of these are recoverable inside the library: every layer returns
/// them unchanged and the CLI decides how the process ends.
#[derive(Error, Debug)]
pub enum AppError {
    /// A region, course length or date window the endpoint cannot be asked for
    #[error("Unsupported {parameter}: {value}")]
    UnsupportedParameter { parameter: String, value: String },

    /// Network failure or non-success HTTP status
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not the expected JSON envelope
    #[error("Decode error on page {page}: {message}")]
    Decode { page: u32, message: String },

    /// A date field does not match `YYYY-MM-DD`
    #[error("Invalid date in {field} '{value}': {message}")]
    DateParse {
        field: String,
        value: String,
        message: String,
    },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create an unsupported parameter error.
    pub fn unsupported(parameter: impl Into<String>, value: impl fmt::Display) -> Self {
        Self::UnsupportedParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a decode error for the given page.
    pub fn decode(page: u32, message: impl fmt::Display) -> Self {
        Self::Decode {
            page,
            message: message.to_string(),
        }
    }

    /// Create a date parsing error.
    pub fn date_parse(
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl fmt::Display,
    ) -> Self {
        Self::DateParse {
            field: field.into(),
            value: value.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
