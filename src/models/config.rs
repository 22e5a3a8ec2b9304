//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{CourseLength, RegionEntry, RegionTable, StudentCategory};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Search endpoint settings
    #[serde(default)]
    pub search: SearchConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Values used when a flag is not given
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Region name to endpoint token mappings
    #[serde(default = "defaults::regions")]
    pub regions: Vec<RegionEntry>,

    /// Table rendering settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        let endpoint = Url::parse(&self.search.endpoint)?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(AppError::validation(format!(
                "search.endpoint must be http(s), got '{}'",
                endpoint.scheme()
            )));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == Some(0) {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.output.padding == 0 {
            return Err(AppError::validation("output.padding must be > 0"));
        }
        if self.output.date_format.trim().is_empty() {
            return Err(AppError::validation("output.date_format is empty"));
        }

        let regions = RegionTable::new(&self.regions)?;
        regions
            .resolve(&self.defaults.region)
            .map_err(|e| AppError::config(format!("defaults.region: {e}")))?;
        CourseLength::from_days(self.defaults.days)
            .map_err(|e| AppError::config(format!("defaults.days: {e}")))?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            http: HttpConfig::default(),
            defaults: DefaultsConfig::default(),
            regions: defaults::regions(),
            output: OutputConfig::default(),
        }
    }
}

/// Search endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// URL receiving the form-encoded search POST
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds (client default when unset)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: None,
        }
    }
}

/// Values used when the command line leaves a parameter out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub student: StudentCategory,

    #[serde(default = "defaults::region")]
    pub region: String,

    /// Course length in days
    #[serde(default = "defaults::days")]
    pub days: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            student: StudentCategory::default(),
            region: defaults::region(),
            days: defaults::days(),
        }
    }
}

/// Table rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Spaces between columns
    #[serde(default = "defaults::padding")]
    pub padding: usize,

    /// chrono format for displayed dates
    #[serde(default = "defaults::date_format")]
    pub date_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            padding: defaults::padding(),
            date_format: defaults::date_format(),
        }
    }
}

mod defaults {
    use super::RegionEntry;

    // Search defaults
    pub fn endpoint() -> String {
        "https://www.dhamma.org/en-US/courses/do_search".into()
    }

    // HTTP defaults
    pub fn user_agent() -> String {
        concat!("course-scout/", env!("CARGO_PKG_VERSION")).into()
    }

    // Parameter defaults
    pub fn region() -> String {
        "Europe".into()
    }
    pub fn days() -> u32 {
        10
    }

    // Region defaults
    pub fn regions() -> Vec<RegionEntry> {
        vec![RegionEntry {
            name: "Europe".to_string(),
            token: "region_117".to_string(),
        }]
    }

    // Output defaults
    pub fn padding() -> usize {
        5
    }
    pub fn date_format() -> String {
        "%d %b %Y".into()
    }
}
