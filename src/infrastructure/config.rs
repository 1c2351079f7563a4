//! Configuration infrastructure
//!
//! Settings are layered with the `config` crate:
//! 1. Built-in defaults (the three boards, keyword lists, selectors)
//! 2. Optional TOML file (`--config`, or `<config dir>/job-ads-checker/config.toml`)
//! 3. Environment variables, e.g. `JOBADS_HTTP__TIMEOUT_SECONDS=60`
//!
//! Every section is `#[serde(default)]`, so a file only needs the keys it
//! changes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::{JobSource, KeywordSets, RelevancePolicy};
use crate::infrastructure::exporter::ExportFormat;
use crate::infrastructure::http_client::HttpClientConfig;
use crate::infrastructure::parsing::SelectorConfig;

pub const APP_NAME: &str = "job-ads-checker";
pub const ENV_PREFIX: &str = "JOBADS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {source}")]
    Load {
        #[from]
        source: config::ConfigError,
    },

    #[error("Configuration validation failed: {message}")]
    Validation { message: String },
}

impl ConfigError {
    fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Boards to crawl, in crawl order
    pub sources: Vec<SourceConfig>,
    pub keywords: KeywordSets,
    pub selectors: SelectorConfig,
    pub crawling: CrawlingConfig,
    pub http: HttpClientConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// One job board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub id: JobSource,
    /// First listing page
    pub start_url: String,
    /// Base for resolving relative links
    pub base_url: String,
    /// When false, a position keyword alone qualifies a posting
    #[serde(default = "default_require_domain_match")]
    pub require_domain_match: bool,
}

const fn default_require_domain_match() -> bool {
    true
}

impl SourceConfig {
    pub const fn policy(&self) -> RelevancePolicy {
        RelevancePolicy::from_domain_requirement(self.require_domain_match)
    }
}

/// Pagination limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlingConfig {
    /// Pages per source in debug mode
    pub debug_page_limit: u32,

    /// Optional hard cap on pages per source in every mode
    pub max_pages: Option<u32>,
}

/// Where and how the table is written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Hostname fragment → output directory; a key matches when the
    /// hostname contains it
    pub host_directories: BTreeMap<String, PathBuf>,

    pub file_prefix: String,

    /// `xlsx` (default) or `csv`
    pub format: ExportFormat,
}

/// Logging configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    pub console_output: bool,

    pub file_output: bool,

    /// JSON lines in the log file
    pub json_format: bool,

    /// Log file directory; defaults to `logs/` next to the executable
    pub directory: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sources: defaults::sources(),
            keywords: KeywordSets::default(),
            selectors: SelectorConfig::default(),
            crawling: CrawlingConfig::default(),
            http: HttpClientConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for CrawlingConfig {
    fn default() -> Self {
        Self {
            debug_page_limit: defaults::DEBUG_PAGE_LIMIT,
            max_pages: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            host_directories: defaults::HOST_DIRECTORIES
                .iter()
                .map(|(host, dir)| ((*host).to_string(), PathBuf::from(dir)))
                .collect(),
            file_prefix: defaults::FILE_PREFIX.to_string(),
            format: ExportFormat::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            console_output: true,
            file_output: false,
            json_format: false,
            directory: None,
        }
    }
}

impl AppConfig {
    /// `<user config dir>/job-ads-checker/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
    }

    /// Load defaults, then the given file (required) or the default file
    /// (optional), then `JOBADS_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        match path {
            Some(path) => {
                builder = builder.add_source(config::File::from(path));
            }
            None => {
                if let Some(default_path) = Self::default_path() {
                    builder = builder.add_source(config::File::from(default_path).required(false));
                }
            }
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;

        info!("Loaded configuration with {} source(s)", config.sources.len());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sources.is_empty() {
            return Err(ConfigError::validation("at least one source must be configured"));
        }
        if self.keywords.position.is_empty() {
            return Err(ConfigError::validation("keywords.position must not be empty"));
        }
        if self.keywords.domain.is_empty() && self.sources.iter().any(|s| s.require_domain_match) {
            return Err(ConfigError::validation(
                "keywords.domain must not be empty when a source requires a domain match",
            ));
        }
        if self.crawling.debug_page_limit == 0 {
            return Err(ConfigError::validation("crawling.debug_page_limit must be greater than 0"));
        }
        if self.crawling.max_pages == Some(0) {
            return Err(ConfigError::validation("crawling.max_pages must be greater than 0"));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::validation("http.timeout_seconds must be greater than 0"));
        }
        Ok(())
    }
}

/// Default values
pub mod defaults {
    use super::SourceConfig;
    use crate::domain::JobSource;

    /// Pages per source when running with `--debug`
    pub const DEBUG_PAGE_LIMIT: u32 = 3;

    pub const LOG_LEVEL: &str = "info";

    pub const FILE_PREFIX: &str = "job_ads";

    pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;

    pub const USER_AGENT: &str = concat!("job-ads-checker/", env!("CARGO_PKG_VERSION"));

    pub const HOST_DIRECTORIES: [(&str, &str); 2] = [("My-MAC", "/Users"), ("My-PC", "C:/Users")];

    /// SfN only lists neuroscience jobs, so it skips the domain check.
    pub fn sources() -> Vec<SourceConfig> {
        vec![
            SourceConfig {
                id: JobSource::SfN,
                start_url: "https://neurojobs.sfn.org/jobs/".to_string(),
                base_url: "https://neurojobs.sfn.org".to_string(),
                require_domain_match: false,
            },
            SourceConfig {
                id: JobSource::Science,
                start_url: "https://jobs.sciencecareers.org/jobs/".to_string(),
                base_url: "https://jobs.sciencecareers.org".to_string(),
                require_domain_match: true,
            },
            SourceConfig {
                id: JobSource::Nature,
                start_url: "https://www.nature.com/naturecareers/jobs/".to_string(),
                base_url: "https://www.nature.com".to_string(),
                require_domain_match: true,
            },
        ]
    }
}
