//! Infrastructure layer - HTTP, HTML parsing, configuration, logging and
//! export

pub mod config;
pub mod exporter;
pub mod http_client;
pub mod logging;
pub mod output_paths;
pub mod parsing;
pub mod parsing_error;

pub use config::{AppConfig, ConfigError, SourceConfig};
pub use exporter::{export_table, CsvExporter, ExportError, ExportFormat, XlsxExporter};
pub use http_client::{HttpClient, HttpClientConfig};
pub use parsing::{JobDetailParser, JobListParser};
