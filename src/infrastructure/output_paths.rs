//! Output location for the exported table
//!
//! The directory depends on which machine runs the crawl: each configured
//! hostname fragment maps to a directory, and an unknown host is an error
//! rather than a silent fallback.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use tracing::debug;

use super::config::OutputConfig;
use super::exporter::{ExportError, ExportFormat, ExportResult};

/// Hostname of the running machine, lossily converted to UTF-8
pub fn current_hostname() -> String {
    gethostname::gethostname().to_string_lossy().into_owned()
}

/// First configured fragment (in key order) contained in `hostname`, compared
/// case-insensitively.
pub fn resolve_output_dir(hostname: &str, config: &OutputConfig) -> ExportResult<PathBuf> {
    let host = hostname.to_lowercase();
    let directory = config
        .host_directories
        .iter()
        .find(|(fragment, _)| host.contains(&fragment.to_lowercase()))
        .map(|(fragment, dir)| {
            debug!("Host '{}' matched '{}' -> {}", hostname, fragment, dir.display());
            dir.clone()
        });

    directory.ok_or_else(|| ExportError::UnsupportedHost {
        hostname: hostname.to_string(),
    })
}

/// `<prefix>_<yyMMdd_HHmmss>[_debug].<xlsx|csv>`
pub fn output_file_name(
    prefix: &str,
    timestamp: NaiveDateTime,
    debug_mode: bool,
    format: ExportFormat,
) -> String {
    let suffix = if debug_mode { "_debug" } else { "" };
    format!(
        "{}_{}{}.{}",
        prefix,
        timestamp.format("%y%m%d_%H%M%S"),
        suffix,
        format.extension()
    )
}
