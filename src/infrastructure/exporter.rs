//! Export of the normalized job table
//!
//! The default output is an `.xlsx` workbook with real date cells and
//! clickable links; CSV is available for plain-text consumers.

pub mod csv_writer;
pub mod xlsx_writer;

pub use csv_writer::CsvExporter;
pub use xlsx_writer::XlsxExporter;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::{EnrichedJob, JobField};

/// Date layout used for the `Date Posted` column
pub const EXPORT_DATE_FORMAT: &str = "%y/%m/%d";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No output directory configured for host '{hostname}'")]
    UnsupportedHost { hostname: String },

    #[error("Failed to create output file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Date {date} cannot be stored in a workbook")]
    DateOutOfRange { date: NaiveDate },
}

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }
}

/// Columns present in at least one row, in canonical order
pub fn table_columns(jobs: &[EnrichedJob]) -> Vec<JobField> {
    JobField::ALL
        .into_iter()
        .filter(|field| jobs.iter().any(|job| job.contains(*field)))
        .collect()
}

pub fn export_table(path: &Path, jobs: &[EnrichedJob], format: ExportFormat) -> ExportResult<()> {
    match format {
        ExportFormat::Xlsx => XlsxExporter::export(path, jobs)?,
        ExportFormat::Csv => CsvExporter::export(path, jobs)?,
    }

    info!("Saved {} job(s) to {}", jobs.len(), path.display());
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::table;
    use super::*;

    #[test]
    fn test_columns_follow_canonical_order() {
        let jobs = table(&[("1", Some("15 Sep 2024")), ("2", None)]);
        assert_eq!(
            table_columns(&jobs),
            vec![
                JobField::Source,
                JobField::DatePosted,
                JobField::University,
                JobField::Title,
                JobField::Location,
                JobField::Link,
                JobField::JobId,
                JobField::Description,
            ]
        );
    }

    #[test]
    fn test_date_column_omitted_when_no_row_has_it() {
        let jobs = table(&[("1", None)]);
        assert!(!table_columns(&jobs).contains(&JobField::DatePosted));
    }

    #[test]
    fn test_export_table_by_format() {
        let dir = tempfile::tempdir().unwrap();
        let jobs = table(&[("1", Some("2024/09/15"))]);

        for format in [ExportFormat::Xlsx, ExportFormat::Csv] {
            let path = dir.path().join(format!("jobs.{}", format.extension()));
            export_table(&path, &jobs, format).unwrap();
            assert!(path.metadata().unwrap().len() > 0);
        }
    }

    #[test]
    fn test_default_format_is_xlsx() {
        assert_eq!(ExportFormat::default(), ExportFormat::Xlsx);
        assert_eq!(ExportFormat::Csv.extension(), "csv");
    }
}
