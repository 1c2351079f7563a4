//! Plain-text table; dates are written as `yy/mm/dd` text

use std::fs::File;
use std::path::Path;

use super::{table_columns, ExportError, ExportResult, EXPORT_DATE_FORMAT};
use crate::domain::{EnrichedJob, JobField};

/// Cell text for one column. A date that never parsed leaves the cell empty.
fn cell(job: &EnrichedJob, field: JobField) -> String {
    match field {
        JobField::DatePosted => job
            .posted_on
            .map(|date| date.format(EXPORT_DATE_FORMAT).to_string())
            .unwrap_or_default(),
        _ => job.get(field).unwrap_or_default().to_string(),
    }
}

pub struct CsvExporter;

impl CsvExporter {
    /// Write the header and one record per job to any writer
    pub fn write_to<W: std::io::Write>(writer: W, jobs: &[EnrichedJob]) -> ExportResult<()> {
        let columns = table_columns(jobs);
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(columns.iter().map(|field| field.header()))?;
        for job in jobs {
            csv_writer.write_record(columns.iter().map(|field| cell(job, *field)))?;
        }

        csv_writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    pub fn export(path: &Path, jobs: &[EnrichedJob]) -> ExportResult<()> {
        let file = File::create(path).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::write_to(file, jobs)
    }
}
