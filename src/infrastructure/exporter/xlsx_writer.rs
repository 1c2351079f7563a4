//! Workbook output: one `Jobs` sheet, date cells formatted `yy/mm/dd`,
//! `Link` cells written as hyperlinks

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{ColNum, ExcelDateTime, Format, RowNum, Workbook, Worksheet};

use super::{table_columns, ExportError, ExportResult};
use crate::domain::{EnrichedJob, JobField};

pub const SHEET_NAME: &str = "Jobs";

/// Excel number format for the `Date Posted` column
pub const DATE_NUM_FORMAT: &str = "yy/mm/dd";

const UNIVERSITY_COLUMN_WIDTH: f64 = 20.0;

fn excel_date(date: NaiveDate) -> ExportResult<ExcelDateTime> {
    let out_of_range = |_| ExportError::DateOutOfRange { date };
    let year = u16::try_from(date.year()).map_err(out_of_range)?;
    let month = u8::try_from(date.month()).map_err(out_of_range)?;
    let day = u8::try_from(date.day()).map_err(out_of_range)?;
    Ok(ExcelDateTime::from_ymd(year, month, day)?)
}

pub struct XlsxExporter;

impl XlsxExporter {
    /// Header row plus one row per job. Cells for fields a job lacks stay
    /// blank, as does `Date Posted` when the date never parsed.
    pub fn build_workbook(jobs: &[EnrichedJob]) -> ExportResult<Workbook> {
        let columns = table_columns(jobs);
        let header_format = Format::new().set_bold();
        let date_format = Format::new().set_num_format(DATE_NUM_FORMAT);

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, field) in (0..).zip(&columns) {
            worksheet.write_string_with_format(0, col, field.header(), &header_format)?;
            if *field == JobField::University {
                worksheet.set_column_width(col, UNIVERSITY_COLUMN_WIDTH)?;
            }
        }

        for (row, job) in (1..).zip(jobs) {
            for (col, field) in (0..).zip(&columns) {
                Self::write_cell(worksheet, row, col, job, *field, &date_format)?;
            }
        }

        Ok(workbook)
    }

    fn write_cell(
        worksheet: &mut Worksheet,
        row: RowNum,
        col: ColNum,
        job: &EnrichedJob,
        field: JobField,
        date_format: &Format,
    ) -> ExportResult<()> {
        match field {
            JobField::DatePosted => {
                if let Some(date) = job.posted_on {
                    worksheet.write_datetime_with_format(row, col, &excel_date(date)?, date_format)?;
                }
            }
            JobField::Link => {
                if let Some(link) = job.get(field) {
                    worksheet.write_url(row, col, link)?;
                }
            }
            _ => {
                if let Some(value) = job.get(field) {
                    worksheet.write_string(row, col, value)?;
                }
            }
        }
        Ok(())
    }

    pub fn export(path: &Path, jobs: &[EnrichedJob]) -> ExportResult<()> {
        let mut workbook = Self::build_workbook(jobs)?;
        workbook.save(path)?;
        Ok(())
    }
}
