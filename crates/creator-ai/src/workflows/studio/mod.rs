//! Bulk channel audits from YouTube Studio metadata exports.

mod parser;
mod report;

use std::io::Read;
use std::path::Path;

pub use parser::StudioRecord;
pub use report::{BandBreakdown, ChannelAudit, ChannelAuditSummary, CommonFix, VideoAuditEntry};

#[derive(Debug)]
pub enum StudioCsvImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    TooManyRows { found: usize, limit: usize },
}

impl std::fmt::Display for StudioCsvImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudioCsvImportError::Io(err) => write!(f, "failed to read Studio export: {}", err),
            StudioCsvImportError::Csv(err) => write!(f, "invalid Studio CSV data: {}", err),
            StudioCsvImportError::TooManyRows { found, limit } => write!(
                f,
                "Studio export holds {} rows but the audit cap is {}",
                found, limit
            ),
        }
    }
}

impl std::error::Error for StudioCsvImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StudioCsvImportError::Io(err) => Some(err),
            StudioCsvImportError::Csv(err) => Some(err),
            StudioCsvImportError::TooManyRows { .. } => None,
        }
    }
}

impl From<std::io::Error> for StudioCsvImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for StudioCsvImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct StudioCsvImporter;

impl StudioCsvImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        max_rows: usize,
    ) -> Result<Vec<StudioRecord>, StudioCsvImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, max_rows)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        max_rows: usize,
    ) -> Result<Vec<StudioRecord>, StudioCsvImportError> {
        let records = parser::parse_records(reader)?;
        if records.len() > max_rows {
            return Err(StudioCsvImportError::TooManyRows {
                found: records.len(),
                limit: max_rows,
            });
        }
        Ok(records)
    }

    /// Import and score an export in one pass.
    pub fn audit_from_reader<R: Read>(
        reader: R,
        max_rows: usize,
    ) -> Result<ChannelAudit, StudioCsvImportError> {
        let records = Self::from_reader(reader, max_rows)?;
        Ok(ChannelAudit::from_records(records))
    }

    pub fn audit_from_path<P: AsRef<Path>>(
        path: P,
        max_rows: usize,
    ) -> Result<ChannelAudit, StudioCsvImportError> {
        let file = std::fs::File::open(path)?;
        Self::audit_from_reader(file, max_rows)
    }
}
