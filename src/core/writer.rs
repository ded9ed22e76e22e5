use crate::core::report::CsvRow;
use crate::core::{PlaylistReport, ReportError};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_OUTPUT_PATH: &str = "youtube_playlist_videos.csv";

pub struct ReportWriter {
    path: PathBuf,
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_PATH)
    }
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the report to the configured path, replacing any existing file.
    pub fn write(&self, report: &PlaylistReport) -> Result<(), ReportError> {
        let file = File::create(&self.path).map_err(|source| ReportError::Io {
            path: self.path.clone(),
            source,
        })?;
        self.write_to(file, report)?;
        info!("Wrote {} rows to {}", report.len(), self.path.display());
        Ok(())
    }

    /// Header `Video Link,Duration`, then one record per row.
    pub fn write_to<W: Write>(
        &self,
        writer: W,
        report: &PlaylistReport,
    ) -> Result<(), ReportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in report.rows() {
            csv_writer.serialize(CsvRow::from(row))?;
        }
        csv_writer.flush().map_err(|source| ReportError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}
