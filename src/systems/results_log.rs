use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::components::CoefficientRecord;

/// Append-only tab-separated coefficient log.
///
/// The header goes out once per `ResultsLog`, ahead of the first row. Rows
/// already in the file from earlier runs are left alone.
///
/// Not `Clone`: each copy would track its own header flag and write another
/// header into the same file.
///
/// ```compile_fail
/// let log = aoa_post::ResultsLog::new("aoa_results.txt");
/// let copy = log.clone();
/// ```
#[derive(Debug)]
pub struct ResultsLog {
    path: PathBuf,
    header_written: bool,
}

impl ResultsLog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            header_written: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn header_written(&self) -> bool {
        self.header_written
    }

    /// Opens the log in append mode, writes `record` and closes it again.
    pub fn append(&mut self, record: &CoefficientRecord) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        self.write_record(&mut file, record)?;
        file.flush()
    }

    /// Writes `record` to `out`, preceded by the header on the first call.
    pub fn write_record<W: Write>(
        &mut self,
        out: &mut W,
        record: &CoefficientRecord,
    ) -> io::Result<()> {
        if !self.header_written {
            writeln!(out, "{}", CoefficientRecord::header())?;
            self.header_written = true;
        }
        writeln!(out, "{}", record.to_row())
    }
}
