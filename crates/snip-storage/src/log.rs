use crate::record::Record;
use snip_core::{Result, StorageError};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Append-only writer for the durable log.
///
/// Holds a single long-lived append-mode handle for the process
/// lifetime. The caller serializes appends (the file repository wraps
/// the writer in its write lock), so lines never interleave.
#[derive(Debug)]
pub struct LogWriter {
    file: File,
}

impl LogWriter {
    /// Opens the log for appending, creating it if absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self { file })
    }

    /// Appends one record as a newline-terminated line.
    ///
    /// One write per call, no batching. If this fails the caller must
    /// not update its in-memory state; the log stays ground truth.
    pub fn append(&mut self, record: &Record) -> Result<()> {
        let mut line = record
            .to_line()
            .map_err(|e| StorageError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        line.push('\n');
        self.file.write_all(line.as_bytes())?;
        Ok(())
    }
}
