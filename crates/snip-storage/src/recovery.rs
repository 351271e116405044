use crate::index::Index;
use crate::record::Record;
use snip_core::{Result, StorageError};
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Rebuilds the [`Index`] by replaying the durable log.
///
/// The log is read as a sequence of newline-terminated records; every
/// decoded record is inserted into a fresh index and the allocator
/// high-water mark ends up at the maximum identifier seen. A record
/// that fails to decode is fatal: silently skipping it would
/// desynchronize identifiers from URLs, so the caller is expected to
/// refuse to start instead.
///
/// Two tolerated irregularities:
/// - duplicate identifiers: the later record in file order wins;
/// - a final fragment with no trailing newline: discarded as a torn
///   write rather than treated as corruption.
pub fn replay(path: impl AsRef<Path>) -> Result<Index> {
    let path = path.as_ref();
    // Append mode so create-if-absent works on a read path; nothing is
    // ever written through this handle.
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .read(true)
        .open(path)?;
    let mut reader = BufReader::new(file);

    let mut index = Index::new();
    let mut line_no = 0usize;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 {
            break;
        }
        if !buf.ends_with(b"\n") {
            debug!(line = line_no + 1, "discarding torn trailing write");
            break;
        }
        line_no += 1;

        let line = std::str::from_utf8(&buf[..n - 1]).map_err(|e| StorageError::CorruptLog {
            line: line_no,
            reason: e.to_string(),
        })?;
        let record = Record::from_line(line).map_err(|e| StorageError::CorruptLog {
            line: line_no,
            reason: e.to_string(),
        })?;
        index.insert(record.id, record.url);
    }

    info!(
        path = %path.display(),
        records = line_no,
        entries = index.len(),
        current_max = index.current_max(),
        "log replayed"
    );
    Ok(index)
}
