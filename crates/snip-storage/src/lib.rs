//! Persistent storage engine for the snip URL shortener.
//!
//! The engine is an in-memory index rebuilt at startup from an
//! append-only log of newline-delimited JSON records. Writes append to
//! the log before touching the index, so after a crash the log is the
//! ground truth for recovery.

pub mod file;
pub mod index;
pub mod log;
pub mod memory;
pub mod record;
pub mod recovery;

pub use file::FileRepository;
pub use index::Index;
pub use log::LogWriter;
pub use memory::MemoryRepository;
pub use record::Record;
