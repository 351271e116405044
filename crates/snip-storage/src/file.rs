use crate::index::Index;
use crate::log::LogWriter;
use crate::record::Record;
use crate::recovery;
use async_trait::async_trait;
use snip_core::{Repository, Result, ShortId, StorageError};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::debug;

/// The index and log writer move together: `save` must allocate,
/// append, and publish as one critical section.
#[derive(Debug)]
struct State {
    index: Index,
    log: LogWriter,
}

/// File-backed repository: an in-memory [`Index`] kept durable through
/// an append-only log.
///
/// `save` appends to the log before the index is updated, so a crash
/// between the two leaves the log as ground truth for the next replay.
/// A failed append leaves the allocator untouched. Reads take only the
/// read lock and never do I/O.
#[derive(Debug)]
pub struct FileRepository {
    state: RwLock<State>,
    path: PathBuf,
}

impl FileRepository {
    /// Opens the repository, replaying the log at `path` into a fresh
    /// index.
    ///
    /// A record that fails to decode surfaces as `CorruptLog`; callers
    /// are expected to treat that as fatal rather than serve from a
    /// partially reconstructed index.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let index = recovery::replay(&path)?;
        let log = LogWriter::open(&path)?;
        Ok(Self {
            state: RwLock::new(State { index, log }),
            path,
        })
    }

    /// The on-disk location of the durable log.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The allocator high-water mark.
    pub async fn current_max(&self) -> u64 {
        self.state.read().await.index.current_max()
    }

    /// Number of mappings currently indexed.
    pub async fn len(&self) -> usize {
        self.state.read().await.index.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.index.is_empty()
    }
}

#[async_trait]
impl Repository for FileRepository {
    async fn save(&self, url: &str) -> Result<ShortId> {
        let mut state = self.state.write().await;

        let id = state.index.next_id();
        state.log.append(&Record::new(id, url))?;
        state.index.insert(id, url.to_owned());

        debug!(%id, "stored url");
        Ok(id)
    }

    async fn get(&self, id: ShortId) -> Result<String> {
        let state = self.state.read().await;
        state
            .index
            .get(id)
            .map(str::to_owned)
            .ok_or(StorageError::NotFound(id))
    }
}
