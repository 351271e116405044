use async_trait::async_trait;
use dashmap::DashMap;
use snip_core::{Repository, Result, ShortId, StorageError};
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory implementation of the [`Repository`] trait.
///
/// The test double: same observable contract as the file-backed
/// repository minus durability. DashMap's sharded locks let reads and
/// writes to different buckets proceed without blocking each other;
/// the allocator is a plain atomic counter.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    storage: DashMap<u64, String>,
    counter: AtomicU64,
}

impl MemoryRepository {
    /// Creates an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository whose allocator resumes after `offset`.
    pub fn with_offset(offset: u64) -> Self {
        Self {
            storage: DashMap::new(),
            counter: AtomicU64::new(offset),
        }
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn save(&self, url: &str) -> Result<ShortId> {
        let id = ShortId::new(self.counter.fetch_add(1, Ordering::SeqCst) + 1);
        self.storage.insert(id.value(), url.to_owned());
        Ok(id)
    }

    async fn get(&self, id: ShortId) -> Result<String> {
        self.storage
            .get(&id.value())
            .map(|entry| entry.value().clone())
            .ok_or(StorageError::NotFound(id))
    }
}
