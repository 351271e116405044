use crate::error::Result;
use crate::short_id::ShortId;
use async_trait::async_trait;

/// Capability trait for the URL repository.
///
/// Implemented by the file-backed repository and by the in-memory test
/// double; the HTTP gateway holds it as `Arc<dyn Repository>`.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Stores a URL under a freshly allocated identifier and returns it.
    ///
    /// Identifiers are handed out densely from 1 in call order. The URL
    /// is stored verbatim; no normalization or well-formedness check is
    /// performed.
    async fn save(&self, url: &str) -> Result<ShortId>;

    /// Retrieves the URL stored under the given identifier.
    ///
    /// Returns `Err(NotFound)` if the identifier was never issued.
    async fn get(&self, id: ShortId) -> Result<String>;
}
