use std::sync::Arc;

use snip_core::Repository;

#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn Repository>,
    base_url: String,
}

impl AppState {
    pub fn new(repository: Arc<dyn Repository>, public_base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: public_base_url.into(),
        }
    }

    pub fn repository(&self) -> &dyn Repository {
        self.repository.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
