use crate::error::ApiError;
use crate::storage::StatusCheckStore;
use std::sync::Arc;

/// Process-wide state handed to every handler through `web::Data`.
///
/// The store is absent when the database could not be reached at startup;
/// handlers then answer `503 Service Unavailable`.
#[derive(Clone)]
pub struct AppState {
    store: Option<Arc<dyn StatusCheckStore>>,
}

impl AppState {
    pub fn new(store: Arc<dyn StatusCheckStore>) -> Self {
        Self { store: Some(store) }
    }

    pub fn unavailable() -> Self {
        Self { store: None }
    }

    pub fn is_available(&self) -> bool {
        self.store.is_some()
    }

    pub fn store(&self) -> Result<&dyn StatusCheckStore, ApiError> {
        self.store.as_deref().ok_or(ApiError::ServiceUnavailable)
    }
}
