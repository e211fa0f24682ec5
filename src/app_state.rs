//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::ContentService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Content service over the active data source.
    pub content: Arc<ContentService>,
}

impl AppState {
    /// Wraps a content service.
    #[must_use]
    pub fn new(content: ContentService) -> Self {
        Self {
            content: Arc::new(content),
        }
    }
}
