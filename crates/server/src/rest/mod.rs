pub mod complaint;
pub mod upload;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::content::ContentStore;
use crate::storage::ObjectStore;

/// Shared application state passed to Axum handlers via `State`.
///
/// Generic over the store implementations so integration tests can swap in
/// in-memory doubles for the S3 and content-database clients.
pub struct AppState<S, C> {
    pub store: Arc<S>,
    pub content: Arc<C>,
}

impl<S, C> AppState<S, C> {
    pub fn new(store: S, content: C) -> Self {
        Self {
            store: Arc::new(store),
            content: Arc::new(content),
        }
    }
}

// Manual impl: deriving Clone would require S: Clone and C: Clone.
impl<S, C> Clone for AppState<S, C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            content: Arc::clone(&self.content),
        }
    }
}

/// Build the intake REST API router.
///
/// Both intake routes accept POST only; Axum's method routing answers other
/// methods with 405 before any handler runs.
pub fn api_router<S, C>() -> Router<AppState<S, C>>
where
    S: ObjectStore + 'static,
    C: ContentStore + 'static,
{
    Router::new()
        .route("/api/upload", post(upload::upload_file::<S, C>))
        .route("/api/submit-to-sanity", post(complaint::create_complaint::<S, C>))
        .route("/health", get(crate::health::health_check))
}
