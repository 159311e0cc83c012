//! Shared internals of the intake write path, used by both the REST
//! handlers and the Dioxus server functions.

use shared_types::{AppError, ComplaintDocument};

use crate::content::ContentStore;
use crate::storage::{object_key, ObjectStore};

/// Store one attachment and return its public URL.
///
/// The blob write happens first; if it fails nothing touches the content
/// database. When the `asset_registry` flag is on, the same bytes are then
/// registered as a content-database file asset with a file-reference
/// document, matching what the complaint document's `fileUrl` points at.
#[tracing::instrument(skip(store, content, bytes), fields(size = bytes.len()))]
pub async fn store_attachment<S: ObjectStore, C: ContentStore>(
    store: &S,
    content: &C,
    file_name: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<String, AppError> {
    let key = object_key(chrono::Utc::now().timestamp_millis(), file_name);

    let registry = crate::config::feature_flags().asset_registry;
    let registry_bytes = registry.then(|| bytes.clone());

    store
        .put(&key, content_type, bytes)
        .await
        .map_err(AppError::storage)?;

    let url = store.public_url(&key);
    tracing::info!(key = %key, "Attachment stored");

    if let Some(asset_bytes) = registry_bytes {
        let asset_id = content
            .upload_asset(file_name, content_type, asset_bytes)
            .await
            .map_err(AppError::content_db)?;
        content
            .register_upload(&url, &asset_id)
            .await
            .map_err(AppError::content_db)?;
        tracing::info!(asset_id = %asset_id, "Attachment registered in content database");
    }

    Ok(url)
}

/// Create one complaint document and return its generated id.
#[tracing::instrument(skip(content, document))]
pub async fn create_document<C: ContentStore>(
    content: &C,
    document: &ComplaintDocument,
) -> Result<String, AppError> {
    content
        .create_complaint(document)
        .await
        .map_err(AppError::content_db)
}
