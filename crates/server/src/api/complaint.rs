use dioxus::prelude::*;
use shared_types::{ComplaintDocument, UploadAttachmentRequest, UploadResult};

// ── Intake Server Functions ────────────────────────────────────────
//
// The in-app client's mirror of the REST endpoints: same internals, typed
// arguments instead of multipart/JSON bodies.

/// Store one attachment in object storage and return its public URL.
/// Exactly one attempt; the caller decides whether to retry.
#[server]
pub async fn upload_attachment(request: UploadAttachmentRequest) -> Result<UploadResult, ServerFnError> {
    use crate::content::SanityContentStore;
    use crate::error_convert::{AppErrorExt, ValidateRequest};
    use crate::storage::S3ObjectStore;
    use shared_types::AppError;

    request
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let store = S3ObjectStore::from_env();
    let content = SanityContentStore::from_env()
        .map_err(|e| AppError::content_db(e).into_server_fn_error())?;

    let url = crate::intake::store_attachment(
        &store,
        &content,
        &request.file_name,
        &request.content_type,
        request.bytes,
    )
    .await
    .map_err(|e| e.into_server_fn_error())?;

    Ok(UploadResult { success: true, url })
}

/// Create one complaint document in the content database. Returns the
/// generated document id.
#[server]
pub async fn create_complaint(document: ComplaintDocument) -> Result<String, ServerFnError> {
    use crate::content::SanityContentStore;
    use crate::error_convert::AppErrorExt;
    use shared_types::AppError;

    let content = SanityContentStore::from_env()
        .map_err(|e| AppError::content_db(e).into_server_fn_error())?;

    crate::intake::create_document(&content, &document)
        .await
        .map_err(|e| e.into_server_fn_error())
}
