use axum::extract::{Multipart, State};
use axum::Json;

use shared_types::{AppError, UploadResponse};

use crate::content::ContentStore;
use crate::rest::AppState;
use crate::storage::ObjectStore;

/// POST /api/upload
///
/// Accept one multipart file field, stream it to object storage, and return
/// the public URL. When the `asset_registry` flag is on the file is also
/// registered in the content database; a storage failure short-circuits
/// before any content-database write.
#[utoipa::path(
    post,
    path = "/api/upload",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored", body = UploadResponse),
        (status = 400, description = "Missing file or parse error", body = AppError),
        (status = 405, description = "Wrong method"),
        (status = 500, description = "Storage or content-database error", body = AppError)
    ),
    tag = "intake"
)]
pub async fn upload_file<S, C>(
    State(state): State<AppState<S, C>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError>
where
    S: ObjectStore + 'static,
    C: ContentStore + 'static,
{
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(format!("Error parsing the upload: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("attachment").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::bad_request(format!("Error reading the upload: {}", e)))?;

        file = Some((file_name, content_type, data.to_vec()));
        break;
    }

    let (file_name, content_type, bytes) =
        file.ok_or_else(|| AppError::bad_request("No file uploaded"))?;

    let url = crate::intake::store_attachment(
        state.store.as_ref(),
        state.content.as_ref(),
        &file_name,
        &content_type,
        bytes,
    )
    .await?;

    Ok(Json(UploadResponse { success: true, url }))
}
