use axum::extract::State;
use axum::Json;

use shared_types::{AppError, ComplaintDocument, CreateComplaintResponse};

use crate::content::ContentStore;
use crate::rest::AppState;
use crate::storage::ObjectStore;

/// POST /api/submit-to-sanity
///
/// Create one complaint document in the content database and return its
/// generated id. The body is deserialized leniently (the content database,
/// not this endpoint, is the schema authority) and no deduplication is
/// performed.
#[utoipa::path(
    post,
    path = "/api/submit-to-sanity",
    request_body = ComplaintDocument,
    responses(
        (status = 200, description = "Complaint created", body = CreateComplaintResponse),
        (status = 405, description = "Wrong method"),
        (status = 500, description = "Creation error", body = AppError)
    ),
    tag = "intake"
)]
pub async fn create_complaint<S, C>(
    State(state): State<AppState<S, C>>,
    Json(document): Json<ComplaintDocument>,
) -> Result<Json<CreateComplaintResponse>, AppError>
where
    S: ObjectStore + 'static,
    C: ContentStore + 'static,
{
    let id = crate::intake::create_document(state.content.as_ref(), &document).await?;
    Ok(Json(CreateComplaintResponse { success: true, id }))
}
