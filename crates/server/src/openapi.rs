use axum::Router;
use shared_types::{
    AppError, AppErrorKind, ComplaintDocument, CreateComplaintResponse, UploadResponse,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::health::HealthResponse;

/// OpenAPI description of the intake API surface.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::rest::upload::upload_file,
        crate::rest::complaint::create_complaint,
        crate::health::health_check,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        ComplaintDocument,
        CreateComplaintResponse,
        UploadResponse,
        HealthResponse,
    )),
    tags(
        (name = "intake", description = "Complaint intake endpoints"),
        (name = "health", description = "Service health")
    ),
    info(
        title = "Complaint Intake API",
        description = "Attachment upload and complaint document creation"
    )
)]
pub struct ApiDoc;

/// Router serving the OpenAPI document plus interactive docs UIs.
pub fn docs_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
