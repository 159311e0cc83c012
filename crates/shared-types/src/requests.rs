use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Response body of `POST /api/upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UploadResponse {
    pub success: bool,
    /// Public object-storage URL of the stored file.
    pub url: String,
}

/// Response body of `POST /api/submit-to-sanity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateComplaintResponse {
    pub success: bool,
    /// Identifier generated by the content database.
    pub id: String,
}

/// Request DTO for the `upload_attachment` server function.
///
/// The REST endpoint takes multipart instead; this is the typed shape the
/// in-app client sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct UploadAttachmentRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "File name is required"))
    )]
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}
