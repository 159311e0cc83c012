//! Client-side submission pipeline: gate the draft, upload the attachment
//! (at most one attempt), then create the complaint document.

use shared_types::{
    wizard, AttachmentFile, ComplaintDocument, ComplaintDraft, SubmissionError,
    UploadAttachmentRequest, UploadResult,
};

/// The two intake calls the pipeline makes, abstracted so tests can observe
/// and fail them without a network.
#[allow(async_fn_in_trait)]
pub trait IntakeApi {
    async fn upload(&self, file: &AttachmentFile) -> Result<UploadResult, String>;
    async fn create(&self, document: &ComplaintDocument) -> Result<String, String>;
}

/// Production implementation backed by the Dioxus server functions.
pub struct ServerFns;

impl IntakeApi for ServerFns {
    async fn upload(&self, file: &AttachmentFile) -> Result<UploadResult, String> {
        server::api::upload_attachment(UploadAttachmentRequest {
            file_name: file.name.clone(),
            content_type: file.content_type.clone(),
            bytes: file.bytes.clone(),
        })
        .await
        .map_err(|e| shared_types::AppError::friendly_message(&e.to_string()))
    }

    async fn create(&self, document: &ComplaintDocument) -> Result<String, String> {
        server::api::create_complaint(document.clone())
            .await
            .map_err(|e| shared_types::AppError::friendly_message(&e.to_string()))
    }
}

/// Run one submission attempt. Strictly sequential: the upload fully
/// completes before document creation begins, and an upload failure aborts
/// the whole attempt with no document created.
///
/// Not idempotent across retries: a retry after a failed create uploads
/// the attachment again.
pub async fn submit_complaint<A: IntakeApi>(
    api: &A,
    user_id: &str,
    draft: &ComplaintDraft,
) -> Result<String, SubmissionError> {
    // Second gate, independent of the per-step validator.
    wizard::submission_gate(draft).map_err(SubmissionError::Validation)?;

    let file_url = match &draft.attachment {
        Some(file) => {
            let result = api.upload(file).await.map_err(SubmissionError::Upload)?;
            result.url
        }
        None => String::new(),
    };

    let document = draft.to_document(user_id, &file_url, chrono::Utc::now());
    api.create(&document).await.map_err(SubmissionError::Create)
}
