use std::future::Future;

use shared_types::ComplaintDocument;

// --- Environment helpers ---

fn project_id() -> Result<String, String> {
    crate::storage::env_or("CONTENT_PROJECT_ID", "SANITY_PROJECT_ID")
        .ok_or_else(|| "CONTENT_PROJECT_ID is not configured".to_string())
}

fn dataset() -> Result<String, String> {
    crate::storage::env_or("CONTENT_DATASET", "SANITY_DATASET")
        .ok_or_else(|| "CONTENT_DATASET is not configured".to_string())
}

fn api_token() -> Result<String, String> {
    crate::storage::env_or("CONTENT_API_TOKEN", "SANITY_API_TOKEN")
        .ok_or_else(|| "CONTENT_API_TOKEN is not configured".to_string())
}

fn api_version() -> String {
    crate::storage::env_or("CONTENT_API_VERSION", "SANITY_API_VERSION")
        .unwrap_or_else(|| "2023-01-01".to_string())
}

// ── Trait ────────────────────────────────────────────────────────────

/// Content-database operations for complaint intake.
///
/// The content database is the system of record for submitted complaints;
/// this trait covers exactly the three writes the portal performs. Methods
/// return explicitly `Send` futures so generic Axum handlers stay spawnable.
pub trait ContentStore: Send + Sync {
    /// Create one complaint document. Returns the generated document id.
    fn create_complaint(
        &self,
        document: &ComplaintDocument,
    ) -> impl Future<Output = Result<String, String>> + Send;

    /// Register raw bytes as a file asset. Returns the asset id.
    fn upload_asset(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> impl Future<Output = Result<String, String>> + Send;

    /// Create a file-reference document tying an uploaded asset to its
    /// public blob URL. Returns the generated document id.
    fn register_upload(
        &self,
        file_url: &str,
        asset_id: &str,
    ) -> impl Future<Output = Result<String, String>> + Send;
}

// ── Mutation payload helpers ────────────────────────────────────────

/// The document type name complaints are stored under.
const COMPLAINT_TYPE: &str = "complaint";

/// Build the create-mutation body for a complaint document.
fn complaint_mutation(document: &ComplaintDocument) -> Result<serde_json::Value, String> {
    let mut doc = serde_json::to_value(document)
        .map_err(|e| format!("Failed to serialize complaint: {}", e))?;
    doc.as_object_mut()
        .ok_or_else(|| "Complaint did not serialize to an object".to_string())?
        .insert("_type".to_string(), serde_json::json!(COMPLAINT_TYPE));
    Ok(serde_json::json!({ "mutations": [ { "create": doc } ] }))
}

/// Build the create-mutation body for a file-reference document.
fn file_reference_mutation(file_url: &str, asset_id: &str) -> serde_json::Value {
    serde_json::json!({
        "mutations": [
            {
                "create": {
                    "_type": COMPLAINT_TYPE,
                    "file": {
                        "_type": "file",
                        "asset": { "_type": "reference", "_ref": asset_id }
                    },
                    "fileUrl": file_url,
                }
            }
        ]
    })
}

/// Pull the created document id out of a mutate-endpoint response.
fn parse_created_id(body: &serde_json::Value) -> Result<String, String> {
    body.get("results")
        .and_then(|r| r.get(0))
        .and_then(|r| r.get("id"))
        .and_then(|id| id.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| format!("Unexpected mutate response: {}", body))
}

/// Pull the asset document id out of an asset-upload response.
fn parse_asset_id(body: &serde_json::Value) -> Result<String, String> {
    body.get("document")
        .and_then(|d| d.get("_id"))
        .and_then(|id| id.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| format!("Unexpected asset response: {}", body))
}

// ── HTTP implementation ─────────────────────────────────────────────

/// Client for a Sanity-compatible content database, configured from the
/// environment. Writes go through the versioned HTTP mutation API with a
/// bearer token that must have write access.
pub struct SanityContentStore {
    project_id: String,
    dataset: String,
    token: String,
    api_version: String,
    client: reqwest::Client,
}

impl SanityContentStore {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            project_id: project_id()?,
            dataset: dataset()?,
            token: api_token()?,
            api_version: api_version(),
            client: reqwest::Client::new(),
        })
    }

    fn mutate_url(&self) -> String {
        format!(
            "https://{}.api.sanity.io/v{}/data/mutate/{}?returnIds=true",
            self.project_id, self.api_version, self.dataset
        )
    }

    fn asset_url(&self, file_name: &str) -> String {
        format!(
            "https://{}.api.sanity.io/v{}/assets/files/{}?filename={}",
            self.project_id,
            self.api_version,
            self.dataset,
            urlencoding::encode(file_name)
        )
    }

    async fn mutate(&self, body: serde_json::Value) -> Result<serde_json::Value, String> {
        let response = self
            .client
            .post(self.mutate_url())
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Content database request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(format!("Content database error ({}): {}", status, text));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Failed to parse content database response: {}", e))
    }
}

impl ContentStore for SanityContentStore {
    #[tracing::instrument(skip(self, document))]
    async fn create_complaint(&self, document: &ComplaintDocument) -> Result<String, String> {
        let body = complaint_mutation(document)?;
        let response = self.mutate(body).await?;
        let id = parse_created_id(&response)?;
        tracing::info!(id = %id, "Complaint document created");
        Ok(id)
    }

    #[tracing::instrument(skip(self, bytes))]
    async fn upload_asset(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, String> {
        let response = self
            .client
            .post(self.asset_url(file_name))
            .bearer_auth(&self.token)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| format!("Asset upload request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(format!("Asset upload error ({}): {}", status, text));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse asset response: {}", e))?;
        parse_asset_id(&body)
    }

    #[tracing::instrument(skip(self))]
    async fn register_upload(&self, file_url: &str, asset_id: &str) -> Result<String, String> {
        let response = self.mutate(file_reference_mutation(file_url, asset_id)).await?;
        parse_created_id(&response)
    }
}
