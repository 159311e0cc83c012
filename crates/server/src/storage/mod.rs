use std::future::Future;

use aws_sdk_s3::{
    config::{Credentials, Region},
    primitives::ByteStream,
    types::ServerSideEncryption,
    Client,
};

/// Read an env var, trying the primary name first then a fallback.
pub fn env_or(primary: &str, fallback: &str) -> Option<String> {
    std::env::var(primary)
        .ok()
        .or_else(|| std::env::var(fallback).ok())
}

/// Bucket name for complaint attachments (from env or default).
fn uploads_bucket() -> String {
    std::env::var("UPLOADS_BUCKET").unwrap_or_else(|_| "complaint-uploads".to_string())
}

/// Object key for an uploaded attachment: current time in millis plus the
/// original filename. No existence check is performed before writing.
pub fn object_key(now_millis: i64, file_name: &str) -> String {
    format!("{}-{}", now_millis, file_name)
}

// ── Trait ────────────────────────────────────────────────────────────

/// Object storage operations for complaint attachments.
///
/// Methods return explicitly `Send` futures so that generic Axum handlers
/// parameterized over a store implementation stay spawnable.
pub trait ObjectStore: Send + Sync {
    /// Store bytes under `key` with the given content type.
    fn put(
        &self,
        key: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<(), String>> + Send;

    /// Public URL under which a stored object is reachable.
    fn public_url(&self, key: &str) -> String;
}

// ── S3 implementation ───────────────────────────────────────────────

/// S3-compatible object store backed by Tigris/MinIO.
/// All uploads are encrypted with SSE-S3 (AES256).
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    endpoint: String,
}

impl S3ObjectStore {
    /// Build a new S3ObjectStore from environment variables.
    ///
    /// Supports both Fly/Tigris (`AWS_*`) and local MinIO (`S3_*`) naming:
    ///   - `AWS_ENDPOINT_URL_S3` / `S3_ENDPOINT`
    ///   - `AWS_ACCESS_KEY_ID`   / `S3_ACCESS_KEY`
    ///   - `AWS_SECRET_ACCESS_KEY` / `S3_SECRET_KEY`
    ///   - `AWS_REGION`          / `S3_REGION`
    pub fn from_env() -> Self {
        let endpoint = env_or("AWS_ENDPOINT_URL_S3", "S3_ENDPOINT")
            .expect("AWS_ENDPOINT_URL_S3 or S3_ENDPOINT must be set");
        let access_key = env_or("AWS_ACCESS_KEY_ID", "S3_ACCESS_KEY")
            .expect("AWS_ACCESS_KEY_ID or S3_ACCESS_KEY must be set");
        let secret_key = env_or("AWS_SECRET_ACCESS_KEY", "S3_SECRET_KEY")
            .expect("AWS_SECRET_ACCESS_KEY or S3_SECRET_KEY must be set");
        let region =
            env_or("AWS_REGION", "S3_REGION").unwrap_or_else(|| "us-east-1".to_string());

        let creds = Credentials::new(&access_key, &secret_key, None, None, "env");

        let config = aws_sdk_s3::Config::builder()
            .endpoint_url(&endpoint)
            .region(Region::new(region))
            .credentials_provider(creds)
            .force_path_style(true)
            .behavior_version_latest()
            .build();

        Self {
            client: Client::from_conf(config),
            bucket: uploads_bucket(),
            endpoint,
        }
    }

    /// Create the uploads bucket if it doesn't already exist, and set a
    /// public-read policy so attachment URLs resolve from the browser.
    pub async fn ensure_bucket(&self) {
        let exists = self
            .client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .is_ok();

        if !exists {
            tracing::info!("Creating uploads bucket '{}'...", self.bucket);
            match self.client.create_bucket().bucket(&self.bucket).send().await {
                Ok(_) => tracing::info!("Uploads bucket '{}' created", self.bucket),
                Err(e) => {
                    tracing::warn!("Failed to create uploads bucket '{}': {}", self.bucket, e);
                    return;
                }
            }
        } else {
            tracing::info!("Uploads bucket '{}' already exists", self.bucket);
        }

        // Tigris manages public access via `fly storage update --public` instead
        // of S3 bucket policies, so we only apply the policy on non-Tigris
        // providers (e.g. MinIO).
        if !self.endpoint.contains("tigris") {
            let policy = format!(
                r#"{{"Version":"2012-10-17","Statement":[{{"Effect":"Allow","Principal":"*","Action":["s3:GetObject"],"Resource":["arn:aws:s3:::{}/*"]}}]}}"#,
                self.bucket
            );
            match self
                .client
                .put_bucket_policy()
                .bucket(&self.bucket)
                .policy(&policy)
                .send()
                .await
            {
                Ok(_) => tracing::info!("Public-read policy applied to '{}'", self.bucket),
                Err(e) => tracing::warn!("Failed to set bucket policy on '{}': {}", self.bucket, e),
            }
        }
    }
}

impl ObjectStore for S3ObjectStore {
    async fn put(&self, key: &str, content_type: &str, body: Vec<u8>) -> Result<(), String> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .server_side_encryption(ServerSideEncryption::Aes256)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| {
                let svc = e.into_service_error();
                tracing::error!("S3 PutObject failed for key '{}': {:?}", key, svc);
                format!("S3 upload failed: {}", svc)
            })?;

        Ok(())
    }

    /// Tigris uses virtual-hosted style: `https://{bucket}.fly.storage.tigris.dev/{key}`
    /// MinIO uses path style: `http://localhost:9000/{bucket}/{key}`
    ///
    /// We detect Tigris by checking if the endpoint contains `tigris`.
    fn public_url(&self, key: &str) -> String {
        if self.endpoint.contains("tigris") {
            let host = self
                .endpoint
                .trim_start_matches("https://")
                .trim_start_matches("http://");
            format!("https://{}.{}/{}", self.bucket, host, key)
        } else {
            format!("{}/{}/{}", self.endpoint, self.bucket, key)
        }
    }
}
