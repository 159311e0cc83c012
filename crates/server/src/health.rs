use axum::Json;
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// "configured" when the object-storage env vars are present.
    pub storage: String,
    /// "configured" when the content-database env vars are present.
    pub content_db: String,
    pub uptime_seconds: u64,
    pub version: String,
}

fn configured(present: bool) -> String {
    if present { "configured" } else { "unconfigured" }.to_string()
}

/// Health check handler.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    let storage = crate::storage::env_or("AWS_ENDPOINT_URL_S3", "S3_ENDPOINT").is_some();
    let content_db = crate::storage::env_or("CONTENT_PROJECT_ID", "SANITY_PROJECT_ID").is_some();

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        storage: configured(storage),
        content_db: configured(content_db),
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
