use axum::http::StatusCode;

use crate::common::{default_app, get};

#[tokio::test]
async fn health_reports_ok_with_version() {
    let (app, _store, _content) = default_app();

    let (status, resp) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["status"], "ok");
    assert!(resp["version"].as_str().is_some_and(|v| !v.is_empty()));
    assert!(resp["uptime_seconds"].is_number());
}
