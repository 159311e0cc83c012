use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{default_app, get, post_json, post_multipart, test_app, MockContentStore, MockObjectStore};

#[tokio::test]
async fn upload_stores_file_and_returns_public_url() {
    let (app, store, _content) = default_app();

    let (status, resp) = post_multipart(
        &app,
        "/api/upload",
        "file",
        "evidence.pdf",
        "application/pdf",
        b"%PDF-1.7 fake",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["success"], true);

    let url = resp["url"].as_str().unwrap();
    assert!(url.starts_with("https://blobs.test/complaint-uploads/"));
    assert!(url.ends_with("-evidence.pdf"), "url should end with the filename: {}", url);

    let puts = store.puts.lock().unwrap();
    assert_eq!(puts.len(), 1);
    let (key, content_type, len) = &puts[0];
    assert!(key.ends_with("-evidence.pdf"));
    assert_eq!(content_type, "application/pdf");
    assert_eq!(*len, b"%PDF-1.7 fake".len());

    // Key prefix is the upload instant in millis.
    let prefix = key.trim_end_matches("-evidence.pdf");
    assert!(prefix.parse::<i64>().is_ok(), "key prefix should be numeric: {}", key);
}

#[tokio::test]
async fn upload_without_file_field_returns_400() {
    let (app, store, _content) = default_app();

    let (status, resp) = post_multipart(
        &app,
        "/api/upload",
        "avatar",
        "photo.png",
        "image/png",
        b"not the right field",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["kind"], "BadRequest");
    assert!(store.puts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn upload_with_non_multipart_body_returns_400() {
    let (app, _store, _content) = default_app();

    let (status, _resp) = post_json(&app, "/api/upload", r#"{"file":"nope"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upload_rejects_get_with_405() {
    let (app, _store, _content) = default_app();

    let (status, _resp) = get(&app, "/api/upload").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn storage_failure_returns_500_without_content_db_writes() {
    let (app, store, content) = test_app(
        MockObjectStore {
            fail_put: true,
            ..Default::default()
        },
        MockContentStore::default(),
    );

    let (status, resp) = post_multipart(
        &app,
        "/api/upload",
        "file",
        "evidence.pdf",
        "application/pdf",
        b"bytes",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp["kind"], "StorageError");
    assert!(store.puts.lock().unwrap().is_empty());
    assert!(content.assets.lock().unwrap().is_empty());
    assert!(content.registrations.lock().unwrap().is_empty());
}

#[tokio::test]
async fn upload_skips_content_db_with_asset_registry_off() {
    // Feature flags default to all-off in tests (no config.toml loaded),
    // so a successful upload must not write to the content database.
    let (app, _store, content) = default_app();

    let (status, _resp) = post_multipart(
        &app,
        "/api/upload",
        "file",
        "notes.doc",
        "application/msword",
        b"doc bytes",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(content.assets.lock().unwrap().is_empty());
    assert!(content.documents.lock().unwrap().is_empty());
}

#[tokio::test]
async fn distinct_uploads_of_the_same_name_get_distinct_keys() {
    let (app, store, _content) = default_app();

    for _ in 0..2 {
        let (status, _resp) = post_multipart(
            &app,
            "/api/upload",
            "file",
            "same.pdf",
            "application/pdf",
            b"x",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        // Millisecond-resolution keys: space the writes out.
        tokio::time::sleep(std::time::Duration::from_millis(3)).await;
    }

    let puts = store.puts.lock().unwrap();
    assert_eq!(puts.len(), 2);
    assert_ne!(puts[0].0, puts[1].0, "keys must differ across uploads");
}
