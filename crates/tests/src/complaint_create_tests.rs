use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{default_app, get, post_json, test_app, MockContentStore, MockObjectStore};

#[tokio::test]
async fn create_complaint_returns_generated_id() {
    let (app, _store, content) = default_app();

    let body = serde_json::json!({
        "userId": "user_42",
        "firstName": "A",
        "lastName": "B",
        "email": "a@b.com",
        "phone": "",
        "claimants": [""],
        "defendants": [""],
        "witnesses": [""],
        "caseNumbers": [""],
        "legalViolations": ["Judicial misconduct"],
        "subject": "S",
        "description": "D",
        "fileUrl": "",
        "consentGiven": true,
        "submittedAt": chrono::Utc::now().to_rfc3339(),
    });

    let (status, resp) = post_json(&app, "/api/submit-to-sanity", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["success"], true);
    assert_eq!(resp["id"], "cmp-1");

    let docs = content.documents.lock().unwrap();
    assert_eq!(docs.len(), 1);
    let doc = &docs[0];
    assert_eq!(doc.user_id, "user_42");
    assert_eq!(doc.first_name, "A");
    assert_eq!(doc.file_url, "");
    assert!(doc.consent_given);
    assert_eq!(doc.legal_violations, vec!["Judicial misconduct".to_string()]);
    assert!(doc.submitted_at.is_some());
}

#[tokio::test]
async fn create_complaint_preserves_file_url() {
    let (app, _store, content) = default_app();

    let body = serde_json::json!({
        "firstName": "A",
        "fileUrl": "https://blobs.test/complaint-uploads/1700000000000-evidence.pdf",
        "consentGiven": true,
    });

    let (status, _resp) = post_json(&app, "/api/submit-to-sanity", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let docs = content.documents.lock().unwrap();
    assert_eq!(
        docs[0].file_url,
        "https://blobs.test/complaint-uploads/1700000000000-evidence.pdf"
    );
}

#[tokio::test]
async fn create_complaint_accepts_partial_body() {
    // The content database is the schema authority; missing fields default.
    let (app, _store, content) = default_app();

    let (status, resp) =
        post_json(&app, "/api/submit-to-sanity", r#"{"subject":"only this"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["success"], true);

    let docs = content.documents.lock().unwrap();
    assert_eq!(docs[0].subject, "only this");
    assert_eq!(docs[0].email, "");
    assert!(!docs[0].consent_given);
}

#[tokio::test]
async fn create_complaint_rejects_get_with_405() {
    let (app, _store, _content) = default_app();

    let (status, _resp) = get(&app, "/api/submit-to-sanity").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn content_db_failure_returns_500() {
    let (app, _store, content) = test_app(
        MockObjectStore::default(),
        MockContentStore {
            fail_create: true,
            ..Default::default()
        },
    );

    let (status, resp) = post_json(
        &app,
        "/api/submit-to-sanity",
        r#"{"firstName":"A","consentGiven":true}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp["kind"], "ContentDbError");
    assert!(content.documents.lock().unwrap().is_empty());
}

#[tokio::test]
async fn each_submission_creates_an_independent_document() {
    // No deduplication: identical bodies create distinct documents.
    let (app, _store, content) = default_app();

    let body = r#"{"firstName":"A","consentGiven":true}"#;
    let (_s1, r1) = post_json(&app, "/api/submit-to-sanity", body).await;
    let (_s2, r2) = post_json(&app, "/api/submit-to-sanity", body).await;

    assert_ne!(r1["id"], r2["id"]);
    assert_eq!(content.documents.lock().unwrap().len(), 2);
}
