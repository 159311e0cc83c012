use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use server::content::ContentStore;
use server::rest::AppState;
use server::storage::ObjectStore;
use shared_types::ComplaintDocument;

// ── In-memory test doubles ──────────────────────────────────────────

/// Object store double: records puts, optionally fails them.
#[derive(Default)]
pub struct MockObjectStore {
    pub fail_put: bool,
    /// (key, content_type, byte length) per stored object.
    pub puts: Mutex<Vec<(String, String, usize)>>,
}

impl ObjectStore for MockObjectStore {
    async fn put(&self, key: &str, content_type: &str, body: Vec<u8>) -> Result<(), String> {
        if self.fail_put {
            return Err("simulated storage outage".to_string());
        }
        self.puts
            .lock()
            .unwrap()
            .push((key.to_string(), content_type.to_string(), body.len()));
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://blobs.test/complaint-uploads/{}", key)
    }
}

/// Content database double: records created documents, optionally fails.
#[derive(Default)]
pub struct MockContentStore {
    pub fail_create: bool,
    pub documents: Mutex<Vec<ComplaintDocument>>,
    pub assets: Mutex<Vec<String>>,
    pub registrations: Mutex<Vec<(String, String)>>,
}

impl ContentStore for MockContentStore {
    async fn create_complaint(&self, document: &ComplaintDocument) -> Result<String, String> {
        if self.fail_create {
            return Err("simulated content-database outage".to_string());
        }
        let mut docs = self.documents.lock().unwrap();
        docs.push(document.clone());
        Ok(format!("cmp-{}", docs.len()))
    }

    async fn upload_asset(
        &self,
        file_name: &str,
        _content_type: &str,
        _bytes: Vec<u8>,
    ) -> Result<String, String> {
        let mut assets = self.assets.lock().unwrap();
        assets.push(file_name.to_string());
        Ok(format!("file-{}", assets.len()))
    }

    async fn register_upload(&self, file_url: &str, asset_id: &str) -> Result<String, String> {
        let mut regs = self.registrations.lock().unwrap();
        regs.push((file_url.to_string(), asset_id.to_string()));
        Ok(format!("reg-{}", regs.len()))
    }
}

// ── Router construction ─────────────────────────────────────────────

/// Build the REST router around the given test doubles.
pub fn test_app(
    store: MockObjectStore,
    content: MockContentStore,
) -> (Router, Arc<MockObjectStore>, Arc<MockContentStore>) {
    let store = Arc::new(store);
    let content = Arc::new(content);
    let state = AppState {
        store: Arc::clone(&store),
        content: Arc::clone(&content),
    };
    let router = server::rest::api_router().with_state(state);
    (router, store, content)
}

/// Build the REST router with well-behaved doubles.
pub fn default_app() -> (Router, Arc<MockObjectStore>, Arc<MockContentStore>) {
    test_app(MockObjectStore::default(), MockContentStore::default())
}

// ── Request helpers ─────────────────────────────────────────────────

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// POST a JSON body.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// GET a route.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

const BOUNDARY: &str = "test-boundary-7f2a9c";

/// POST a single-field multipart body.
pub async fn post_multipart(
    app: &Router,
    uri: &str,
    field_name: &str,
    file_name: &str,
    content_type: &str,
    bytes: &[u8],
) -> (StatusCode, Value) {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field_name, file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap();

    send(app, req).await
}
