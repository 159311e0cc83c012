use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod auth;
mod routes;
mod submit;

use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_feature_flags();
        let flags = server::config::feature_flags();

        if flags.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let store = server::storage::S3ObjectStore::from_env();
        store.ensure_bucket().await;

        let content = server::content::SanityContentStore::from_env()
            .expect("Content database must be configured (CONTENT_PROJECT_ID et al.)");

        let state = server::rest::AppState::new(store, content);

        let mut router = dioxus::server::router(App)
            .merge(server::rest::api_router().with_state(state))
            .merge(server::openapi::docs_router());

        if flags.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        // Max upload size (default 50 MB), configurable via MAX_UPLOAD_BYTES env var.
        let max_body: usize = std::env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50 * 1024 * 1024);

        let router = router
            .layer(axum::extract::DefaultBodyLimit::max(max_body))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch feature flags once and provide via context (defaults all-off on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);

    // Identity session, loaded once at startup.
    let auth = use_context_provider(AuthState::new);
    use_hook(move || auth.load());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
