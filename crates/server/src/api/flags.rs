use dioxus::prelude::*;
use shared_types::FeatureFlags;

/// Expose the server's feature flags to the client so the UI can hide
/// integrations that aren't active.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}
