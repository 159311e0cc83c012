use shared_types::IdentityUser;

// --- Environment helpers ---

fn identity_api_url() -> Result<String, String> {
    std::env::var("IDENTITY_API_URL").map_err(|_| "IDENTITY_API_URL is not configured".to_string())
}

fn identity_api_key() -> Result<String, String> {
    std::env::var("IDENTITY_API_KEY").map_err(|_| "IDENTITY_API_KEY is not configured".to_string())
}

/// Pull the caller's session token out of the request headers.
///
/// Checks `Authorization: Bearer <token>` first, then the `__session`
/// cookie the identity provider's browser SDK sets.
pub fn extract_session_token(headers: &axum::http::HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(axum::http::header::AUTHORIZATION) {
        if let Ok(raw) = value.to_str() {
            if let Some(token) = raw.strip_prefix("Bearer ") {
                if !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }

    let cookies = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == "__session" && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}

/// Look up the signed-in user behind a session token at the identity
/// provider. Returns `Ok(None)` for anonymous or expired sessions; the
/// wizard works without a signed-in user, just without pre-filled fields.
#[tracing::instrument(skip(session_token))]
pub async fn fetch_current_user(session_token: &str) -> Result<Option<IdentityUser>, String> {
    let base_url = identity_api_url()?;
    let api_key = identity_api_key()?;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/v1/me", base_url.trim_end_matches('/')))
        .bearer_auth(session_token)
        .header("x-api-key", api_key)
        .send()
        .await
        .map_err(|e| format!("Identity provider request failed: {}", e))?;

    match response.status() {
        status if status.is_success() => {
            let user = response
                .json::<IdentityUser>()
                .await
                .map_err(|e| format!("Failed to parse identity response: {}", e))?;
            Ok(Some(user))
        }
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::NOT_FOUND => Ok(None),
        status => {
            let body = response.text().await.unwrap_or_default();
            Err(format!("Identity provider error ({}): {}", status, body))
        }
    }
}
