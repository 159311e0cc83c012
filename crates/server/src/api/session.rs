use dioxus::prelude::*;
use shared_types::IdentityUser;

/// Fetch the signed-in user from the identity provider, or `None` for
/// anonymous sessions. With the `identity` flag off this is always `None`
/// and the wizard simply starts blank.
#[server]
pub async fn current_user() -> Result<Option<IdentityUser>, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use shared_types::AppError;

    if !crate::config::feature_flags().identity {
        return Ok(None);
    }

    let Some(ctx) = dioxus::fullstack::FullstackContext::current() else {
        return Ok(None);
    };
    let headers = ctx.parts_mut().headers.clone();

    let Some(token) = crate::identity::extract_session_token(&headers) else {
        return Ok(None);
    };

    crate::identity::fetch_current_user(&token)
        .await
        .map_err(|e| AppError::internal(e).into_server_fn_error())
}
