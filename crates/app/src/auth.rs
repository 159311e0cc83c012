use dioxus::prelude::*;
use shared_types::IdentityUser;

/// Read-only view of the identity provider's session, shared via context.
///
/// The portal never authenticates anyone itself. This just mirrors what
/// the provider reports so the wizard can pre-fill the identity step.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub current_user: Signal<Option<IdentityUser>>,
    pub loaded: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            loaded: Signal::new(false),
        }
    }

    /// Fetch the session once at startup. Anonymous sessions and lookup
    /// failures both resolve to a signed-out state.
    pub fn load(mut self) {
        spawn(async move {
            match server::api::current_user().await {
                Ok(user) => self.current_user.set(user),
                Err(e) => {
                    tracing::warn!("Failed to load identity session: {e}");
                    self.current_user.set(None);
                }
            }
            self.loaded.set(true);
        });
    }

    /// The signed-in user's primary email, if any.
    pub fn email(&self) -> Option<String> {
        self.current_user
            .read()
            .as_ref()
            .and_then(|u| u.primary_email().map(|e| e.to_string()))
    }

    /// The signed-in user's id, or empty for anonymous submissions.
    pub fn user_id(&self) -> String {
        self.current_user
            .read()
            .as_ref()
            .map(|u| u.id.clone())
            .unwrap_or_default()
    }
}

pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
