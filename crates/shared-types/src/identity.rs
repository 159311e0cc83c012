use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the external identity provider.
///
/// The portal never manages credentials itself. This is the read-only
/// shape consumed to pre-fill the wizard's identity step and to stamp
/// `userId` on submitted complaints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct IdentityUser {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email_addresses: Vec<String>,
}

impl IdentityUser {
    /// The first email address on file, if any.
    pub fn primary_email(&self) -> Option<&str> {
        self.email_addresses.first().map(|s| s.as_str())
    }
}
