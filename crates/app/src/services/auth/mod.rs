//! Authentication service.
//!
//! Password verification is entirely delegated to the canteen data service's
//! token endpoint; this service only turns an accepted sign-in into a loaded
//! [`Profile`].

mod error;

pub use error::AuthError;

use smart_canteen_core::Email;

use crate::canteen::CanteenClient;
use crate::models::Profile;

/// Authentication service.
pub struct AuthService<'a> {
    canteen: &'a CanteenClient,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(canteen: &'a CanteenClient) -> Self {
        Self { canteen }
    }

    /// Sign in with email and password and load the matching profile.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email is malformed,
    /// `AuthError::InvalidCredentials` if the service rejects the sign-in,
    /// and `AuthError::ProfileMissing` if authentication succeeds but no
    /// profile row exists for the user.
    pub async fn login(&self, email: &str, password: &str) -> Result<Profile, AuthError> {
        let email = Email::parse(email)?;

        let user = self
            .canteen
            .sign_in(email.as_str(), password)
            .await
            .map_err(|e| {
                if e.is_auth_rejection() {
                    AuthError::InvalidCredentials
                } else {
                    AuthError::Service(e)
                }
            })?;

        let profile = self
            .canteen
            .get_profile(user.id)
            .await
            .map_err(AuthError::Service)?
            .ok_or(AuthError::ProfileMissing)?;

        tracing::info!(profile_id = %profile.id, role = %profile.role, "login succeeded");
        Ok(profile)
    }
}
