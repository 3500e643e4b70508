//! Authentication error types.

use thiserror::Error;

use smart_canteen_core::EmailError;

use crate::canteen::CanteenError;

/// Errors from the authentication service.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The email is not structurally valid.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The data service rejected the credentials.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The credentials were accepted but no profile row exists.
    #[error("no profile for authenticated user")]
    ProfileMissing,

    /// The data service failed for another reason.
    #[error("canteen service error: {0}")]
    Service(CanteenError),
}
