//! Session-scoped view of the authenticated user.

use serde::{Deserialize, Serialize};

use smart_canteen_core::{ProfileId, Role};

use crate::models::Profile;

/// Session storage keys.
pub mod session_keys {
    /// The authenticated user snapshot.
    pub const CURRENT_USER: &str = "current_user";
    /// The reminder ledger (date the reminder was last shown).
    pub const REMINDER_LEDGER: &str = "reminder_ledger";
}

/// Snapshot of the logged-in profile held in the session.
///
/// Initialized on login, cleared on logout, refreshed when the profile is
/// edited - there is no ambient global session object anywhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: ProfileId,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub notification_enabled: bool,
}

impl From<&Profile> for CurrentUser {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id,
            email: profile.email.to_string(),
            full_name: profile.full_name.clone(),
            role: profile.role,
            notification_enabled: profile.notification_enabled,
        }
    }
}
