//! Profile row type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smart_canteen_core::{Email, ProfileId, Role};

/// A user profile as stored by the data service.
///
/// The role is immutable from the application's point of view; it decides
/// which dashboard a session resolves to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Profile ID (matches the auth user ID).
    pub id: ProfileId,
    /// Sign-in email address.
    pub email: Email,
    /// Display name.
    pub full_name: String,
    /// Employee or admin.
    pub role: Role,
    /// Free-text dietary preferences.
    #[serde(default)]
    pub dietary_preferences: String,
    /// Whether the pre-deadline reminder is surfaced for this user.
    pub notification_enabled: bool,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
}

/// Editable profile fields, sent as a partial update.
///
/// Email and role are read-only and deliberately absent.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileChanges {
    pub full_name: String,
    pub dietary_preferences: String,
    pub notification_enabled: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserializes_service_row() {
        let json = r#"{
            "id": "6f1b0f6e-0000-4000-8000-000000000001",
            "email": "alice@canteen.example",
            "full_name": "Alice",
            "role": "employee",
            "dietary_preferences": "vegetarian",
            "notification_enabled": true,
            "created_at": "2026-08-01T09:00:00Z"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.role, Role::Employee);
        assert_eq!(profile.email.as_str(), "alice@canteen.example");
        assert!(profile.notification_enabled);
    }

    #[test]
    fn test_missing_dietary_preferences_defaults_empty() {
        let json = r#"{
            "id": "6f1b0f6e-0000-4000-8000-000000000002",
            "email": "bob@canteen.example",
            "full_name": "Bob",
            "role": "admin",
            "notification_enabled": false,
            "created_at": "2026-08-01T09:00:00Z"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert!(profile.dietary_preferences.is_empty());
        assert!(profile.role.is_admin());
    }
}
