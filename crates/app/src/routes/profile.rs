//! Profile settings page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::{RequireUser, set_current_user};
use crate::models::{CurrentUser, ProfileChanges};
use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub dietary_preferences: String,
    pub notification_enabled: bool,
    pub saved: bool,
}

#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub saved: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub full_name: String,
    #[serde(default)]
    pub dietary_preferences: String,
    /// Checkbox: present when checked, absent otherwise.
    pub notification_enabled: Option<String>,
}

/// `GET /profile`: render the settings form from a fresh profile row, not
/// the session snapshot.
pub async fn show(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Query(query): Query<ProfileQuery>,
) -> Result<ProfileTemplate> {
    let profile = state
        .canteen()
        .get_profile(user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("profile".to_string()))?;

    Ok(ProfileTemplate {
        email: profile.email.as_str().to_string(),
        full_name: profile.full_name,
        role: profile.role.to_string(),
        dietary_preferences: profile.dietary_preferences,
        notification_enabled: profile.notification_enabled,
        saved: query.saved.is_some(),
    })
}

/// `POST /profile`: persist the editable fields and refresh the session
/// snapshot so the reminder logic sees the new notification setting.
pub async fn save(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    session: Session,
    Form(form): Form<ProfileForm>,
) -> Result<Redirect> {
    let full_name = form.full_name.trim().to_string();
    if full_name.is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }

    let changes = ProfileChanges {
        full_name,
        dietary_preferences: form.dietary_preferences.trim().to_string(),
        notification_enabled: form.notification_enabled.is_some(),
    };
    state.canteen().update_profile(user.id, &changes).await?;

    let snapshot = CurrentUser {
        full_name: changes.full_name,
        notification_enabled: changes.notification_enabled,
        ..user
    };
    set_current_user(&session, &snapshot).await?;

    Ok(Redirect::to("/profile?saved=1"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_template_renders() {
        let html = ProfileTemplate {
            email: "alice@canteen.example".to_string(),
            full_name: "Alice".to_string(),
            role: "employee".to_string(),
            dietary_preferences: "vegetarian".to_string(),
            notification_enabled: true,
            saved: true,
        }
        .render()
        .unwrap();
        assert!(html.contains("alice@canteen.example"));
        assert!(html.contains("Employee"));
        assert!(html.contains("vegetarian"));
        assert!(html.contains("Profile saved."));
        assert!(html.contains(r#"name="notification_enabled" checked"#));
    }
}
