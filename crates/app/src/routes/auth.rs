//! Login and logout handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use smart_canteen_core::Role;

use crate::error::{AppError, set_sentry_user};
use crate::middleware::{OptionalUser, clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// `GET /login`: render the login page, or skip it for a live session.
pub async fn login_page(
    OptionalUser(user): OptionalUser,
    Query(query): Query<LoginQuery>,
) -> Response {
    if user.is_some() {
        return Redirect::to("/").into_response();
    }

    let error = query.error.map(|code| match code.as_str() {
        "expired" => "Your session has expired. Please sign in again.".to_string(),
        _ => "Something went wrong. Please try again.".to_string(),
    });

    LoginTemplate { error }.into_response()
}

/// `POST /login`: verify credentials against the canteen service and start
/// a session.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let auth = AuthService::new(state.canteen());

    let profile = match auth.login(&form.email, &form.password).await {
        Ok(profile) => profile,
        Err(AuthError::Service(e)) => return Err(AppError::Canteen(e)),
        Err(e) => {
            tracing::debug!(error = %e, "login rejected");
            return Ok(LoginTemplate {
                error: Some("Invalid email or password.".to_string()),
            }
            .into_response());
        }
    };

    let user = CurrentUser::from(&profile);
    set_current_user(&session, &user).await?;
    set_sentry_user(&user.id, Some(user.email.as_str()));

    let target = if user.role == Role::Admin {
        "/admin/menu"
    } else {
        "/menu"
    };
    Ok(Redirect::to(target).into_response())
}

/// `POST /logout`: destroy the session.
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    clear_current_user(&session).await?;
    crate::error::clear_sentry_user();
    Ok(Redirect::to("/login"))
}
