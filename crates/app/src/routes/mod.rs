//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Dispatch by role (login, menu, or admin)
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (pings the data service)
//!
//! # Auth
//! GET  /login                  - Login page
//! POST /login                  - Login action
//! POST /logout                 - Logout action
//!
//! # Employee
//! GET  /menu                   - Tomorrow's menu + order summary + countdown
//! POST /orders/toggle          - Toggle a meal selection (before the cutoff)
//! POST /reminder/dismiss       - Dismiss today's reminder banner
//! GET  /profile                - Profile settings
//! POST /profile                - Save profile settings
//!
//! # Admin (requires admin role)
//! GET  /admin/menu             - Tomorrow's menu management
//! GET  /admin/menu/new         - New menu item form
//! POST /admin/menu             - Create menu item
//! GET  /admin/menu/{id}/edit   - Edit menu item form
//! POST /admin/menu/{id}        - Update menu item
//! POST /admin/menu/{id}/delete - Delete menu item
//! GET  /admin/reports          - Order report for a date (default tomorrow)
//! GET  /admin/reports/export   - CSV download of the report
//! ```

pub mod admin_menu;
pub mod auth;
pub mod menu;
pub mod profile;
pub mod reports;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use smart_canteen_core::Role;

use crate::middleware::OptionalUser;
use crate::state::AppState;

/// Create the application router (without the health endpoints, which live
/// in `main`).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/menu", get(menu::dashboard))
        .route("/orders/toggle", post(menu::toggle_order))
        .route("/reminder/dismiss", post(menu::dismiss_reminder))
        .route("/profile", get(profile::show).post(profile::save))
        .nest("/admin", admin_routes())
}

/// Admin routes; every handler takes `RequireAdmin`.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/menu", get(admin_menu::index).post(admin_menu::create))
        .route("/menu/new", get(admin_menu::new_form))
        .route("/menu/{id}", post(admin_menu::update))
        .route("/menu/{id}/edit", get(admin_menu::edit_form))
        .route("/menu/{id}/delete", post(admin_menu::delete))
        .route("/reports", get(reports::show))
        .route("/reports/export", get(reports::export))
}

/// Root dispatch: the session's role decides which dashboard to land on.
async fn index(OptionalUser(user): OptionalUser) -> Redirect {
    match user {
        Some(user) if user.role == Role::Admin => Redirect::to("/admin/menu"),
        Some(_) => Redirect::to("/menu"),
        None => Redirect::to("/login"),
    }
}
