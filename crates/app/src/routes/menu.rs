//! Employee dashboard: tomorrow's menu, the order summary, the cutoff
//! countdown, and the order toggle.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;

use smart_canteen_core::{
    MealCategory, MenuItemId, OrderStatus, ReminderLedger,
};

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireUser;
use crate::models::{MealOrder, MenuItem, NewOrder, session_keys};
use crate::state::AppState;

/// One category block on the dashboard.
pub struct MenuSection {
    pub category: MealCategory,
    pub cards: Vec<MenuCard>,
}

/// A menu item plus whether the viewer has ordered it.
pub struct MenuCard {
    pub item: MenuItem,
    pub is_ordered: bool,
}

/// One line of the "your selections" summary.
pub struct SummaryRow {
    pub category: MealCategory,
    pub item_name: Option<String>,
}

#[derive(Template, WebTemplate)]
#[template(path = "menu.html")]
pub struct MenuTemplate {
    pub user_name: String,
    pub date: String,
    pub deadline_message: String,
    pub ordering_open: bool,
    pub sections: Vec<MenuSection>,
    pub summary: Vec<SummaryRow>,
    pub show_reminder: bool,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub menu_item_id: MenuItemId,
}

/// `GET /menu`: the employee dashboard for tomorrow's menu.
pub async fn dashboard(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    session: Session,
    Query(query): Query<DashboardQuery>,
) -> Result<MenuTemplate> {
    let now = state.local_now();
    let date = state.order_date();

    let items = state.canteen().list_menu(date, true).await?;
    let orders = state.canteen().list_orders_for_user(date, user.id).await?;

    let sections = build_sections(&items, &orders);
    let summary = build_summary(&items, &orders);

    let show_reminder = if user.role.is_admin() {
        false
    } else {
        resolve_reminder(&state, &session, user.notification_enabled).await?
    };

    let error = query.error.map(|code| match code.as_str() {
        "closed" => "The order deadline has passed; selections for this date are locked.".to_string(),
        "unavailable" => "That item is no longer on the menu.".to_string(),
        _ => "Something went wrong. Please try again.".to_string(),
    });

    Ok(MenuTemplate {
        user_name: user.full_name,
        date: date.to_string(),
        deadline_message: state.schedule().time_until_cutoff(now).to_string(),
        ordering_open: state.schedule().is_ordering_open(now),
        sections,
        summary,
        show_reminder,
        error,
    })
}

/// `POST /orders/toggle`: select, deselect, or replace a meal for tomorrow.
///
/// Toggling the already-ordered item withdraws it. Toggling a different item
/// in the same category replaces the previous selection, keeping at most one
/// confirmed order per category. After the cutoff nothing changes.
pub async fn toggle_order(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Form(form): Form<ToggleForm>,
) -> Result<Redirect> {
    let now = state.local_now();
    if !state.schedule().is_ordering_open(now) {
        return Ok(Redirect::to("/menu?error=closed"));
    }

    let date = state.order_date();
    let item = state
        .canteen()
        .get_menu_item(form.menu_item_id)
        .await?
        .ok_or_else(|| AppError::NotFound("menu item".to_string()))?;
    if item.date != date || !item.is_available {
        return Ok(Redirect::to("/menu?error=unavailable"));
    }

    let orders = state.canteen().list_orders_for_user(date, user.id).await?;

    if let Some(existing) = orders.iter().find(|o| o.menu_item_id == item.id) {
        state.canteen().delete_order(existing.id).await?;
        tracing::info!(order_id = %existing.id, "order withdrawn");
        return Ok(Redirect::to("/menu"));
    }

    if let Some(existing) = orders.iter().find(|o| o.meal_type == item.meal_type) {
        state.canteen().delete_order(existing.id).await?;
    }

    let order = state
        .canteen()
        .create_order(&NewOrder {
            user_id: user.id,
            menu_item_id: item.id,
            meal_type: item.meal_type,
            order_date: date,
            status: OrderStatus::Confirmed,
        })
        .await?;
    tracing::info!(order_id = %order.id, category = %order.meal_type, "order placed");

    Ok(Redirect::to("/menu"))
}

/// `POST /reminder/dismiss`: mark today's reminder as seen.
pub async fn dismiss_reminder(
    State(state): State<AppState>,
    RequireUser(_user): RequireUser,
    session: Session,
) -> Result<Redirect> {
    let today = state.local_now().date();
    let ledger: ReminderLedger = session
        .get(session_keys::REMINDER_LEDGER)
        .await?
        .unwrap_or_default();
    session
        .insert(session_keys::REMINDER_LEDGER, ledger.mark_shown(today))
        .await?;
    Ok(Redirect::to("/menu"))
}

/// Group available items into category sections, in report order, skipping
/// empty categories.
fn build_sections(items: &[MenuItem], orders: &[MealOrder]) -> Vec<MenuSection> {
    MealCategory::ALL
        .iter()
        .filter_map(|&category| {
            let cards: Vec<MenuCard> = items
                .iter()
                .filter(|item| item.meal_type == category)
                .map(|item| MenuCard {
                    item: item.clone(),
                    is_ordered: orders.iter().any(|o| o.menu_item_id == item.id),
                })
                .collect();
            (!cards.is_empty()).then_some(MenuSection { category, cards })
        })
        .collect()
}

/// One summary row per category, ordered or not.
fn build_summary(items: &[MenuItem], orders: &[MealOrder]) -> Vec<SummaryRow> {
    MealCategory::ALL
        .iter()
        .map(|&category| {
            let item_name = orders
                .iter()
                .find(|o| o.meal_type == category)
                .and_then(|o| items.iter().find(|i| i.id == o.menu_item_id))
                .map(|i| i.name.clone());
            SummaryRow {
                category,
                item_name,
            }
        })
        .collect()
}

/// Decide whether to show the reminder banner, and record a showing in the
/// session so it fires at most once per day.
async fn resolve_reminder(
    state: &AppState,
    session: &Session,
    notification_enabled: bool,
) -> Result<bool> {
    let now = state.local_now();
    let ledger: ReminderLedger = session
        .get(session_keys::REMINDER_LEDGER)
        .await?
        .unwrap_or_default();

    let already_shown = ledger.already_shown_on(now.date());
    if !state
        .reminder_policy()
        .should_remind(now, notification_enabled, already_shown)
    {
        return Ok(false);
    }

    session
        .insert(session_keys::REMINDER_LEDGER, ledger.mark_shown(now.date()))
        .await?;
    Ok(true)
}
