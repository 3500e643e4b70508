//! Admin menu management: the CRUD surface for tomorrow's menu.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use chrono::Utc;
use serde::Deserialize;

use smart_canteen_core::{MealCategory, MenuItemId};

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::{MenuItem, MenuItemChanges, NewMenuItem};
use crate::state::AppState;

/// One category column on the management page; empty categories stay
/// visible so admins see what is missing.
pub struct AdminSection {
    pub category: MealCategory,
    pub items: Vec<MenuItem>,
}

#[derive(Template, WebTemplate)]
#[template(path = "admin_menu.html")]
pub struct AdminMenuTemplate {
    pub date: String,
    pub sections: Vec<AdminSection>,
}

#[derive(Template, WebTemplate)]
#[template(path = "menu_form.html")]
pub struct MenuFormTemplate {
    pub date: String,
    pub item: Option<MenuItem>,
}

#[derive(Debug, Deserialize)]
pub struct MenuItemForm {
    pub meal_type: MealCategory,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Checkbox: present when checked, absent otherwise.
    pub is_available: Option<String>,
}

/// `GET /admin/menu`: tomorrow's full menu, unavailable items included.
pub async fn index(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<AdminMenuTemplate> {
    let date = state.order_date();
    let items = state.canteen().list_menu(date, false).await?;

    let sections = MealCategory::ALL
        .iter()
        .map(|&category| AdminSection {
            category,
            items: items
                .iter()
                .filter(|item| item.meal_type == category)
                .cloned()
                .collect(),
        })
        .collect();

    Ok(AdminMenuTemplate {
        date: date.to_string(),
        sections,
    })
}

/// `GET /admin/menu/new`: empty item form.
pub async fn new_form(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<MenuFormTemplate> {
    Ok(MenuFormTemplate {
        date: state.order_date().to_string(),
        item: None,
    })
}

/// `POST /admin/menu`: create a menu item for tomorrow.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Form(form): Form<MenuItemForm>,
) -> Result<Redirect> {
    let name = form.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }

    let item = state
        .canteen()
        .create_menu_item(&NewMenuItem {
            meal_type: form.meal_type,
            name,
            description: form.description.trim().to_string(),
            date: state.order_date(),
            is_available: form.is_available.is_some(),
            created_by: Some(admin.id),
        })
        .await?;
    tracing::info!(item_id = %item.id, category = %item.meal_type, "menu item created");

    Ok(Redirect::to("/admin/menu"))
}

/// `GET /admin/menu/{id}/edit`: pre-filled item form.
pub async fn edit_form(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<MenuItemId>,
) -> Result<MenuFormTemplate> {
    let item = state
        .canteen()
        .get_menu_item(id)
        .await?
        .ok_or_else(|| AppError::NotFound("menu item".to_string()))?;

    Ok(MenuFormTemplate {
        date: item.date.to_string(),
        item: Some(item),
    })
}

/// `POST /admin/menu/{id}`: update name, description, category, and
/// availability.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<MenuItemId>,
    Form(form): Form<MenuItemForm>,
) -> Result<Redirect> {
    let name = form.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }

    state
        .canteen()
        .update_menu_item(
            id,
            &MenuItemChanges {
                meal_type: form.meal_type,
                name,
                description: form.description.trim().to_string(),
                is_available: form.is_available.is_some(),
                updated_at: Utc::now(),
            },
        )
        .await?;
    tracing::info!(item_id = %id, "menu item updated");

    Ok(Redirect::to("/admin/menu"))
}

/// `POST /admin/menu/{id}/delete`: remove the item. Existing orders for it
/// are removed by the store's cascade.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<MenuItemId>,
) -> Result<Redirect> {
    state.canteen().delete_menu_item(id).await?;
    tracing::info!(item_id = %id, "menu item deleted");
    Ok(Redirect::to("/admin/menu"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_item() -> MenuItem {
        MenuItem {
            id: MenuItemId::new(uuid::Uuid::new_v4()),
            meal_type: MealCategory::Snack,
            name: "Fruit Bowl".to_string(),
            description: "Seasonal".to_string(),
            date: "2026-08-30".parse().unwrap(),
            is_available: false,
            created_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_management_template_keeps_empty_categories() {
        let html = AdminMenuTemplate {
            date: "2026-08-30".to_string(),
            sections: MealCategory::ALL
                .iter()
                .map(|&category| AdminSection {
                    category,
                    items: Vec::new(),
                })
                .collect(),
        }
        .render()
        .unwrap();
        assert!(html.contains("Breakfast"));
        assert!(html.contains("Lunch"));
        assert!(html.contains("Snack"));
        assert!(html.contains("No items yet."));
    }

    #[test]
    fn test_form_template_prefills_for_edit() {
        let item = sample_item();
        let html = MenuFormTemplate {
            date: "2026-08-30".to_string(),
            item: Some(item),
        }
        .render()
        .unwrap();
        assert!(html.contains("Edit item"));
        assert!(html.contains("Fruit Bowl"));
        assert!(html.contains(r#"value="snack" selected"#));
        assert!(!html.contains(r#"name="is_available" checked"#));
    }

    #[test]
    fn test_form_template_blank_for_create() {
        let html = MenuFormTemplate {
            date: "2026-08-30".to_string(),
            item: None,
        }
        .render()
        .unwrap();
        assert!(html.contains("Add item"));
        assert!(html.contains(r#"name="is_available" checked"#));
    }
}
