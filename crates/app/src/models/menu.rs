//! Menu item row types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smart_canteen_core::{MealCategory, MenuItemId, OrderDate, ProfileId};

/// A menu item as stored by the data service.
///
/// Created by an admin for a future date, editable any time, never mutated
/// by employees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    /// The meal slot this item belongs to.
    pub meal_type: MealCategory,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// The calendar date this item is on the menu for.
    pub date: OrderDate,
    /// Unavailable items are hidden from employees but kept for admins.
    pub is_available: bool,
    /// Admin who created the item, when recorded.
    pub created_by: Option<ProfileId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a menu item.
#[derive(Debug, Clone, Serialize)]
pub struct NewMenuItem {
    pub meal_type: MealCategory,
    pub name: String,
    pub description: String,
    pub date: OrderDate,
    pub is_available: bool,
    pub created_by: Option<ProfileId>,
}

/// Partial update for a menu item.
#[derive(Debug, Clone, Serialize)]
pub struct MenuItemChanges {
    pub meal_type: MealCategory,
    pub name: String,
    pub description: String,
    pub is_available: bool,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_deserializes_service_row() {
        let json = r#"{
            "id": "8c6a97e2-0000-4000-8000-00000000000a",
            "meal_type": "lunch",
            "name": "Vegetable Biryani",
            "description": "With raita",
            "date": "2026-08-30",
            "is_available": true,
            "created_by": null,
            "created_at": "2026-08-29T08:00:00Z",
            "updated_at": "2026-08-29T08:00:00Z"
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.meal_type, MealCategory::Lunch);
        assert_eq!(item.date.to_string(), "2026-08-30");
        assert!(item.created_by.is_none());
    }

    #[test]
    fn test_new_menu_item_serializes_date_as_string() {
        let new = NewMenuItem {
            meal_type: MealCategory::Breakfast,
            name: "Toast".to_string(),
            description: String::new(),
            date: "2026-08-30".parse().unwrap(),
            is_available: true,
            created_by: None,
        };
        let json = serde_json::to_value(&new).unwrap();
        assert_eq!(json["date"], "2026-08-30");
        assert_eq!(json["meal_type"], "breakfast");
    }
}
