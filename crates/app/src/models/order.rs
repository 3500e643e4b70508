//! Meal order row types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smart_canteen_core::{MealCategory, MenuItemId, OrderDate, OrderId, OrderStatus, ProfileId};

/// A meal order as stored by the data service.
///
/// Links one profile to one menu item for one date and category. Intended
/// invariant: at most one confirmed order per (profile, date, category);
/// the toggle handler preserves it, the store does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealOrder {
    pub id: OrderId,
    pub user_id: ProfileId,
    pub menu_item_id: MenuItemId,
    pub meal_type: MealCategory,
    pub order_date: OrderDate,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating an order.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    pub user_id: ProfileId,
    pub menu_item_id: MenuItemId,
    pub meal_type: MealCategory,
    pub order_date: OrderDate,
    pub status: OrderStatus,
}

/// The joined menu item fields embedded in a report query row.
///
/// `meal_type` stays a raw string here: the report treats categories as
/// opaque grouping keys, so nothing is validated on this path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderedItem {
    pub name: String,
    pub meal_type: String,
}

/// A confirmed order joined with its menu item (the report input shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderWithItem {
    pub id: OrderId,
    pub user_id: ProfileId,
    pub menu_item_id: MenuItemId,
    pub order_date: OrderDate,
    pub status: OrderStatus,
    /// Embedded join, named after the foreign table.
    pub menu_items: OrderedItem,
}
