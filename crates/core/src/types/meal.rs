//! Meal category and order status enums.

use serde::{Deserialize, Serialize};

/// The meal slot a menu item (and an order) belongs to.
///
/// The derived `Ord` follows the fixed report order:
/// breakfast < lunch < snack.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Snack,
}

impl MealCategory {
    /// All categories in report order.
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Snack];
}

impl std::fmt::Display for MealCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Breakfast => write!(f, "breakfast"),
            Self::Lunch => write!(f, "lunch"),
            Self::Snack => write!(f, "snack"),
        }
    }
}

impl std::str::FromStr for MealCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "snack" => Ok(Self::Snack),
            _ => Err(format!("invalid meal category: {s}")),
        }
    }
}

/// Status of a meal order.
///
/// In practice orders are deleted rather than cancelled; the `cancelled`
/// value exists because the data service schema defines it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Confirmed,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Confirmed => write!(f, "confirmed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_is_report_order() {
        assert!(MealCategory::Breakfast < MealCategory::Lunch);
        assert!(MealCategory::Lunch < MealCategory::Snack);
        let mut shuffled = [MealCategory::Snack, MealCategory::Breakfast, MealCategory::Lunch];
        shuffled.sort();
        assert_eq!(shuffled, MealCategory::ALL);
    }

    #[test]
    fn test_category_string_round_trips() {
        for category in MealCategory::ALL {
            let parsed: MealCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("brunch".parse::<MealCategory>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&MealCategory::Breakfast).unwrap(),
            "\"breakfast\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Confirmed).unwrap(),
            "\"confirmed\""
        );
        let status: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, OrderStatus::Cancelled);
    }
}
