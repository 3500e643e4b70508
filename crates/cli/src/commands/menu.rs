//! Menu inspection command.
//!
//! # Usage
//!
//! ```bash
//! # Tomorrow's menu, unavailable items included
//! sc-cli menu list
//!
//! # A specific date
//! sc-cli menu list --date 2026-08-30
//! ```

use smart_canteen_app::canteen::CanteenClient;
use smart_canteen_app::models::MenuItem;

use super::{CommandError, resolve_date, service_config};

/// List the menu items for a date.
pub async fn list(date: Option<&str>) -> Result<(), CommandError> {
    let date = resolve_date(date)?;
    let client = CanteenClient::new(&service_config()?);

    tracing::info!("Fetching menu for {}", date);
    let items = client.list_menu(date, false).await?;
    print_items(date.to_string().as_str(), &items);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_items(date: &str, items: &[MenuItem]) {
    println!("Menu for {date}");
    if items.is_empty() {
        println!("  (no items)");
        return;
    }
    for item in items {
        let availability = if item.is_available { "" } else { " [hidden]" };
        println!("  {:<12} {}{}", item.meal_type.to_string(), item.name, availability);
    }
}
