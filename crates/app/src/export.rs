//! CSV export of order reports.
//!
//! Shape contract: three columns - meal category, item name, order count -
//! comma-joined with one header row, UTF-8. Values are written raw with no
//! quoting or escaping of embedded commas; item names are plain dish names,
//! so this is an accepted limitation.

use smart_canteen_core::{OrderDate, OrderReport};

/// CSV header row.
const CSV_HEADER: &str = "Meal Type,Item Name,Order Count";

/// Render a report as CSV text, lines in report order.
#[must_use]
pub fn report_csv(report: &OrderReport) -> String {
    let mut rows = Vec::with_capacity(report.lines().len() + 1);
    rows.push(CSV_HEADER.to_string());
    for line in report.lines() {
        rows.push(format!("{},{},{}", line.category, line.item_name, line.count));
    }
    rows.join("\n")
}

/// Download filename for a date's export.
#[must_use]
pub fn export_filename(date: OrderDate) -> String {
    format!("meal-orders-{date}.csv")
}
