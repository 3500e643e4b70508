//! Order report command.
//!
//! # Usage
//!
//! ```bash
//! # Tomorrow's report as a table
//! sc-cli report
//!
//! # A specific date as CSV (same format as the web export)
//! sc-cli report --date 2026-08-30 --csv
//! ```

use smart_canteen_app::canteen::CanteenClient;
use smart_canteen_app::export::report_csv;
use smart_canteen_core::OrderReport;

use super::{CommandError, resolve_date, service_config};

/// Aggregate confirmed orders for a date and print the result.
pub async fn run(date: Option<&str>, csv: bool) -> Result<(), CommandError> {
    let date = resolve_date(date)?;
    let client = CanteenClient::new(&service_config()?);

    tracing::info!("Fetching orders for {}", date);
    let rows = client.list_orders_with_items(date).await?;
    let report = OrderReport::from_entries(
        rows.into_iter()
            .map(|row| (row.menu_items.meal_type, row.menu_items.name)),
    );

    if csv {
        print_csv(&report);
    } else {
        print_table(date.to_string().as_str(), &report);
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_csv(report: &OrderReport) {
    println!("{}", report_csv(report));
}

#[allow(clippy::print_stdout)]
fn print_table(date: &str, report: &OrderReport) {
    println!("Order report for {date}");
    if report.is_empty() {
        println!("  (no confirmed orders)");
        return;
    }
    for line in report.lines() {
        println!("  {:<12} {:<32} {:>5}", line.category, line.item_name, line.count);
    }
    println!("  total: {}", report.total());
}
