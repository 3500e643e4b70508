//! Service rows through aggregation to CSV export.
//!
//! Decodes order rows the way the data service returns them (embedded
//! menu-item join), aggregates them, and checks the CSV the admin panel
//! serves for download.

use smart_canteen_app::export::{export_filename, report_csv};
use smart_canteen_app::models::OrderWithItem;
use smart_canteen_core::{OrderDate, OrderReport};

fn service_rows() -> Vec<OrderWithItem> {
    let json = r#"[
        {
            "id": "9a000000-0000-4000-8000-000000000001",
            "user_id": "6f1b0f6e-0000-4000-8000-000000000001",
            "menu_item_id": "8c6a97e2-0000-4000-8000-00000000000a",
            "order_date": "2026-08-30",
            "status": "confirmed",
            "menu_items": { "name": "Vegetable Biryani", "meal_type": "lunch" }
        },
        {
            "id": "9a000000-0000-4000-8000-000000000002",
            "user_id": "6f1b0f6e-0000-4000-8000-000000000002",
            "menu_item_id": "8c6a97e2-0000-4000-8000-00000000000b",
            "order_date": "2026-08-30",
            "status": "confirmed",
            "menu_items": { "name": "Masala Omelette", "meal_type": "breakfast" }
        },
        {
            "id": "9a000000-0000-4000-8000-000000000003",
            "user_id": "6f1b0f6e-0000-4000-8000-000000000003",
            "menu_item_id": "8c6a97e2-0000-4000-8000-00000000000a",
            "order_date": "2026-08-30",
            "status": "confirmed",
            "menu_items": { "name": "Vegetable Biryani", "meal_type": "lunch" }
        }
    ]"#;
    serde_json::from_str(json).expect("rows decode")
}

fn aggregate(rows: Vec<OrderWithItem>) -> OrderReport {
    OrderReport::from_entries(
        rows.into_iter()
            .map(|row| (row.menu_items.meal_type, row.menu_items.name)),
    )
}

#[test]
fn test_rows_aggregate_in_category_order() {
    let report = aggregate(service_rows());
    let lines: Vec<_> = report
        .lines()
        .iter()
        .map(|l| (l.category.as_str(), l.item_name.as_str(), l.count))
        .collect();
    assert_eq!(
        lines,
        vec![
            ("breakfast", "Masala Omelette", 1),
            ("lunch", "Vegetable Biryani", 2),
        ]
    );
    assert_eq!(report.total(), 3);
}

#[test]
fn test_csv_matches_the_download_format() {
    let report = aggregate(service_rows());
    assert_eq!(
        report_csv(&report),
        "Meal Type,Item Name,Order Count\n\
         breakfast,Masala Omelette,1\n\
         lunch,Vegetable Biryani,2"
    );
}

#[test]
fn test_export_filename_embeds_the_date() {
    let date: OrderDate = "2026-08-30".parse().expect("date parses");
    assert_eq!(export_filename(date), "meal-orders-2026-08-30.csv");
}

#[test]
fn test_empty_day_exports_header_only() {
    let report = OrderReport::from_entries(Vec::<(String, String)>::new());
    assert_eq!(report_csv(&report), "Meal Type,Item Name,Order Count");
}
