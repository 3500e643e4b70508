//! Admin order reports: on-screen aggregation and CSV export.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use smart_canteen_core::{MealCategory, OrderDate, OrderReport, ReportLine};

use crate::error::{AppError, Result};
use crate::export::{export_filename, report_csv};
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// The per-category section of the on-screen report.
pub struct ReportBlock {
    pub category: MealCategory,
    pub lines: Vec<ReportLine>,
    pub total: u64,
}

#[derive(Template, WebTemplate)]
#[template(path = "reports.html")]
pub struct ReportsTemplate {
    pub date: String,
    pub total: u64,
    pub blocks: Vec<ReportBlock>,
    pub empty: bool,
}

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub date: Option<String>,
}

/// Parse the optional `?date=` parameter, defaulting to the orderable date.
fn resolve_date(state: &AppState, query: &ReportQuery) -> Result<OrderDate> {
    match query.date.as_deref() {
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::BadRequest(format!("invalid date: {raw}"))),
        None => Ok(state.order_date()),
    }
}

/// Aggregate the day's confirmed orders into a report.
async fn build_report(state: &AppState, date: OrderDate) -> Result<OrderReport> {
    let rows = state.canteen().list_orders_with_items(date).await?;
    Ok(OrderReport::from_entries(
        rows.into_iter()
            .map(|row| (row.menu_items.meal_type, row.menu_items.name)),
    ))
}

/// `GET /admin/reports`: order counts per item, grouped by category.
pub async fn show(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(query): Query<ReportQuery>,
) -> Result<ReportsTemplate> {
    let date = resolve_date(&state, &query)?;
    let report = build_report(&state, date).await?;

    let blocks = MealCategory::ALL
        .iter()
        .map(|&category| {
            let key = category.to_string();
            ReportBlock {
                category,
                lines: report.lines_for(&key).cloned().collect(),
                total: report.total_for(&key),
            }
        })
        .collect();

    Ok(ReportsTemplate {
        date: date.to_string(),
        total: report.total(),
        blocks,
        empty: report.is_empty(),
    })
}

/// `GET /admin/reports/export`: the same report as a CSV attachment.
pub async fn export(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(query): Query<ReportQuery>,
) -> Result<Response> {
    let date = resolve_date(&state, &query)?;
    let report = build_report(&state, date).await?;

    let headers = [
        (
            header::CONTENT_TYPE.as_str(),
            "text/csv; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION.as_str(),
            format!("attachment; filename=\"{}\"", export_filename(date)),
        ),
    ];
    Ok((headers, report_csv(&report)).into_response())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn template_for(report: &OrderReport) -> ReportsTemplate {
        let blocks = MealCategory::ALL
            .iter()
            .map(|&category| {
                let key = category.to_string();
                ReportBlock {
                    category,
                    lines: report.lines_for(&key).cloned().collect(),
                    total: report.total_for(&key),
                }
            })
            .collect();
        ReportsTemplate {
            date: "2026-08-30".to_string(),
            total: report.total(),
            blocks,
            empty: report.is_empty(),
        }
    }

    #[test]
    fn test_report_template_renders_counts() {
        let report = OrderReport::from_entries(vec![
            ("lunch", "Rice"),
            ("breakfast", "Toast"),
            ("lunch", "Rice"),
        ]);
        let html = template_for(&report).render().unwrap();
        assert!(html.contains("3 orders"));
        assert!(html.contains("Toast"));
        assert!(html.contains("Rice"));
        assert!(!html.contains("No confirmed orders"));
    }

    #[test]
    fn test_report_template_renders_empty_state() {
        let report = OrderReport::default();
        let html = template_for(&report).render().unwrap();
        assert!(html.contains("No confirmed orders for this date."));
        assert!(html.contains("0 orders"));
    }
}
