//! Per-item order counts for a date.
//!
//! An [`OrderReport`] takes one `(meal category, item name)` pair per
//! confirmed order - filtering by date and status is the caller's job - and
//! groups them into per-item counts. Categories arrive as raw strings from
//! the data service and are treated as opaque grouping keys: no validation
//! happens at this boundary, and unknown values simply rank after the three
//! known categories.

use std::collections::HashMap;

/// One aggregated report line: how many confirmed orders a distinct menu
/// item received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    /// Raw meal category string (opaque grouping key).
    pub category: String,
    /// Menu item name.
    pub item_name: String,
    /// Number of confirmed orders for this item.
    pub count: u64,
}

/// Rank for the fixed category order: breakfast < lunch < snack < anything
/// unrecognized.
fn category_rank(category: &str) -> u8 {
    match category {
        "breakfast" => 0,
        "lunch" => 1,
        "snack" => 2,
        _ => 3,
    }
}

/// Order counts per distinct menu item, grouped and ordered by meal category.
///
/// Deterministic and free of hidden state: aggregating the same input
/// sequence twice yields identical output, and within a category lines keep
/// first-encounter order (stable grouping, not alphabetical).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderReport {
    lines: Vec<ReportLine>,
    total: u64,
}

impl OrderReport {
    /// Aggregate `(category, item name)` pairs, one per confirmed order.
    ///
    /// Empty input yields an empty report with zero totals.
    pub fn from_entries<C, N, I>(entries: I) -> Self
    where
        C: AsRef<str>,
        N: AsRef<str>,
        I: IntoIterator<Item = (C, N)>,
    {
        let mut lines: Vec<ReportLine> = Vec::new();
        let mut index: HashMap<(String, String), usize> = HashMap::new();
        let mut total = 0;

        for (category, item_name) in entries {
            let category = category.as_ref();
            let item_name = item_name.as_ref();
            total += 1;

            let key = (category.to_owned(), item_name.to_owned());
            if let Some(&at) = index.get(&key) {
                if let Some(line) = lines.get_mut(at) {
                    line.count += 1;
                }
            } else {
                index.insert(key, lines.len());
                lines.push(ReportLine {
                    category: category.to_owned(),
                    item_name: item_name.to_owned(),
                    count: 1,
                });
            }
        }

        // Stable: within a category, first-encounter order is preserved.
        lines.sort_by_key(|line| category_rank(&line.category));

        Self { lines, total }
    }

    /// All report lines in category order.
    #[must_use]
    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// Lines belonging to one category, in report order.
    pub fn lines_for<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a ReportLine> {
        self.lines.iter().filter(move |line| line.category == category)
    }

    /// Total confirmed orders across all entries.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Total confirmed orders within one category.
    #[must_use]
    pub fn total_for(&self, category: &str) -> u64 {
        self.lines_for(category).map(|line| line.count).sum()
    }

    /// Whether the report has no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<(&'static str, &'static str)> {
        vec![
            ("lunch", "Rice"),
            ("breakfast", "Toast"),
            ("lunch", "Rice"),
            ("snack", "Chips"),
        ]
    }

    #[test]
    fn test_groups_counts_and_orders_by_category() {
        let report = OrderReport::from_entries(sample());
        let lines: Vec<_> = report
            .lines()
            .iter()
            .map(|l| (l.category.as_str(), l.item_name.as_str(), l.count))
            .collect();
        assert_eq!(
            lines,
            vec![
                ("breakfast", "Toast", 1),
                ("lunch", "Rice", 2),
                ("snack", "Chips", 1),
            ]
        );
        assert_eq!(report.total(), 4);
        assert_eq!(report.total_for("lunch"), 2);
    }

    #[test]
    fn test_empty_input() {
        let report = OrderReport::from_entries(Vec::<(&str, &str)>::new());
        assert!(report.is_empty());
        assert_eq!(report.total(), 0);
        assert_eq!(report.total_for("breakfast"), 0);
    }

    #[test]
    fn test_first_encounter_order_within_category() {
        // Not alphabetical: Soup was seen before Pasta, so it stays first.
        let report = OrderReport::from_entries(vec![
            ("lunch", "Soup"),
            ("lunch", "Pasta"),
            ("lunch", "Soup"),
        ]);
        let names: Vec<_> = report.lines().iter().map(|l| l.item_name.as_str()).collect();
        assert_eq!(names, vec!["Soup", "Pasta"]);
    }

    #[test]
    fn test_idempotent() {
        let first = OrderReport::from_entries(sample());
        let second = OrderReport::from_entries(sample());
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_category_is_opaque_and_ranks_last() {
        let report = OrderReport::from_entries(vec![
            ("supper", "Stew"),
            ("breakfast", "Toast"),
            ("supper", "Stew"),
        ]);
        let lines: Vec<_> = report
            .lines()
            .iter()
            .map(|l| (l.category.as_str(), l.count))
            .collect();
        assert_eq!(lines, vec![("breakfast", 1), ("supper", 2)]);
        assert_eq!(report.total_for("supper"), 2);
    }

    #[test]
    fn test_same_name_in_different_categories_stays_distinct() {
        let report = OrderReport::from_entries(vec![
            ("breakfast", "Fruit Bowl"),
            ("snack", "Fruit Bowl"),
        ]);
        assert_eq!(report.lines().len(), 2);
        assert_eq!(report.total_for("breakfast"), 1);
        assert_eq!(report.total_for("snack"), 1);
    }
}
