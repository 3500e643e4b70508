//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use smart_canteen_core::OrderDate;

/// Render a `YYYY-MM-DD` date as a long human-readable date.
///
/// `"2026-08-29"` becomes `"Saturday, August 29, 2026"`. Input that does not
/// parse is passed through unchanged.
///
/// Usage in templates: `{{ date|long_date }}`
#[askama::filter_fn]
pub fn long_date(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_long_date(&value.to_string()))
}

/// Capitalize the first character.
///
/// Usage in templates: `{{ "breakfast"|title_case }}` renders `Breakfast`.
#[askama::filter_fn]
pub fn title_case(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_title_case(&value.to_string()))
}

fn format_long_date(raw: &str) -> String {
    raw.parse::<OrderDate>().map_or_else(
        |_| raw.to_string(),
        |date| date.as_naive().format("%A, %B %-d, %Y").to_string(),
    )
}

fn format_title_case(raw: &str) -> String {
    let mut chars = raw.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_date() {
        assert_eq!(format_long_date("2026-08-29"), "Saturday, August 29, 2026");
    }

    #[test]
    fn test_long_date_single_digit_day_unpadded() {
        assert_eq!(format_long_date("2026-09-01"), "Tuesday, September 1, 2026");
    }

    #[test]
    fn test_long_date_passthrough_on_garbage() {
        assert_eq!(format_long_date("soon"), "soon");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(format_title_case("breakfast"), "Breakfast");
        assert_eq!(format_title_case(""), "");
    }
}
