//! Order date type.
//!
//! The `YYYY-MM-DD` string is the join key between menu items and orders, and
//! the filter key for reports. It must round-trip exactly: whatever
//! [`crate::schedule::OrderingSchedule::next_orderable_date`] produces is sent
//! unmodified as a filter value to the data service.

use core::fmt;
use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Error parsing an [`OrderDate`] from a string.
#[derive(thiserror::Error, Debug, Clone)]
#[error("invalid order date (expected YYYY-MM-DD): {input}")]
pub struct OrderDateError {
    /// The rejected input.
    pub input: String,
}

/// A calendar date a menu (and its orders) belongs to.
///
/// Timezone-naive by design: the cafeteria runs on one wall clock, supplied
/// explicitly by the caller (see `schedule`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderDate(NaiveDate);

impl OrderDate {
    /// Wrap a calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Get the underlying calendar date.
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for OrderDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for OrderDate {
    type Err = OrderDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| OrderDateError {
                input: s.to_owned(),
            })
    }
}

impl From<NaiveDate> for OrderDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}
