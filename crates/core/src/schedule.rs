//! The daily ordering window.
//!
//! Orders are always placed for the next calendar day, and only until a fixed
//! cutoff hour on the current day. Every function here takes an
//! already-zone-resolved local wall-clock time: the schedule itself never
//! consults the runtime environment, so the evaluating machine's timezone is
//! irrelevant. The application resolves `Utc::now()` through its configured
//! UTC offset before calling in.

use chrono::{Days, NaiveDateTime, Timelike};

use crate::types::OrderDate;

/// Default cutoff hour (21:00, i.e. 9 PM local).
pub const DEFAULT_CUTOFF_HOUR: u32 = 21;

/// Time remaining until today's ordering cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// The cutoff is still ahead of `now` today.
    Remaining {
        /// Whole hours until the cutoff.
        hours: i64,
        /// Whole minutes beyond those hours (floor division).
        minutes: i64,
    },
    /// The cutoff has already passed today. Does not roll over to
    /// tomorrow's cutoff.
    Passed,
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remaining { hours, minutes } => {
                write!(f, "{hours}h {minutes}m until deadline")
            }
            Self::Passed => write!(f, "Order deadline has passed for today"),
        }
    }
}

/// The ordering schedule: a fixed daily cutoff hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderingSchedule {
    /// Local hour at which the ordering window closes. The boundary is
    /// closed on the open side: at `cutoff_hour:00` ordering is over.
    pub cutoff_hour: u32,
}

impl Default for OrderingSchedule {
    fn default() -> Self {
        Self {
            cutoff_hour: DEFAULT_CUTOFF_HOUR,
        }
    }
}

impl OrderingSchedule {
    /// Create a schedule with the given cutoff hour.
    #[must_use]
    pub const fn new(cutoff_hour: u32) -> Self {
        Self { cutoff_hour }
    }

    /// The calendar date orders placed at `now` are for: exactly one day
    /// after `now`, across month, year, and leap-day boundaries.
    #[must_use]
    pub fn next_orderable_date(self, now: NaiveDateTime) -> OrderDate {
        OrderDate::new(now.date() + Days::new(1))
    }

    /// Whether orders may still be created or withdrawn at `now`.
    ///
    /// True strictly before the cutoff hour; at `cutoff_hour:00` the window
    /// is already closed.
    #[must_use]
    pub fn is_ordering_open(self, now: NaiveDateTime) -> bool {
        now.hour() < self.cutoff_hour
    }

    /// Time remaining until today's `cutoff_hour:00`, in whole hours and
    /// minutes (floor division on minutes). [`Countdown::Passed`] once the
    /// cutoff is reached.
    #[must_use]
    pub fn time_until_cutoff(self, now: NaiveDateTime) -> Countdown {
        let Some(deadline) = now.date().and_hms_opt(self.cutoff_hour, 0, 0) else {
            // cutoff_hour >= 24 never occurs today
            return Countdown::Passed;
        };
        if now >= deadline {
            return Countdown::Passed;
        }
        let remaining = (deadline - now).num_minutes();
        Countdown::Remaining {
            hours: remaining / 60,
            minutes: remaining % 60,
        }
    }
}
