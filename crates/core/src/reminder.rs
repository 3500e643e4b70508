//! The pre-deadline order reminder.
//!
//! The decision itself is a pure predicate over the current wall-clock time,
//! the user's opt-in flag, and whether the reminder was already shown today.
//! The surrounding machinery - when to re-evaluate, how to present and
//! dismiss the banner - is display plumbing owned by the application.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Default start of the reminder band (17:00 local).
pub const DEFAULT_WINDOW_START_HOUR: u32 = 17;

/// When to surface the once-per-day order reminder.
///
/// The reminder fires inside the half-open band
/// `[window_start_hour, cutoff_hour)` - a fixed pre-deadline stretch that
/// happens to end at the ordering cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderPolicy {
    /// Local hour the reminder band opens.
    pub window_start_hour: u32,
    /// Local hour the band closes (exclusive).
    pub cutoff_hour: u32,
}

impl Default for ReminderPolicy {
    fn default() -> Self {
        Self {
            window_start_hour: DEFAULT_WINDOW_START_HOUR,
            cutoff_hour: crate::schedule::DEFAULT_CUTOFF_HOUR,
        }
    }
}

impl ReminderPolicy {
    /// Create a policy with an explicit band.
    #[must_use]
    pub const fn new(window_start_hour: u32, cutoff_hour: u32) -> Self {
        Self {
            window_start_hour,
            cutoff_hour,
        }
    }

    /// Whether the reminder should be surfaced right now.
    ///
    /// True only when the user opted in, the reminder has not been shown
    /// today, and `now`'s local hour lies in `[window_start_hour, cutoff_hour)`.
    #[must_use]
    pub fn should_remind(
        self,
        now: NaiveDateTime,
        notifications_enabled: bool,
        already_shown_today: bool,
    ) -> bool {
        if !notifications_enabled || already_shown_today {
            return false;
        }
        let hour = now.hour();
        hour >= self.window_start_hour && hour < self.cutoff_hour
    }
}

/// Day-scoped "already shown" state.
///
/// Stores the calendar date of the last shown reminder instead of a bare
/// boolean, so the flag resets at the day boundary by comparison rather than
/// relying on anything to clear it within a long-lived session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReminderLedger {
    /// Date the reminder was last surfaced, if ever.
    pub last_shown: Option<NaiveDate>,
}

impl ReminderLedger {
    /// Whether the reminder was already surfaced on `today`.
    #[must_use]
    pub fn already_shown_on(self, today: NaiveDate) -> bool {
        self.last_shown == Some(today)
    }

    /// Record that the reminder was surfaced on `today`.
    #[must_use]
    pub const fn mark_shown(self, today: NaiveDate) -> Self {
        Self {
            last_shown: Some(today),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 29)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn test_fires_inside_band_when_enabled_and_fresh() {
        let policy = ReminderPolicy::default();
        assert!(policy.should_remind(at(18, 0), true, false));
    }

    #[test]
    fn test_suppressed_when_already_shown() {
        let policy = ReminderPolicy::default();
        assert!(!policy.should_remind(at(18, 0), true, true));
    }

    #[test]
    fn test_suppressed_before_band_opens() {
        let policy = ReminderPolicy::default();
        assert!(!policy.should_remind(at(16, 59), true, false));
    }

    #[test]
    fn test_suppressed_when_opted_out() {
        let policy = ReminderPolicy::default();
        assert!(!policy.should_remind(at(18, 0), false, false));
    }

    #[test]
    fn test_band_is_half_open() {
        let policy = ReminderPolicy::default();
        assert!(policy.should_remind(at(17, 0), true, false));
        assert!(policy.should_remind(at(20, 59), true, false));
        assert!(!policy.should_remind(at(21, 0), true, false));
    }

    #[test]
    fn test_ledger_resets_at_day_boundary() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();

        let ledger = ReminderLedger::default();
        assert!(!ledger.already_shown_on(today));

        let ledger = ledger.mark_shown(today);
        assert!(ledger.already_shown_on(today));
        assert!(!ledger.already_shown_on(tomorrow));
    }
}
