//! The ordering window and reminder flow over one simulated day.
//!
//! Walks a single employee's wall clock from morning past the cutoff and
//! checks every decision the dashboard makes along the way: which date is
//! orderable, whether the window is open, what the countdown says, and
//! when the reminder fires.

use chrono::{NaiveDate, NaiveDateTime};

use smart_canteen_core::{Countdown, OrderingSchedule, ReminderLedger, ReminderPolicy};

fn clock(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 29)
        .expect("valid date")
        .and_hms_opt(hour, minute, 0)
        .expect("valid time")
}

#[test]
fn test_morning_to_cutoff_walkthrough() {
    let schedule = OrderingSchedule::default();
    let policy = ReminderPolicy::default();
    let mut ledger = ReminderLedger::default();

    // 09:00 - window open, orders target tomorrow, no reminder yet.
    let morning = clock(9, 0);
    assert_eq!(
        schedule.next_orderable_date(morning).to_string(),
        "2026-08-30"
    );
    assert!(schedule.is_ordering_open(morning));
    assert!(!policy.should_remind(morning, true, ledger.already_shown_on(morning.date())));

    // 17:00 - reminder band opens; it fires once and is recorded.
    let evening = clock(17, 0);
    assert!(policy.should_remind(evening, true, ledger.already_shown_on(evening.date())));
    ledger = ledger.mark_shown(evening.date());

    // 19:30 - still in the band, but already shown today.
    let later = clock(19, 30);
    assert!(!policy.should_remind(later, true, ledger.already_shown_on(later.date())));
    assert_eq!(
        schedule.time_until_cutoff(later),
        Countdown::Remaining {
            hours: 1,
            minutes: 30
        }
    );

    // 21:00 - window closed, countdown passed, reminder silent.
    let cutoff = clock(21, 0);
    assert!(!schedule.is_ordering_open(cutoff));
    assert_eq!(schedule.time_until_cutoff(cutoff), Countdown::Passed);
    assert!(!policy.should_remind(cutoff, true, ledger.already_shown_on(cutoff.date())));

    // Orders placed after the cutoff would still target tomorrow; the
    // window being closed is what blocks them, not the date.
    assert_eq!(
        schedule.next_orderable_date(cutoff).to_string(),
        "2026-08-30"
    );
}

#[test]
fn test_reminder_resets_on_the_next_day() {
    let policy = ReminderPolicy::default();
    let shown_friday = ReminderLedger::default().mark_shown(clock(18, 0).date());

    let saturday = NaiveDate::from_ymd_opt(2026, 8, 30)
        .expect("valid date")
        .and_hms_opt(18, 0, 0)
        .expect("valid time");
    assert!(policy.should_remind(saturday, true, shown_friday.already_shown_on(saturday.date())));
}

#[test]
fn test_disabled_notifications_silence_the_whole_band() {
    let policy = ReminderPolicy::default();
    let ledger = ReminderLedger::default();
    for hour in 17..21 {
        let now = clock(hour, 30);
        assert!(
            !policy.should_remind(now, false, ledger.already_shown_on(now.date())),
            "reminder fired at {hour}:30 with notifications disabled"
        );
    }
}

#[test]
fn test_custom_hours_shift_both_windows() {
    let schedule = OrderingSchedule::new(18);
    let policy = ReminderPolicy::new(15, 18);
    let ledger = ReminderLedger::default();

    let before_band = clock(14, 59);
    assert!(!policy.should_remind(before_band, true, ledger.already_shown_on(before_band.date())));

    let in_band = clock(15, 0);
    assert!(policy.should_remind(in_band, true, ledger.already_shown_on(in_band.date())));
    assert!(schedule.is_ordering_open(in_band));

    let closed = clock(18, 0);
    assert!(!schedule.is_ordering_open(closed));
    assert!(!policy.should_remind(closed, true, ledger.already_shown_on(closed.date())));
}
