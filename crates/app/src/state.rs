//! Application state shared across handlers.

use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};

use smart_canteen_core::{OrderDate, OrderingSchedule, ReminderPolicy};

use crate::canteen::CanteenClient;
use crate::config::CanteenConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to configuration, the data
/// service client, and the schedule/reminder policies built from config.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: CanteenConfig,
    canteen: CanteenClient,
    schedule: OrderingSchedule,
    reminder_policy: ReminderPolicy,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: CanteenConfig) -> Self {
        let canteen = CanteenClient::new(&config.service);
        let schedule = OrderingSchedule::new(config.cutoff_hour);
        let reminder_policy = ReminderPolicy::new(config.reminder_start_hour, config.cutoff_hour);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                canteen,
                schedule,
                reminder_policy,
            }),
        }
    }

    /// Get a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &CanteenConfig {
        &self.inner.config
    }

    /// Get a reference to the canteen data service client.
    #[must_use]
    pub fn canteen(&self) -> &CanteenClient {
        &self.inner.canteen
    }

    /// Get the ordering schedule.
    #[must_use]
    pub fn schedule(&self) -> OrderingSchedule {
        self.inner.schedule
    }

    /// Get the reminder policy.
    #[must_use]
    pub fn reminder_policy(&self) -> ReminderPolicy {
        self.inner.reminder_policy
    }

    /// The cafeteria's current wall-clock time.
    ///
    /// Every deadline comparison in the application goes through this one
    /// clock resolution: UTC now, shifted by the configured offset.
    #[must_use]
    pub fn local_now(&self) -> NaiveDateTime {
        Utc::now()
            .with_timezone(&self.inner.config.utc_offset)
            .naive_local()
    }

    /// The date orders are currently being taken for (tomorrow, cafeteria
    /// time).
    #[must_use]
    pub fn order_date(&self) -> OrderDate {
        self.inner.schedule.next_orderable_date(self.local_now())
    }
}
