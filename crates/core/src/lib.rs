//! SmartCanteen Core - Shared domain library.
//!
//! This crate provides the domain types and decision logic used across all
//! SmartCanteen components:
//! - `app` - Server-rendered web application (employee and admin dashboards)
//! - `cli` - Command-line tools for reports and menu inspection
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no async. Everything here is a synchronous computation over
//! already-materialized inputs, which keeps it trivially testable.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, dates, emails, and enums
//! - [`schedule`] - The ordering window: tomorrow's date, cutoff checks, countdown
//! - [`report`] - Per-item order counts grouped by meal category
//! - [`reminder`] - The pre-deadline reminder decision predicate

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod reminder;
pub mod report;
pub mod schedule;
pub mod types;

pub use reminder::{ReminderLedger, ReminderPolicy};
pub use report::{OrderReport, ReportLine};
pub use schedule::{Countdown, OrderingSchedule};
pub use types::*;
