//! Integration tests for SmartCanteen.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p smart-canteen-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `ordering_day` - The ordering window and reminder flow over a
//!   simulated day
//! - `report_pipeline` - Service rows through aggregation to CSV export
//!
//! The tests here exercise cross-crate flows against materialized data;
//! nothing talks to a live data service.

#![cfg_attr(not(test), forbid(unsafe_code))]
