//! Core types for SmartCanteen.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod date;
pub mod email;
pub mod id;
pub mod meal;
pub mod role;

pub use date::{OrderDate, OrderDateError};
pub use email::{Email, EmailError};
pub use id::*;
pub use meal::{MealCategory, OrderStatus};
pub use role::Role;
