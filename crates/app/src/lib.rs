//! SmartCanteen application library.
//!
//! Everything the web binary serves lives here so the CLI can reuse the
//! configuration and the data service client.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod canteen;
pub mod config;
pub mod error;
pub mod export;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
