//! CLI command implementations.

pub mod menu;
pub mod report;

use chrono::Utc;
use thiserror::Error;

use smart_canteen_app::canteen::CanteenError;
use smart_canteen_app::config::{self, CanteenServiceConfig, ConfigError};
use smart_canteen_core::{OrderDate, OrderDateError, OrderingSchedule};

/// Errors shared by the CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The date argument does not parse.
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] OrderDateError),

    /// The data service call failed.
    #[error("Canteen service error: {0}")]
    Service(#[from] CanteenError),
}

/// Load the data-service settings from the environment.
pub fn service_config() -> Result<CanteenServiceConfig, CommandError> {
    dotenvy::dotenv().ok();
    Ok(CanteenServiceConfig::from_env()?)
}

/// Resolve the target date: an explicit `--date`, or tomorrow in the
/// cafeteria's configured timezone.
pub fn resolve_date(raw: Option<&str>) -> Result<OrderDate, CommandError> {
    match raw {
        Some(raw) => Ok(raw.parse()?),
        None => {
            let offset = config::get_utc_offset()?;
            let now = Utc::now().with_timezone(&offset).naive_local();
            Ok(OrderingSchedule::default().next_orderable_date(now))
        }
    }
}
