//! # Event Configuration Module
//!
//! This module loads the event's configuration from environment variables,
//! providing defaults where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `EVENT_START_DATE`: First day of the event, `dd-mm-yyyy` (default: "27-12-2025")
//! - `EVENT_END_DATE`: Last day of the event, `dd-mm-yyyy` (default: "04-01-2026")
//! - `SCHEDULE_DATA_PATH`: Path to the schedule JSON file (default: "data/schedule.json")
//! - `LOG_LEVEL`: Logging level (default: "info")

use std::env;

use eyre::{Result, WrapErr};
use tracing::Level;

use crate::dates::{formatted_dates, parse_event_date};
use crate::errors::DateError;

/// Configuration for one run of the schedule viewer.
///
/// The start and end dates bound the event and drive the day headers shown
/// above each day's schedule; the data path points at the schedule JSON to
/// validate and display.
#[derive(Debug, Clone)]
pub struct EventConfig {
    /// First day of the event, `dd-mm-yyyy`
    pub start_date: String,

    /// Last day of the event, `dd-mm-yyyy`
    pub end_date: String,

    /// Path to the schedule JSON file
    pub schedule_path: String,

    /// Log level for the application
    pub log_level: Level,
}

impl EventConfig {
    /// Creates a new EventConfig from environment variables
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - Configuration object or error
    ///
    /// # Errors
    ///
    /// This function will return an error if either date variable is set to
    /// something that does not parse as a `dd-mm-yyyy` date.
    pub fn from_env() -> Result<Self> {
        // Event dates
        let start_date =
            env::var("EVENT_START_DATE").unwrap_or_else(|_| "27-12-2025".to_string());
        let end_date = env::var("EVENT_END_DATE").unwrap_or_else(|_| "04-01-2026".to_string());
        parse_event_date(&start_date).wrap_err("Invalid EVENT_START_DATE value")?;
        parse_event_date(&end_date).wrap_err("Invalid EVENT_END_DATE value")?;

        // Data source
        let schedule_path =
            env::var("SCHEDULE_DATA_PATH").unwrap_or_else(|_| "data/schedule.json".to_string());

        // Logging settings
        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            start_date,
            end_date,
            schedule_path,
            log_level,
        })
    }

    /// Returns the formatted day headers for the configured date range
    ///
    /// # Returns
    ///
    /// * One `"dd/mm Weekday"` label per event day, in running order
    pub fn date_headers(&self) -> Result<Vec<String>, DateError> {
        formatted_dates(&self.start_date, &self.end_date)
    }
}
