//! # Festsched Core
//!
//! Pure building blocks for the festival schedule viewer. This crate holds the
//! pieces that do real work and nothing else:
//!
//! - **Validation**: the schedule data arrives as untyped JSON from a static
//!   source; [`validate`] is the single boundary guard that turns it into
//!   typed, whitespace-normalized values or a structured list of violations.
//! - **Dates**: [`dates::formatted_dates`] produces the human-readable day
//!   headers for the event's date range.
//!
//! Everything here is synchronous and side-effect free, so callers may share
//! it freely across threads without coordination.

/// Event configuration loaded from the environment
pub mod config;
/// Calendar-day labels for the event's date range
pub mod dates;
/// Domain error types
pub mod errors;
/// Value types for the validated schedule
pub mod models;
/// Schedule validation and normalization
pub mod validate;

pub use validate::validate;
