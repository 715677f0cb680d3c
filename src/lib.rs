//! course-dates - ISO-8601 parsing and display formatting for course schedules
//!
//! This library converts between the ISO-8601 wire format used by a course
//! API and the human-readable formats shown in schedule views, and provides
//! simple predicates comparing a date against "now" (today / upcoming /
//! already due).
//!
//! # Modules
//!
//! * [`config`] - Configuration (render timezone, logging) loaded from TOML
//! * [`datetime`] - Parsing, formatting, and comparison functions
//! * [`logger`] - Optional file logger wiring for the `log` facade
//!
//! All functions are stateless and safe to call from multiple threads; no
//! formatter objects are cached between calls.

/// Configuration module for managing application settings
pub mod config;

/// Date and time parsing, formatting, and comparison functions
pub mod datetime;

/// Logging utilities for debugging and error tracking
pub mod logger;

pub use config::RenderTimezone;
pub use datetime::DateError;
