//! Utility functions for URL checks and database error handling.
//!
//! - [`url_pattern`] - Syntactic URL acceptance and host extraction
//! - [`db_error`] - Classification of `sqlx` errors

pub mod db_error;
pub mod url_pattern;
