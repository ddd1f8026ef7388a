//! Domain layer containing the mapping entity and its storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on HTTP or on a particular database.
//! Business rules live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
