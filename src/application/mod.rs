//! Application layer services implementing business logic.
//!
//! Services consume repository and resolver traits and provide a clean API
//! for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::mapping_service::MappingService`] - Create-or-reuse and lookup of mappings
//! - [`services::url_validator::UrlValidator`] - Pattern and reachability gate for submissions

pub mod services;
