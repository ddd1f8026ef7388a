//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer and the
//! collaborators the services depend on.
//!
//! # Modules
//!
//! - [`cache`] - Redirect cache (Redis and no-op implementations)
//! - [`dns`] - Host reachability checks (system DNS and no-op implementations)
//! - [`persistence`] - Mapping repositories (PostgreSQL and in-memory)

pub mod cache;
pub mod dns;
pub mod persistence;
