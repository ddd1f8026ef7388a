//! Repository trait definitions for the domain layer.
//!
//! # Implementations
//!
//! - `crate::infrastructure::persistence::PgMappingRepository` - PostgreSQL
//! - `crate::infrastructure::persistence::MemoryMappingRepository` - in-process
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod mapping_repository;

pub use mapping_repository::MappingRepository;

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
