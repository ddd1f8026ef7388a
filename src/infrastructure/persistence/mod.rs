//! Mapping repository implementations.
//!
//! # Repositories
//!
//! - [`PgMappingRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryMappingRepository`] - Process-local storage for development and tests

pub mod memory_mapping_repository;
pub mod pg_mapping_repository;

pub use memory_mapping_repository::MemoryMappingRepository;
pub use pg_mapping_repository::PgMappingRepository;
