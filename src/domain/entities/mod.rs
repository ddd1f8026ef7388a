//! Core domain entities.
//!
//! - [`Mapping`] - An original URL paired with its numeric short identifier

pub mod mapping;

pub use mapping::Mapping;
