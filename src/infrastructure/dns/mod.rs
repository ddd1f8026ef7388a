//! Host reachability checks for submitted URLs.
//!
//! Provides a [`HostResolver`] trait with two implementations:
//! - [`SystemResolver`] - System DNS lookup bounded by a timeout
//! - [`NoopResolver`] - Accepts every host (reachability check disabled)

mod noop_resolver;
mod resolver;
mod system_resolver;

pub use noop_resolver::NoopResolver;
pub use resolver::{HostResolutionError, HostResolver};
pub use system_resolver::SystemResolver;

#[cfg(test)]
pub use resolver::MockHostResolver;
