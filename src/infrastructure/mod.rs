//! Infrastructure layer for external integrations.
//!
//! - [`cache`] - Key-value cache connection (Redis and no-op clients)

pub mod cache;
