//! # Product Status
//!
//! Classifies textual product statuses into availability flags, and wires up
//! the connection to the key-value cache service used alongside it.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Status classification, pure and side-effect free
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis connection handle
//!
//! ## Quick Start
//!
//! ```
//! use product_status::prelude::*;
//!
//! let record = classify("In Stock").unwrap();
//! assert!(record.in_stock());
//! assert!(record.buyable());
//!
//! let err = classify("discontinued").unwrap_err();
//! assert_eq!(err.status(), "discontinued");
//! ```
//!
//! ## Configuration
//!
//! Cache and logging configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::StatusError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::domain::entities::AvailabilityRecord;
    pub use crate::domain::status::{StatusClassifier, StatusKind, classify};
    pub use crate::error::StatusError;
}
