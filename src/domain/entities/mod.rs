//! Core domain entities.
//!
//! - [`AvailabilityRecord`] - Flags describing whether a product can be sold

pub mod availability;

pub use availability::{AvailabilityRecord, InconsistentRecord};
