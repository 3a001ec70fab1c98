//! Domain layer containing product status classification.
//!
//! The domain layer has no dependencies on infrastructure: classification is
//! a pure function with no I/O and no logging.
//!
//! - [`entities`] - Value types produced by classification
//! - [`status`] - Recognized statuses and the classifier

pub mod entities;
pub mod status;
