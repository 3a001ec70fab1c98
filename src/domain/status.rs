//! Product status classification.
//!
//! Maps a textual product status to an [`AvailabilityRecord`]. The set of
//! recognized statuses is closed and modelled by [`StatusKind`]; its `match`
//! in [`StatusKind::record`] is the only place the flag table lives.
//!
//! | Status        | in_stock | on_back_order | buyable | active |
//! |---------------|----------|---------------|---------|--------|
//! | `in stock`    | true     | false         | true    | true   |
//! | `on order`    | false    | true          | true    | true   |
//! | `unavailable` | false    | false         | false   | true   |
//! | `deleted`     | false    | false         | false   | false  |

use std::fmt;
use std::str::FromStr;

use crate::domain::entities::AvailabilityRecord;
use crate::error::StatusError;

/// A recognized product status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    InStock,
    OnOrder,
    Unavailable,
    Deleted,
}

impl StatusKind {
    /// Every recognized status, in table order.
    pub const ALL: [StatusKind; 4] = [
        StatusKind::InStock,
        StatusKind::OnOrder,
        StatusKind::Unavailable,
        StatusKind::Deleted,
    ];

    /// Canonical lowercase text for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::InStock => "in stock",
            StatusKind::OnOrder => "on order",
            StatusKind::Unavailable => "unavailable",
            StatusKind::Deleted => "deleted",
        }
    }

    /// Returns the availability flags for this status.
    pub fn record(&self) -> AvailabilityRecord {
        match self {
            StatusKind::InStock => AvailabilityRecord::new(true, false, true, true),
            StatusKind::OnOrder => AvailabilityRecord::new(false, true, true, true),
            StatusKind::Unavailable => AvailabilityRecord::new(false, false, false, true),
            StatusKind::Deleted => AvailabilityRecord::new(false, false, false, false),
        }
    }

    fn from_canonical(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == text)
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a status case-insensitively.
impl FromStr for StatusKind {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusClassifier::default().parse(s)
    }
}

/// Classifies raw status strings.
///
/// Matching is case-insensitive unless built with
/// [`StatusClassifier::case_sensitive`]. Input is not trimmed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusClassifier {
    case_sensitive: bool,
}

impl StatusClassifier {
    /// Creates a classifier with the given case mode.
    pub fn new(case_sensitive: bool) -> Self {
        Self { case_sensitive }
    }

    /// Creates a classifier that only accepts the canonical lowercase text.
    pub fn case_sensitive() -> Self {
        Self::new(true)
    }

    /// Returns true if only the canonical lowercase text is accepted.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Resolves `raw_status` to a [`StatusKind`].
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::UnrecognizedStatusKind`] carrying the original
    /// input if it is not a recognized status.
    pub fn parse(&self, raw_status: &str) -> Result<StatusKind, StatusError> {
        let kind = if self.case_sensitive {
            StatusKind::from_canonical(raw_status)
        } else {
            StatusKind::from_canonical(&raw_status.to_lowercase())
        };

        kind.ok_or_else(|| StatusError::UnrecognizedStatusKind {
            status: raw_status.to_string(),
        })
    }

    /// Classifies `raw_status` into an [`AvailabilityRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::UnrecognizedStatusKind`] if the input is not a
    /// recognized status.
    pub fn classify(&self, raw_status: &str) -> Result<AvailabilityRecord, StatusError> {
        self.parse(raw_status).map(|kind| kind.record())
    }
}

/// Classifies `raw_status` case-insensitively.
///
/// # Examples
///
/// ```
/// use product_status::domain::status::classify;
///
/// let record = classify("On Order").unwrap();
/// assert!(record.on_back_order());
/// assert!(record.buyable());
///
/// assert!(classify("discontinued").is_err());
/// ```
pub fn classify(raw_status: &str) -> Result<AvailabilityRecord, StatusError> {
    StatusClassifier::default().classify(raw_status)
}
