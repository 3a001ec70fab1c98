//! Availability record describing whether a product can be sold.

use serde::{Deserialize, Serialize};

use crate::domain::status::StatusKind;

/// Purchasability and availability flags derived from a product status.
///
/// Records are plain values: the fields are private and there are no
/// setters, so a record never changes after construction. Two records with
/// the same flags compare equal regardless of how they were built.
///
/// Deserializing only accepts flag combinations produced by a recognized
/// [`StatusKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct AvailabilityRecord {
    in_stock: bool,
    on_back_order: bool,
    buyable: bool,
    active: bool,
}

impl AvailabilityRecord {
    pub(crate) const fn new(
        in_stock: bool,
        on_back_order: bool,
        buyable: bool,
        active: bool,
    ) -> Self {
        Self {
            in_stock,
            on_back_order,
            buyable,
            active,
        }
    }

    /// Returns true if the product is physically in stock.
    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    /// Returns true if the product can be ordered but ships later.
    pub fn on_back_order(&self) -> bool {
        self.on_back_order
    }

    /// Returns true if the product can currently be bought.
    pub fn buyable(&self) -> bool {
        self.buyable
    }

    /// Returns true unless the product has been deleted.
    pub fn active(&self) -> bool {
        self.active
    }
}

/// Flag combination that matches no recognized status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error(
    "Inconsistent availability flags: in_stock={in_stock}, on_back_order={on_back_order}, \
     buyable={buyable}, active={active}"
)]
pub struct InconsistentRecord {
    pub in_stock: bool,
    pub on_back_order: bool,
    pub buyable: bool,
    pub active: bool,
}

/// Wire shape of [`AvailabilityRecord`] before validation.
#[derive(Deserialize)]
struct RawRecord {
    in_stock: bool,
    on_back_order: bool,
    buyable: bool,
    active: bool,
}

impl TryFrom<RawRecord> for AvailabilityRecord {
    type Error = InconsistentRecord;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let candidate = Self::new(raw.in_stock, raw.on_back_order, raw.buyable, raw.active);

        StatusKind::ALL
            .into_iter()
            .map(|kind| kind.record())
            .find(|record| *record == candidate)
            .ok_or(InconsistentRecord {
                in_stock: raw.in_stock,
                on_back_order: raw.on_back_order,
                buyable: raw.buyable,
                active: raw.active,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let record = AvailabilityRecord::new(true, false, true, true);

        assert!(record.in_stock());
        assert!(!record.on_back_order());
        assert!(record.buyable());
        assert!(record.active());
    }

    #[test]
    fn test_record_structural_equality() {
        let a = AvailabilityRecord::new(false, true, true, true);
        let b = AvailabilityRecord::new(false, true, true, true);
        let c = AvailabilityRecord::new(false, false, true, true);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_record_serializes_with_snake_case_fields() {
        let record = AvailabilityRecord::new(false, true, true, true);
        let json = serde_json::to_value(record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "in_stock": false,
                "on_back_order": true,
                "buyable": true,
                "active": true,
            })
        );
    }

    #[test]
    fn test_canonical_records_deserialize() {
        for kind in StatusKind::ALL {
            let json = serde_json::to_string(&kind.record()).unwrap();
            let record: AvailabilityRecord = serde_json::from_str(&json).unwrap();

            assert_eq!(record, kind.record());
        }
    }

    #[test]
    fn test_inconsistent_record_is_rejected() {
        let result = serde_json::from_str::<AvailabilityRecord>(
            r#"{"in_stock":true,"on_back_order":true,"buyable":false,"active":false}"#,
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Inconsistent availability flags"));
    }

    #[test]
    fn test_inactive_buyable_record_is_rejected() {
        let result = serde_json::from_str::<AvailabilityRecord>(
            r#"{"in_stock":false,"on_back_order":false,"buyable":true,"active":false}"#,
        );

        assert!(result.is_err());
    }
}
