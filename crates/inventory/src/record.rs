use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use inquisitor_core::{Field, InventoryError, ValueObject};

use crate::validate::is_valid_item_id;

/// Five-digit stock-keeping identifier.
///
/// Not unique: several records may carry the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemId {}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_item_id(s) {
            return Err(InventoryError::validation(Field::ItemId));
        }
        Ok(Self(s.to_owned()))
    }
}

impl TryFrom<String> for ItemId {
    type Error = InventoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !is_valid_item_id(&value) {
            return Err(InventoryError::validation(Field::ItemId));
        }
        Ok(Self(value))
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

/// One tracked stock-keeping unit.
///
/// Only [`crate::InventoryStore`] creates records. `item_id`, `retail_cost`
/// and `date_added` are fixed at creation; quantity and wholesale cost can be
/// overwritten through the store's edit operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    item_id: ItemId,
    quantity_on_hand: i64,
    wholesale_cost: f64,
    retail_cost: f64,
    date_added: DateTime<Utc>,
}

impl InventoryRecord {
    pub(crate) fn new(
        item_id: ItemId,
        quantity_on_hand: i64,
        wholesale_cost: f64,
        markup: f64,
        date_added: DateTime<Utc>,
    ) -> Self {
        Self {
            item_id,
            quantity_on_hand,
            wholesale_cost,
            retail_cost: wholesale_cost * (1.0 + markup),
            date_added,
        }
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn quantity_on_hand(&self) -> i64 {
        self.quantity_on_hand
    }

    pub fn wholesale_cost(&self) -> f64 {
        self.wholesale_cost
    }

    pub fn retail_cost(&self) -> f64 {
        self.retail_cost
    }

    pub fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }

    /// Fractional markup implied by the current costs, if any.
    ///
    /// Drifts from the creation-time markup once wholesale cost is edited,
    /// because retail cost is never recomputed.
    pub fn markup(&self) -> Option<f64> {
        if self.wholesale_cost > 0.0 {
            Some(self.retail_cost / self.wholesale_cost - 1.0)
        } else {
            None
        }
    }

    pub(crate) fn set_quantity_on_hand(&mut self, quantity: i64) {
        self.quantity_on_hand = quantity;
    }

    pub(crate) fn set_wholesale_cost(&mut self, cost: f64) {
        self.wholesale_cost = cost;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 11, 5, 9, 30, 0).unwrap()
    }

    #[test]
    fn item_id_parses_five_digits() {
        let id: ItemId = "04217".parse().unwrap();
        assert_eq!(id.as_str(), "04217");
        assert_eq!(id.to_string(), "04217");
    }

    #[test]
    fn equal_digits_make_equal_ids() {
        fn same<T: ValueObject>(a: &T, b: &T) -> bool {
            a == b
        }
        let a: ItemId = "55555".parse().unwrap();
        let b: ItemId = "55555".parse().unwrap();
        assert!(same(&a, &b.clone()));
    }

    #[test]
    fn item_id_rejects_bad_format() {
        let err = "12a45".parse::<ItemId>().unwrap_err();
        match err {
            InventoryError::Validation(Field::ItemId) => {}
            _ => panic!("Expected Validation(ItemId) error"),
        }
    }

    #[test]
    fn retail_cost_applies_markup_once() {
        let record = InventoryRecord::new("11111".parse().unwrap(), 4, 20.0, 0.25, test_time());
        assert_eq!(record.retail_cost(), 25.0);
        assert_eq!(record.markup(), Some(0.25));
    }

    #[test]
    fn markup_is_undefined_for_free_items() {
        let record = InventoryRecord::new("11111".parse().unwrap(), 4, 0.0, 0.25, test_time());
        assert_eq!(record.retail_cost(), 0.0);
        assert_eq!(record.markup(), None);
    }

    #[test]
    fn record_serializes_with_plain_item_id() {
        let record = InventoryRecord::new("00042".parse().unwrap(), 7, 10.0, 0.5, test_time());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["item_id"], "00042");
        assert_eq!(json["quantity_on_hand"], 7);
        assert_eq!(json["retail_cost"], 15.0);

        let back: InventoryRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn deserializing_rejects_malformed_item_id() {
        let json = serde_json::json!({
            "item_id": "123",
            "quantity_on_hand": 1,
            "wholesale_cost": 1.0,
            "retail_cost": 1.2,
            "date_added": "2023-11-05T09:30:00Z",
        });
        assert!(serde_json::from_value::<InventoryRecord>(json).is_err());
    }
}
