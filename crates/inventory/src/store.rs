use core::str::FromStr;

use serde::{Deserialize, Serialize};

use inquisitor_core::{
    Clock, CostSource, Field, InventoryError, InventoryResult, RandomCostGenerator, SystemClock,
};

use crate::record::{InventoryRecord, ItemId};
use crate::validate::{is_valid_cost, is_valid_quantity};

/// Inclusive bounds of the markup drawn for each new record.
pub const MARKUP_RANGE: (f64, f64) = (0.10, 0.50);

/// Which single attribute an edit overwrites.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSelector {
    QuantityOnHand,
    WholesaleCost,
}

impl FromStr for FieldSelector {
    type Err = InventoryError;

    /// Accepts the menu numbers (`1`, `2`) or a field name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "quantity" | "quantity_on_hand" => Ok(Self::QuantityOnHand),
            "2" | "cost" | "wholesale" | "wholesale_cost" => Ok(Self::WholesaleCost),
            other => Err(InventoryError::invalid_choice(format!(
                "unknown field {other:?}"
            ))),
        }
    }
}

/// New value for an edit.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Quantity(i64),
    Cost(f64),
}

/// Ordered, in-memory collection of inventory records.
///
/// Insertion order is preserved and indices are positional: removing the last
/// record is the only way to shrink the store. The clock and markup source are
/// consulted only when a record is appended.
#[derive(Debug)]
pub struct InventoryStore<C = SystemClock, R = &'static RandomCostGenerator> {
    records: Vec<InventoryRecord>,
    clock: C,
    costs: R,
}

impl InventoryStore {
    /// Empty store wired to the system clock and the process random source.
    pub fn new() -> Self {
        Self::with_sources(SystemClock, RandomCostGenerator::instance())
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, R: CostSource> InventoryStore<C, R> {
    pub fn with_sources(clock: C, costs: R) -> Self {
        Self {
            records: Vec::new(),
            clock,
            costs,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&InventoryRecord> {
        self.records.get(index)
    }

    pub fn last(&self) -> Option<&InventoryRecord> {
        self.records.last()
    }

    /// Read-only view of the records in store order.
    pub fn snapshot(&self) -> &[InventoryRecord] {
        &self.records
    }

    /// Fails unless `index` addresses an existing record.
    pub fn ensure_index(&self, index: usize) -> InventoryResult<()> {
        if index >= self.records.len() {
            return Err(InventoryError::index_out_of_range(index, self.records.len()));
        }
        Ok(())
    }

    /// Validate and append a new record, returning its index.
    ///
    /// Fields are checked in order (id, quantity, cost) and the first failure
    /// is returned with the store unchanged.
    pub fn append(
        &mut self,
        item_id: &str,
        quantity: i64,
        wholesale_cost: f64,
    ) -> InventoryResult<usize> {
        let record = self.build_record(item_id, quantity, wholesale_cost).inspect_err(|e| {
            tracing::warn!(error = %e, kind = e.kind(), "append rejected");
        })?;

        self.records.push(record);
        let index = self.records.len() - 1;

        let record = &self.records[index];
        tracing::debug!(
            item_id = %record.item_id(),
            index,
            len = self.records.len(),
            retail_cost = record.retail_cost(),
            "record appended"
        );
        Ok(index)
    }

    fn build_record(
        &self,
        item_id: &str,
        quantity: i64,
        wholesale_cost: f64,
    ) -> InventoryResult<InventoryRecord> {
        let item_id: ItemId = item_id.parse()?;
        if !is_valid_quantity(quantity) {
            return Err(InventoryError::validation(Field::Quantity));
        }
        if !is_valid_cost(wholesale_cost) {
            return Err(InventoryError::validation(Field::WholesaleCost));
        }

        let (min, max) = MARKUP_RANGE;
        let markup = self.costs.generate_random_cost(min, max);
        tracing::trace!(markup, "markup drawn");

        Ok(InventoryRecord::new(
            item_id,
            quantity,
            wholesale_cost,
            markup,
            self.clock.now(),
        ))
    }

    /// Remove and return the most recently appended record.
    pub fn remove_last(&mut self) -> InventoryResult<InventoryRecord> {
        let Some(record) = self.records.pop() else {
            tracing::warn!(kind = "empty_store", "remove_last rejected");
            return Err(InventoryError::empty_store());
        };

        tracing::debug!(item_id = %record.item_id(), len = self.records.len(), "record removed");
        Ok(record)
    }

    /// Overwrite one field of the record at `index`.
    ///
    /// Unlike [`append`](Self::append), the new value is not range-checked, so
    /// an edit may leave a negative quantity or cost. Retail cost is left as it
    /// was computed at creation.
    pub fn edit_field(
        &mut self,
        index: usize,
        selector: FieldSelector,
        value: FieldValue,
    ) -> InventoryResult<()> {
        let len = self.records.len();
        let Some(record) = self.records.get_mut(index) else {
            tracing::warn!(index, len, kind = "index_out_of_range", "edit rejected");
            return Err(InventoryError::index_out_of_range(index, len));
        };

        match (selector, value) {
            (FieldSelector::QuantityOnHand, FieldValue::Quantity(quantity)) => {
                record.set_quantity_on_hand(quantity);
            }
            (FieldSelector::WholesaleCost, FieldValue::Cost(cost)) => {
                record.set_wholesale_cost(cost);
            }
            (selector, value) => {
                tracing::warn!(index, ?selector, ?value, kind = "invalid_choice", "edit rejected");
                return Err(InventoryError::invalid_choice(format!(
                    "{value:?} cannot be written to {selector:?}"
                )));
            }
        }

        tracing::debug!(index, ?selector, "record edited");
        Ok(())
    }
}
