//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the inventory engine.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Input field checked when a record is created.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ItemId,
    Quantity,
    WholesaleCost,
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Field::ItemId => "item id",
            Field::Quantity => "quantity",
            Field::WholesaleCost => "wholesale cost",
        };
        f.write_str(name)
    }
}

/// Inventory-level error.
///
/// Every variant is recoverable: the store is left untouched and the caller
/// reports the condition and carries on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A field failed its format or range check on creation.
    #[error("invalid {0}")]
    Validation(Field),

    /// Removal was requested on an empty store.
    #[error("there is nothing to delete, inventory is empty")]
    EmptyStore,

    /// A positional index did not address an existing record.
    #[error("item {index} does not exist (inventory holds {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// An edit named a field that cannot be edited, or paired a field with
    /// the wrong kind of value.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),
}

impl InventoryError {
    pub fn validation(field: Field) -> Self {
        Self::Validation(field)
    }

    pub fn empty_store() -> Self {
        Self::EmptyStore
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    pub fn invalid_choice(msg: impl Into<String>) -> Self {
        Self::InvalidChoice(msg.into())
    }

    /// Short machine-friendly name, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::EmptyStore => "empty_store",
            Self::IndexOutOfRange { .. } => "index_out_of_range",
            Self::InvalidChoice(_) => "invalid_choice",
        }
    }
}
