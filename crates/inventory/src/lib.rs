//! Inventory engine.
//!
//! An ordered, in-memory store of inventory records with append, remove-last,
//! single-field edit and read-only snapshot. No IO happens here; the clock and
//! random markup come in through `inquisitor-core` traits.

pub mod record;
pub mod store;
pub mod validate;

pub use record::{InventoryRecord, ItemId};
pub use store::{FieldSelector, FieldValue, InventoryStore, MARKUP_RANGE};
pub use validate::{ITEM_ID_LEN, is_valid_cost, is_valid_item_id, is_valid_quantity};
