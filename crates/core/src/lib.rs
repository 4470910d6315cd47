//! `inquisitor-core` — building blocks shared by the inventory engine.
//!
//! Holds the error model and the two side-effecting collaborators (clock and
//! random source) behind small traits, so the store itself stays testable.

pub mod clock;
pub mod error;
pub mod random;
pub mod value_object;

pub use clock::{Clock, SystemClock};
pub use error::{Field, InventoryError, InventoryResult};
pub use random::{CostSource, RandomCostGenerator};
pub use value_object::ValueObject;
