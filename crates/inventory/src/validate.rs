//! Field-level input checks.
//!
//! Pure predicates; they never fail or log. The store re-runs them on every
//! append, so callers may use them for early feedback only.

/// Length of an item id, in digits.
pub const ITEM_ID_LEN: usize = 5;

/// Exactly five ASCII decimal digits, nothing else.
pub fn is_valid_item_id(text: &str) -> bool {
    text.len() == ITEM_ID_LEN && text.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_valid_quantity(quantity: i64) -> bool {
    quantity >= 0
}

/// Non-negative. `NaN` is rejected.
pub fn is_valid_cost(cost: f64) -> bool {
    cost >= 0.0
}
