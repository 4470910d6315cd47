//! Plain-text rendering of the inventory table.

use std::fmt::Write as _;

use inquisitor_inventory::InventoryRecord;

const HEADER: &str = "Item #   ID         Quantity   Wholesale Cost   Retail Cost";

/// One header, one rule, one row per record. Costs are prefixed with
/// `currency` and shown to two decimals.
pub fn inventory_table(records: &[InventoryRecord], currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HEADER}");
    let _ = writeln!(out, "{}", "-".repeat(HEADER.len()));

    for (n, record) in records.iter().enumerate() {
        let row = format!(
            "{:<9}{:<11}{:<11}{:<17}{}",
            format!("Item {n}"),
            record.item_id(),
            record.quantity_on_hand(),
            money(currency, record.wholesale_cost()),
            money(currency, record.retail_cost()),
        );
        let _ = writeln!(out, "{row}");
    }
    out
}

fn money(currency: &str, amount: f64) -> String {
    format!("{currency}{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use inquisitor_core::{Clock, CostSource};
    use inquisitor_inventory::InventoryStore;

    struct Epoch;

    impl Clock for Epoch {
        fn now(&self) -> chrono::DateTime<chrono::Utc> {
            chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 1970, 1, 1, 0, 0, 0).unwrap()
        }

        fn current_year(&self) -> i32 {
            1970
        }
    }

    struct Quarter;

    impl CostSource for Quarter {
        fn generate_random_cost(&self, _min: f64, _max: f64) -> f64 {
            0.25
        }
    }

    #[test]
    fn empty_table_is_header_only() {
        let table = inventory_table(&[], "$");
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].chars().all(|c| c == '-'));
    }

    #[test]
    fn rows_show_index_id_quantity_and_costs() {
        let mut store = InventoryStore::with_sources(Epoch, Quarter);
        store.append("01234", 12, 8.0).unwrap();
        store.append("99999", 3, 2.4).unwrap();

        let table = inventory_table(store.snapshot(), "$");
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "Item 0   01234      12         $8.00            $10.00");
        assert_eq!(lines[3], "Item 1   99999      3          $2.40            $3.00");
    }

    #[test]
    fn currency_symbol_is_configurable() {
        let mut store = InventoryStore::with_sources(Epoch, Quarter);
        store.append("01234", 1, 4.0).unwrap();
        let table = inventory_table(store.snapshot(), "£");
        assert!(table.contains("£4.00"));
        assert!(table.contains("£5.00"));
    }
}
