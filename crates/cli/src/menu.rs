//! Interactive text menu driving an [`InventoryStore`].

use std::io::{BufRead, Write};

use anyhow::Context;

use inquisitor_core::{Clock, CostSource, Field, InventoryError, RandomCostGenerator, SystemClock};
use inquisitor_inventory::{
    FieldSelector, FieldValue, InventoryStore, is_valid_cost, is_valid_item_id, is_valid_quantity,
};

use crate::render;

const MENU: &str = "\
Main Menu
--------------------------------
A: Add Inventory
D: Delete Inventory
E: Edit Inventory
P: Print Inventory
Q: Quit Program
--------------------------------";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Menu loop over arbitrary input/output streams.
///
/// End of input at any prompt ends the session the same way `Q` does.
pub struct Menu<R, W, C = SystemClock, S = &'static RandomCostGenerator> {
    input: R,
    output: W,
    store: InventoryStore<C, S>,
    currency: String,
}

impl<R: BufRead, W: Write, C: Clock, S: CostSource> Menu<R, W, C, S> {
    pub fn new(input: R, output: W, store: InventoryStore<C, S>, currency: impl Into<String>) -> Self {
        Self {
            input,
            output,
            store,
            currency: currency.into(),
        }
    }

    pub fn store(&self) -> &InventoryStore<C, S> {
        &self.store
    }

    pub fn into_store(self) -> InventoryStore<C, S> {
        self.store
    }

    /// Show the menu and dispatch commands until `Q` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                break;
            };
            let command = line.trim().chars().next().map(|c| c.to_ascii_uppercase());

            let flow = match command {
                Some('A') => self.add_item()?,
                Some('D') => self.delete_item()?,
                Some('E') => self.edit_item()?,
                Some('P') => self.print_inventory()?,
                Some('Q') => Flow::Quit,
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        self.output.flush().context("failed to flush output")?;
        tracing::info!(items = self.store.len(), "menu closed");
        Ok(())
    }

    fn add_item(&mut self) -> anyhow::Result<Flow> {
        let item_id = loop {
            let Some(line) = self.prompt("Enter the 5 digits of Item ID (5 #'s): ")? else {
                return Ok(Flow::Quit);
            };
            let candidate = line.trim();
            if is_valid_item_id(candidate) {
                break candidate.to_string();
            }
        };

        let Some(line) = self.prompt("The Quantity at Hand of item: ")? else {
            return Ok(Flow::Quit);
        };
        let quantity = match line.trim().parse::<i64>() {
            Ok(q) if is_valid_quantity(q) => q,
            _ => {
                writeln!(self.output, "Invalid Quantity. Please enter a non-negative integer.")?;
                return Ok(Flow::Continue);
            }
        };

        let Some(line) = self.prompt("The Wholesale Cost of item: $")? else {
            return Ok(Flow::Quit);
        };
        let wholesale_cost = match line.trim().parse::<f64>() {
            Ok(c) if is_valid_cost(c) => c,
            _ => {
                writeln!(
                    self.output,
                    "Invalid Wholesale Cost! Wholesale cost can't be negative, enter a positive value."
                )?;
                return Ok(Flow::Continue);
            }
        };

        match self.store.append(&item_id, quantity, wholesale_cost) {
            Ok(_) => writeln!(self.output, "Your Item has been added to inventory successfully :).")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_item(&mut self) -> anyhow::Result<Flow> {
        match self.store.remove_last() {
            Ok(_) => writeln!(self.output, "Last item has been deleted.")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn edit_item(&mut self) -> anyhow::Result<Flow> {
        let Some(line) = self.prompt("Enter the index of the item to edit: ")? else {
            return Ok(Flow::Quit);
        };
        // A negative or non-numeric index addresses nothing, same as one past the end.
        let index = line.trim().parse::<usize>().unwrap_or(usize::MAX);
        if let Err(e) = self.store.ensure_index(index) {
            self.report(&e)?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "Edit Item at index {index}")?;
        writeln!(self.output, "Which field do you want to edit?")?;
        writeln!(self.output, "1. Quantity at Hand")?;
        writeln!(self.output, "2. Wholesale Cost")?;
        let Some(line) = self.prompt("Enter your choice (1 or 2): ")? else {
            return Ok(Flow::Quit);
        };
        let selector = match line.parse::<FieldSelector>() {
            Ok(selector) => selector,
            Err(e) => {
                self.report(&e)?;
                return Ok(Flow::Continue);
            }
        };

        let (label, parsed) = match selector {
            FieldSelector::QuantityOnHand => {
                let Some(line) = self.prompt("Enter the new quantity at hand: ")? else {
                    return Ok(Flow::Quit);
                };
                ("quantity", line.trim().parse::<i64>().ok().map(FieldValue::Quantity))
            }
            FieldSelector::WholesaleCost => {
                let Some(line) = self.prompt("Enter the new wholesale cost: $")? else {
                    return Ok(Flow::Quit);
                };
                ("wholesale cost", line.trim().parse::<f64>().ok().map(FieldValue::Cost))
            }
        };
        let Some(value) = parsed else {
            writeln!(self.output, "Invalid {label}. No Updates made.")?;
            return Ok(Flow::Continue);
        };

        match self.store.edit_field(index, selector, value) {
            Ok(()) => writeln!(self.output, "Your Item has been updated successfully.")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn print_inventory(&mut self) -> anyhow::Result<Flow> {
        let table = render::inventory_table(self.store.snapshot(), &self.currency);
        write!(self.output, "{table}")?;
        Ok(Flow::Continue)
    }

    /// User-facing wording for each recoverable error.
    fn report(&mut self, err: &InventoryError) -> anyhow::Result<()> {
        let message = match err {
            InventoryError::EmptyStore => "There is nothing to delete! INVENTORY EMPTY.",
            InventoryError::IndexOutOfRange { .. } => "That item does not exist.",
            InventoryError::InvalidChoice(_) => "Invalid choice. No Updates made.",
            InventoryError::Validation(Field::ItemId) => "Invalid Item ID. Please enter exactly 5 digits.",
            InventoryError::Validation(Field::Quantity) => {
                "Invalid Quantity. Please enter a non-negative integer."
            }
            InventoryError::Validation(Field::WholesaleCost) => {
                "Invalid Wholesale Cost! Wholesale cost can't be negative, enter a positive value."
            }
        };
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Print `text` without a newline and read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }
}
