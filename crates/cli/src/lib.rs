//! `inquisitor` — text-menu front end for the inventory engine.

use std::io::{BufRead, Write};

use inquisitor_core::{RandomCostGenerator, SystemClock};
use inquisitor_inventory::InventoryStore;

pub mod config;
pub mod menu;
pub mod render;
pub mod self_check;

pub use config::Config;
pub use menu::Menu;

pub const GREETING: &str = "Welcome to your Inventory Inquisitor";

/// Full interactive session: greeting, optional self-check, then the menu.
///
/// The store lives exactly as long as the session and is dropped on return.
pub fn run<R: BufRead, W: Write>(config: &Config, input: R, mut output: W) -> anyhow::Result<()> {
    writeln!(output, "{GREETING}")?;

    if !config.skip_self_check {
        let report = self_check::run(
            &SystemClock,
            RandomCostGenerator::instance(),
            config.expected_year,
        );
        for line in report.lines() {
            writeln!(output, "{line}")?;
        }
    }

    let mut menu = Menu::new(input, output, InventoryStore::new(), config.currency.clone());
    menu.run()
}
