use crate::commands::{CmdMessage, CmdResult};
use crate::inventory::Inventory;

pub fn run(inventory: &Inventory) -> CmdResult {
    let report = inventory.report();
    let mut result = CmdResult::default();
    if report.is_empty() {
        result.add_message(CmdMessage::info("No products in inventory."));
    } else if report.low_stock.is_empty() {
        result.add_message(CmdMessage::success("No items with low stock."));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "{} product(s) below the low-stock threshold of {}",
            report.low_stock.len(),
            report.threshold
        )));
    }
    result.with_report(report)
}
