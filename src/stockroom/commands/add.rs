use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::Product;

pub fn run(inventory: &mut Inventory, product: Product) -> Result<CmdResult> {
    let added = inventory.add(product)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product added ({}): {} [{}]",
        added.id(),
        added.name,
        added.category()
    )));
    Ok(result.with_affected_products(vec![added]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;

    #[test]
    fn adds_and_reports_success() {
        let mut inventory = Inventory::new();
        let result = run(
            &mut inventory,
            Product::electronic("E1", "Phone, 5G", 599.99, 5, "Acme", 12),
        )
        .unwrap();

        assert_eq!(inventory.len(), 1);
        assert_eq!(result.affected_products[0].id(), "E1");
        assert!(result.messages[0].content.contains("Phone, 5G"));
    }

    #[test]
    fn duplicate_is_an_error_and_changes_nothing() {
        let mut inventory = Inventory::new();
        run(&mut inventory, Product::electronic("E1", "Phone", 1.0, 1, "A", 1)).unwrap();
        let err = run(
            &mut inventory,
            Product::medicine("E1", "Pills", 1.0, 1, "P", "d", false),
        )
        .unwrap_err();

        assert!(matches!(err, StockError::DuplicateId(_)));
        assert_eq!(inventory.len(), 1);
    }
}
