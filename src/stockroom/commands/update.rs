use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::inventory::{Inventory, ProductUpdate};

/// Sets one field, named as in the CSV header, from its textual value.
pub fn run(inventory: &mut Inventory, id: &str, field: &str, value: &str) -> Result<CmdResult> {
    // Resolve the id first so a missing product wins over a bad value.
    if !inventory.contains(id) {
        return Err(StockError::NotFound(id.to_string()));
    }
    let update = ProductUpdate::parse(field, value)?;
    let field_name = update.field_name();
    let product = inventory.update(id, update)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product updated ({}): {} set",
        product.id(),
        field_name
    )));
    Ok(result.with_affected_products(vec![product]))
}

/// Adds `delta` (possibly negative) to a product's quantity.
pub fn adjust_stock(inventory: &mut Inventory, id: &str, delta: i64) -> Result<CmdResult> {
    let product = inventory.update_stock(id, delta)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Stock for {} is now {}",
        product.id(),
        product.quantity
    )));
    if product.quantity < 0 {
        result.add_message(CmdMessage::warning(format!(
            "Stock for {} is negative",
            product.id()
        )));
    }
    Ok(result.with_affected_products(vec![product]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_inventory;

    #[test]
    fn updates_price() {
        let mut inventory = sample_inventory();
        let result = run(&mut inventory, "E1", "price", "499.5").unwrap();
        assert_eq!(result.affected_products[0].price, 499.5);
        assert_eq!(inventory.find_by_id("E1").unwrap().price, 499.5);
    }

    #[test]
    fn missing_product_wins_over_bad_value() {
        let mut inventory = sample_inventory();
        assert!(matches!(
            run(&mut inventory, "nope", "price", "abc"),
            Err(StockError::NotFound(_))
        ));
    }

    #[test]
    fn bad_value_leaves_product_unchanged() {
        let mut inventory = sample_inventory();
        let before = inventory.find_by_id("E1").unwrap().clone();
        assert!(run(&mut inventory, "E1", "quantity", "lots").is_err());
        assert_eq!(inventory.find_by_id("E1").unwrap(), &before);
    }

    #[test]
    fn negative_stock_is_allowed_but_warned() {
        let mut inventory = sample_inventory();
        let result = adjust_stock(&mut inventory, "E1", -6).unwrap();
        assert_eq!(result.affected_products[0].quantity, -1);
        assert_eq!(result.messages.len(), 2);
    }
}
