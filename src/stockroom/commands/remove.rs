use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;

pub fn run(inventory: &mut Inventory, id: &str) -> Result<CmdResult> {
    let removed = inventory.remove(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product '{}' removed ({})",
        removed.name,
        removed.id()
    )));
    Ok(result.with_affected_products(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;
    use crate::test_utils::sample_inventory;

    #[test]
    fn removes_by_id() {
        let mut inventory = sample_inventory();
        let result = run(&mut inventory, "M1").unwrap();
        assert_eq!(result.affected_products[0].name, "Aspirin");
        assert!(inventory.find_by_id("M1").is_none());
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut inventory = sample_inventory();
        assert!(matches!(
            run(&mut inventory, "ZZ"),
            Err(StockError::NotFound(_))
        ));
        assert_eq!(inventory.len(), 5);
    }
}
