use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::inventory::Inventory;
use crate::model::{Category, Product};

fn owned(products: Vec<&Product>) -> Vec<Product> {
    products.into_iter().cloned().collect()
}

pub fn all(inventory: &Inventory) -> CmdResult {
    let mut result = CmdResult::default().with_listed_products(inventory.iter().cloned().collect());
    if inventory.is_empty() {
        result.add_message(CmdMessage::info("No products in inventory."));
    }
    result.categories = inventory.categories();
    result
}

pub fn by_id(inventory: &Inventory, id: &str) -> Result<CmdResult> {
    let product = inventory
        .find_by_id(id)
        .ok_or_else(|| StockError::NotFound(id.to_string()))?;
    Ok(CmdResult::default().with_listed_products(vec![product.clone()]))
}

pub fn by_category(inventory: &Inventory, category: Category) -> CmdResult {
    let products = owned(inventory.find_by_category(category));
    let mut result = CmdResult::default();
    if products.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No products found in {} category.",
            category
        )));
    } else {
        result.categories = vec![category];
    }
    result.with_listed_products(products)
}

pub fn by_name(inventory: &Inventory, term: &str) -> CmdResult {
    let products = owned(inventory.find_by_name(term));
    let mut result = CmdResult::default();
    if products.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No products found matching '{}'.",
            term
        )));
    }
    result.with_listed_products(products)
}
