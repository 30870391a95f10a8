use crate::inventory::Inventory;
use crate::model::Product;

/// Five products across all categories; E1, M1 and F2 are below the
/// low-stock threshold.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::electronic("E1", "Phone", 599.99, 5, "Acme", 12),
        Product::food("F1", "Organic Apples", 3.25, 50, "12/10/2030", true),
        Product::medicine("M1", "Aspirin", 4.5, 8, "Bayer", "01/06/2031", false),
        Product::electronic("E2", "Phone Charger", 19.99, 15, "Volt \"Max\"", 6),
        Product::food("F2", "Bread, Whole Wheat", 2.1, 3, "20/10/2030", false),
    ]
}

pub fn sample_inventory() -> Inventory {
    let mut inventory = Inventory::new();
    for product in sample_products() {
        inventory
            .add(product)
            .expect("sample products have unique ids");
    }
    inventory
}
