use stockroom::api::StockroomApi;
use stockroom::inventory::Inventory;
use stockroom::model::{Category, Product};
use stockroom::store::csv_store::CsvStore;
use stockroom::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn store(dir: &TempDir) -> CsvStore<FsBackend> {
    CsvStore::new(FsBackend::new(dir.path()))
}

#[test]
fn test_save_and_reload_preserves_quoted_fields() {
    let dir = TempDir::new().unwrap();
    let mut inventory = Inventory::new();
    inventory
        .add(Product::electronic("E1", "Phone, 5G", 599.99, 5, "Acme", 12))
        .unwrap();
    inventory
        .add(Product::food(
            "F1",
            "Bread \"Rye\"\nsliced",
            2.1,
            3,
            "01/01/2030",
            true,
        ))
        .unwrap();

    let report = store(&dir).save(&inventory);
    assert!(report.is_success());

    let text = fs::read_to_string(dir.path().join("electronics_inventory.csv")).unwrap();
    assert_eq!(
        text,
        "product_id,name,price,quantity,brand,warranty_months\nE1,\"Phone, 5G\",599.99,5,Acme,12\n"
    );

    let (reloaded, load) = store(&dir).load();
    assert!(load.skipped.is_empty());
    assert_eq!(reloaded.len(), 2);
    let phone = reloaded.find_by_id("E1").unwrap();
    assert_eq!(phone.name, "Phone, 5G");
    assert_eq!(phone.quantity, 5);
    assert_eq!(
        reloaded.find_by_id("F1").unwrap(),
        inventory.find_by_id("F1").unwrap()
    );
}

#[test]
fn test_duplicate_id_across_categories_is_rejected() {
    let dir = TempDir::new().unwrap();
    let (mut api, _) = StockroomApi::open(FsBackend::new(dir.path()));

    api.add_product(Product::electronic("X1", "Phone", 10.0, 1, "Acme", 1))
        .unwrap();
    assert!(api
        .add_product(Product::food("X1", "Milk", 1.0, 1, "01/01/2030", false))
        .is_err());
    assert_eq!(api.inventory().len(), 1);
}

#[test]
fn test_bad_price_row_is_skipped() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("food_inventory.csv"),
        "product_id,name,price,quantity,expiry_date,is_organic\n\
         F1,Milk,1.5,4,01/01/2030,1\n\
         F2,Eggs,abc,12,01/01/2030,0\n",
    )
    .unwrap();

    let (inventory, report) = store(&dir).load();
    assert_eq!(inventory.len(), 1);
    assert!(inventory.contains("F1"));
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].record, 3);
}

#[test]
fn test_empty_category_file_is_left_untouched() {
    let dir = TempDir::new().unwrap();
    let original = "product_id,name,price,quantity,brand,warranty_months\nOLD,Thing,1,1,Acme,1\n";
    let path = dir.path().join("electronics_inventory.csv");
    fs::write(&path, original).unwrap();

    let mut inventory = Inventory::new();
    inventory
        .add(Product::medicine("M1", "Aspirin", 4.5, 20, "Bayer", "01/06/2031", true))
        .unwrap();
    let report = store(&dir).save(&inventory);

    assert_eq!(report.untouched, vec![Category::Electronics, Category::Food]);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
    assert!(!dir.path().join("food_inventory.csv").exists());
    assert!(dir.path().join("medicine_inventory.csv").exists());
}

#[test]
fn test_save_creates_missing_data_dir() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("data").join("stock");
    let mut inventory = Inventory::new();
    inventory
        .add(Product::food("F1", "Milk", 1.0, 1, "01/01/2030", false))
        .unwrap();

    let report = CsvStore::new(FsBackend::new(&nested)).save(&inventory);
    assert!(report.is_success());
    assert!(nested.join("food_inventory.csv").is_file());
}

#[test]
fn test_export_to_absolute_path() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let target = out.path().join("meds.csv");

    let mut inventory = Inventory::new();
    inventory
        .add(Product::medicine("M1", "Aspirin", 4.5, 20, "Bayer", "01/06/2031", false))
        .unwrap();
    let rows = store(&data)
        .export_category(&inventory, Category::Medicine, &target)
        .unwrap();

    assert_eq!(rows, 1);
    let text = fs::read_to_string(&target).unwrap();
    assert!(text.ends_with("M1,Aspirin,4.5,20,Bayer,01/06/2031,0\n"));
}
