//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every UI (today, the interactive menu and the one-shot
//! subcommands).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the in-memory [`Inventory`] and the [`CsvStore`] it persists to
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (category names, export paths)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic and no terminal I/O.
//!
//! ## Generic Over StorageBackend
//!
//! `StockroomApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `StockroomApi<FsBackend>`
//! - Testing: `StockroomApi<MemBackend>`

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::{Category, Product};
use crate::store::backend::StorageBackend;
use crate::store::csv_store::CsvStore;
use std::path::Path;

pub struct StockroomApi<B: StorageBackend> {
    inventory: Inventory,
    store: CsvStore<B>,
}

impl<B: StorageBackend> StockroomApi<B> {
    /// Opens the store and loads all category files.
    pub fn open(backend: B) -> (Self, CmdResult) {
        let store = CsvStore::new(backend);
        let (inventory, result) = commands::persist::load(&store);
        (Self { inventory, store }, result)
    }

    /// Wraps an existing inventory without loading anything.
    pub fn with_inventory(backend: B, inventory: Inventory) -> Self {
        Self {
            inventory,
            store: CsvStore::new(backend),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn store(&self) -> &CsvStore<B> {
        &self.store
    }

    pub fn add_product(&mut self, product: Product) -> Result<CmdResult> {
        commands::add::run(&mut self.inventory, product.with_trimmed_id())
    }

    pub fn remove_product(&mut self, id: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.inventory, id.trim())
    }

    pub fn list_all(&self) -> CmdResult {
        commands::find::all(&self.inventory)
    }

    pub fn list_category(&self, category: &str) -> Result<CmdResult> {
        let category: Category = category.parse()?;
        Ok(commands::find::by_category(&self.inventory, category))
    }

    pub fn find_by_id(&self, id: &str) -> Result<CmdResult> {
        commands::find::by_id(&self.inventory, id.trim())
    }

    pub fn search_by_name(&self, term: &str) -> CmdResult {
        commands::find::by_name(&self.inventory, term)
    }

    pub fn update_product(&mut self, id: &str, field: &str, value: &str) -> Result<CmdResult> {
        commands::update::run(&mut self.inventory, id.trim(), field, value)
    }

    pub fn adjust_stock(&mut self, id: &str, delta: i64) -> Result<CmdResult> {
        commands::update::adjust_stock(&mut self.inventory, id.trim(), delta)
    }

    pub fn stock_report(&self) -> CmdResult {
        commands::report::run(&self.inventory)
    }

    pub fn save(&self) -> CmdResult {
        commands::persist::save(&self.store, &self.inventory)
    }

    pub fn export_category(&self, category: &str, path: &Path) -> Result<CmdResult> {
        let category: Category = category.parse()?;
        commands::persist::export(&self.store, &self.inventory, category, path)
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::sample_inventory;

    fn api() -> StockroomApi<MemBackend> {
        StockroomApi::with_inventory(MemBackend::new(), sample_inventory())
    }

    #[test]
    fn open_loads_from_backend() {
        let backend = MemBackend::new();
        backend.put("food_inventory.csv", "header\nF1,Milk,1,2,01/01/2030,1\n");
        let (api, result) = StockroomApi::open(backend);
        assert_eq!(api.inventory().len(), 1);
        assert!(result.messages[0].content.contains("Loaded 1"));
    }

    #[test]
    fn list_category_parses_category_names() {
        let api = api();
        let result = api.list_category("electronics").unwrap();
        assert_eq!(result.listed_products.len(), 2);
        assert!(matches!(
            api.list_category("toys"),
            Err(StockError::UnknownCategory(_))
        ));
    }

    #[test]
    fn ids_are_trimmed() {
        let mut api = api();
        assert!(api.find_by_id(" E1 ").is_ok());
        assert!(api.remove_product("E1\n").is_ok());
        assert!(api.find_by_id("E1").is_err());
    }

    #[test]
    fn added_ids_are_trimmed_too() {
        let mut api = StockroomApi::with_inventory(MemBackend::new(), Inventory::new());
        api.add_product(Product::food(" F9 ", "Milk", 1.0, 1, "01/01/2030", false))
            .unwrap();
        assert_eq!(api.find_by_id("F9").unwrap().listed_products[0].id(), "F9");
        assert!(matches!(
            api.add_product(Product::food("F9\t", "Eggs", 1.0, 1, "01/01/2030", false)),
            Err(StockError::DuplicateId(_))
        ));
        assert!(api.remove_product(" F9").is_ok());
        assert!(api.inventory().is_empty());
    }

    #[test]
    fn save_and_reopen_round_trip() {
        let api = api();
        api.save();
        let backend = MemBackend::new();
        for category in Category::ALL {
            if let Some(text) = api.store().backend().get(category.file_name()) {
                backend.put(category.file_name(), text);
            }
        }
        let (reopened, _) = StockroomApi::open(backend);
        assert_eq!(reopened.inventory().len(), api.inventory().len());
    }

    #[test]
    fn export_dispatches_with_parsed_category() {
        let api = api();
        let result = api.export_category("Medicine", Path::new("meds.csv")).unwrap();
        assert!(result.messages[0].content.contains("exported"));
        assert!(api.store().backend().get("meds.csv").is_some());
    }
}
