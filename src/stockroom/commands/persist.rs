use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::Category;
use crate::store::backend::StorageBackend;
use crate::store::csv_store::CsvStore;
use std::path::Path;

/// Loads every category file, reporting skipped rows and unreadable files.
pub fn load<B: StorageBackend>(store: &CsvStore<B>) -> (Inventory, CmdResult) {
    let (inventory, report) = store.load();
    let mut result = CmdResult::default();

    for skipped in &report.skipped {
        result.add_message(CmdMessage::warning(format!(
            "Skipped record {} in {}: {}",
            skipped.record,
            skipped.file.display(),
            skipped.reason
        )));
    }
    for failure in &report.failures {
        result.add_message(CmdMessage::error(format!(
            "Could not read {} file: {}",
            failure.category, failure.error
        )));
    }
    result.add_message(CmdMessage::info(format!(
        "Loaded {} products from category files.",
        report.total_loaded()
    )));
    (inventory, result)
}

/// Saves all non-empty categories. Per-file failures become error messages.
pub fn save<B: StorageBackend>(store: &CsvStore<B>, inventory: &Inventory) -> CmdResult {
    let report = store.save(inventory);
    let mut result = CmdResult::default();

    for (category, rows) in &report.written {
        let path = store.backend().resolve(Path::new(category.file_name()));
        result.add_message(CmdMessage::success(format!(
            "Saved {} {} product(s) to {}",
            rows,
            category,
            path.display()
        )));
    }
    for failure in &report.failures {
        result.add_message(CmdMessage::error(format!(
            "Could not save {} file: {}",
            failure.category, failure.error
        )));
    }
    if report.written.is_empty() && report.failures.is_empty() {
        result.add_message(CmdMessage::info("Nothing to save."));
    }
    result
}

pub fn export<B: StorageBackend>(
    store: &CsvStore<B>,
    inventory: &Inventory,
    category: Category,
    path: &Path,
) -> Result<CmdResult> {
    let rows = store.export_category(inventory, category, path)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} inventory exported to {} ({} rows)",
        category,
        store.backend().resolve(path).display(),
        rows
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::StockError;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::sample_inventory;

    #[test]
    fn load_reports_skipped_rows_as_warnings() {
        let backend = MemBackend::new();
        backend.put(
            "food_inventory.csv",
            "header\nF1,Milk,1.5,4,01/01/2030,1\nF2,Eggs,abc,12,01/01/2030,0\n",
        );
        let (inventory, result) = load(&CsvStore::new(backend));

        assert_eq!(inventory.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages.last().unwrap().content.contains("Loaded 1"));
    }

    #[test]
    fn save_reports_each_written_file() {
        let store = CsvStore::new(MemBackend::new());
        let result = save(&store, &sample_inventory());
        assert_eq!(result.messages.len(), 3);
        assert!(!result.has_errors());
    }

    #[test]
    fn save_of_empty_inventory_writes_nothing() {
        let store = CsvStore::new(MemBackend::new());
        let result = save(&store, &Inventory::new());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(store.backend().get("food_inventory.csv").is_none());
    }

    #[test]
    fn save_failure_is_an_error_message() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let result = save(&CsvStore::new(backend), &sample_inventory());
        assert!(result.has_errors());
    }

    #[test]
    fn export_empty_category_is_an_error() {
        let store = CsvStore::new(MemBackend::new());
        let err = export(&store, &Inventory::new(), Category::Food, Path::new("x.csv")).unwrap_err();
        assert!(matches!(err, StockError::EmptyCategory(Category::Food)));
    }
}
