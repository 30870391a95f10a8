use super::backend::StorageBackend;
use crate::codec::{decode_row, encode_table, split_records};
use crate::error::{Result, StockError};
use crate::inventory::Inventory;
use crate::model::{Category, Product};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Rows need at least the shared id, name, price and quantity columns.
const BASE_FIELD_COUNT: usize = 4;

/// A persisted row that did not make it into the inventory.
#[derive(Debug)]
pub struct SkippedRow {
    pub file: PathBuf,
    /// 1-based record number within the file (the header is record 1).
    pub record: usize,
    pub reason: String,
}

#[derive(Debug)]
pub struct FileFailure {
    pub category: Category,
    pub error: StockError,
}

#[derive(Debug, Default)]
pub struct LoadReport {
    /// Records loaded per category file that existed.
    pub loaded: Vec<(Category, usize)>,
    pub skipped: Vec<SkippedRow>,
    pub failures: Vec<FileFailure>,
}

impl LoadReport {
    pub fn total_loaded(&self) -> usize {
        self.loaded.iter().map(|(_, n)| n).sum()
    }
}

#[derive(Debug, Default)]
pub struct SaveReport {
    /// Rows written per category file.
    pub written: Vec<(Category, usize)>,
    /// Categories with no products whose files were left alone.
    pub untouched: Vec<Category>,
    pub failures: Vec<FileFailure>,
}

impl SaveReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Maps an [`Inventory`] onto the three category files of a backend.
pub struct CsvStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> CsvStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Loads all category files into a fresh inventory.
    pub fn load(&self) -> (Inventory, LoadReport) {
        let mut inventory = Inventory::new();
        let report = self.load_into(&mut inventory);
        (inventory, report)
    }

    /// Merges all category files into `inventory`.
    pub fn load_into(&self, inventory: &mut Inventory) -> LoadReport {
        let mut report = LoadReport::default();

        for category in Category::ALL {
            let path = Path::new(category.file_name());
            let text = match self.backend.read_text(path) {
                Ok(Some(text)) => text,
                Ok(None) => continue,
                Err(error) => {
                    warn!(%category, %error, "could not read category file");
                    report.failures.push(FileFailure { category, error });
                    continue;
                }
            };

            let loaded = self.load_table(category, &text, inventory, &mut report.skipped);
            report.loaded.push((category, loaded));
        }

        info!(
            products = report.total_loaded(),
            skipped = report.skipped.len(),
            "loaded inventory"
        );
        report
    }

    fn load_table(
        &self,
        category: Category,
        text: &str,
        inventory: &mut Inventory,
        skipped: &mut Vec<SkippedRow>,
    ) -> usize {
        let file = self.backend.resolve(Path::new(category.file_name()));
        let mut seen_header = false;
        let mut loaded = 0;

        for (i, record) in split_records(text).iter().enumerate() {
            if record.is_empty() {
                continue;
            }
            if !seen_header {
                seen_header = true;
                continue;
            }

            match decode_product(category, record).and_then(|p| inventory.add(p).map(|_| ())) {
                Ok(()) => loaded += 1,
                Err(error) => {
                    warn!(file = %file.display(), record = i + 1, %error, "skipping row");
                    skipped.push(SkippedRow {
                        file: file.clone(),
                        record: i + 1,
                        reason: error.to_string(),
                    });
                }
            }
        }
        loaded
    }

    /// Writes one file per non-empty category, leaving other files untouched.
    pub fn save(&self, inventory: &Inventory) -> SaveReport {
        let mut report = SaveReport::default();

        if let Err(error) = self.backend.ensure_root() {
            warn!(%error, "could not prepare data directory");
            for category in Category::ALL {
                report.failures.push(FileFailure {
                    category,
                    error: StockError::Store(error.to_string()),
                });
            }
            return report;
        }

        for category in Category::ALL {
            let products = inventory.find_by_category(category);
            if products.is_empty() {
                report.untouched.push(category);
                continue;
            }
            let path = Path::new(category.file_name());
            match self.write_category(path, category, &products) {
                Ok(()) => report.written.push((category, products.len())),
                Err(error) => {
                    warn!(%category, %error, "could not save category file");
                    report.failures.push(FileFailure { category, error });
                }
            }
        }

        info!(
            files = report.written.len(),
            failures = report.failures.len(),
            "saved inventory"
        );
        report
    }

    /// Writes one category to an arbitrary path.
    ///
    /// Fails if the category has no products or the target cannot be written.
    pub fn export_category(
        &self,
        inventory: &Inventory,
        category: Category,
        path: &Path,
    ) -> Result<usize> {
        let products = inventory.find_by_category(category);
        if products.is_empty() {
            return Err(StockError::EmptyCategory(category));
        }
        self.write_category(path, category, &products)?;
        info!(%category, path = %path.display(), rows = products.len(), "exported category");
        Ok(products.len())
    }

    fn write_category(&self, path: &Path, category: Category, products: &[&Product]) -> Result<()> {
        let table = encode_table(
            &category.layout().header_line(),
            products.iter().map(|p| p.to_fields()),
        );
        self.backend.write_text(path, &table)
    }
}

/// Decodes a single data record into a product of `category`.
pub fn decode_product(category: Category, record: &str) -> Result<Product> {
    let fields = decode_row(record);
    if fields.len() < BASE_FIELD_COUNT {
        return Err(StockError::Row(format!(
            "expected at least {} fields, found {}",
            BASE_FIELD_COUNT,
            fields.len()
        )));
    }
    Product::from_fields(category, &fields)
}
