//! # Storage Layer
//!
//! Inventory data is persisted as three category-partitioned CSV files:
//!
//! ```text
//! <data_dir>/
//! ├── electronics_inventory.csv
//! ├── food_inventory.csv
//! └── medicine_inventory.csv
//! ```
//!
//! The layer is split in two:
//!
//! - [`backend::StorageBackend`] handles the "how": reading and replacing
//!   whole text files. [`fs_backend::FsBackend`] is the production
//!   implementation, [`mem_backend::MemBackend`] keeps everything in memory
//!   for tests.
//! - [`csv_store::CsvStore`] handles the "what": mapping an
//!   [`Inventory`](crate::inventory::Inventory) to and from those files
//!   through the [record codec](crate::codec).
//!
//! ## Load and Save Policy
//!
//! - A missing category file means zero records for that category.
//! - A malformed row is skipped and reported; the rest of the file still loads.
//! - The first record with a given id wins; later duplicates are rejected.
//! - Saving never creates or overwrites a file for a category with no
//!   products, so an existing file survives an empty category untouched.
//! - A write failure affects only that file.

pub mod backend;
pub mod csv_store;
pub mod fs_backend;
pub mod mem_backend;
