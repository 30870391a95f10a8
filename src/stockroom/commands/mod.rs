//! # Command Layer
//!
//! One submodule per user-facing operation. Commands work on an
//! [`Inventory`](crate::inventory::Inventory) (and, for persistence, a
//! [`CsvStore`](crate::store::csv_store::CsvStore)) and return a structured
//! [`CmdResult`]; they never print, prompt or exit. The CLI decides how to
//! render what comes back.
//!
//! Recoverable conditions the user should simply be told about (an empty
//! search, a category with nothing to show) come back as messages. Rejected
//! operations (duplicate id, unknown id, bad field value) come back as `Err`
//! and leave the inventory unchanged.
//!
//! ## Command Modules
//!
//! - [`add`]: Insert a new product
//! - [`remove`]: Remove a product by id
//! - [`find`]: List, filter and search products
//! - [`update`]: Change one field, or adjust stock
//! - [`report`]: Stock report with low-stock alerts
//! - [`persist`]: Load, save and export category files

use crate::model::{Category, Product};
use crate::report::StockReport;

pub mod add;
pub mod find;
pub mod persist;
pub mod remove;
pub mod report;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Products created, changed or removed by the command.
    pub affected_products: Vec<Product>,
    /// Products to display.
    pub listed_products: Vec<Product>,
    pub categories: Vec<Category>,
    pub report: Option<StockReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_report(mut self, report: StockReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
