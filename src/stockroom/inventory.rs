//! # Inventory Store
//!
//! [`Inventory`] exclusively owns every [`Product`]. Records live in a `Vec`
//! in insertion order; an auxiliary id → position map gives constant-time
//! lookups and enforces id uniqueness across all categories.
//!
//! Callers only ever receive borrows, valid until the next mutation.

use crate::error::{Result, StockError};
use crate::model::{check_price, parse_int, parse_price, Category, Product, ProductDetails};
use crate::report::StockReport;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default, Clone)]
pub struct Inventory {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Appends a product unless its id is already taken.
    pub fn add(&mut self, product: Product) -> Result<&Product> {
        product.validate()?;
        if self.contains(product.id()) {
            return Err(StockError::DuplicateId(product.id().to_string()));
        }
        let position = self.products.len();
        debug!(id = product.id(), category = %product.category(), "adding product");
        self.index.insert(product.id().to_string(), position);
        self.products.push(product);
        Ok(&self.products[position])
    }

    /// Removes and returns the product with `id`.
    pub fn remove(&mut self, id: &str) -> Result<Product> {
        let position = self
            .index
            .remove(id)
            .ok_or_else(|| StockError::NotFound(id.to_string()))?;
        let removed = self.products.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        debug!(id, "removed product");
        Ok(removed)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.index.get(id).map(|&i| &self.products[i])
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Product> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.products[i]),
            None => Err(StockError::NotFound(id.to_string())),
        }
    }

    pub fn find_by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category() == category)
            .collect()
    }

    /// Case-insensitive substring match on the product name.
    pub fn find_by_name(&self, term: &str) -> Vec<&Product> {
        let term = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&term))
            .collect()
    }

    /// Distinct categories present, in first-seen order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for product in &self.products {
            let category = product.category();
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    pub fn update(&mut self, id: &str, update: ProductUpdate) -> Result<&Product> {
        let product = self.find_mut(id)?;
        update.apply(product)?;
        debug!(id, field = update.field_name(), "updated product");
        Ok(product)
    }

    pub fn update_stock(&mut self, id: &str, delta: i64) -> Result<&Product> {
        let product = self.find_mut(id)?;
        product.update_stock(delta)?;
        debug!(id, delta, quantity = product.quantity, "adjusted stock");
        Ok(product)
    }

    pub fn report(&self) -> StockReport {
        StockReport::build(self)
    }
}

/// A single-field change to an existing product.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductUpdate {
    Name(String),
    Price(f64),
    Quantity(i64),
    Brand(String),
    WarrantyMonths(u32),
    ExpiryDate(String),
    Organic(bool),
    Manufacturer(String),
    PrescriptionRequired(bool),
}

impl ProductUpdate {
    /// Builds an update from a field name and its textual value.
    ///
    /// Field names follow the CSV header columns; booleans accept
    /// `1/0`, `y/n`, `yes/no` and `true/false`.
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        let update = match field.trim().to_lowercase().replace('-', "_").as_str() {
            "name" => ProductUpdate::Name(value.to_string()),
            "price" => ProductUpdate::Price(parse_price(value)?),
            "quantity" | "stock" => ProductUpdate::Quantity(parse_int("quantity", value)?),
            "brand" => ProductUpdate::Brand(value.to_string()),
            "warranty_months" | "warranty" => {
                ProductUpdate::WarrantyMonths(parse_int("warranty_months", value)?)
            }
            "expiry_date" | "expiry" => ProductUpdate::ExpiryDate(value.to_string()),
            "is_organic" | "organic" => ProductUpdate::Organic(parse_flag("is_organic", value)?),
            "manufacturer" => ProductUpdate::Manufacturer(value.to_string()),
            "prescription_required" | "prescription" => {
                ProductUpdate::PrescriptionRequired(parse_flag("prescription_required", value)?)
            }
            "category" => {
                return Err(StockError::invalid(
                    "category",
                    "is determined by the product type and cannot be changed",
                ))
            }
            other => return Err(StockError::UnknownField(other.to_string())),
        };
        Ok(update)
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            ProductUpdate::Name(_) => "name",
            ProductUpdate::Price(_) => "price",
            ProductUpdate::Quantity(_) => "quantity",
            ProductUpdate::Brand(_) => "brand",
            ProductUpdate::WarrantyMonths(_) => "warranty_months",
            ProductUpdate::ExpiryDate(_) => "expiry_date",
            ProductUpdate::Organic(_) => "is_organic",
            ProductUpdate::Manufacturer(_) => "manufacturer",
            ProductUpdate::PrescriptionRequired(_) => "prescription_required",
        }
    }

    fn apply(&self, product: &mut Product) -> Result<()> {
        let category = product.category();
        let mismatch = || StockError::FieldMismatch {
            field: self.field_name(),
            category,
        };

        match (self, &mut product.details) {
            (ProductUpdate::Name(name), _) => product.name = name.clone(),
            (ProductUpdate::Price(price), _) => {
                check_price(*price)?;
                product.price = *price;
            }
            (ProductUpdate::Quantity(quantity), _) => product.quantity = *quantity,
            (ProductUpdate::Brand(value), ProductDetails::Electronic { brand, .. }) => {
                *brand = value.clone()
            }
            (
                ProductUpdate::WarrantyMonths(value),
                ProductDetails::Electronic {
                    warranty_months, ..
                },
            ) => *warranty_months = *value,
            (ProductUpdate::ExpiryDate(value), ProductDetails::Food { expiry_date, .. })
            | (ProductUpdate::ExpiryDate(value), ProductDetails::Medicine { expiry_date, .. }) => {
                *expiry_date = value.clone()
            }
            (ProductUpdate::Organic(value), ProductDetails::Food { is_organic, .. }) => {
                *is_organic = *value
            }
            (ProductUpdate::Manufacturer(value), ProductDetails::Medicine { manufacturer, .. }) => {
                *manufacturer = value.clone()
            }
            (
                ProductUpdate::PrescriptionRequired(value),
                ProductDetails::Medicine {
                    prescription_required,
                    ..
                },
            ) => *prescription_required = *value,
            _ => return Err(mismatch()),
        }
        Ok(())
    }
}

pub(crate) fn parse_flag(field: &'static str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "y" | "yes" | "true" => Ok(true),
        "0" | "n" | "no" | "false" => Ok(false),
        _ => Err(StockError::invalid(field, format!("'{}' is not yes/no", raw))),
    }
}
