//! # Product Model
//!
//! A [`Product`] carries the fields every record shares (id, name, price,
//! quantity) and a closed [`ProductDetails`] enum with the variant-specific
//! fields. The category is never stored: it is derived from the variant, so a
//! product cannot end up routed to the wrong category file.
//!
//! [`CategoryLayout`] is the single table tying a variant to its type tag,
//! category name, file name, CSV header and display columns.

use crate::error::{Result, StockError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    Electronics,
    Food,
    Medicine,
}

/// Static description of how one category is stored and displayed.
#[derive(Debug)]
pub struct CategoryLayout {
    pub category: Category,
    pub type_tag: &'static str,
    pub name: &'static str,
    pub file_name: &'static str,
    pub header: &'static [&'static str],
    /// Variant-specific display columns: (title, width).
    pub detail_columns: &'static [(&'static str, usize)],
}

impl CategoryLayout {
    /// Minimum number of fields a row needs to decode into this variant.
    pub fn field_count(&self) -> usize {
        self.header.len()
    }

    pub fn header_line(&self) -> String {
        self.header.join(",")
    }
}

pub static LAYOUTS: [CategoryLayout; 3] = [
    CategoryLayout {
        category: Category::Electronics,
        type_tag: "Electronic",
        name: "Electronics",
        file_name: "electronics_inventory.csv",
        header: &[
            "product_id",
            "name",
            "price",
            "quantity",
            "brand",
            "warranty_months",
        ],
        detail_columns: &[("Brand", 15), ("Warranty", 12)],
    },
    CategoryLayout {
        category: Category::Food,
        type_tag: "Food",
        name: "Food",
        file_name: "food_inventory.csv",
        header: &[
            "product_id",
            "name",
            "price",
            "quantity",
            "expiry_date",
            "is_organic",
        ],
        detail_columns: &[("Expiry", 15), ("Organic", 8)],
    },
    CategoryLayout {
        category: Category::Medicine,
        type_tag: "Medicine",
        name: "Medicine",
        file_name: "medicine_inventory.csv",
        header: &[
            "product_id",
            "name",
            "price",
            "quantity",
            "manufacturer",
            "expiry_date",
            "prescription_required",
        ],
        detail_columns: &[("Manufacturer", 15), ("Expiry", 12), ("Rx", 8)],
    },
];

impl Category {
    pub const ALL: [Category; 3] = [Category::Electronics, Category::Food, Category::Medicine];

    pub fn layout(self) -> &'static CategoryLayout {
        match self {
            Category::Electronics => &LAYOUTS[0],
            Category::Food => &LAYOUTS[1],
            Category::Medicine => &LAYOUTS[2],
        }
    }

    pub fn as_str(self) -> &'static str {
        self.layout().name
    }

    pub fn file_name(self) -> &'static str {
        self.layout().file_name
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = StockError;

    /// Accepts the category name, the variant tag, or the menu number (1-3),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        match needle {
            "1" => return Ok(Category::Electronics),
            "2" => return Ok(Category::Food),
            "3" => return Ok(Category::Medicine),
            _ => {}
        }
        LAYOUTS
            .iter()
            .find(|l| l.name.eq_ignore_ascii_case(needle) || l.type_tag.eq_ignore_ascii_case(needle))
            .map(|l| l.category)
            .ok_or_else(|| StockError::UnknownCategory(needle.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ProductDetails {
    Electronic {
        brand: String,
        warranty_months: u32,
    },
    Food {
        expiry_date: String,
        is_organic: bool,
    },
    Medicine {
        manufacturer: String,
        expiry_date: String,
        prescription_required: bool,
    },
}

impl ProductDetails {
    pub fn category(&self) -> Category {
        match self {
            ProductDetails::Electronic { .. } => Category::Electronics,
            ProductDetails::Food { .. } => Category::Food,
            ProductDetails::Medicine { .. } => Category::Medicine,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub details: ProductDetails,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        details: ProductDetails,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
            details,
        }
    }

    pub fn electronic(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self::new(
            id,
            name,
            price,
            quantity,
            ProductDetails::Electronic {
                brand: brand.into(),
                warranty_months,
            },
        )
    }

    pub fn food(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        expiry_date: impl Into<String>,
        is_organic: bool,
    ) -> Self {
        Self::new(
            id,
            name,
            price,
            quantity,
            ProductDetails::Food {
                expiry_date: expiry_date.into(),
                is_organic,
            },
        )
    }

    pub fn medicine(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        manufacturer: impl Into<String>,
        expiry_date: impl Into<String>,
        prescription_required: bool,
    ) -> Self {
        Self::new(
            id,
            name,
            price,
            quantity,
            ProductDetails::Medicine {
                manufacturer: manufacturer.into(),
                expiry_date: expiry_date.into(),
                prescription_required,
            },
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Drops whitespace around the id, as every id lookup does.
    pub(crate) fn with_trimmed_id(mut self) -> Self {
        let trimmed = self.id.trim();
        if trimmed.len() != self.id.len() {
            self.id = trimmed.to_string();
        }
        self
    }

    pub fn category(&self) -> Category {
        self.details.category()
    }

    pub fn layout(&self) -> &'static CategoryLayout {
        self.category().layout()
    }

    pub fn type_tag(&self) -> &'static str {
        self.layout().type_tag
    }

    /// Adds `delta` to the quantity. On overflow the quantity is left as is.
    pub fn update_stock(&mut self, delta: i64) -> Result<()> {
        self.quantity = self.quantity.checked_add(delta).ok_or_else(|| {
            StockError::invalid(
                "quantity",
                format!("adjusting {} by {} is out of range", self.quantity, delta),
            )
        })?;
        Ok(())
    }

    pub fn total_value(&self) -> f64 {
        self.price * self.quantity as f64
    }

    /// Checks the constraints `Inventory::add` enforces on new records.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(StockError::invalid("product_id", "must not be empty"));
        }
        check_price(self.price)
    }

    /// The unescaped field sequence in header order.
    pub fn to_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.id.clone(),
            self.name.clone(),
            self.price.to_string(),
            self.quantity.to_string(),
        ];
        match &self.details {
            ProductDetails::Electronic {
                brand,
                warranty_months,
            } => {
                fields.push(brand.clone());
                fields.push(warranty_months.to_string());
            }
            ProductDetails::Food {
                expiry_date,
                is_organic,
            } => {
                fields.push(expiry_date.clone());
                fields.push(flag(*is_organic).to_string());
            }
            ProductDetails::Medicine {
                manufacturer,
                expiry_date,
                prescription_required,
            } => {
                fields.push(manufacturer.clone());
                fields.push(expiry_date.clone());
                fields.push(flag(*prescription_required).to_string());
            }
        }
        fields
    }

    /// Builds a product of `category` from decoded row fields.
    ///
    /// Extra trailing fields are ignored. Booleans are true only for `1`.
    pub fn from_fields(category: Category, fields: &[String]) -> Result<Self> {
        let needed = category.layout().field_count();
        if fields.len() < needed {
            return Err(StockError::Row(format!(
                "expected {} fields for {}, found {}",
                needed,
                category,
                fields.len()
            )));
        }

        let price = parse_price(&fields[2])?;
        let quantity = parse_int::<i64>("quantity", &fields[3])?;

        let details = match category {
            Category::Electronics => ProductDetails::Electronic {
                brand: fields[4].clone(),
                warranty_months: parse_int::<u32>("warranty_months", &fields[5])?,
            },
            Category::Food => ProductDetails::Food {
                expiry_date: fields[4].clone(),
                is_organic: fields[5] == "1",
            },
            Category::Medicine => ProductDetails::Medicine {
                manufacturer: fields[4].clone(),
                expiry_date: fields[5].clone(),
                prescription_required: fields[6] == "1",
            },
        };

        Ok(Self::new(
            fields[0].clone(),
            fields[1].clone(),
            price,
            quantity,
            details,
        ))
    }

    /// Variant-specific display values, aligned with `CategoryLayout::detail_columns`.
    pub fn detail_values(&self) -> Vec<String> {
        match &self.details {
            ProductDetails::Electronic {
                brand,
                warranty_months,
            } => vec![brand.clone(), format!("{} months", warranty_months)],
            ProductDetails::Food {
                expiry_date,
                is_organic,
            } => vec![expiry_date.clone(), yes_no(*is_organic).to_string()],
            ProductDetails::Medicine {
                manufacturer,
                expiry_date,
                prescription_required,
            } => vec![
                manufacturer.clone(),
                expiry_date.clone(),
                yes_no(*prescription_required).to_string(),
            ],
        }
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

pub(crate) fn check_price(price: f64) -> Result<()> {
    if !price.is_finite() {
        return Err(StockError::invalid("price", "must be a finite number"));
    }
    if price < 0.0 {
        return Err(StockError::invalid("price", "must not be negative"));
    }
    Ok(())
}

pub(crate) fn parse_price(raw: &str) -> Result<f64> {
    let price = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| StockError::invalid("price", format!("'{}' is not a number", raw)))?;
    check_price(price)?;
    Ok(price)
}

pub(crate) fn parse_int<T: FromStr>(field: &'static str, raw: &str) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| StockError::invalid(field, format!("'{}' is not a valid integer", raw)))
}
