//! # Rendering Module
//!
//! Turns command results into terminal text. Everything here returns a
//! `String`; the caller decides where it goes.
//!
//! Layout calculations (width, truncation, padding) are Unicode-aware via
//! `unicode-width`, so names with wide characters still line up. Colors come
//! from `colored` and are applied after padding.

use colored::Colorize;
use stockroom::api::{CmdMessage, MessageLevel};
use stockroom::model::{Category, Product};
use stockroom::report::StockReport;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;

const ID_WIDTH: usize = 12;
const NAME_WIDTH: usize = 20;
const CATEGORY_WIDTH: usize = 12;
const PRICE_WIDTH: usize = 10;
const STOCK_WIDTH: usize = 8;
const GENERIC_DETAILS: &[(&str, usize)] = &[("Extra Info", 15), ("Details", 12)];

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let c = if c == '\n' || c == '\r' { ' ' } else { c };
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// Left-aligns `s` in a column of `width`, always leaving one space of gutter.
fn cell(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width);
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn rule(c: char, width: usize) -> String {
    std::iter::repeat(c).take(width).collect()
}

fn header_row(details: &[(&str, usize)]) -> String {
    let mut line = String::new();
    line.push_str(&cell("ID", ID_WIDTH));
    line.push_str(&cell("Name", NAME_WIDTH));
    line.push_str(&cell("Category", CATEGORY_WIDTH));
    line.push_str(&cell("Price", PRICE_WIDTH));
    line.push_str(&cell("Stock", STOCK_WIDTH));
    for (title, width) in details {
        line.push_str(&cell(title, *width));
    }
    line.trim_end().to_string()
}

fn product_row(product: &Product) -> String {
    let mut line = String::new();
    line.push_str(&cell(product.id(), ID_WIDTH));
    line.push_str(&cell(&product.name, NAME_WIDTH));
    line.push_str(&cell(product.category().as_str(), CATEGORY_WIDTH));
    line.push_str(&cell(&format!("${:.2}", product.price), PRICE_WIDTH));
    line.push_str(&cell(&product.quantity.to_string(), STOCK_WIDTH));
    let columns = product.layout().detail_columns;
    for (value, (_, width)) in product.detail_values().iter().zip(columns) {
        line.push_str(&cell(value, *width));
    }
    line.trim_end().to_string()
}

/// Renders a product table, with an optional banner title.
///
/// When every product shares a category, that category's own detail column
/// titles are used; mixed lists get generic ones.
pub fn render_products(products: &[Product], title: Option<&str>) -> String {
    let mut out = String::new();
    if products.is_empty() {
        return out;
    }

    let single_category: Option<Category> = products
        .first()
        .map(|p| p.category())
        .filter(|c| products.iter().all(|p| p.category() == *c));
    let details = match single_category {
        Some(category) => category.layout().detail_columns,
        None => GENERIC_DETAILS,
    };

    if let Some(title) = title {
        out.push_str(&format!("{}\n", rule('=', LINE_WIDTH)));
        out.push_str(&format!("{}\n", center(title).bold()));
        out.push_str(&format!("{}\n", rule('=', LINE_WIDTH)));
    }
    out.push_str(&format!("{}\n", header_row(details).bold()));
    out.push_str(&format!("{}\n", rule('-', LINE_WIDTH)));
    for product in products {
        let row = product_row(product);
        if product.quantity < stockroom::report::LOW_STOCK_THRESHOLD {
            out.push_str(&format!("{}\n", row.yellow()));
        } else {
            out.push_str(&format!("{}\n", row));
        }
    }
    if title.is_some() {
        out.push_str(&format!("{}\n", rule('=', LINE_WIDTH)));
    }
    out
}

/// Banner title for a single-category listing, e.g. `FOOD PRODUCTS`.
pub fn category_title(category: Category) -> String {
    format!("{} PRODUCTS", category.as_str().to_uppercase())
}

fn center(title: &str) -> String {
    let padding = LINE_WIDTH.saturating_sub(title.width()) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

pub fn render_report(report: &StockReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", rule('=', 80)));
    out.push_str(&format!("{}\n", "STOCK REPORT".bold()));
    out.push_str(&format!("{}\n", rule('=', 80)));

    for summary in &report.categories {
        out.push_str(&format!("\n{} Category:\n", summary.category));
        out.push_str(&format!("{}\n", rule('-', 30)));
        out.push_str(&format!(
            "Products: {} | Items: {} | Value: ${:.2}\n",
            summary.products, summary.items, summary.value
        ));
    }

    out.push_str(&format!(
        "\nLow Stock Alert (Quantity < {}):\n",
        report.threshold
    ));
    out.push_str(&format!("{}\n", rule('-', 50)));
    if report.low_stock.is_empty() {
        out.push_str("No items with low stock!\n");
    }
    for product in &report.low_stock {
        let line = format!(
            "- {} (ID: {}) - Stock: {} [{}]",
            truncate_to_width(&product.name, NAME_WIDTH * 2),
            product.id(),
            product.quantity,
            product.category()
        );
        out.push_str(&format!("{}\n", line.yellow()));
    }

    out.push_str("\nOverall Summary:\n");
    out.push_str(&format!("{}\n", rule('-', 30)));
    out.push_str(&format!("Total Products: {}\n", report.total_products));
    out.push_str(&format!("Total Items in Stock: {}\n", report.total_items));
    out.push_str(&format!("Total Inventory Value: ${:.2}\n", report.total_value));
    out.push_str(&format!("Low Stock Items: {}\n", report.low_stock.len()));
    out.push_str(&format!("{}\n", rule('=', 80)));
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn render_error(error: &dyn std::fmt::Display) -> String {
    format!("{}\n", format!("Error: {}", error).red())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 10), "abc");
        assert_eq!(truncate_to_width("two\nlines", 20), "two lines");
    }

    #[test]
    fn cells_pad_to_display_width() {
        assert_eq!(cell("ab", 5), "ab   ");
        // Wide characters take two columns each.
        assert_eq!(cell("日本", 6).width(), 6);
    }

    #[test]
    fn single_category_tables_use_variant_columns() {
        plain();
        let products = vec![Product::medicine("M1", "Aspirin", 4.5, 20, "Bayer", "01/06/2031", true)];
        let out = render_products(&products, None);
        let mut lines = out.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("Manufacturer"));
        assert!(header.ends_with("Rx"));
        lines.next();
        let row = lines.next().unwrap();
        assert!(row.starts_with("M1          Aspirin"));
        assert!(row.contains("$4.50"));
        assert!(row.ends_with("Yes"));
    }

    #[test]
    fn mixed_tables_use_generic_columns() {
        plain();
        let products = vec![
            Product::electronic("E1", "Phone", 1.0, 20, "Acme", 12),
            Product::food("F1", "Milk", 1.0, 20, "01/01/2030", false),
        ];
        let out = render_products(&products, Some("INVENTORY REPORT"));
        assert!(out.contains("INVENTORY REPORT"));
        assert!(out.contains("Extra Info"));
        assert!(out.contains("12 months"));
    }

    #[test]
    fn category_titles_are_upper_case() {
        assert_eq!(category_title(Category::Medicine), "MEDICINE PRODUCTS");
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert!(render_products(&[], Some("X")).is_empty());
    }

    #[test]
    fn report_lists_low_stock_and_totals() {
        plain();
        let mut inventory = stockroom::inventory::Inventory::new();
        inventory
            .add(Product::food("F1", "Milk", 2.0, 4, "01/01/2030", false))
            .unwrap();
        let out = render_report(&inventory.report());
        assert!(out.contains("Food Category:"));
        assert!(out.contains("- Milk (ID: F1) - Stock: 4 [Food]"));
        assert!(out.contains("Total Inventory Value: $8.00"));
        assert!(out.contains("Low Stock Items: 1"));
    }

    #[test]
    fn messages_render_one_per_line() {
        plain();
        let out = render_messages(&[CmdMessage::info("a"), CmdMessage::error("b")]);
        assert_eq!(out, "a\nb\n");
    }
}
