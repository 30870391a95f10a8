//! The interactive twelve-option menu.
//!
//! The loop reads from any `BufRead` and writes to any `Write`, so tests can
//! script a whole session. End of input at any prompt behaves like choosing
//! "Save and Exit".

use super::render::{
    category_title, render_error, render_messages, render_products, render_report,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use stockroom::api::StockroomApi;
use stockroom::commands::CmdResult;
use stockroom::model::{Category, Product};
use stockroom::store::backend::StorageBackend;

const MENU: &str = "\
===== Inventory Management System =====
1. Add Electronic Product
2. Add Food Product
3. Add Medicine Product
4. Display All Products
5. Display Products by Category
6. Search Product by ID
7. Search Products by Name
8. Update Product
9. Remove Product
10. Generate Stock Report
11. Export Category to File
12. Save and Exit
";

enum Flow {
    Continue,
    Quit,
}

/// Reads a line or leaves the current action, quitting the menu, on end of input.
macro_rules! ask {
    ($menu:expr, $label:expr) => {
        match $menu.prompt($label)? {
            Some(line) => line,
            None => return Ok(Flow::Quit),
        }
    };
}

/// Like `ask!`, re-prompting until the answer parses as the requested type.
macro_rules! ask_parsed {
    ($menu:expr, $label:expr, $ty:ty) => {
        match $menu.prompt_parsed::<$ty>($label)? {
            Some(value) => value,
            None => return Ok(Flow::Quit),
        }
    };
}

pub struct Menu<'a, B: StorageBackend, R: BufRead, W: Write> {
    api: &'a mut StockroomApi<B>,
    input: R,
    output: W,
    export_dir: Option<PathBuf>,
}

impl<'a, B: StorageBackend, R: BufRead, W: Write> Menu<'a, B, R, W> {
    pub fn new(api: &'a mut StockroomApi<B>, input: R, output: W) -> Self {
        Self {
            api,
            input,
            output,
            export_dir: None,
        }
    }

    /// Resolves relative export paths against `dir` instead of the data directory.
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = Some(dir.into());
        self
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "\n{}", MENU)?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };
            let flow = match choice.as_str() {
                "1" => self.add(Category::Electronics)?,
                "2" => self.add(Category::Food)?,
                "3" => self.add(Category::Medicine)?,
                "4" => self.display_all()?,
                "5" => self.display_category()?,
                "6" => self.find_by_id()?,
                "7" => self.search_by_name()?,
                "8" => self.update()?,
                "9" => self.remove()?,
                "10" => self.report()?,
                "11" => self.export()?,
                "12" => Flow::Quit,
                _ => {
                    writeln!(self.output, "Invalid choice! Please try again.")?;
                    Flow::Continue
                }
            };
            if let Flow::Quit = flow {
                break;
            }
        }
        self.save_and_exit()
    }

    fn save_and_exit(&mut self) -> io::Result<()> {
        let result = self.api.save();
        self.show(&result)?;
        writeln!(self.output, "Goodbye!")?;
        self.output.flush()
    }

    /// Prints `label`, then reads one trimmed line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_parsed<T: FromStr>(&mut self, label: &str) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Invalid input! Please enter a number.")?,
            }
        }
    }

    fn prompt_yes_no(&mut self, label: &str) -> io::Result<Option<bool>> {
        let answer = self.prompt(label)?;
        Ok(answer.map(|a| matches!(a.to_lowercase().as_str(), "y" | "yes")))
    }

    fn prompt_category(&mut self) -> io::Result<Option<Option<Category>>> {
        writeln!(self.output, "Select category:")?;
        for (number, category) in Category::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", number + 1, category)?;
        }
        let Some(choice) = self.prompt("Choice: ")? else {
            return Ok(None);
        };
        let category = match choice.as_str() {
            "1" | "2" | "3" => choice.parse::<Category>().ok(),
            _ => None,
        };
        if category.is_none() {
            writeln!(self.output, "Invalid choice!")?;
        }
        Ok(Some(category))
    }

    fn show(&mut self, result: &CmdResult) -> io::Result<()> {
        write!(self.output, "{}", render_messages(&result.messages))
    }

    fn show_error(&mut self, error: &dyn std::fmt::Display) -> io::Result<()> {
        write!(self.output, "{}", render_error(error))
    }

    fn show_outcome(&mut self, outcome: stockroom::error::Result<CmdResult>) -> io::Result<()> {
        match outcome {
            Ok(result) => self.show(&result),
            Err(e) => self.show_error(&e),
        }
    }

    fn add(&mut self, category: Category) -> io::Result<Flow> {
        let id = ask!(self, "Enter Product ID: ");
        let name = ask!(self, "Enter Name: ");
        let price = ask_parsed!(self, "Enter Price: ", f64);
        let quantity = ask_parsed!(self, "Enter Quantity: ", i64);

        let product = match category {
            Category::Electronics => {
                let brand = ask!(self, "Enter Brand: ");
                let warranty = ask_parsed!(self, "Enter Warranty (months): ", u32);
                Product::electronic(id, name, price, quantity, brand, warranty)
            }
            Category::Food => {
                let expiry = ask!(self, "Enter Expiry Date (DD/MM/YYYY): ");
                let Some(organic) = self.prompt_yes_no("Is Organic? (y/n): ")? else {
                    return Ok(Flow::Quit);
                };
                Product::food(id, name, price, quantity, expiry, organic)
            }
            Category::Medicine => {
                let manufacturer = ask!(self, "Enter Manufacturer: ");
                let expiry = ask!(self, "Enter Expiry Date (DD/MM/YYYY): ");
                let Some(rx) = self.prompt_yes_no("Prescription Required? (y/n): ")? else {
                    return Ok(Flow::Quit);
                };
                Product::medicine(id, name, price, quantity, manufacturer, expiry, rx)
            }
        };

        let outcome = self.api.add_product(product);
        self.show_outcome(outcome)?;
        Ok(Flow::Continue)
    }

    fn display_all(&mut self) -> io::Result<Flow> {
        let result = self.api.list_all();
        write!(
            self.output,
            "{}",
            render_products(&result.listed_products, Some("INVENTORY REPORT"))
        )?;
        self.show(&result)?;
        Ok(Flow::Continue)
    }

    fn display_category(&mut self) -> io::Result<Flow> {
        let Some(choice) = self.prompt_category()? else {
            return Ok(Flow::Quit);
        };
        let Some(category) = choice else {
            return Ok(Flow::Continue);
        };
        match self.api.list_category(category.as_str()) {
            Ok(result) => {
                let title = category_title(category);
                write!(
                    self.output,
                    "{}",
                    render_products(&result.listed_products, Some(&title))
                )?;
                self.show(&result)?;
            }
            Err(e) => self.show_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn find_by_id(&mut self) -> io::Result<Flow> {
        let id = ask!(self, "Enter Product ID: ");
        match self.api.find_by_id(&id) {
            Ok(result) => write!(
                self.output,
                "{}",
                render_products(&result.listed_products, None)
            )?,
            Err(e) => self.show_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn search_by_name(&mut self) -> io::Result<Flow> {
        let term = ask!(self, "Enter search term: ");
        let result = self.api.search_by_name(&term);
        write!(
            self.output,
            "{}",
            render_products(&result.listed_products, None)
        )?;
        self.show(&result)?;
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> io::Result<Flow> {
        let id = ask!(self, "Enter Product ID to update: ");
        let product = match self.api.find_by_id(&id) {
            Ok(result) => match result.listed_products.into_iter().next() {
                Some(product) => product,
                None => return Ok(Flow::Continue),
            },
            Err(e) => {
                self.show_error(&e)?;
                return Ok(Flow::Continue);
            }
        };
        write!(
            self.output,
            "{}",
            render_products(std::slice::from_ref(&product), None)
        )?;

        // Common fields first, then the variant's own columns from its header.
        let fields: Vec<&'static str> = ["name", "price", "quantity"]
            .into_iter()
            .chain(product.layout().header.iter().skip(4).copied())
            .collect();
        writeln!(self.output, "Which field do you want to update?")?;
        for (number, field) in fields.iter().enumerate() {
            writeln!(self.output, "{}. {}", number + 1, field)?;
        }
        let adjust = fields.len() + 1;
        writeln!(self.output, "{}. adjust stock (+/-)", adjust)?;

        let choice = ask_parsed!(self, "Choice: ", usize);
        if choice == adjust {
            let delta = ask_parsed!(self, "Enter stock change (+/-): ", i64);
            let outcome = self.api.adjust_stock(product.id(), delta);
            self.show_outcome(outcome)?;
            return Ok(Flow::Continue);
        }
        let Some(field) = choice.checked_sub(1).and_then(|i| fields.get(i)).copied() else {
            writeln!(self.output, "Invalid choice!")?;
            return Ok(Flow::Continue);
        };

        let value = ask!(self, "Enter new value: ");
        let outcome = self.api.update_product(product.id(), field, &value);
        self.show_outcome(outcome)?;
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> io::Result<Flow> {
        let id = ask!(self, "Enter Product ID to remove: ");
        let outcome = self.api.remove_product(&id);
        self.show_outcome(outcome)?;
        Ok(Flow::Continue)
    }

    fn report(&mut self) -> io::Result<Flow> {
        let result = self.api.stock_report();
        match &result.report {
            Some(report) if !report.is_empty() => {
                write!(self.output, "{}", render_report(report))?
            }
            _ => self.show(&result)?,
        }
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> io::Result<Flow> {
        let Some(choice) = self.prompt_category()? else {
            return Ok(Flow::Quit);
        };
        let Some(category) = choice else {
            return Ok(Flow::Continue);
        };
        let target = ask!(self, "Enter file path: ");
        let path = match &self.export_dir {
            Some(dir) => dir.join(&target),
            None => PathBuf::from(&target),
        };
        let outcome = self.api.export_category(category.as_str(), &path);
        self.show_outcome(outcome)?;
        Ok(Flow::Continue)
    }
}
