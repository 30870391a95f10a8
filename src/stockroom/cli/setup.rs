use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "stockroom",
    bin_name = "stockroom",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Inventory tracker for electronics, food and medicine", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the category files (overrides config)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Read configuration from this file
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Interactive menu (default)
    Menu,

    /// List products, optionally one category
    #[command(alias = "ls")]
    List {
        /// Category name, tag or number (1-3)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show a single product
    #[command(alias = "view")]
    Show {
        /// Product id
        id: String,
    },

    /// Search products by name (case-insensitive substring)
    Search { term: String },

    /// Stock report with low-stock alerts
    Report {
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export one category to a CSV file
    Export {
        /// Category name, tag or number (1-3)
        category: String,

        /// Target file
        path: PathBuf,
    },
}
