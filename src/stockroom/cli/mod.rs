//! # CLI Behavior
//!
//! This is **one possible UI client** for stockroom, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit
//! codes and output formatting.
//!
//! ### Naked Execution (`stockroom`)
//!
//! Running `stockroom` with no arguments opens the interactive menu, the same
//! as `stockroom menu`. Leaving the menu (choice 12, or end of input) saves
//! every non-empty category.
//!
//! ### One-shot Subcommands
//!
//! `list`, `show`, `search`, `report` and `export` load the data directory,
//! print their result and exit. They never save the category files.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context wiring and subcommand handlers
//! - `menu`: The interactive loop
//! - `render`: Output formatting (tables, colors, messages)

mod commands;
mod menu;
mod render;
pub mod setup;

pub use commands::run;
