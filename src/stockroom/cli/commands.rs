//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Logging, configuration, color and the API over the data directory
//! 3. **Dispatch**: Route to the menu or to a one-shot handler
//! 4. **Error Handling**: Library errors bubble up as `anyhow::Error` to `main`

use super::menu::Menu;
use super::render::{category_title, render_messages, render_products, render_report};
use super::setup::{Cli, Commands};
use anyhow::Context;
use clap::Parser;
use stockroom::api::{CmdMessage, MessageLevel, StockroomApi};
use stockroom::commands::CmdResult;
use stockroom::config::StockroomConfig;
use stockroom::logging;
use stockroom::store::fs_backend::FsBackend;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = StockroomConfig::load(cli.config.as_deref())?.with_data_dir(cli.data_dir.clone());
    colored::control::set_override(config.color);
    tracing::debug!(data_dir = %config.data_dir.display(), "opening data directory");

    let (mut api, loaded) = StockroomApi::open(FsBackend::new(config.data_dir.clone()));

    let command = cli.command.unwrap_or(Commands::Menu);
    if command == Commands::Menu {
        print_result(&loaded)?;
    } else {
        // One-shot commands stay quiet about a clean load.
        report_load_problems(&loaded);
    }
    handle_command(&mut api, command)
}

fn handle_command(api: &mut StockroomApi<FsBackend>, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Menu => {
            let cwd = std::env::current_dir().context("cannot determine working directory")?;
            let stdin = io::stdin();
            Menu::new(api, stdin.lock(), io::stdout())
                .with_export_dir(cwd)
                .run()
                .context("menu I/O failed")
        }
        Commands::List { category } => {
            let (result, title) = match category {
                Some(category) => {
                    let result = api.list_category(&category)?;
                    let title = result.categories.first().map(|c| category_title(*c));
                    (result, title)
                }
                None => (api.list_all(), Some("INVENTORY REPORT".to_string())),
            };
            print!(
                "{}",
                render_products(&result.listed_products, title.as_deref())
            );
            print_result(&result)
        }
        Commands::Show { id } => {
            let result = api.find_by_id(&id)?;
            print!("{}", render_products(&result.listed_products, None));
            Ok(())
        }
        Commands::Search { term } => {
            let result = api.search_by_name(&term);
            print!("{}", render_products(&result.listed_products, None));
            print_result(&result)
        }
        Commands::Report { json } => {
            let result = api.stock_report();
            let Some(report) = &result.report else {
                return print_result(&result);
            };
            if json {
                println!("{}", serde_json::to_string_pretty(report)?);
            } else if report.is_empty() {
                print_result(&result)?;
            } else {
                print!("{}", render_report(report));
            }
            Ok(())
        }
        Commands::Export { category, path } => {
            let path = absolutize(&path)?;
            let result = api.export_category(&category, &path)?;
            print_result(&result)
        }
    }
}

/// Relative export targets are taken from the working directory, not the
/// data directory.
fn absolutize(path: &Path) -> anyhow::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    Ok(cwd.join(path))
}

fn print_result(result: &CmdResult) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", render_messages(&result.messages))?;
    Ok(())
}

fn report_load_problems(loaded: &CmdResult) {
    let problems: Vec<CmdMessage> = loaded
        .messages
        .iter()
        .filter(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
        .cloned()
        .collect();
    eprint!("{}", render_messages(&problems));
}
