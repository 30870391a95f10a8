//! # Stockroom CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! Everything the binary does goes through [`stockroom::api::StockroomApi`];
//! the CLI layer owns argument parsing, the interactive menu, rendering and
//! exit codes, and nothing else.
//!
//! ## Testing Approach
//!
//! - **Core and commands**: unit tests next to the code, on the in-memory backend.
//! - **Menu**: driven with scripted input and captured output.
//! - **Binary**: end-to-end tests under `tests/` with `assert_cmd`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
