pub mod cli;
pub mod commands;
pub mod utils;

use clap::Parser;
use cli::Snape;
use commands::handle_command;
use std::env;
use std::process;

/// Run the snape CLI application
pub fn run_main() {
    // Hidden flag for the process that keeps the copied text on the clipboard
    if env::args().any(|arg| arg == snape_core::HOLDER_FLAG) {
        if snape_core::run_clipboard_holder().is_err() {
            process::exit(1);
        }
        return;
    }

    let args = Snape::parse();

    if let Err(e) = handle_command(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
