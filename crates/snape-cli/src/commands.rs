use crate::cli::Snape;
use crate::utils::init_logging;
use snape_core::{
    deliver_selection, prepare_snippets, snippets_dir, Result, SystemClipboard, WindowSize,
};
use snape_ui::{display_load_error, display_snippet_picker};
use tracing::info;

pub fn handle_command(args: Snape) -> Result<()> {
    // Bad dimensions stop the program before anything else happens
    let size = match WindowSize::new(args.width_size, args.height_size) {
        Ok(size) => size,
        Err(e) => {
            println!("Error: {}", e);
            return Ok(());
        }
    };

    init_logging(args.verbose);
    info!(
        "Starting Snape snippet manager (size: {}x{})...",
        size.width, size.height
    );

    let dir = snippets_dir();
    match &dir {
        Some(dir) => info!("Snippets directory: {}", dir.display()),
        None => info!("Snippets directory: unavailable"),
    }

    let snippets = match prepare_snippets(dir.as_deref()) {
        Ok(snippets) => snippets,
        Err(e) => return display_load_error(&format!("Failed to load snippets: {}", e), size),
    };

    if let Some(snippet) = display_snippet_picker(snippets, dir.as_deref(), size)? {
        deliver_selection(&mut SystemClipboard::new(), &snippet);
    }

    Ok(())
}
