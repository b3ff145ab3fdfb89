//! Snape - pick a text snippet from a directory and copy it to the clipboard.
//!
//! Every file under `~/.snape/` is a snippet. This crate loads them, tracks
//! the list selection and filter, and hands the chosen text to the clipboard.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod folder;
pub mod models;
pub mod picker;
pub mod storage;

// Re-export common items for convenience
pub use clipboard::{
    deliver_selection, run_clipboard_holder, ClipboardSink, SystemClipboard, HOLDER_FLAG,
};
pub use config::{snippets_dir, WindowSize};
pub use error::{Result, SnapeError};
pub use folder::open_snippets_folder;
pub use models::Snippet;
pub use picker::{Input, Key, Mode, Outcome, Picker};
pub use storage::{create_sample_snippets, load_snippets, prepare_snippets};
