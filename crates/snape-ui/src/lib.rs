mod common;
mod help;
mod input;
mod picker_view;

// Public API
pub use picker_view::{display_load_error, display_snippet_picker};
