use crate::error::{Result, SnapeError};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

pub const SNIPPETS_DIR_NAME: &str = ".snape";

pub const DEFAULT_WIDTH: i64 = 280;
pub const DEFAULT_HEIGHT: i64 = 400;
pub const MIN_DIMENSION: i64 = 200;
pub const MAX_DIMENSION: i64 = 600;

/// Files written into an empty snippets directory.
pub const SAMPLE_SNIPPETS: &[(&str, &str)] = &[
    ("hello.txt", "Hello, World!"),
    ("greeting.txt", "Hi there!\n\nHope you're having a great day!"),
    (
        "hello-world.go",
        "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"Hello, World!\")\n}",
    ),
];

/// Get the snippets directory, creating it if needed.
///
/// Returns `None` when the home directory cannot be determined. A failure to
/// create the directory is only logged; loading from it will report the error.
pub fn snippets_dir() -> Option<PathBuf> {
    let dir = dirs::home_dir()?.join(SNIPPETS_DIR_NAME);
    if !dir.exists() {
        if let Err(e) = fs::create_dir_all(&dir) {
            warn!("Could not create {}: {}", dir.display(), e);
        }
    }
    Some(dir)
}

/// Picker dimensions in pixels, as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u16,
    pub height: u16,
}

impl WindowSize {
    pub fn new(width: i64, height: i64) -> Result<Self> {
        Ok(WindowSize {
            width: check_dimension("width-size", width)?,
            height: check_dimension("height-size", height)?,
        })
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        WindowSize {
            width: DEFAULT_WIDTH as u16,
            height: DEFAULT_HEIGHT as u16,
        }
    }
}

fn check_dimension(flag: &str, value: i64) -> Result<u16> {
    if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
        return Err(SnapeError::Validation(format!(
            "{} must be between {} and {} (got {})",
            flag, MIN_DIMENSION, MAX_DIMENSION, value
        )));
    }
    Ok(value as u16)
}
