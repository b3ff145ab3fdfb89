use std::path::PathBuf;

/// A text snippet loaded from a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// File name without its final extension.
    pub name: String,
    /// Name shown in the list; carries the extension when `name` is shared.
    pub display_name: String,
    pub content: String,
    pub path: PathBuf,
}

impl Snippet {
    pub fn new(name: String, content: String, path: PathBuf) -> Self {
        Snippet {
            display_name: name.clone(),
            name,
            content,
            path,
        }
    }

    /// Extension of the source file including the leading dot, or "" if none.
    pub fn extension(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| split_extension(name).1)
            .unwrap_or("")
    }

    /// Case-insensitive match against the display name or the content.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.display_name.to_lowercase().contains(needle_lower)
            || self.content.to_lowercase().contains(needle_lower)
    }
}

/// Split a file name at its last dot: `"a.tar.gz"` becomes `("a.tar", ".gz")`.
pub fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(idx) => file_name.split_at(idx),
        None => (file_name, ""),
    }
}
