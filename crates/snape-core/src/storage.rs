use crate::config::SAMPLE_SNIPPETS;
use crate::error::Result;
use crate::models::{split_extension, Snippet};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Load all snippets below `dir`.
///
/// Every file whose name does not start with a dot becomes a snippet, at any
/// depth. Symlinks are followed for files but not walked into as directories.
/// The result is sorted by name ignoring case, and names that occur more than
/// once get their extension appended to the display name. Any traversal or
/// read error, including a dangling symlink, aborts the load.
pub fn load_snippets(dir: &Path) -> Result<Vec<Snippet>> {
    let mut snippets = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if file_name.starts_with('.') {
            continue;
        }

        // Follows the link, so a snippet may live outside the directory
        if !fs::metadata(entry.path())?.is_file() {
            continue;
        }

        let bytes = fs::read(entry.path())?;
        let (name, _) = split_extension(&file_name);
        debug!("Loaded snippet: {}", entry.path().display());

        snippets.push(Snippet::new(
            name.to_string(),
            String::from_utf8_lossy(&bytes).into_owned(),
            entry.path().to_path_buf(),
        ));
    }

    // Stable, so equal names keep walk order
    snippets.sort_by_key(|snippet| snippet.name.to_lowercase());
    resolve_duplicate_names(&mut snippets);

    Ok(snippets)
}

/// Append the file extension to every display name whose base name is shared.
pub fn resolve_duplicate_names(snippets: &mut [Snippet]) {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for snippet in snippets.iter() {
        *counts.entry(snippet.name.clone()).or_default() += 1;
    }

    for snippet in snippets.iter_mut() {
        if counts.get(&snippet.name).copied().unwrap_or(0) > 1 {
            snippet.display_name = format!("{}{}", snippet.name, snippet.extension());
        }
    }
}

/// Write the sample set into `dir` if `snippets` is empty, then reload it.
///
/// Existing files are never overwritten. Samples written before a failing
/// write are left in place.
pub fn create_sample_snippets(dir: &Path, snippets: &mut Vec<Snippet>) -> Result<()> {
    if !snippets.is_empty() {
        return Ok(());
    }

    for (file_name, content) in SAMPLE_SNIPPETS {
        let path = dir.join(file_name);
        if path.exists() {
            continue;
        }
        fs::write(&path, content)?;
        info!("Created sample snippet: {}", file_name);
    }

    *snippets = load_snippets(dir)?;
    Ok(())
}

/// Load the snippets shown at startup, seeding the samples into an empty
/// directory. Without a directory there is nothing to show.
pub fn prepare_snippets(dir: Option<&Path>) -> Result<Vec<Snippet>> {
    let Some(dir) = dir else {
        info!("No home directory found, skipping snippet loading");
        return Ok(Vec::new());
    };

    let mut snippets = load_snippets(dir)?;
    create_sample_snippets(dir, &mut snippets)?;
    info!("Loaded {} snippets from {}", snippets.len(), dir.display());
    Ok(snippets)
}
