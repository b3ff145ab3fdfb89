use crate::error::Result;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use tracing::{debug, info};

#[cfg(target_os = "macos")]
const OPENER: &str = "open";

#[cfg(target_os = "windows")]
const OPENER: &str = "explorer";

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: &str = "xdg-open";

/// Open the snippets directory in the platform file manager.
///
/// Only a failure to launch the opener is reported. It is waited on in the
/// background so the picker keeps running.
pub fn open_snippets_folder(dir: &Path) -> Result<()> {
    info!("Opening {} with {}", dir.display(), OPENER);
    launch(OPENER, dir)?;
    Ok(())
}

/// Spawn `opener` on `dir` and reap it from a background thread.
fn launch(opener: &str, dir: &Path) -> Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = Command::new(opener)
        .arg(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    let opener = opener.to_string();
    Ok(thread::spawn(move || {
        let status = child.wait()?;
        debug!("{} exited with {}", opener, status);
        Ok(status)
    }))
}
