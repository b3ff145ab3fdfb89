use crate::error::{Result, SnapeError};
use crate::models::Snippet;
use arboard::Clipboard;
use std::io::{self, Read, Write};
use tracing::{info, warn};

/// Hidden flag that turns the binary into a clipboard holder.
pub const HOLDER_FLAG: &str = "--clipboard-holder";

/// Line the holder prints once it has opened the clipboard.
const HOLDER_READY: &str = "ready";

/// Destination for the chosen snippet's text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard.
///
/// On X11 a selection lives only as long as the process that owns it, so the
/// text is handed to a detached copy of this binary started with
/// [`HOLDER_FLAG`]. It keeps serving the text after the picker exits, until
/// another program takes the clipboard over.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut command = std::process::Command::new(std::env::current_exe()?);
        command.arg(HOLDER_FLAG);
        holder::spawn(&mut command, text)
    }
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().map_err(clipboard_error)?;
        clipboard.set_text(text).map_err(clipboard_error)
    }
}

/// Entry point of the holder process: read the text from stdin, take the
/// clipboard, report readiness and keep serving the text.
///
/// On X11 this blocks until another program owns the clipboard.
pub fn run_clipboard_holder() -> Result<()> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;

    let mut clipboard = Clipboard::new().map_err(clipboard_error)?;

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", HOLDER_READY)?;
    stdout.flush()?;

    #[cfg(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    ))]
    {
        use arboard::SetExtLinux;
        clipboard.set().wait().text(text).map_err(clipboard_error)
    }

    #[cfg(not(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    )))]
    {
        clipboard.set_text(text).map_err(clipboard_error)
    }
}

fn clipboard_error(e: arboard::Error) -> SnapeError {
    SnapeError::Clipboard(e.to_string())
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
mod holder {
    use super::HOLDER_READY;
    use crate::error::{Result, SnapeError};
    use std::io::{BufRead, BufReader, Write};
    use std::os::unix::process::CommandExt;
    use std::process::{Command, Stdio};
    use tracing::debug;

    /// Start `command` as a holder, feed it `text` and wait for its ready line.
    ///
    /// The holder gets its own process group so closing the terminal does not
    /// take the clipboard with it. A holder that fails before reporting ready
    /// is reaped and its exit status returned as the error.
    pub(super) fn spawn(command: &mut Command, text: &str) -> Result<()> {
        let mut child = command
            .process_group(0)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        // Dropping stdin closes it, which ends the holder's read
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let mut line = String::new();
        if written.is_ok() {
            if let Some(stdout) = child.stdout.take() {
                BufReader::new(stdout).read_line(&mut line)?;
            }
        }

        if line.trim_end() == HOLDER_READY {
            debug!("Clipboard holder {} started", child.id());
            return Ok(());
        }

        let status = child.wait()?;
        written?;
        Err(SnapeError::Clipboard(format!(
            "clipboard holder exited with {}",
            status
        )))
    }

}

/// Copy the committed snippet. Failures are logged and otherwise ignored;
/// the session ends either way.
pub fn deliver_selection(sink: &mut dyn ClipboardSink, snippet: &Snippet) {
    info!("Selected snippet: {}", snippet.display_name);
    info!("Copying snippet to clipboard...");

    if let Err(e) = sink.set_text(&snippet.content) {
        warn!("Failed to copy {}: {}", snippet.display_name, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct RecordingSink {
        calls: Vec<String>,
        fail: bool,
    }

    impl ClipboardSink for RecordingSink {
        fn set_text(&mut self, text: &str) -> Result<()> {
            self.calls.push(text.to_string());
            if self.fail {
                return Err(SnapeError::Clipboard("no display".to_string()));
            }
            Ok(())
        }
    }

    fn hello() -> Snippet {
        Snippet::new(
            "hello".to_string(),
            "Hello, World!".to_string(),
            PathBuf::from("hello.txt"),
        )
    }

    #[test]
    fn copies_content_once() {
        let mut sink = RecordingSink { calls: Vec::new(), fail: false };
        deliver_selection(&mut sink, &hello());
        assert_eq!(sink.calls, ["Hello, World!"]);
    }

    #[test]
    fn swallows_sink_failure() {
        let mut sink = RecordingSink { calls: Vec::new(), fail: true };
        deliver_selection(&mut sink, &hello());
        assert_eq!(sink.calls.len(), 1);
    }
}
