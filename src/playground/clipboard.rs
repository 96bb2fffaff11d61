//! Clipboard collaborator: where copied code goes.

use std::any::Any;
use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Errors from writing to a clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is unavailable")]
    Unavailable,
    #[error("clipboard write failed: {0}")]
    Io(#[from] io::Error),
}

/// Something that accepts copied text.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Downcast support, for inspecting a boxed clipboard.
    fn as_any(&self) -> &dyn Any;
}

// ---------------------------------------------------------------------------
// MemoryClipboard
// ---------------------------------------------------------------------------

/// In-process clipboard, used headless and in tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails.
    pub fn failing() -> Self {
        Self {
            contents: None,
            fail: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable);
        }
        self.contents = Some(text.to_owned());
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// Osc52Clipboard
// ---------------------------------------------------------------------------

/// Terminal clipboard via the OSC 52 escape sequence.
///
/// The terminal emulator, not this process, owns the system clipboard; the
/// text is sent base64-encoded through the terminal's output stream.
pub struct Osc52Clipboard<W: Write> {
    writer: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

/// The OSC 52 "set clipboard" sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write + 'static> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writer.write_all(osc52_sequence(text).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn memory_clipboard_stores_text() {
        let mut c = MemoryClipboard::new();
        assert_eq!(c.contents(), None);
        c.write_text("<Button />").unwrap();
        assert_eq!(c.contents(), Some("<Button />"));
    }

    #[test]
    fn failing_memory_clipboard() {
        let mut c = MemoryClipboard::failing();
        assert!(matches!(c.write_text("x"), Err(ClipboardError::Unavailable)));
        assert_eq!(c.contents(), None);
    }

    #[test]
    fn osc52_payload_is_base64() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn osc52_writes_sequence() {
        let mut c = Osc52Clipboard::new(Vec::new());
        c.write_text("<Button />").unwrap();
        let out = String::from_utf8(c.into_inner()).unwrap();
        assert_eq!(out, osc52_sequence("<Button />"));
    }

    #[test]
    fn osc52_io_error_is_reported() {
        let mut c = Osc52Clipboard::new(BrokenPipe);
        assert!(matches!(c.write_text("x"), Err(ClipboardError::Io(_))));
    }
}
