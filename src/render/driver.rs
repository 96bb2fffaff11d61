//! Crossterm terminal output backend.
//!
//! The `Driver` owns the output stream, switches the terminal into raw mode
//! on the alternate screen, and writes compositor cell updates. Color
//! strings from resolved tokens (`#rrggbb`, `#rgb`, named) are parsed here.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::compositor::CellUpdate;
use super::strip::CellStyle;

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Terminal output backend.
///
/// Generic over the writer so frames can be captured in memory; the app uses
/// a buffered stdout. Entering the alternate screen is explicit.
pub struct Driver<W: Write = BufWriter<Stdout>> {
    writer: W,
}

impl Driver {
    /// A driver writing to buffered stdout.
    pub fn stdout() -> io::Result<Self> {
        Ok(Self::new(BufWriter::new(io::stdout())))
    }

    /// Terminal size (columns, rows).
    pub fn terminal_size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl<W: Write> Driver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Enter the alternate screen, enable raw mode and hide the cursor.
    pub fn enter(&mut self) -> io::Result<()> {
        execute!(self.writer, EnterAlternateScreen, cursor::Hide)?;
        terminal::enable_raw_mode()
    }

    /// Undo [`enter`](Self::enter).
    pub fn leave(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.writer, cursor::Show, LeaveAlternateScreen)
    }

    /// Clear the whole screen (queued).
    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.writer, Clear(ClearType::All))
    }

    /// Queue a batch of cell updates. Call [`flush`](Self::flush) afterwards.
    pub fn apply_updates(&mut self, updates: &[CellUpdate]) -> io::Result<()> {
        for update in updates {
            queue!(self.writer, cursor::MoveTo(update.x, update.y))?;
            self.apply_cell_style(&update.cell.style)?;
            queue!(
                self.writer,
                Print(update.cell.ch),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn apply_cell_style(&mut self, style: &CellStyle) -> io::Result<()> {
        if let Some(color) = style.fg.as_deref().and_then(parse_color) {
            queue!(self.writer, SetForegroundColor(color))?;
        }
        if let Some(color) = style.bg.as_deref().and_then(parse_color) {
            queue!(self.writer, SetBackgroundColor(color))?;
        }
        if style.bold {
            queue!(self.writer, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.writer, SetAttribute(Attribute::Dim))?;
        }
        if style.underline {
            queue!(self.writer, SetAttribute(Attribute::Underlined))?;
        }
        if style.reverse {
            queue!(self.writer, SetAttribute(Attribute::Reverse))?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Color parsing
// ---------------------------------------------------------------------------

/// Parse a color string into a crossterm `Color`.
///
/// Accepts `#rrggbb`, `#rgb` and the basic named colors (case-insensitive).
/// Anything else, including CSS keywords like `transparent`, is `None`.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "grey" | "gray" => Some(Color::Grey),
        "dark_grey" | "dark_gray" => Some(Color::DarkGrey),
        _ => None,
    }
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        }),
        3 => {
            // #abc is #aabbcc
            let (r, g, b) = (channel(0..1)?, channel(1..2)?, channel(2..3)?);
            Some(Color::Rgb {
                r: r * 17,
                g: g * 17,
                b: b * 17,
            })
        }
        _ => None,
    }
}

// ===========================================================================
// Tests
// ===========================================================================
