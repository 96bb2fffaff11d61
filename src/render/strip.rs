//! Strip: a horizontal run of styled terminal cells.
//!
//! Screen panels produce `Vec<Strip>`; the compositor places them into its
//! cell buffer clipped to the panel's region.

use crate::style::declaration::{Declarations, Property};

// ---------------------------------------------------------------------------
// CellStyle
// ---------------------------------------------------------------------------

/// Visual style for a single terminal cell.
///
/// Colors are kept as strings (`#rrggbb` or a named color) and parsed by the
/// driver, so resolved token values can be used directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl CellStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color (builder).
    pub fn fg(mut self, color: impl Into<String>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Set the background color (builder).
    pub fn bg(mut self, color: impl Into<String>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Bold text (builder).
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Dim text (builder).
    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Underlined text (builder).
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Swap foreground and background (builder).
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// The terminal approximation of resolved declarations: `color` and
    /// `background` become fg/bg, a font weight of 600 or more becomes bold.
    pub fn from_declarations(declarations: &Declarations) -> Self {
        let weight = declarations
            .get(Property::FontWeight)
            .and_then(|w| w.parse::<u16>().ok())
            .unwrap_or(400);
        CellStyle {
            fg: declarations.get(Property::Color).map(str::to_owned),
            bg: declarations.get(Property::Background).map(str::to_owned),
            bold: weight >= 600,
            ..CellStyle::default()
        }
    }
}

// ---------------------------------------------------------------------------
// StyledCell
// ---------------------------------------------------------------------------

/// One character with its style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledCell {
    pub ch: char,
    pub style: CellStyle,
}

impl StyledCell {
    pub fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }

    /// A space with default style.
    pub fn blank() -> Self {
        Self::new(' ', CellStyle::default())
    }
}

impl Default for StyledCell {
    fn default() -> Self {
        Self::blank()
    }
}

// ---------------------------------------------------------------------------
// Strip
// ---------------------------------------------------------------------------

/// A horizontal line of styled cells at absolute row `y`, starting at column
/// `x_offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    pub y: i32,
    pub x_offset: i32,
    pub cells: Vec<StyledCell>,
}

impl Strip {
    pub fn new(y: i32, x_offset: i32) -> Self {
        Self {
            y,
            x_offset,
            cells: Vec::new(),
        }
    }

    /// A strip holding `text` in a single style.
    pub fn text(y: i32, x_offset: i32, text: &str, style: CellStyle) -> Self {
        let mut strip = Strip::new(y, x_offset);
        strip.push_str(text, style);
        strip
    }

    pub fn push(&mut self, ch: char, style: CellStyle) {
        self.cells.push(StyledCell::new(ch, style));
    }

    /// Push every character of `text` with the same style.
    pub fn push_str(&mut self, text: &str, style: CellStyle) {
        for ch in text.chars() {
            self.cells.push(StyledCell::new(ch, style.clone()));
        }
    }

    /// Width in cells.
    pub fn width(&self) -> i32 {
        self.cells.len() as i32
    }

    /// Pad with styled spaces or truncate to exactly `width` cells.
    pub fn fill(&mut self, width: i32, style: CellStyle) {
        let w = width.max(0) as usize;
        if self.cells.len() < w {
            self.cells.resize(w, StyledCell::new(' ', style));
        } else {
            self.cells.truncate(w);
        }
    }

    /// The rightmost column (exclusive).
    pub fn right(&self) -> i32 {
        self.x_offset + self.width()
    }

    /// The characters without styling.
    pub fn plain(&self) -> String {
        self.cells.iter().map(|c| c.ch).collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
