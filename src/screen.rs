//! Frame composition: panels drawn into the compositor.
//!
//! [`Screen`] owns the frame buffer and the last computed [`PanelLayout`].
//! Each frame the app hands it a borrowed [`Frame`] snapshot; every panel is
//! rendered to strips and placed clipped to its region. Chrome colors come
//! from the same token tables the components use.

use crate::dom::{Dom, NodeId};
use crate::geometry::Region;
use crate::layout::{LayoutError, PanelLayout};
use crate::playground::{OptionGroup, OptionKind, Surface};
use crate::render::driver::parse_color;
use crate::render::{CellStyle, CellUpdate, Compositor, Strip};
use crate::style::{Declarations, InteractionState};

// ---------------------------------------------------------------------------
// OptionCursor
// ---------------------------------------------------------------------------

/// Keyboard position in the options panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionCursor {
    pub group: usize,
    pub option: usize,
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// Everything one frame shows, borrowed from the app.
pub struct Frame<'a> {
    pub title: &'a str,
    pub surface: Surface,
    pub groups: &'a [OptionGroup],
    pub cursor: OptionCursor,
    pub dom: &'a Dom,
    pub preview: NodeId,
    pub info: &'a [(String, String)],
    pub code: &'a str,
    pub caption: &'a str,
    pub copied: bool,
    /// The preview holds keyboard focus.
    pub editing: bool,
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// The frame buffer plus the previous frame for diffing.
#[derive(Debug, Clone)]
pub struct Screen {
    pub compositor: Compositor,
    previous: Compositor,
    pub layout: PanelLayout,
}

impl Screen {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            compositor: Compositor::new(width, height),
            previous: Compositor::new(0, 0),
            layout: PanelLayout::default(),
        }
    }

    /// (columns, rows)
    pub fn size(&self) -> (u16, u16) {
        (self.compositor.width, self.compositor.height)
    }

    /// Resize the buffer. The next [`take_updates`](Self::take_updates) is a
    /// full redraw.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.compositor.resize(width, height);
        self.previous = Compositor::new(0, 0);
    }

    /// Lay out the panels and draw `frame` into the buffer.
    pub fn draw(&mut self, frame: &Frame<'_>) -> Result<(), LayoutError> {
        let (width, height) = self.size();
        self.layout = PanelLayout::compute(width, height)?;
        self.compositor.clear();

        let l = self.layout;
        self.compositor.place_strips(&header(l.header, frame), &l.header);
        self.compositor.place_strips(&options(l.options, frame), &l.options);
        self.compositor.place_strips(&preview(l.preview, frame), &l.preview);
        self.compositor.place_strips(&code(l.code, frame), &l.code);
        self.compositor.place_strips(&footer(l.footer, frame.editing), &l.footer);
        Ok(())
    }

    /// Cells changed since the last call.
    pub fn take_updates(&mut self) -> Vec<CellUpdate> {
        let updates = self.compositor.diff(&self.previous);
        self.previous = self.compositor.clone();
        updates
    }

    /// The current buffer as plain text.
    pub fn text(&self) -> String {
        self.compositor.to_text()
    }
}

// ---------------------------------------------------------------------------
// Chrome styles
// ---------------------------------------------------------------------------

mod chrome {
    use crate::render::CellStyle;
    use crate::tokens::colors::{self, semantic, Hue, Scale};

    pub fn bar() -> CellStyle {
        CellStyle::new().fg(semantic::text::INVERSE).bg(semantic::bg::INVERSE)
    }

    pub fn title() -> CellStyle {
        bar().bold()
    }

    pub fn tab() -> CellStyle {
        CellStyle::new().fg(semantic::text::SECONDARY)
    }

    pub fn active_tab() -> CellStyle {
        CellStyle::new()
            .fg(colors::WHITE)
            .bg(colors::color(Hue::Primary, Scale::S500))
            .bold()
    }

    pub fn heading() -> CellStyle {
        CellStyle::new().fg(colors::color(Hue::Primary, Scale::S500)).bold()
    }

    pub fn muted() -> CellStyle {
        CellStyle::new().fg(semantic::text::TERTIARY)
    }

    pub fn plain() -> CellStyle {
        CellStyle::new()
    }

    pub fn copied() -> CellStyle {
        CellStyle::new().fg(colors::color(Hue::Success, Scale::S500)).bold()
    }
}

// ---------------------------------------------------------------------------
// Panels
// ---------------------------------------------------------------------------

fn header(region: Region, frame: &Frame<'_>) -> Vec<Strip> {
    let mut title = Strip::text(region.y, region.x, &format!(" {} ", frame.title), chrome::title());
    title.push_str("design token playground", chrome::bar());
    title.fill(region.width, chrome::bar());

    let mut tabs = Strip::text(region.y + 1, region.x, " ", chrome::plain());
    for &surface in Surface::ALL {
        let style = if surface == frame.surface {
            chrome::active_tab()
        } else {
            chrome::tab()
        };
        tabs.push_str(&format!(" {} ", surface.title()), style);
        tabs.push(' ', chrome::plain());
    }
    vec![title, tabs]
}

fn options(region: Region, frame: &Frame<'_>) -> Vec<Strip> {
    let mut lines: Vec<Strip> = Vec::new();
    let mut focus_line = 0;

    for (g, group) in frame.groups.iter().enumerate() {
        let focused = g == frame.cursor.group;
        let marker = if focused { "\u{25b8} " } else { "  " };
        let label_style = if focused { chrome::heading() } else { chrome::plain().bold() };

        match &group.kind {
            OptionKind::Radio { choices, selected } => {
                let mut label = Strip::text(0, region.x, marker, chrome::heading());
                label.push_str(group.label, label_style);
                lines.push(label);
                for (i, choice) in choices.iter().enumerate() {
                    let dot = if i == *selected { "(\u{2022})" } else { "( )" };
                    let under_cursor = focused && i == frame.cursor.option;
                    let style = if under_cursor {
                        chrome::plain().reverse()
                    } else {
                        chrome::plain()
                    };
                    if under_cursor {
                        focus_line = lines.len();
                    }
                    let mut line = Strip::text(0, region.x, "   ", chrome::plain());
                    line.push_str(&format!("{dot} {}", choice.label), style);
                    lines.push(line);
                }
                lines.push(Strip::new(0, region.x));
            }
            OptionKind::Toggle { checked } => {
                let box_ = if *checked { "[x]" } else { "[ ]" };
                let box_style = if focused {
                    chrome::plain().reverse()
                } else {
                    chrome::plain()
                };
                if focused {
                    focus_line = lines.len();
                }
                let mut line = Strip::text(0, region.x, marker, chrome::heading());
                line.push_str(box_, box_style);
                line.push(' ', chrome::plain());
                line.push_str(group.label, label_style);
                lines.push(line);
            }
        }
    }

    // Keep the cursor line on screen.
    let scroll = (focus_line as i32 - region.height + 1).max(0);
    lines
        .into_iter()
        .enumerate()
        .map(|(i, mut strip)| {
            strip.y = region.y + i as i32 - scroll;
            strip
        })
        .collect()
}

fn preview(region: Region, frame: &Frame<'_>) -> Vec<Strip> {
    let inner = region.inset(1, 0);
    let mut lines: Vec<Strip> = Vec::new();
    let dom = frame.dom;

    lines.push(Strip::text(0, inner.x, "Preview", chrome::heading()));
    lines.push(Strip::new(0, inner.x));

    let mut chips = Strip::new(0, inner.x);
    for &child in dom.children(frame.preview) {
        if let Some(el) = dom.get(child) {
            let style = CellStyle::from_declarations(&el.style.flatten(InteractionState::Idle));
            chips.push_str(&format!(" {} ", chip_label(dom, child)), style);
            chips.push_str("  ", chrome::plain());
        }
    }
    lines.push(chips);
    lines.push(Strip::new(0, inner.x));

    for (label, value) in frame.info {
        let mut row = Strip::text(0, inner.x, &format!("{label}: "), chrome::muted());
        row.push_str(value, chrome::plain());
        lines.push(row);
    }
    if !frame.info.is_empty() {
        lines.push(Strip::new(0, inner.x));
    }

    lines.push(Strip::text(0, inner.x, "Markup", chrome::heading()));
    let markup: String = dom
        .children(frame.preview)
        .iter()
        .map(|&child| dom.to_markup(child))
        .collect();
    for chunk in wrap(&markup, inner.width) {
        lines.push(Strip::text(0, inner.x, &chunk, chrome::muted()));
    }
    lines.push(Strip::new(0, inner.x));

    if let Some(target) = styled_target(dom, frame.preview) {
        lines.push(Strip::text(0, inner.x, "Styles", chrome::heading()));
        for line in declaration_lines(&target, inner.x) {
            lines.push(line);
        }
    }

    lines
        .into_iter()
        .enumerate()
        .map(|(i, mut strip)| {
            strip.y = inner.y + i as i32;
            strip.fill(inner.width, chrome::plain());
            strip
        })
        .collect()
}

/// Own text of every descendant, space separated; the placeholder when the
/// subtree has no text.
fn chip_label(dom: &Dom, id: NodeId) -> String {
    let mut texts = Vec::new();
    let mut placeholder = None;
    for node in dom.walk_depth_first(id) {
        if let Some(el) = dom.get(node) {
            if let Some(text) = el.text.as_deref().filter(|t| !t.is_empty()) {
                texts.push(text.to_owned());
            }
            if placeholder.is_none() {
                placeholder = el.attr("placeholder").map(str::to_owned);
            }
        }
    }
    if texts.is_empty() {
        placeholder.unwrap_or_else(|| "\u{2026}".to_owned())
    } else {
        texts.join(" ")
    }
}

/// The descendant carrying the most base declarations, first on ties.
fn styled_target(dom: &Dom, root: NodeId) -> Option<Declarations> {
    dom.walk_depth_first(root)
        .into_iter()
        .filter(|&id| id != root)
        .filter_map(|id| dom.get(id))
        .map(|el| el.style.base.clone())
        .fold(None, |best: Option<Declarations>, d| match best {
            Some(b) if b.len() >= d.len() => Some(b),
            _ if d.is_empty() => None,
            _ => Some(d),
        })
}

/// One line per declaration; values holding a color get a swatch drawn in
/// that color.
fn declaration_lines(declarations: &Declarations, x: i32) -> Vec<Strip> {
    declarations
        .iter()
        .map(|(property, value)| {
            let mut line = Strip::new(0, x);
            match swatch_color(value) {
                Some(color) => {
                    line.push_str("\u{2588}\u{2588}", CellStyle::new().fg(color));
                    line.push(' ', chrome::plain());
                }
                None => line.push_str("   ", chrome::plain()),
            }
            line.push_str(&format!("{property}: {value};"), chrome::plain());
            line
        })
        .collect()
}

fn swatch_color(value: &str) -> Option<&str> {
    value
        .split_whitespace()
        .find(|word| word.starts_with('#') && parse_color(word).is_some())
}

fn code(region: Region, frame: &Frame<'_>) -> Vec<Strip> {
    let caption = format!("[{}]", frame.caption);
    let caption_style = if frame.copied {
        chrome::copied()
    } else {
        chrome::muted()
    };

    let mut top = Strip::text(region.y, region.x, "\u{2500} ", chrome::muted());
    top.push_str("Code", chrome::heading());
    top.push(' ', chrome::plain());
    let used = top.width() + caption.chars().count() as i32 + 1;
    top.push_str(&"\u{2500}".repeat((region.width - used).max(0) as usize), chrome::muted());
    top.push(' ', chrome::plain());
    top.push_str(&caption, caption_style);

    let mut strips = vec![top];
    let inner = region.inset(1, 0);
    for (i, line) in frame
        .code
        .lines()
        .flat_map(|line| wrap(line, inner.width))
        .enumerate()
    {
        strips.push(Strip::text(region.y + 1 + i as i32, inner.x, &line, chrome::plain()));
    }
    strips
}

fn footer(region: Region, editing: bool) -> Vec<Strip> {
    let help = if editing {
        " typing into preview  \u{2190}/\u{2192} cursor  Backspace/Del delete  Esc done"
    } else {
        " \u{2190}/\u{2192} surface  Tab group  \u{2191}/\u{2193} option  \
         Enter select  c copy  x activate  q quit"
    };
    let mut strip = Strip::text(region.y, region.x, help, chrome::muted());
    strip.fill(region.width, chrome::plain());
    vec![strip]
}

/// Split `text` into chunks of at most `width` characters.
fn wrap(text: &str, width: i32) -> Vec<String> {
    if width <= 0 {
        return Vec::new();
    }
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(width as usize)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================
