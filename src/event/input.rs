//! Input event types wrapping crossterm for decoupling.
//!
//! Crossterm events are converted via `From` impls so the rest of the crate
//! never matches on crossterm types directly.

use std::ops::BitOr;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key, decoupled from crossterm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// A key press with modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key press without modifiers.
    pub fn plain(code: Key) -> Self {
        Self::new(code, Modifiers::NONE)
    }

    /// Convert a crossterm key event. Releases and keys the playground has
    /// no use for yield `None`.
    pub fn from_crossterm(ct: crossterm::event::KeyEvent) -> Option<Self> {
        use crossterm::event::{KeyCode, KeyEventKind};

        if ct.kind == KeyEventKind::Release {
            return None;
        }
        let code = match ct.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => return None,
        };
        Some(KeyEvent::new(code, convert_modifiers(ct.modifiers)))
    }
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// Top-level input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    /// Anything the playground ignores (mouse, focus, paste, unknown keys).
    Ignored,
}

/// Convert crossterm key modifiers to our `Modifiers`.
fn convert_modifiers(m: crossterm::event::KeyModifiers) -> Modifiers {
    use crossterm::event::KeyModifiers;

    let mut out = Modifiers::NONE;
    if m.contains(KeyModifiers::SHIFT) {
        out = out | Modifiers::SHIFT;
    }
    if m.contains(KeyModifiers::CONTROL) {
        out = out | Modifiers::CTRL;
    }
    if m.contains(KeyModifiers::ALT) {
        out = out | Modifiers::ALT;
    }
    out
}

impl From<crossterm::event::Event> for InputEvent {
    fn from(ct: crossterm::event::Event) -> Self {
        match ct {
            crossterm::event::Event::Key(ke) => {
                KeyEvent::from_crossterm(ke).map_or(InputEvent::Ignored, InputEvent::Key)
            }
            crossterm::event::Event::Resize(width, height) => InputEvent::Resize { width, height },
            _ => InputEvent::Ignored,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

    fn ct_key(code: KeyCode, modifiers: KeyModifiers) -> crossterm::event::KeyEvent {
        crossterm::event::KeyEvent::new(code, modifiers)
    }

    // ── Modifiers ────────────────────────────────────────────────────

    #[test]
    fn modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::ALT;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(mods.contains(Modifiers::ALT));
        assert!(!mods.contains(Modifiers::SHIFT));
        assert!(Modifiers::NONE.is_empty());
    }

    // ── crossterm conversion ─────────────────────────────────────────

    #[test]
    fn converts_char_with_ctrl() {
        let ke = KeyEvent::from_crossterm(ct_key(KeyCode::Char('c'), KeyModifiers::CONTROL)).unwrap();
        assert_eq!(ke, KeyEvent::new(Key::Char('c'), Modifiers::CTRL));
    }

    #[test]
    fn converts_navigation_keys() {
        for (ct, ours) in [
            (KeyCode::Tab, Key::Tab),
            (KeyCode::BackTab, Key::BackTab),
            (KeyCode::Up, Key::Up),
            (KeyCode::Down, Key::Down),
            (KeyCode::Left, Key::Left),
            (KeyCode::Right, Key::Right),
            (KeyCode::Enter, Key::Enter),
            (KeyCode::Backspace, Key::Backspace),
            (KeyCode::Delete, Key::Delete),
            (KeyCode::Home, Key::Home),
        ] {
            let ke = KeyEvent::from_crossterm(ct_key(ct, KeyModifiers::NONE)).unwrap();
            assert_eq!(ke.code, ours);
        }
    }

    #[test]
    fn unsupported_key_is_none() {
        assert!(KeyEvent::from_crossterm(ct_key(KeyCode::F(5), KeyModifiers::NONE)).is_none());
    }

    #[test]
    fn release_is_ignored() {
        let mut ct = ct_key(KeyCode::Char('q'), KeyModifiers::NONE);
        ct.kind = KeyEventKind::Release;
        assert!(KeyEvent::from_crossterm(ct).is_none());
    }

    #[test]
    fn event_conversion() {
        let ev = InputEvent::from(crossterm::event::Event::Resize(100, 40));
        assert_eq!(ev, InputEvent::Resize { width: 100, height: 40 });

        let ev = InputEvent::from(crossterm::event::Event::FocusGained);
        assert_eq!(ev, InputEvent::Ignored);

        let ev = InputEvent::from(crossterm::event::Event::Key(ct_key(
            KeyCode::Char('x'),
            KeyModifiers::NONE,
        )));
        assert_eq!(ev, InputEvent::Key(KeyEvent::plain(Key::Char('x'))));
    }
}
