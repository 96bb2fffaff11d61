//! Pilot: programmatic interaction with a headless App.
//!
//! The `Pilot` wraps an [`App`](crate::app::App) without a terminal and
//! offers key presses, resizes and frame capture for tests.

use std::time::Instant;

use crate::app::{App, AppConfig};
use crate::event::binding::PlaygroundAction;
use crate::event::input::{InputEvent, Key, KeyEvent, Modifiers};
use crate::playground::{Clipboard, MemoryClipboard, Surface};

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless app driver for testing.
///
/// ```
/// use tokenkit::event::Key;
/// use tokenkit::testing::Pilot;
///
/// let mut pilot = Pilot::new(100, 30);
/// pilot.press_keys(&[Key::Tab, Key::Down, Key::Enter]);
/// assert_eq!(pilot.code(), r#"<Button size="lg" />"#);
/// ```
pub struct Pilot {
    app: App,
}

impl Pilot {
    /// A headless app with the default config.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            app: App::new_headless(width, height),
        }
    }

    /// A headless app from `config`.
    pub fn with_config(config: AppConfig, width: u16, height: u16) -> Self {
        Self {
            app: App::headless(config, width, height),
        }
    }

    /// Swap in a clipboard (builder).
    pub fn with_clipboard(self, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            app: self.app.with_clipboard(clipboard),
        }
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Press a key without modifiers; returns the bound action, if any.
    /// Keys consumed by a focused preview return `None`.
    pub fn press_key(&mut self, key: Key) -> Option<PlaygroundAction> {
        self.app.handle_key(KeyEvent::plain(key))
    }

    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) -> Option<PlaygroundAction> {
        self.app.handle_key(KeyEvent::new(key, modifiers))
    }

    pub fn press_keys(&mut self, keys: &[Key]) {
        for &key in keys {
            self.press_key(key);
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.handle_input(InputEvent::Resize { width, height });
    }

    /// Move the group cursor to the group labelled `label` on the current
    /// surface. Returns whether it was found.
    pub fn focus_group(&mut self, label: &str) -> bool {
        let groups = self.app.playground().groups();
        let Some(target) = groups.iter().position(|g| g.label == label) else {
            return false;
        };
        while self.app.cursor().group != target {
            self.app.perform(PlaygroundAction::NextGroup);
        }
        true
    }

    /// Switch to `surface` via the surface keys.
    pub fn go_to(&mut self, surface: Surface) {
        while self.app.surface() != surface {
            self.app.perform(PlaygroundAction::NextSurface);
        }
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn is_running(&self) -> bool {
        !self.app.should_quit()
    }

    /// The current generated code.
    pub fn code(&self) -> &str {
        self.app.code().code()
    }

    /// What an in-memory clipboard holds; `None` for other clipboards.
    pub fn clipboard_contents(&self) -> Option<&str> {
        self.app
            .clipboard()
            .as_any()
            .downcast_ref::<MemoryClipboard>()
            .and_then(MemoryClipboard::contents)
    }

    /// Draw one frame and return it as text.
    pub fn frame(&mut self) -> String {
        match self.app.draw(Instant::now()) {
            Ok(()) => self.app.screen.text(),
            Err(err) => panic!("frame failed to draw: {err}"),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
