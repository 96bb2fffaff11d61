//! App struct: playground state, key handling, event loop.
//!
//! [`App`] ties together the surface controllers, the options cursor, the code
//! preview with its clipboard, key bindings, the screen and the driver. The
//! `headless` constructor runs everything without a terminal.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event;

use crate::dom::Dom;
use crate::event::binding::{KeyBindingRegistry, PlaygroundAction};
use crate::event::input::{InputEvent, KeyEvent};
use crate::playground::{
    Clipboard, CodePreview, MemoryClipboard, Osc52Clipboard, OptionKind, Playground, Surface,
    COPIED_INDICATOR,
};
use crate::render::driver::Driver;
use crate::screen::{Frame, OptionCursor, Screen};

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Configuration for the playground app.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Shown in the header bar.
    pub title: String,
    /// The surface shown first.
    pub surface: Surface,
    /// How long to wait for input before redrawing.
    pub poll_interval: Duration,
    /// How long the copied indicator stays up.
    pub copied_indicator: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "tokenkit".to_owned(),
            surface: Surface::default(),
            poll_interval: Duration::from_millis(100),
            copied_indicator: COPIED_INDICATOR,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial surface (builder).
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }

    /// Set the input poll timeout (builder).
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set how long "Copied!" shows (builder).
    pub fn with_copied_indicator(mut self, indicator: Duration) -> Self {
        self.copied_indicator = indicator;
        self
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The playground application.
///
/// One controller per surface is kept for the app's lifetime, so switching
/// surfaces preserves each surface's state. The driver is optional to support
/// headless runs.
pub struct App {
    pub screen: Screen,
    /// Terminal output driver. `None` in headless mode.
    pub driver: Option<Driver>,
    pub bindings: KeyBindingRegistry,
    pub config: AppConfig,
    playgrounds: Vec<Box<dyn Playground>>,
    surface: Surface,
    cursor: OptionCursor,
    code: CodePreview,
    clipboard: Box<dyn Clipboard>,
    running: bool,
}

impl App {
    /// An app drawing to the real terminal, copying via OSC 52.
    pub fn new(config: AppConfig) -> io::Result<Self> {
        let (width, height) = Driver::terminal_size()?;
        let mut app = Self::build(config, width, height, Box::new(Osc52Clipboard::stdout()));
        app.driver = Some(Driver::stdout()?);
        Ok(app)
    }

    /// A headless app with an in-memory clipboard.
    pub fn headless(config: AppConfig, width: u16, height: u16) -> Self {
        Self::build(config, width, height, Box::new(MemoryClipboard::new()))
    }

    /// [`headless`](Self::headless) with the default config.
    pub fn new_headless(width: u16, height: u16) -> Self {
        Self::headless(AppConfig::default(), width, height)
    }

    fn build(config: AppConfig, width: u16, height: u16, clipboard: Box<dyn Clipboard>) -> Self {
        let playgrounds: Vec<Box<dyn Playground>> =
            Surface::ALL.iter().map(|s| s.controller()).collect();
        let surface = config.surface;
        let mut app = Self {
            screen: Screen::new(width, height),
            driver: None,
            bindings: KeyBindingRegistry::with_defaults(),
            code: CodePreview::new(String::new()).with_indicator(config.copied_indicator),
            config,
            playgrounds,
            surface,
            cursor: OptionCursor::default(),
            clipboard,
            running: true,
        };
        app.reset_cursor();
        app.refresh_code();
        app
    }

    /// Replace the clipboard (builder).
    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    // ── State ────────────────────────────────────────────────────────

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn cursor(&self) -> OptionCursor {
        self.cursor
    }

    /// The controller of the current surface.
    pub fn playground(&self) -> &dyn Playground {
        self.playgrounds[self.surface as usize].as_ref()
    }

    fn playground_mut(&mut self) -> &mut dyn Playground {
        self.playgrounds[self.surface as usize].as_mut()
    }

    pub fn code(&self) -> &CodePreview {
        &self.code
    }

    pub fn clipboard(&self) -> &dyn Clipboard {
        self.clipboard.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        !self.running
    }

    pub fn request_quit(&mut self) {
        self.running = false;
    }

    pub fn has_driver(&self) -> bool {
        self.driver.is_some()
    }

    // ── Input ────────────────────────────────────────────────────────

    /// Handle one input event.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(ke) => {
                self.handle_key(ke);
            }
            InputEvent::Resize { width, height } => {
                tracing::debug!(width, height, "terminal resized");
                self.screen.resize(width, height);
            }
            InputEvent::Ignored => {}
        }
    }

    /// Resolve a key through the bindings and perform its action.
    /// Returns the action, if the key was bound.
    ///
    /// While the preview holds focus, editing keys go to it first and never
    /// reach the bindings.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PlaygroundAction> {
        if self.playground().is_editing() && self.playground_mut().edit(&key) {
            tracing::trace!(?key, surface = %self.surface, "preview edited");
            return None;
        }
        let action = self.bindings.resolve(&key)?;
        self.perform(action);
        Some(action)
    }

    /// Perform a playground action.
    pub fn perform(&mut self, action: PlaygroundAction) {
        tracing::trace!(?action, surface = %self.surface, "perform");
        match action {
            PlaygroundAction::Quit => self.request_quit(),
            PlaygroundAction::NextSurface => self.switch_surface(self.surface.next()),
            PlaygroundAction::PrevSurface => self.switch_surface(self.surface.prev()),
            PlaygroundAction::NextGroup => self.move_group(1),
            PlaygroundAction::PrevGroup => self.move_group(-1),
            PlaygroundAction::NextOption => self.move_option(1),
            PlaygroundAction::PrevOption => self.move_option(-1),
            PlaygroundAction::Select => self.select(),
            PlaygroundAction::Copy => self.copy(Instant::now()),
            PlaygroundAction::Activate => {
                let fired = self.playground_mut().activate();
                tracing::debug!(surface = %self.surface, fired, "preview activated");
            }
        }
        self.refresh_code();
    }

    /// Show `surface`, keeping every controller's state.
    pub fn switch_surface(&mut self, surface: Surface) {
        if surface != self.surface {
            tracing::info!(from = %self.surface, to = %surface, "switching surface");
            self.surface = surface;
            self.reset_cursor();
        }
    }

    fn reset_cursor(&mut self) {
        let selected = self
            .playground()
            .groups()
            .first()
            .map_or(0, |group| group.selected());
        self.cursor = OptionCursor {
            group: 0,
            option: selected,
        };
    }

    fn move_group(&mut self, delta: isize) {
        let groups = self.playground().groups();
        if groups.is_empty() {
            return;
        }
        let group = wrap_index(self.cursor.group, delta, groups.len());
        self.cursor = OptionCursor {
            group,
            option: groups[group].selected(),
        };
    }

    /// Move within a radio group, wrapping. Toggles have no option cursor.
    fn move_option(&mut self, delta: isize) {
        let groups = self.playground().groups();
        if let Some(group) = groups.get(self.cursor.group) {
            if !group.is_toggle() && !group.is_empty() {
                self.cursor.option = wrap_index(self.cursor.option, delta, group.len());
            }
        }
    }

    fn select(&mut self) {
        let OptionCursor { group, option } = self.cursor;
        let Some(kind) = self.playground().groups().get(group).map(|g| g.kind.clone()) else {
            return;
        };
        let result = match kind {
            OptionKind::Toggle { .. } => self.playground_mut().toggle(group),
            OptionKind::Radio { .. } => self.playground_mut().select(group, option),
        };
        if let Err(err) = result {
            tracing::warn!(error = %err, "selection rejected");
        }
    }

    /// Copy the current code to the clipboard at `now`.
    pub fn copy(&mut self, now: Instant) {
        // Failure is logged by the preview and leaves the indicator hidden.
        let _ = self.code.copy(self.clipboard.as_mut(), now);
    }

    fn refresh_code(&mut self) {
        let code = self.playground().code();
        self.code.set_code(code);
    }

    // ── Drawing ──────────────────────────────────────────────────────

    /// Draw the current state into the screen buffer at `now`.
    pub fn draw(&mut self, now: Instant) -> io::Result<()> {
        self.code.tick(now);

        let pg = self.playgrounds[self.surface as usize].as_ref();
        let mut dom = Dom::new();
        let preview = pg.render_preview(&mut dom);
        let groups = pg.groups();
        let info = pg.info();
        let frame = Frame {
            title: &self.config.title,
            surface: self.surface,
            groups: &groups,
            cursor: self.cursor,
            dom: &dom,
            preview,
            info: &info,
            code: self.code.code(),
            caption: self.code.caption(now),
            copied: self.code.is_copied(now),
            editing: pg.is_editing(),
        };
        self.screen.draw(&frame).map_err(io::Error::other)
    }

    /// Draw and return the frame as plain text.
    pub fn render_text(&mut self) -> io::Result<String> {
        self.draw(Instant::now())?;
        Ok(self.screen.text())
    }

    // ── Event loop ───────────────────────────────────────────────────

    /// Run until quit. The terminal is restored even when the loop fails.
    pub fn run(&mut self) -> io::Result<()> {
        let Some(driver) = self.driver.as_mut() else {
            return Err(io::Error::other("no terminal driver (headless app)"));
        };
        driver.enter()?;
        tracing::info!(surface = %self.surface, "playground started");

        let result = self.event_loop();

        if let Some(driver) = self.driver.as_mut() {
            driver.leave()?;
        }
        tracing::info!("playground stopped");
        result
    }

    fn event_loop(&mut self) -> io::Result<()> {
        if let Some(driver) = self.driver.as_mut() {
            driver.clear()?;
        }
        while self.running {
            self.draw(Instant::now())?;
            let updates = self.screen.take_updates();
            if let Some(driver) = self.driver.as_mut() {
                driver.apply_updates(&updates)?;
                driver.flush()?;
            }

            if event::poll(self.config.poll_interval)? {
                self.handle_input(InputEvent::from(event::read()?));
            }
        }
        Ok(())
    }
}

fn wrap_index(index: usize, delta: isize, len: usize) -> usize {
    (index as isize + delta).rem_euclid(len as isize) as usize
}

// ===========================================================================
// Tests
// ===========================================================================
