//! Key binding registry and resolution.
//!
//! [`KeyBindingRegistry`] maps key+modifier combinations to
//! [`PlaygroundAction`]s. `with_defaults()` installs the playground keymap.

use std::collections::HashMap;

use super::input::{Key, KeyEvent, Modifiers};

// ---------------------------------------------------------------------------
// PlaygroundAction
// ---------------------------------------------------------------------------

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaygroundAction {
    Quit,
    /// Focus the next option group.
    NextGroup,
    /// Focus the previous option group.
    PrevGroup,
    /// Move the cursor to the next option within the group.
    NextOption,
    /// Move the cursor to the previous option within the group.
    PrevOption,
    /// Select the option under the cursor, or flip a toggle.
    Select,
    NextSurface,
    PrevSurface,
    /// Copy the generated code.
    Copy,
    /// Trigger the preview (click, replay).
    Activate,
}

impl PlaygroundAction {
    /// Short description for the help footer.
    pub const fn help(self) -> &'static str {
        match self {
            PlaygroundAction::Quit => "quit",
            PlaygroundAction::NextGroup => "next group",
            PlaygroundAction::PrevGroup => "previous group",
            PlaygroundAction::NextOption => "next option",
            PlaygroundAction::PrevOption => "previous option",
            PlaygroundAction::Select => "select",
            PlaygroundAction::NextSurface => "next surface",
            PlaygroundAction::PrevSurface => "previous surface",
            PlaygroundAction::Copy => "copy code",
            PlaygroundAction::Activate => "activate preview",
        }
    }
}

// ---------------------------------------------------------------------------
// KeyBindingRegistry
// ---------------------------------------------------------------------------

/// Registry of key bindings, mapping (Key, Modifiers) -> PlaygroundAction.
#[derive(Debug, Clone)]
pub struct KeyBindingRegistry {
    bindings: HashMap<(Key, Modifiers), PlaygroundAction>,
}

impl KeyBindingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// The playground keymap:
    ///
    /// - `Ctrl+C`, `q` -> Quit
    /// - `Tab` / `BackTab` -> next / previous group
    /// - `Down` / `Up` -> next / previous option
    /// - `Enter`, `Space` -> Select
    /// - `Right` / `Left` -> next / previous surface
    /// - `c` -> Copy
    /// - `x`, `Ctrl+Enter` -> Activate
    pub fn with_defaults() -> Self {
        use PlaygroundAction as A;

        let mut registry = Self::new();
        registry.bind(Key::Char('c'), Modifiers::CTRL, A::Quit);
        registry.bind(Key::Char('q'), Modifiers::NONE, A::Quit);
        registry.bind(Key::Tab, Modifiers::NONE, A::NextGroup);
        registry.bind(Key::BackTab, Modifiers::NONE, A::PrevGroup);
        // Most terminals report BackTab with Shift held.
        registry.bind(Key::BackTab, Modifiers::SHIFT, A::PrevGroup);
        registry.bind(Key::Down, Modifiers::NONE, A::NextOption);
        registry.bind(Key::Up, Modifiers::NONE, A::PrevOption);
        registry.bind(Key::Enter, Modifiers::NONE, A::Select);
        registry.bind(Key::Char(' '), Modifiers::NONE, A::Select);
        registry.bind(Key::Right, Modifiers::NONE, A::NextSurface);
        registry.bind(Key::Left, Modifiers::NONE, A::PrevSurface);
        registry.bind(Key::Char('c'), Modifiers::NONE, A::Copy);
        registry.bind(Key::Char('x'), Modifiers::NONE, A::Activate);
        registry.bind(Key::Enter, Modifiers::CTRL, A::Activate);
        registry
    }

    /// Register a key binding, replacing any existing one for the combination.
    pub fn bind(&mut self, key: Key, modifiers: Modifiers, action: PlaygroundAction) {
        self.bindings.insert((key, modifiers), action);
    }

    /// Look up the action for an exact key + modifiers match.
    pub fn resolve(&self, event: &KeyEvent) -> Option<PlaygroundAction> {
        self.bindings.get(&(event.code, event.modifiers)).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyBindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(reg: &KeyBindingRegistry, key: Key, mods: Modifiers) -> Option<PlaygroundAction> {
        reg.resolve(&KeyEvent::new(key, mods))
    }

    #[test]
    fn new_registry_is_empty() {
        assert!(KeyBindingRegistry::new().is_empty());
        assert!(KeyBindingRegistry::default().is_empty());
    }

    #[test]
    fn defaults() {
        let reg = KeyBindingRegistry::with_defaults();
        assert_eq!(resolve(&reg, Key::Char('c'), Modifiers::CTRL), Some(PlaygroundAction::Quit));
        assert_eq!(resolve(&reg, Key::Char('q'), Modifiers::NONE), Some(PlaygroundAction::Quit));
        assert_eq!(resolve(&reg, Key::Char('c'), Modifiers::NONE), Some(PlaygroundAction::Copy));
        assert_eq!(resolve(&reg, Key::BackTab, Modifiers::SHIFT), Some(PlaygroundAction::PrevGroup));
        assert_eq!(resolve(&reg, Key::Char(' '), Modifiers::NONE), Some(PlaygroundAction::Select));
        assert_eq!(resolve(&reg, Key::Enter, Modifiers::CTRL), Some(PlaygroundAction::Activate));
        assert_eq!(resolve(&reg, Key::Right, Modifiers::NONE), Some(PlaygroundAction::NextSurface));
    }

    #[test]
    fn modifiers_must_match_exactly() {
        let reg = KeyBindingRegistry::with_defaults();
        assert_eq!(resolve(&reg, Key::Char('q'), Modifiers::ALT), None);
    }

    #[test]
    fn rebind_replaces() {
        let mut reg = KeyBindingRegistry::new();
        reg.bind(Key::Char('q'), Modifiers::NONE, PlaygroundAction::Quit);
        reg.bind(Key::Char('q'), Modifiers::NONE, PlaygroundAction::Copy);
        assert_eq!(reg.len(), 1);
        assert_eq!(
            reg.resolve(&KeyEvent::plain(Key::Char('q'))),
            Some(PlaygroundAction::Copy)
        );
    }

    #[test]
    fn help_text() {
        assert_eq!(PlaygroundAction::Copy.help(), "copy code");
    }
}
