//! Layered style bundles and interaction-state flattening.
//!
//! A [`StyleBundle`] carries a base layer plus one overlay per pointer/focus
//! state. Bundles for independent axes (variant, size, shape, ...) are merged
//! layer by layer; the result is flattened for a concrete [`InteractionState`]
//! or rendered as CSS.

use std::fmt::Write as _;

use super::declaration::Declarations;

/// The pointer/keyboard state an element is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Hover,
    /// Pressed. Implies hover.
    Active,
    Focus,
}

/// Which pseudo-class the focus layer is emitted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusScope {
    /// The element itself shows keyboard focus (`:focus-visible`).
    #[default]
    Visible,
    /// The element shows focus of any descendant (`:focus-within`).
    Within,
}

impl FocusScope {
    fn pseudo(self) -> &'static str {
        match self {
            FocusScope::Visible => ":focus-visible",
            FocusScope::Within => ":focus-within",
        }
    }
}

/// A base layer plus hover/active/focus overlays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleBundle {
    pub base: Declarations,
    pub hover: Declarations,
    pub active: Declarations,
    pub focus: Declarations,
    pub focus_scope: FocusScope,
}

impl StyleBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bundle with only a base layer.
    pub fn base(base: Declarations) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Set the hover layer (builder).
    pub fn on_hover(mut self, hover: Declarations) -> Self {
        self.hover = hover;
        self
    }

    /// Set the active layer (builder).
    pub fn on_active(mut self, active: Declarations) -> Self {
        self.active = active;
        self
    }

    /// Set the focus layer (builder).
    pub fn on_focus(mut self, focus: Declarations) -> Self {
        self.focus = focus;
        self
    }

    /// Emit the focus layer under `:focus-within` (builder).
    pub fn focus_within(mut self) -> Self {
        self.focus_scope = FocusScope::Within;
        self
    }

    /// Merge `other` on top of `self`, layer by layer.
    pub fn merge(&self, other: &StyleBundle) -> StyleBundle {
        StyleBundle {
            base: self.base.merge(&other.base),
            hover: self.hover.merge(&other.hover),
            active: self.active.merge(&other.active),
            focus: self.focus.merge(&other.focus),
            focus_scope: self.focus_scope,
        }
    }

    /// Drop the hover and active layers.
    ///
    /// Used for non-interactive elements: pseudo states are suppressed
    /// entirely rather than overridden property by property.
    pub fn without_pointer_states(mut self) -> StyleBundle {
        self.hover = Declarations::new();
        self.active = Declarations::new();
        self
    }

    /// Drop the focus layer.
    pub fn without_focus(mut self) -> StyleBundle {
        self.focus = Declarations::new();
        self
    }

    /// The effective flat declarations in the given state.
    pub fn flatten(&self, state: InteractionState) -> Declarations {
        match state {
            InteractionState::Idle => self.base.clone(),
            InteractionState::Hover => self.base.merge(&self.hover),
            InteractionState::Active => self.base.merge(&self.hover).merge(&self.active),
            InteractionState::Focus => self.base.merge(&self.focus),
        }
    }

    /// Whether every layer is empty.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.hover.is_empty() && self.active.is_empty() && self.focus.is_empty()
    }

    /// Render as CSS rules for `selector`. Empty overlay layers are omitted.
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = String::new();
        write_rule(&mut out, selector, &self.base);
        write_rule(&mut out, &format!("{selector}:hover:not(:disabled)"), &self.hover);
        write_rule(&mut out, &format!("{selector}:active:not(:disabled)"), &self.active);
        write_rule(
            &mut out,
            &format!("{selector}{}", self.focus_scope.pseudo()),
            &self.focus,
        );
        out
    }
}

fn write_rule(out: &mut String, selector: &str, declarations: &Declarations) {
    if declarations.is_empty() {
        return;
    }
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{selector} {{");
    for (property, value) in declarations.iter() {
        let _ = writeln!(out, "  {property}: {value};");
    }
    let _ = writeln!(out, "}}");
}
