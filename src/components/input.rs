//! Input: a labelled text field with optional affixes and a message line.
//!
//! Editing is cursor based; the cursor is a byte offset kept on char
//! boundaries. Edits are refused while the input is disabled or read-only.

use std::any::Any;

use crate::dom::{Dom, Element, NodeId};
use crate::event::input::{Key, KeyEvent, Modifiers};
use crate::style::{ControlSize, Declarations, InputProps, InputStyles, StyleBundle};

use super::traits::Component;

/// The message line shown under the field, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMessage<'a> {
    Error(&'a str),
    Helper(&'a str),
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A token-styled text input.
#[derive(Debug, Clone, Default)]
pub struct Input {
    props: InputProps,
    label: Option<String>,
    helper_text: Option<String>,
    error_message: Option<String>,
    prefix: Option<String>,
    suffix: Option<String>,
    placeholder: Option<String>,
    name: Option<String>,
    input_type: Option<String>,
    value: String,
    cursor_position: usize,
    focused: bool,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an existing prop snapshot.
    pub fn from_props(props: InputProps) -> Self {
        Self::default().with_props(props)
    }

    /// Replace every style prop at once, keeping value, cursor and content
    /// (builder pattern). Disabling drops focus.
    pub fn with_props(mut self, props: InputProps) -> Self {
        self.props = props;
        if props.disabled {
            self.focused = false;
        }
        self
    }

    /// Set the control size (builder pattern).
    pub fn size(mut self, size: ControlSize) -> Self {
        self.props.size = size;
        self
    }

    /// Set the error state (builder pattern).
    pub fn error(mut self, error: bool) -> Self {
        self.props.error = error;
        self
    }

    /// Set the disabled state (builder pattern). Disabling drops focus.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        if disabled {
            self.focused = false;
        }
        self
    }

    /// Set the read-only state (builder pattern).
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.props.read_only = read_only;
        self
    }

    /// Stretch to the container width (builder pattern).
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.props.full_width = full_width;
        self
    }

    /// Set the label above the field (builder pattern).
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the helper line (builder pattern).
    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Set the message shown in the error state (builder pattern).
    pub fn error_message(mut self, text: impl Into<String>) -> Self {
        self.error_message = Some(text.into());
        self
    }

    /// Set the leading affix (builder pattern).
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the trailing affix (builder pattern).
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Set the placeholder shown while the value is empty (builder pattern).
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the native `name` attribute (builder pattern).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Native `type` attribute, e.g. `email` or `password`.
    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    /// Initial value (builder). Moves the cursor to the end.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor_position = self.value.len();
        self
    }

    pub fn props(&self) -> &InputProps {
        &self.props
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position as a byte offset into the value.
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the value can currently be edited.
    pub fn is_editable(&self) -> bool {
        !self.props.disabled && !self.props.read_only
    }

    /// Which message line renders: the error message when `error` is set and
    /// a message exists, otherwise the helper text, but only when not in error.
    pub fn message(&self) -> Option<InputMessage<'_>> {
        if self.props.error {
            self.error_message.as_deref().map(InputMessage::Error)
        } else {
            self.helper_text.as_deref().map(InputMessage::Helper)
        }
    }

    /// All part styles for the current props.
    pub fn styles(&self) -> InputStyles {
        self.props.resolve()
    }

    // -----------------------------------------------------------------------
    // Focus
    // -----------------------------------------------------------------------

    /// Take focus. Disabled inputs cannot be focused.
    pub fn focus(&mut self) -> bool {
        if self.props.disabled {
            return false;
        }
        self.focused = true;
        true
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Insert a character at the cursor. Returns whether the edit applied.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if !self.is_editable() {
            return false;
        }
        self.value.insert(self.cursor_position, ch);
        self.cursor_position += ch.len_utf8();
        true
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_char(&mut self) -> bool {
        if !self.is_editable() || self.cursor_position == 0 {
            return false;
        }
        let prev = self.prev_char_boundary();
        self.value.drain(prev..self.cursor_position);
        self.cursor_position = prev;
        true
    }

    /// Delete the character after the cursor.
    pub fn delete_forward(&mut self) -> bool {
        if !self.is_editable() || self.cursor_position >= self.value.len() {
            return false;
        }
        let next = self.next_char_boundary();
        self.value.drain(self.cursor_position..next);
        true
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position = self.prev_char_boundary();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.value.len() {
            self.cursor_position = self.next_char_boundary();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.value.len();
    }

    /// Apply an editing key while focused. Returns whether the key was
    /// consumed; refused edits still consume their key. Unfocused inputs and
    /// control or alt chords consume nothing. `Escape` blurs.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let chord = key.modifiers.contains(Modifiers::CTRL) || key.modifiers.contains(Modifiers::ALT);
        if !self.focused || chord {
            return false;
        }
        match key.code {
            Key::Char(ch) => {
                self.insert_char(ch);
            }
            Key::Backspace => {
                self.delete_char();
            }
            Key::Delete => {
                self.delete_forward();
            }
            Key::Left => self.move_cursor_left(),
            Key::Right => self.move_cursor_right(),
            Key::Home => self.move_cursor_home(),
            Key::End => self.move_cursor_end(),
            Key::Escape => self.blur(),
            _ => return false,
        }
        true
    }

    fn prev_char_boundary(&self) -> usize {
        let mut pos = self.cursor_position.saturating_sub(1);
        while pos > 0 && !self.value.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn next_char_boundary(&self) -> usize {
        let mut pos = self.cursor_position + 1;
        while pos < self.value.len() && !self.value.is_char_boundary(pos) {
            pos += 1;
        }
        pos
    }
}

impl Component for Input {
    fn component_name(&self) -> &str {
        "Input"
    }

    /// The wrapper's style: the part that carries border and focus ring.
    fn style(&self) -> StyleBundle {
        self.styles().wrapper
    }

    fn render(&self, dom: &mut Dom, parent: Option<NodeId>) -> NodeId {
        let InputStyles {
            container,
            label,
            wrapper,
            field,
            affix: affix_style,
            helper,
            error,
            placeholder,
        } = self.styles();
        let container = dom.insert_under(
            parent,
            Element::new("div")
                .with_class("tk-input")
                .with_declarations(container),
        );

        if let Some(text) = &self.label {
            dom.insert_child(
                container,
                Element::new("label")
                    .with_class("tk-input-label")
                    .with_text(text.as_str())
                    .with_declarations(label),
            );
        }

        let mut wrapper_el = Element::new("div")
            .with_class("tk-input-wrapper")
            .with_style(wrapper);
        if self.focused {
            wrapper_el = wrapper_el.with_class("is-focused");
        }
        let wrapper = dom.insert_child(container, wrapper_el);

        if let Some(prefix) = &self.prefix {
            dom.insert_child(wrapper, affix(prefix, &affix_style));
        }

        // An empty field shows its placeholder in the placeholder color.
        let showing_placeholder = self.value.is_empty() && self.placeholder.is_some();
        let field_style = if showing_placeholder {
            field.merge(&placeholder)
        } else {
            field
        };

        let mut field = Element::new("input")
            .with_class("tk-input-field")
            .with_attr("type", self.input_type.as_deref().unwrap_or("text"));
        if let Some(name) = &self.name {
            field = field.with_attr("name", name.as_str());
        }
        if let Some(placeholder) = &self.placeholder {
            field = field.with_attr("placeholder", placeholder.as_str());
        }
        if !self.value.is_empty() {
            field = field.with_attr("value", self.value.as_str());
        }
        field = field
            .with_flag("disabled", self.props.disabled)
            .with_flag("readonly", self.props.read_only)
            .with_flag("aria-invalid", self.props.error)
            .with_declarations(field_style);
        if showing_placeholder {
            field = field.with_class("is-placeholder");
        }
        dom.insert_child(wrapper, field);

        if let Some(suffix) = &self.suffix {
            dom.insert_child(wrapper, affix(suffix, &affix_style));
        }

        match self.message() {
            Some(InputMessage::Error(text)) => {
                dom.insert_child(
                    container,
                    Element::new("span")
                        .with_class("tk-input-error")
                        .with_text(text)
                        .with_declarations(error),
                );
            }
            Some(InputMessage::Helper(text)) => {
                dom.insert_child(
                    container,
                    Element::new("span")
                        .with_class("tk-input-helper")
                        .with_text(text)
                        .with_declarations(helper),
                );
            }
            None => {}
        }
        container
    }

    fn can_focus(&self) -> bool {
        !self.props.disabled
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn affix(text: &str, style: &Declarations) -> Element {
    Element::new("span")
        .with_class("tk-input-affix")
        .with_text(text)
        .with_declarations(style.clone())
}

// ===========================================================================
// Tests
// ===========================================================================
